use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of an entity within its event sequence.
///
/// A sequence with no events sits at [`Version::initial`]; the first append
/// moves it to [`Version::first`]. The optimistic append protocol compares
/// versions, so the raw number never needs to leave this type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(i64);

impl Version {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The version of a sequence that holds no events yet.
    pub const fn initial() -> Self {
        Self(0)
    }

    /// The version a sequence reaches after its first event.
    pub const fn first() -> Self {
        Self(1)
    }

    /// The version after one more event.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored event together with the metadata the log attaches on append.
///
/// The projection engine folds the bare events; the version and timestamp
/// exist for the command layer's optimistic protocol and for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedEvent<E> {
    /// The domain event as handed to `append`.
    pub event: E,

    /// The entity's version after this event.
    pub version: Version,

    /// When the log recorded the event.
    pub recorded_at: DateTime<Utc>,
}

impl<E> RecordedEvent<E> {
    /// Wraps a domain event with its version, timestamped now.
    pub fn new(event: E, version: Version) -> Self {
        Self {
            event,
            version,
            recorded_at: Utc::now(),
        }
    }
}
