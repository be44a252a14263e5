//! Weight value object.

use serde::{Deserialize, Serialize};

use projection::Additive;

/// Weight in hundredths of a tonne to avoid floating point drift in sums.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Weight {
    /// Hundredths of a tonne (e.g. 233 = 2.33t).
    centitonnes: i64,
}

impl Weight {
    /// Creates a weight from hundredths of a tonne.
    pub const fn from_centitonnes(centitonnes: i64) -> Self {
        Self { centitonnes }
    }

    /// The zero weight.
    pub const fn zero() -> Self {
        Self { centitonnes: 0 }
    }

    /// Returns the weight in hundredths of a tonne.
    pub const fn as_centitonnes(&self) -> i64 {
        self.centitonnes
    }

    /// Returns whether this weight is zero.
    pub const fn is_zero(&self) -> bool {
        self.centitonnes == 0
    }
}

impl Additive for Weight {
    fn zero() -> Self {
        Self::zero()
    }

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl std::ops::Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight::from_centitonnes(self.centitonnes + rhs.centitonnes)
    }
}

impl std::ops::Sub for Weight {
    type Output = Weight;

    fn sub(self, rhs: Weight) -> Weight {
        Weight::from_centitonnes(self.centitonnes - rhs.centitonnes)
    }
}

impl std::ops::Neg for Weight {
    type Output = Weight;

    fn neg(self) -> Weight {
        Weight::from_centitonnes(-self.centitonnes)
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.centitonnes < 0 { "-" } else { "" };
        let magnitude = self.centitonnes.unsigned_abs();
        write!(f, "{sign}{}.{:02}t", magnitude / 100, magnitude % 100)
    }
}
