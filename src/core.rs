use std::ops::{Add, Mul, Sub};
use std::time::Duration;

use crate::error::{KeepsakeError, KeepsakeResult};

/// Seconds from activation. Offsets and durations are always non-negative;
/// use [`Seconds::new`] at trust boundaries.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    pub const ZERO: Seconds = Seconds(0.0);

    pub fn new(value: f64) -> KeepsakeResult<Self> {
        if !value.is_finite() {
            return Err(KeepsakeError::validation("Seconds must be finite"));
        }
        if value < 0.0 {
            return Err(KeepsakeError::validation("Seconds must be >= 0"));
        }
        Ok(Self(value))
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Host-timer conversion. Clamps at zero so schedule arithmetic that
    /// dips negative (e.g. `total - tail` on degenerate configs) never panics.
    pub fn to_duration(self) -> Duration {
        Duration::from_secs_f64(self.0.max(0.0))
    }

    /// `self - other`, clamped at zero.
    pub fn saturating_sub(self, other: Seconds) -> Seconds {
        Seconds((self.0 - other.0).max(0.0))
    }
}

impl Add for Seconds {
    type Output = Seconds;

    fn add(self, rhs: Seconds) -> Seconds {
        Seconds(self.0 + rhs.0)
    }
}

impl Sub for Seconds {
    type Output = Seconds;

    fn sub(self, rhs: Seconds) -> Seconds {
        Seconds(self.0 - rhs.0)
    }
}

impl Mul<f64> for Seconds {
    type Output = Seconds;

    fn mul(self, rhs: f64) -> Seconds {
        Seconds(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_negative_and_non_finite() {
        assert!(Seconds::new(-0.1).is_err());
        assert!(Seconds::new(f64::NAN).is_err());
        assert!(Seconds::new(f64::INFINITY).is_err());
        assert!(Seconds::new(0.0).is_ok());
    }

    #[test]
    fn arithmetic_behaves() {
        let a = Seconds(1.0) + Seconds(3.5) * 4.0;
        assert_eq!(a, Seconds(15.0));
        assert_eq!(Seconds(1.0).saturating_sub(Seconds(2.0)), Seconds::ZERO);
    }

    #[test]
    fn duration_conversion_clamps() {
        assert_eq!(Seconds(-1.0).to_duration(), Duration::ZERO);
        assert_eq!(Seconds(1.5).to_duration(), Duration::from_millis(1500));
    }
}
