//! Completion percentage value object (0-100 scale, two decimals).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A completion ratio expressed on a 0-100 scale.
///
/// Values built through [`Percentage::of`] are clamped to `[0, 100]`,
/// rounded to two decimals and always finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Completion of `achieved` against `target`.
    ///
    /// A non-positive target yields zero instead of dividing. A ratio that
    /// overflows still clamps, so infinite over-achievement is 100.
    pub fn of(achieved: f64, target: f64) -> Self {
        if target.is_nan() || target <= 0.0 {
            return Self::ZERO;
        }
        let raw = achieved / target * 100.0;
        if raw.is_nan() {
            return Self::ZERO;
        }
        Self(round2(raw.clamp(0.0, 100.0)))
    }

    /// Wraps an already computed value without rounding.
    ///
    /// Non-finite input collapses to zero.
    pub fn from_raw(value: f64) -> Self {
        if value.is_finite() {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Arithmetic mean of the given percentages, zero when empty.
    pub fn mean<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Percentage>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), p| (sum + p.0, count + 1));
        if count == 0 {
            Self::ZERO
        } else {
            Self::from_raw(sum / count as f64)
        }
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Rounds half away from zero to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn of_computes_ratio() {
        assert_eq!(Percentage::of(25.0, 50.0).value(), 50.0);
    }

    #[test]
    fn of_clamps_overachievement_to_100() {
        assert_eq!(Percentage::of(300.0, 100.0), Percentage::HUNDRED);
    }

    #[test]
    fn of_overflowing_ratio_clamps_to_100() {
        assert_eq!(Percentage::of(1.0e307, 1.0), Percentage::HUNDRED);
        assert_eq!(Percentage::of(5.0, 1.0e-307), Percentage::HUNDRED);
        assert_eq!(Percentage::of(-1.0e307, 1.0), Percentage::ZERO);
    }

    #[test]
    fn of_nan_achievement_is_zero() {
        assert_eq!(Percentage::of(f64::NAN, 10.0), Percentage::ZERO);
    }

    #[test]
    fn of_zero_target_is_zero() {
        assert_eq!(Percentage::of(10.0, 0.0), Percentage::ZERO);
    }

    #[test]
    fn of_negative_target_is_zero() {
        assert_eq!(Percentage::of(10.0, -5.0), Percentage::ZERO);
    }

    #[test]
    fn of_nan_target_is_zero() {
        assert_eq!(Percentage::of(10.0, f64::NAN), Percentage::ZERO);
    }

    #[test]
    fn of_rounds_to_two_decimals() {
        assert_eq!(Percentage::of(1.0, 3.0).value(), 33.33);
        assert_eq!(Percentage::of(2.0, 3.0).value(), 66.67);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(Percentage::mean(Vec::new()), Percentage::ZERO);
    }

    #[test]
    fn mean_is_unweighted() {
        let mean = Percentage::mean(vec![Percentage::from_raw(10.0), Percentage::from_raw(90.0)]);
        assert_eq!(mean.value(), 50.0);
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(format!("{}", Percentage::of(1.0, 8.0)), "12.50%");
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&Percentage::of(1.0, 4.0)).unwrap();
        assert_eq!(json, "25.0");
    }

    proptest! {
        #[test]
        fn of_is_bounded_and_finite(achieved in -1.0e9f64..1.0e9, target in -1.0e9f64..1.0e9) {
            let p = Percentage::of(achieved, target).value();
            prop_assert!(p.is_finite());
            prop_assert!((0.0..=100.0).contains(&p));
            prop_assert_eq!(round2(p), p);
        }
    }
}
