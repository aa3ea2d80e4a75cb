//! Float helpers shared by the model and the sweep engine.

use crate::CfError;

pub type Real = f64;

/// Absolute and relative slack for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities, naming the offending quantity.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CfError::NonFinite { what, value: v })
    }
}

/// The `index`-th of `count` evenly spaced samples from `min` to `max`.
///
/// Sample 0 is `min` and sample `count - 1` is exactly `max`. A single
/// sample is `min`.
pub fn linspace_at(min: Real, max: Real, index: usize, count: usize) -> Real {
    if count <= 1 || index == 0 {
        return min;
    }
    if index == count - 1 {
        return max;
    }
    let span = max - min;
    if span.is_finite() {
        min + index as Real * span / (count - 1) as Real
    } else {
        // Bounds near the f64 limits: weight the endpoints instead.
        let t = index as Real / (count - 1) as Real;
        min * (1.0 - t) + max * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerances_absolute_and_relative() {
        let tol = Tolerances::default();
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(nearly_equal(30.0, 30.000_000_000_1, tol));
        assert!(!nearly_equal(30.0, 30.001, tol));
    }

    #[test]
    fn ensure_finite_names_the_quantity() {
        let err = ensure_finite(Real::NAN, "shaft speed").unwrap_err();
        assert!(err.to_string().contains("shaft speed"));
        assert!(ensure_finite(Real::NEG_INFINITY, "inlet pressure").is_err());
        assert_eq!(ensure_finite(42.0, "inlet pressure"), Ok(42.0));
    }

    #[test]
    fn linspace_endpoints_are_exact() {
        // 0.1 steps do not sum exactly; the last sample must still be max.
        assert_eq!(linspace_at(0.1, 0.7, 6, 7), 0.7);
        assert_eq!(linspace_at(0.1, 0.7, 0, 7), 0.1);
        assert_eq!(linspace_at(1000.0, 2000.0, 2, 5), 1500.0);
    }

    #[test]
    fn linspace_handles_span_beyond_f64() {
        let v = linspace_at(-1e308, 1e308, 1, 3);
        assert!(v.is_finite());
        assert!(v.abs() < 1e292);
        assert!(linspace_at(-1e308, 1e308, 1, 4).is_finite());
    }

    #[test]
    fn linspace_single_sample_is_min() {
        assert_eq!(linspace_at(300.0, 900.0, 0, 1), 300.0);
        assert_eq!(linspace_at(300.0, 900.0, 0, 0), 300.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn samples_stay_within_bounds(
            min in -1e4_f64..1e4,
            span in 0.0_f64..1e4,
            count in 1_usize..200,
        ) {
            let max = min + span;
            let mut prev = min;
            for i in 0..count {
                let v = linspace_at(min, max, i, count);
                prop_assert!(v >= min && v <= max);
                prop_assert!(v >= prev);
                prev = v;
            }
            let last = if count == 1 { min } else { max };
            prop_assert_eq!(linspace_at(min, max, count - 1, count), last);
        }
    }
}
