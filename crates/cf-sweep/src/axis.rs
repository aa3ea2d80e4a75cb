//! Sweep axis generation.
//!
//! An axis holds the user's min/max/count and generates samples on demand.

use cf_core::linspace_at;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

use crate::error::{SweepError, SweepResult};

/// Evenly spaced samples from `min` to `max`, both inclusive.
///
/// `min > max` gives a descending axis. With `sample_count == 1` the only
/// sample is `min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    pub min: f64,
    pub max: f64,
    pub sample_count: usize,
}

impl SweepAxis {
    /// Create an axis, rejecting non-finite bounds and a zero sample count.
    pub fn new(min: f64, max: f64, sample_count: usize) -> SweepResult<Self> {
        let axis = Self {
            min,
            max,
            sample_count,
        };
        axis.validate("sweep")?;
        Ok(axis)
    }

    /// Single-sample axis pinned at `value`.
    pub fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            sample_count: 1,
        }
    }

    /// Check bounds and count, naming the axis in the error.
    pub fn validate(&self, axis: &'static str) -> SweepResult<()> {
        if !self.min.is_finite() {
            return Err(SweepError::InvalidAxis {
                axis,
                what: "minimum must be a finite number",
            });
        }
        if !self.max.is_finite() {
            return Err(SweepError::InvalidAxis {
                axis,
                what: "maximum must be a finite number",
            });
        }
        if !(self.max - self.min).is_finite() {
            return Err(SweepError::InvalidAxis {
                axis,
                what: "range between minimum and maximum is too large",
            });
        }
        if self.sample_count == 0 {
            return Err(SweepError::InvalidAxis {
                axis,
                what: "sample count must be at least 1",
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sample_count
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// The `index`-th sample: `min + index * (max - min) / (n - 1)`.
    ///
    /// The last sample is exactly `max`.
    pub fn value_at(&self, index: usize) -> f64 {
        linspace_at(self.min, self.max, index, self.sample_count)
    }

    /// Lazy iterator over all samples.
    pub fn values(&self) -> AxisValues {
        AxisValues {
            axis: *self,
            front: 0,
            back: self.sample_count,
        }
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} ({} points)",
            self.min, self.max, self.sample_count
        )
    }
}

/// Iterator over the samples of a [`SweepAxis`].
#[derive(Debug, Clone)]
pub struct AxisValues {
    axis: SweepAxis,
    front: usize,
    back: usize,
}

impl Iterator for AxisValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let v = self.axis.value_at(self.front);
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back.saturating_sub(self.front);
        (n, Some(n))
    }
}

impl DoubleEndedIterator for AxisValues {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.axis.value_at(self.back))
    }
}

impl ExactSizeIterator for AxisValues {}

impl FusedIterator for AxisValues {}
