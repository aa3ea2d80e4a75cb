//! Cartesian product of the three sweep axes.
//!
//! Combinations are addressed by a flat index and decoded on demand, so
//! iterating a grid allocates nothing.

use cf_model::OperatingPoint;
use std::iter::FusedIterator;

use crate::axis::SweepAxis;
use crate::error::{SweepError, SweepResult};

/// Inlet pressure × discharge pressure × shaft speed grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGrid {
    inlet: SweepAxis,
    discharge: SweepAxis,
    shaft_speed: SweepAxis,
    len: usize,
}

impl SweepGrid {
    pub fn new(
        inlet: SweepAxis,
        discharge: SweepAxis,
        shaft_speed: SweepAxis,
    ) -> SweepResult<Self> {
        inlet.validate("inlet pressure")?;
        discharge.validate("discharge pressure")?;
        shaft_speed.validate("shaft speed")?;

        let len = inlet
            .len()
            .checked_mul(discharge.len())
            .and_then(|n| n.checked_mul(shaft_speed.len()))
            .ok_or(SweepError::GridTooLarge {
                inlet: inlet.len(),
                discharge: discharge.len(),
                shaft_speed: shaft_speed.len(),
            })?;

        Ok(Self {
            inlet,
            discharge,
            shaft_speed,
            len,
        })
    }

    pub fn inlet(&self) -> &SweepAxis {
        &self.inlet
    }

    pub fn discharge(&self) -> &SweepAxis {
        &self.discharge
    }

    pub fn shaft_speed(&self) -> &SweepAxis {
        &self.shaft_speed
    }

    /// Number of combinations, feasible or not.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Decode a flat index into its operating point.
    ///
    /// Index order: inlet outer, discharge middle, shaft speed inner.
    pub fn point_at(&self, index: usize) -> Option<OperatingPoint> {
        if index >= self.len {
            return None;
        }
        let n_speed = self.shaft_speed.len();
        let per_inlet = self.discharge.len() * n_speed;

        let i = index / per_inlet;
        let rem = index % per_inlet;
        let j = rem / n_speed;
        let k = rem % n_speed;

        Some(OperatingPoint {
            inlet_pressure: self.inlet.value_at(i),
            discharge_pressure: self.discharge.value_at(j),
            shaft_speed: self.shaft_speed.value_at(k),
        })
    }

    /// All combinations in generation order.
    pub fn points(&self) -> GridPoints<'_> {
        GridPoints {
            grid: self,
            front: 0,
            back: self.len,
        }
    }

    /// Combinations with discharge strictly above inlet pressure.
    pub fn feasible_points(&self) -> impl Iterator<Item = OperatingPoint> + '_ {
        self.points().filter(OperatingPoint::is_feasible)
    }
}

/// Iterator over every combination of a [`SweepGrid`].
#[derive(Debug, Clone)]
pub struct GridPoints<'a> {
    grid: &'a SweepGrid,
    front: usize,
    back: usize,
}

impl Iterator for GridPoints<'_> {
    type Item = OperatingPoint;

    fn next(&mut self) -> Option<OperatingPoint> {
        if self.front >= self.back {
            return None;
        }
        let p = self.grid.point_at(self.front);
        self.front += 1;
        p
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back.saturating_sub(self.front);
        (n, Some(n))
    }
}

impl DoubleEndedIterator for GridPoints<'_> {
    fn next_back(&mut self) -> Option<OperatingPoint> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.grid.point_at(self.back)
    }
}

impl ExactSizeIterator for GridPoints<'_> {}

impl FusedIterator for GridPoints<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(min: f64, max: f64, n: usize) -> SweepAxis {
        SweepAxis::new(min, max, n).unwrap()
    }

    #[test]
    fn nesting_order_is_inlet_discharge_speed() {
        let grid = SweepGrid::new(axis(1.0, 2.0, 2), axis(10.0, 20.0, 2), axis(100.0, 300.0, 3))
            .unwrap();
        let triples: Vec<(f64, f64, f64)> = grid
            .points()
            .map(|p| (p.inlet_pressure, p.discharge_pressure, p.shaft_speed))
            .collect();

        assert_eq!(triples.len(), 12);
        assert_eq!(triples[0], (1.0, 10.0, 100.0));
        assert_eq!(triples[1], (1.0, 10.0, 200.0));
        assert_eq!(triples[2], (1.0, 10.0, 300.0));
        assert_eq!(triples[3], (1.0, 20.0, 100.0));
        assert_eq!(triples[6], (2.0, 10.0, 100.0));
        assert_eq!(triples[11], (2.0, 20.0, 300.0));
    }

    #[test]
    fn point_at_matches_iteration() {
        let grid = SweepGrid::new(axis(0.0, 9.0, 4), axis(5.0, 6.0, 3), axis(1.0, 2.0, 2)).unwrap();
        for (idx, p) in grid.points().enumerate() {
            assert_eq!(grid.point_at(idx), Some(p));
        }
        assert_eq!(grid.point_at(grid.len()), None);
    }

    #[test]
    fn reverse_iteration_mirrors_forward() {
        let grid = SweepGrid::new(axis(0.0, 1.0, 2), axis(0.0, 1.0, 3), axis(0.0, 1.0, 2)).unwrap();
        let mut forward: Vec<OperatingPoint> = grid.points().collect();
        forward.reverse();
        let backward: Vec<OperatingPoint> = grid.points().rev().collect();
        assert_eq!(forward, backward);
    }

    #[test]
    fn feasible_points_filter_discharge_at_or_below_inlet() {
        let grid = SweepGrid::new(
            axis(100.0, 300.0, 3),
            axis(100.0, 300.0, 3),
            SweepAxis::fixed(1000.0),
        )
        .unwrap();
        // Only discharge > inlet: (100,200), (100,300), (200,300).
        let feasible: Vec<OperatingPoint> = grid.feasible_points().collect();
        assert_eq!(feasible.len(), 3);
        assert!(feasible.iter().all(|p| p.discharge_pressure > p.inlet_pressure));
    }

    #[test]
    fn axis_errors_name_the_axis() {
        let bad = SweepAxis {
            min: 0.0,
            max: 1.0,
            sample_count: 0,
        };
        let err = SweepGrid::new(axis(0.0, 1.0, 2), axis(0.0, 1.0, 2), bad).unwrap_err();
        assert_eq!(
            err,
            SweepError::InvalidAxis {
                axis: "shaft speed",
                what: "sample count must be at least 1",
            }
        );
    }

    #[test]
    fn overflowing_grid_is_rejected() {
        let huge = SweepAxis {
            min: 0.0,
            max: 1.0,
            sample_count: usize::MAX / 2,
        };
        let err = SweepGrid::new(huge, huge, SweepAxis::fixed(1.0)).unwrap_err();
        assert!(matches!(err, SweepError::GridTooLarge { .. }));
    }

    #[test]
    fn large_grid_is_lazy() {
        // 10^9 combinations: constructing and sampling must not allocate them.
        let grid = SweepGrid::new(axis(0.0, 1.0, 1000), axis(0.0, 1.0, 1000), axis(0.0, 1.0, 1000))
            .unwrap();
        assert_eq!(grid.len(), 1_000_000_000);
        assert_eq!(grid.points().len(), 1_000_000_000);
        let last = grid.points().next_back().unwrap();
        assert_eq!(last.inlet_pressure, 1.0);
        assert_eq!(last.shaft_speed, 1.0);
    }
}
