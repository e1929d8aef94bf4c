//! Uniform time grids.

use ls_core::{Real, ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};

use crate::error::{ResponseError, ResponseResult};

/// A uniform time grid `[start, end]` sampled every `dt` seconds.
///
/// The end point is included when it lies on the grid, so a grid over
/// `[0, 6]` at `dt = 0.01` has 601 samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    start: Real,
    end: Real,
    dt: Real,
}

impl TimeGrid {
    /// Grid from t = 0 to `end`.
    pub fn new(end: Real, dt: Real) -> ResponseResult<Self> {
        Self::from_range(0.0, end, dt)
    }

    /// Grid over an arbitrary range.
    ///
    /// # Errors
    ///
    /// Fails when `dt` is not positive or `end` is not beyond `start`.
    pub fn from_range(start: Real, end: Real, dt: Real) -> ResponseResult<Self> {
        let start = ensure_finite(start, "grid start")?;
        let end = ensure_finite(end, "grid end")?;
        let dt = ensure_positive(dt, "grid dt")?;
        if end <= start {
            return Err(ResponseError::InvalidTimeGrid {
                what: "end time must be beyond start time",
            });
        }
        Ok(Self { start, end, dt })
    }

    pub fn start(&self) -> Real {
        self.start
    }

    pub fn end(&self) -> Real {
        self.end
    }

    pub fn dt(&self) -> Real {
        self.dt
    }

    /// Number of samples, end point included.
    pub fn len(&self) -> usize {
        self.steps() + 1
    }

    /// A grid always holds at least the start sample.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn steps(&self) -> usize {
        // Tolerate representation error so that end points landing on the
        // grid are kept.
        (((self.end - self.start) / self.dt) + 1e-9).floor() as usize
    }

    /// Materialize the sample times.
    pub fn samples(&self) -> Vec<Real> {
        (0..=self.steps())
            .map(|i| self.start + i as Real * self.dt)
            .collect()
    }
}
