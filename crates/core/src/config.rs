//! Validated grid configuration.
//!
//! The grid bounds and step are construction parameters rather than globals
//! so that tests (and future hosts) can run multiple independently configured
//! grids side by side.

use thiserror::Error;

use crate::types::{P_MAX, P_MIN, STEP};

// Tolerance for the divisibility check; the parameters are human-authored
// round numbers, so anything beyond this is a genuine mismatch.
const DIVISIBILITY_EPSILON: f64 = 1e-9;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridConfigError {
    #[error("grid range is empty: p_min={p_min}, p_max={p_max}")]
    EmptyRange { p_min: f64, p_max: f64 },
    #[error("grid step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("grid span {span} is not evenly divisible by step {step}")]
    UnevenStep { span: f64, step: f64 },
}

/// Immutable description of the square sprite grid.
///
/// Invariants (enforced by [`GridConfig::new`]):
///
/// - `p_max > p_min`
/// - `step > 0`
/// - `(p_max - p_min)` is evenly divisible by `step`
///
/// `steps` is derived as `(p_max - p_min) / step`; the sheet then holds
/// `steps + 1` frames per axis (both endpoints are frames).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    p_min: f64,
    p_max: f64,
    step: f64,
    steps: u32,
}

impl GridConfig {
    /// Build a validated configuration.
    pub fn new(p_min: f64, p_max: f64, step: f64) -> Result<Self, GridConfigError> {
        if p_max <= p_min {
            return Err(GridConfigError::EmptyRange { p_min, p_max });
        }
        if step <= 0.0 {
            return Err(GridConfigError::NonPositiveStep(step));
        }
        let span = p_max - p_min;
        let ratio = span / step;
        if (ratio - ratio.round()).abs() > DIVISIBILITY_EPSILON {
            return Err(GridConfigError::UnevenStep { span, step });
        }
        Ok(Self {
            p_min,
            p_max,
            step,
            steps: ratio.round() as u32,
        })
    }

    pub fn p_min(&self) -> f64 {
        self.p_min
    }

    pub fn p_max(&self) -> f64 {
        self.p_max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of steps per axis (10 with the default parameters).
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Number of frames per axis (`steps + 1`, 11 with the defaults).
    pub fn cell_count(&self) -> u32 {
        self.steps + 1
    }

    /// Background size in percent that makes one frame fill the container.
    pub fn background_size_percent(&self) -> f64 {
        self.cell_count() as f64 * 100.0
    }
}

impl Default for GridConfig {
    /// The shipped sprite sheets use `[-15, 15]` with step 3.
    fn default() -> Self {
        // Constants are validated by a test below, so this cannot fail.
        Self {
            p_min: P_MIN,
            p_max: P_MAX,
            step: STEP,
            steps: ((P_MAX - P_MIN) / STEP) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_validated_construction() {
        let built = GridConfig::new(P_MIN, P_MAX, STEP).unwrap();
        assert_eq!(built, GridConfig::default());
        assert_eq!(built.steps(), 10);
        assert_eq!(built.cell_count(), 11);
        assert_eq!(built.background_size_percent(), 1100.0);
    }

    #[test]
    fn rejects_empty_range() {
        assert_eq!(
            GridConfig::new(15.0, -15.0, 3.0),
            Err(GridConfigError::EmptyRange {
                p_min: 15.0,
                p_max: -15.0
            })
        );
        assert!(GridConfig::new(3.0, 3.0, 1.0).is_err());
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            GridConfig::new(-15.0, 15.0, 0.0),
            Err(GridConfigError::NonPositiveStep(0.0))
        );
        assert!(GridConfig::new(-15.0, 15.0, -3.0).is_err());
    }

    #[test]
    fn rejects_uneven_step() {
        assert_eq!(
            GridConfig::new(-15.0, 15.0, 4.0),
            Err(GridConfigError::UnevenStep {
                span: 30.0,
                step: 4.0
            })
        );
    }

    #[test]
    fn accepts_alternate_grids() {
        let fine = GridConfig::new(-1.0, 1.0, 0.5).unwrap();
        assert_eq!(fine.steps(), 4);
        assert_eq!(fine.cell_count(), 5);

        let coarse = GridConfig::new(0.0, 10.0, 5.0).unwrap();
        assert_eq!(coarse.steps(), 2);
    }
}
