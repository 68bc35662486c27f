use crate::error::{BuildError, Result};

/// Radians of rotation per unit of pointer movement.
pub const DEFAULT_ROTATION_STEP: f64 = 0.003;

/// Sizing of the generated sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildOptions {
    /// Available extent, typically the smaller canvas dimension.
    pub size_constraint: f64,
    /// Fraction of `size_constraint` the sphere's diameter fills.
    pub fill_percentage: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            size_constraint: 1000.0,
            fill_percentage: 0.98,
        }
    }
}

impl BuildOptions {
    /// Creates options from a size constraint and fill percentage.
    #[must_use]
    pub fn new(size_constraint: f64, fill_percentage: f64) -> Self {
        Self {
            size_constraint,
            fill_percentage,
        }
    }

    /// Radius of the sphere every node is projected onto.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.size_constraint * self.fill_percentage / 2.0
    }

    /// Checks that the options describe a positive, finite sphere.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidOptions`] if `size_constraint` is not a
    /// positive finite number or `fill_percentage` is outside `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !self.size_constraint.is_finite() || self.size_constraint <= 0.0 {
            return Err(BuildError::InvalidOptions(format!(
                "size constraint must be positive, got {}",
                self.size_constraint
            ))
            .into());
        }
        if !(self.fill_percentage > 0.0 && self.fill_percentage <= 1.0) {
            return Err(BuildError::InvalidOptions(format!(
                "fill percentage must be in (0, 1], got {}",
                self.fill_percentage
            ))
            .into());
        }
        Ok(())
    }
}
