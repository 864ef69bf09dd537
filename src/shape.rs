use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::coordinate::Coordinate;
use crate::error::{GridError, Result};

/// Extent of a [`crate::Grid`]: `dim` axes of `dim_length` cells each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub dim: usize,
    pub dim_length: usize,
}

impl Shape {
    /// Shape of `dim` axes with `dim_length` cells each.
    pub fn new(dim: usize, dim_length: usize) -> Self {
        Self { dim, dim_length }
    }

    /// Parse a shape from JSON, e.g. `{"dim": 3, "dim_length": 16}`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// `dim_length^dim`, or `Allocation` when that overflows `usize`.
    pub fn capacity(&self) -> Result<usize> {
        u32::try_from(self.dim)
            .ok()
            .and_then(|dim| self.dim_length.checked_pow(dim))
            .ok_or(GridError::Allocation {
                dim: self.dim,
                dim_length: self.dim_length,
            })
    }

    /// Whether `coord` addresses a cell of this shape.
    pub fn contains<T: Component>(&self, coord: &Coordinate<T>) -> bool {
        coord.dim() == self.dim && coord.within(0.0, self.dim_length as f64)
    }
}
