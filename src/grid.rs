use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::component::{Component, SignedComponent};
use crate::coordinate::Coordinate;
use crate::error::{GridError, Operation, Result};
use crate::neighbors::neighbor_offsets;
use crate::shape::Shape;

/// Dense n-dimensional array stored as one flat buffer of `dim_length^dim` elements.
///
/// Cells are addressed by [`Coordinate`]s, linearized with axis 0 as the most
/// significant digit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawGrid<E>",
    bound(deserialize = "E: Deserialize<'de>")
)]
pub struct Grid<E> {
    shape: Shape,
    data: Vec<E>,
}

#[derive(Deserialize)]
struct RawGrid<E> {
    shape: Shape,
    data: Vec<E>,
}

impl<E> TryFrom<RawGrid<E>> for Grid<E> {
    type Error = GridError;

    fn try_from(raw: RawGrid<E>) -> Result<Self> {
        Grid::from_vec(raw.shape, raw.data)
    }
}

impl<E: Default + Clone> Grid<E> {
    /// Grid with every cell set to `E::default()`.
    pub fn new(dim: usize, dim_length: usize) -> Result<Self> {
        Self::filled(dim, dim_length, E::default())
    }
}

impl<E: Clone> Grid<E> {
    /// Grid with every cell set to a clone of `fill`.
    pub fn filled(dim: usize, dim_length: usize, fill: E) -> Result<Self> {
        Self::with_shape(Shape::new(dim, dim_length), fill)
    }

    /// Like [`Grid::filled`], taking the extent as a [`Shape`].
    pub fn with_shape(shape: Shape, fill: E) -> Result<Self> {
        let capacity = shape.capacity()?;
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| GridError::Allocation {
                dim: shape.dim,
                dim_length: shape.dim_length,
            })?;
        data.resize(capacity, fill);
        debug!(
            dim = shape.dim,
            dim_length = shape.dim_length,
            capacity,
            "allocated grid"
        );
        Ok(Self { shape, data })
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: E) {
        self.data.fill(value);
    }
}

impl<E> Grid<E> {
    /// Wraps an existing buffer, which must hold exactly `dim_length^dim` elements.
    pub fn from_vec(shape: Shape, data: Vec<E>) -> Result<Self> {
        let expected = shape.capacity()?;
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Number of axes.
    pub fn dim(&self) -> usize {
        self.shape.dim
    }

    /// Number of cells along each axis.
    pub fn dim_length(&self) -> usize {
        self.shape.dim_length
    }

    /// The `(dim, dim_length)` extent.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Total cell count, `dim_length^dim`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the grid has no cells: at least one axis, each of zero length.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn offset<T: Component>(&self, coord: &Coordinate<T>) -> Result<usize> {
        if coord.dim() != self.shape.dim {
            trace!(expected = self.shape.dim, found = coord.dim(), "rejected grid access");
            return Err(GridError::DimensionMismatch {
                op: Operation::GridAccess,
                expected: self.shape.dim,
                found: coord.dim(),
            });
        }
        coord.linear_index(self.shape.dim_length).inspect_err(|e| {
            trace!(coord = %coord, error = %e, "rejected grid access");
        })
    }

    /// Reads the cell at `coord`. Rejects a wrong dimension or an out-of-range component.
    pub fn at<T: Component>(&self, coord: &Coordinate<T>) -> Result<&E> {
        let index = self.offset(coord)?;
        Ok(&self.data[index])
    }

    /// Mutable form of [`Grid::at`].
    pub fn at_mut<T: Component>(&mut self, coord: &Coordinate<T>) -> Result<&mut E> {
        let index = self.offset(coord)?;
        Ok(&mut self.data[index])
    }

    /// Stores `value` at `coord`, returning the previous value.
    pub fn set<T: Component>(&mut self, coord: &Coordinate<T>, value: E) -> Result<E> {
        Ok(std::mem::replace(self.at_mut(coord)?, value))
    }

    /// Cell at a linear offset, bypassing coordinates.
    pub fn get(&self, linear: usize) -> Option<&E> {
        self.data.get(linear)
    }

    /// Mutable form of [`Grid::get`].
    pub fn get_mut(&mut self, linear: usize) -> Option<&mut E> {
        self.data.get_mut(linear)
    }

    /// The coordinate addressing linear slot `linear`, if it is inside the grid and
    /// every component fits in `T`.
    pub fn coordinate_of<T: Component>(&self, linear: usize) -> Option<Coordinate<T>> {
        if linear >= self.data.len() {
            return None;
        }
        Coordinate::from_linear(self.shape.dim, linear, self.shape.dim_length).ok()
    }

    /// Values around `coord` within the neighbor radius for this dimension,
    /// the cell itself included. Offsets leaving the grid are skipped.
    ///
    /// Fails with `Allocation` for dimensions whose neighborhood is too large to
    /// enumerate.
    pub fn neighbors_of<T: SignedComponent>(
        &self,
        coord: &Coordinate<T>,
    ) -> Result<Vec<(Coordinate<T>, &E)>> {
        if coord.dim() != self.shape.dim {
            return Err(GridError::DimensionMismatch {
                op: Operation::GridAccess,
                expected: self.shape.dim,
                found: coord.dim(),
            });
        }
        let mut found = Vec::new();
        for offset in neighbor_offsets::<T>(self.shape.dim)? {
            // A sum that overflows `T` cannot name a cell either.
            let position = match coord.checked_add(&offset) {
                Ok(position) => position,
                Err(GridError::Overflow { .. }) => continue,
                Err(e) => return Err(e),
            };
            if self.shape.contains(&position) {
                let value = self.at(&position)?;
                found.push((position, value));
            }
        }
        Ok(found)
    }

    /// Cells in linear order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.data.iter()
    }

    /// Mutable cells in linear order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.data.iter_mut()
    }

    /// Every cell with its coordinate, in linear order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Coordinate<usize>, &E)> {
        let dim_length = self.shape.dim_length;
        self.data
            .iter()
            .scan(Coordinate::new(self.shape.dim), move |cursor, value| {
                let here = cursor.clone();
                cursor.advance(dim_length);
                Some((here, value))
            })
    }

    /// The flat backing buffer.
    pub fn data(&self) -> &[E] {
        &self.data
    }

    /// Mutable view of the flat backing buffer.
    pub fn data_mut(&mut self) -> &mut [E] {
        &mut self.data
    }

    /// Consumes the grid, returning the flat buffer.
    pub fn into_vec(self) -> Vec<E> {
        self.data
    }
}
