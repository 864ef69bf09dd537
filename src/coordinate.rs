use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::component::Component;
use crate::error::{GridError, Operation, Result};

/// An n-dimensional point. Also serves as the index into a [`crate::Grid`].
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate<T: Component> {
    components: SmallVec<[T; 4]>,
}

impl<T: Component> Coordinate<T> {
    /// Zero-filled coordinate with `dim` axes.
    pub fn new(dim: usize) -> Self {
        Self {
            components: SmallVec::from_elem(T::zero(), dim),
        }
    }

    /// The all-zero coordinate; same as [`Coordinate::new`].
    pub fn origin(dim: usize) -> Self {
        Self::new(dim)
    }

    /// Takes ownership of `components`; the dimension is their count.
    pub fn from_vec(components: Vec<T>) -> Self {
        Self {
            components: SmallVec::from_vec(components),
        }
    }

    /// Decodes a linear index into a coordinate, last axis least significant.
    ///
    /// Fails with `Overflow` when a digit does not fit in `T`.
    pub fn from_linear(dim: usize, mut index: usize, dim_length: usize) -> Result<Self> {
        let mut coord = Self::new(dim);
        for axis in (0..dim).rev() {
            let digit = index.checked_rem(dim_length).ok_or(GridError::DivisionByZero)?;
            coord.components[axis] = num_traits::cast(digit).ok_or(GridError::Overflow {
                op: Operation::Convert,
            })?;
            index /= dim_length;
        }
        Ok(coord)
    }

    /// Number of axes.
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    /// Components in axis order.
    pub fn components(&self) -> &[T] {
        &self.components
    }

    /// Component on `axis`, or `None` past the last axis.
    pub fn get(&self, axis: usize) -> Option<&T> {
        self.components.get(axis)
    }

    /// Components in axis order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.components.iter()
    }

    /// Consumes the coordinate, returning its components.
    pub fn into_vec(self) -> Vec<T> {
        self.components.into_vec()
    }

    fn zip_with(&self, other: &Self, op: Operation, f: impl Fn(T, T) -> Option<T>) -> Result<Self> {
        self.check_dim(other, op)?;
        self.components
            .iter()
            .zip(other.components.iter())
            .map(|(&a, &b)| f(a, b).ok_or(GridError::Overflow { op }))
            .collect()
    }

    fn check_dim(&self, other: &Self, op: Operation) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(GridError::DimensionMismatch {
                op,
                expected: self.dim(),
                found: other.dim(),
            });
        }
        Ok(())
    }

    /// Element-wise sum. Fails on differing dimensions or component overflow.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, Operation::Add, T::try_add)
    }

    /// Element-wise difference. Fails on differing dimensions or component overflow.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, Operation::Sub, T::try_sub)
    }

    /// Multiplies every component by `k`.
    ///
    /// The product is taken in `f64` and cast back, so integer results truncate
    /// toward zero and very large `i64`/`u64` values lose precision. A product that
    /// does not fit in `T` is an `Overflow`.
    pub fn scale<S: Component>(&self, k: S) -> Result<Self> {
        let k = k.as_f64();
        self.components
            .iter()
            .map(|&c| {
                num_traits::cast::<f64, T>(c.as_f64() * k).ok_or(GridError::Overflow {
                    op: Operation::Scale,
                })
            })
            .collect()
    }

    fn divide_each(&self, k: T, f: impl Fn(T, T) -> Option<T>) -> Result<Self> {
        if k == T::zero() {
            return Err(GridError::DivisionByZero);
        }
        self.components
            .iter()
            .map(|&c| f(c, k).ok_or(GridError::Overflow { op: Operation::Divide }))
            .collect()
    }

    /// Divides every component by `k`, rounding toward negative infinity.
    ///
    /// This maps a position onto the cell that contains it: `(5, -5) / 2` is
    /// `(2, -3)`.
    pub fn floor_div(&self, k: T) -> Result<Self> {
        self.divide_each(k, T::floor_div)
    }

    /// Plain division: exact for floats, truncating for integers.
    pub fn true_div(&self, k: T) -> Result<Self> {
        self.divide_each(k, T::true_div)
    }

    /// Euclidean distance. Fails when the dimensions differ.
    pub fn distance(&self, other: &Self) -> Result<f64> {
        self.check_dim(other, Operation::Distance)?;
        let d2: f64 = self
            .components
            .iter()
            .zip(other.components.iter())
            .map(|(&a, &b)| {
                let delta = a.as_f64() - b.as_f64();
                delta * delta
            })
            .sum();
        Ok(d2.sqrt())
    }

    /// Euclidean distance from the origin.
    pub fn length(&self) -> f64 {
        self.components
            .iter()
            .map(|&c| c.as_f64() * c.as_f64())
            .sum::<f64>()
            .sqrt()
    }

    /// True iff every component, rounded to the nearest integer, lies in `[min, max)`.
    pub fn in_boundary(&self, min: T, max: T) -> bool {
        self.within(min.as_f64(), max.as_f64())
    }

    pub(crate) fn within(&self, min: f64, max: f64) -> bool {
        self.components.iter().all(|&c| {
            let r = c.as_f64().round();
            r >= min && r < max
        })
    }

    /// Mixed-radix encoding with axis 0 as the most significant digit.
    ///
    /// Computed in `T` without range checks; see [`Coordinate::linear_index`] for the
    /// checked form.
    pub fn to_index(&self, dim_length: T) -> T {
        self.components
            .iter()
            .fold(T::zero(), |acc, &c| acc * dim_length + c)
    }

    /// Overwrites the components with the decoding of `index`.
    ///
    /// Digits are taken with floor semantics, so a negative index wraps from the top:
    /// `-1` in radix 10 decodes to `(9, 9)`.
    pub fn from_index(&mut self, mut index: T, dim_length: T) -> Result<()> {
        if dim_length == T::zero() {
            return Err(GridError::DivisionByZero);
        }
        for axis in (0..self.dim()).rev() {
            let quotient = index.floor_div(dim_length).ok_or(GridError::Overflow {
                op: Operation::Divide,
            })?;
            self.components[axis] = index - quotient * dim_length;
            index = quotient;
        }
        Ok(())
    }

    /// Checked [`Coordinate::to_index`] into a buffer of `dim_length^dim` slots.
    ///
    /// Components are rounded first, matching [`Coordinate::in_boundary`].
    pub fn linear_index(&self, dim_length: usize) -> Result<usize> {
        let mut acc: usize = 0;
        for (axis, &c) in self.components.iter().enumerate() {
            let value = c.as_f64();
            let out_of_bounds = || GridError::OutOfBounds {
                axis,
                value,
                dim_length,
            };
            let rounded = value.round();
            if !(rounded >= 0.0 && rounded < dim_length as f64) {
                return Err(out_of_bounds());
            }
            acc = acc
                .checked_mul(dim_length)
                .and_then(|a| a.checked_add(rounded as usize))
                .ok_or_else(out_of_bounds)?;
        }
        Ok(acc)
    }
}

impl Coordinate<usize> {
    /// Steps to the next coordinate in linear order, wrapping to the origin.
    pub(crate) fn advance(&mut self, dim_length: usize) {
        for axis in (0..self.dim()).rev() {
            self.components[axis] += 1;
            if self.components[axis] < dim_length {
                return;
            }
            self.components[axis] = 0;
        }
    }
}

impl<T: Component> Index<usize> for Coordinate<T> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        &self.components[axis]
    }
}

impl<T: Component> IndexMut<usize> for Coordinate<T> {
    fn index_mut(&mut self, axis: usize) -> &mut T {
        &mut self.components[axis]
    }
}

impl<T: Component> FromIterator<T> for Coordinate<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<T: Component> From<Vec<T>> for Coordinate<T> {
    fn from(components: Vec<T>) -> Self {
        Self::from_vec(components)
    }
}

impl<T: Component, const N: usize> From<[T; N]> for Coordinate<T> {
    fn from(components: [T; N]) -> Self {
        components.into_iter().collect()
    }
}

impl<'a, T: Component> Add for &'a Coordinate<T> {
    type Output = Result<Coordinate<T>>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<'a, T: Component> Sub for &'a Coordinate<T> {
    type Output = Result<Coordinate<T>>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<'a, T: Component, S: Component> Mul<S> for &'a Coordinate<T> {
    type Output = Result<Coordinate<T>>;

    fn mul(self, k: S) -> Self::Output {
        self.scale(k)
    }
}

// Division defaults to floor semantics.
impl<'a, T: Component> Div<T> for &'a Coordinate<T> {
    type Output = Result<Coordinate<T>>;

    fn div(self, k: T) -> Self::Output {
        self.floor_div(k)
    }
}

impl<T: Component> fmt::Display for Coordinate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.components.iter().join(", "))
    }
}

impl<T: Component> fmt::Debug for Coordinate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate{}", self)
    }
}
