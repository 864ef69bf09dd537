use crate::component::SignedComponent;
use crate::coordinate::Coordinate;
use crate::error::{GridError, Operation, Result};

/// Neighborhood radius for `dim` axes: `ceil(sqrt(dim))`.
pub fn neighbor_bound(dim: usize) -> usize {
    let mut bound = (dim as f64).sqrt().ceil() as usize;
    // Float sqrt can land one off for large inputs.
    while bound > 0 && (bound - 1).saturating_mul(bound - 1) >= dim {
        bound -= 1;
    }
    while bound.saturating_mul(bound) < dim {
        bound += 1;
    }
    bound
}

fn side(dim: usize) -> usize {
    neighbor_bound(dim).saturating_mul(2).saturating_add(1)
}

/// Number of offsets [`neighbor_offsets`] yields: `(2 * bound + 1)^dim`, or `None`
/// when that does not fit in `usize`.
pub fn neighbor_count(dim: usize) -> Option<usize> {
    side(dim).checked_pow(u32::try_from(dim).ok()?)
}

/// Every integer offset in the hypercube `[-bound, bound]^dim`, the zero offset included.
///
/// Fails with `Allocation` when the offsets cannot be held in memory, which happens
/// quickly: 20 axes already need `11^20` of them.
pub fn neighbor_offsets<T: SignedComponent>(dim: usize) -> Result<Vec<Coordinate<T>>> {
    let too_many = || GridError::Allocation {
        dim,
        dim_length: side(dim),
    };
    let count = neighbor_count(dim).ok_or_else(too_many)?;
    let bound = i64::try_from(neighbor_bound(dim)).map_err(|_| too_many())?;
    let values = (-bound..=bound)
        .map(|v| num_traits::cast::<i64, T>(v).ok_or(GridError::Overflow { op: Operation::Neighbors }))
        .collect::<Result<Vec<T>>>()?;

    let mut offsets = Vec::new();
    offsets.try_reserve_exact(count).map_err(|_| too_many())?;
    let mut current = Coordinate::new(dim);
    expand(dim, &values, &mut current, &mut offsets);
    Ok(offsets)
}

// Fills axes from the last one down, so the first axis varies fastest.
fn expand<T: SignedComponent>(
    remaining: usize,
    values: &[T],
    current: &mut Coordinate<T>,
    out: &mut Vec<Coordinate<T>>,
) {
    if remaining == 0 {
        out.push(current.clone());
        return;
    }
    let axis = remaining - 1;
    for &value in values {
        current[axis] = value;
        expand(axis, values, current, out);
    }
}
