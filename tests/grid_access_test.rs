use ndgrid::{Coordinate, Grid, GridError, Operation, Shape};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn write_through_coordinates_then_read_linear() {
    init_tracing();
    let mut grid: Grid<usize> = Grid::new(3, 4).unwrap();
    assert_eq!(grid.len(), 64);

    for linear in 0..grid.len() {
        let coord = grid.coordinate_of::<i64>(linear).unwrap();
        *grid.at_mut(&coord).unwrap() = linear;
    }
    for (linear, value) in grid.iter().enumerate() {
        assert_eq!(*value, linear);
    }
}

#[test]
fn indexed_iter_agrees_with_at() {
    let shape = Shape::new(2, 3);
    let grid = Grid::from_vec(shape, (0..9).collect::<Vec<u32>>()).unwrap();
    for (coord, value) in grid.indexed_iter() {
        assert_eq!(grid.at(&coord).unwrap(), value);
    }
}

#[test]
fn access_with_wrong_dim_is_rejected() {
    init_tracing();
    let mut grid: Grid<f32> = Grid::new(2, 8).unwrap();
    let err = grid.at_mut(&Coordinate::from([1, 1, 1])).unwrap_err();
    assert!(matches!(
        err,
        GridError::DimensionMismatch { op: Operation::GridAccess, expected: 2, found: 3 }
    ));
}

#[test]
fn access_outside_dim_length_is_rejected() {
    init_tracing();
    let grid: Grid<f32> = Grid::new(2, 8).unwrap();
    assert!(matches!(
        grid.at(&Coordinate::from([8, 0])),
        Err(GridError::OutOfBounds { axis: 0, dim_length: 8, .. })
    ));
}

#[test]
fn float_coordinates_address_rounded_cell() {
    let mut grid: Grid<char> = Grid::filled(2, 3, '.').unwrap();
    grid.set(&Coordinate::from([1.2, 1.8]), '#').unwrap();
    assert_eq!(*grid.at(&Coordinate::from([1, 2])).unwrap(), '#');
}

#[test]
fn shape_from_config_builds_grid() {
    let shape = Shape::from_json(r#"{ "dim": 2, "dim_length": 5 }"#).unwrap();
    let mut grid = Grid::with_shape(shape, 0u8).unwrap();
    grid.fill(3);
    assert_eq!(grid.shape(), shape);
    assert!(grid.iter().all(|&v| v == 3));
}

#[test]
fn oversized_shape_is_allocation_error() {
    let result = Grid::filled(usize::BITS as usize, 2, 0u8);
    assert!(matches!(result, Err(GridError::Allocation { .. })));
}

#[test]
fn neighborhood_sum() {
    let grid = Grid::filled(2, 4, 1u32).unwrap();
    let total: u32 = grid
        .neighbors_of(&Coordinate::from([1, 1]))
        .unwrap()
        .into_iter()
        .map(|(_, &v)| v)
        .sum();
    // rows and columns -1..=3 clipped to 0..4 leaves 4x4
    assert_eq!(total, 16);
}
