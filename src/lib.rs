pub mod component;
pub mod coordinate;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod shape;

pub use component::{Component, SignedComponent};
pub use coordinate::Coordinate;
pub use error::*;
pub use grid::Grid;
pub use neighbors::{neighbor_bound, neighbor_count, neighbor_offsets};
pub use shape::Shape;
