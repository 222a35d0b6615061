mod coordinate;
mod direction;
mod hex_grid;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use hex_grid::{HexCell, HexGrid};
