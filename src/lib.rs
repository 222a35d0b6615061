// Domain layer - Board geometry
pub mod domain;

// Application layer - Session state and viewport transform
pub mod application;

// Infrastructure layer - Rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Coordinate, Direction, HexCell, HexGrid};
pub use application::{App, BoardConfig, Viewport};
pub use rendering::SpriteSheet;
