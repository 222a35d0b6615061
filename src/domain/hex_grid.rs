use super::{Coordinate, Direction};

/// One hexagon of the board: its grid index and its world-space center.
/// Immutable after the grid is built.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HexCell {
    pub col: i32,
    pub row: i32,
    pub center: Coordinate,
}

/// HexGrid owns the fixed, ordered set of cells for the session.
///
/// Cells live on a brick-offset layout: a (col, row) index is a valid cell
/// center iff `col % 2 == row % 2`. Adjacent columns alternate vertical
/// offset by half a row height, so the tiling has no overlap or gap.
pub struct HexGrid {
    cells: Vec<HexCell>,
    hex_radius: f32,
}

impl HexGrid {
    /// Build the cell set for a rectangular index range.
    ///
    /// World-space centers: `x = col * 1.5 * r`, `y = row * sqrt(3) * r / 2`.
    /// Deterministic: equal arguments always produce the same ordered cells.
    pub fn build(size_x: u32, size_y: u32, hex_radius: f32) -> Self {
        let row_half_height = 3.0_f32.sqrt() * hex_radius * 0.5;

        let cells = (0..size_x as i32)
            .flat_map(|col| (0..size_y as i32).map(move |row| (col, row)))
            .filter(|(col, row)| col % 2 == row % 2)
            .map(|(col, row)| HexCell {
                col,
                row,
                center: Coordinate::new(
                    col as f32 * 1.5 * hex_radius,
                    row as f32 * row_half_height,
                ),
            })
            .collect();

        Self { cells, hex_radius }
    }

    /// Circumradius the cells were laid out with
    pub const fn hex_radius(&self) -> f32 {
        self.hex_radius
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate cells in generation order (also the drawing order)
    pub fn cells(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.iter()
    }

    /// Look up the cell at a grid index
    pub fn cell_at(&self, col: i32, row: i32) -> Option<&HexCell> {
        self.cells.iter().find(|c| c.col == col && c.row == row)
    }

    /// Neighbor of a cell in the given direction, None at the boundary
    pub fn neighbor(&self, cell: &HexCell, direction: Direction) -> Option<&HexCell> {
        let (dcol, drow) = direction.offset();
        self.cell_at(cell.col + dcol, cell.row + drow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        let first = HexGrid::build(8, 8, 32.0);
        let second = HexGrid::build(8, 8, 32.0);

        assert_eq!(first.len(), second.len());
        assert!(first.cells().zip(second.cells()).all(|(a, b)| a == b));
    }

    #[test]
    fn test_parity_filter() {
        let grid = HexGrid::build(4, 4, 10.0);

        // Exactly the matching-parity indices; half the rectangle when
        // both dimensions are even
        assert_eq!(grid.len(), 4 * 4 / 2);
        for cell in grid.cells() {
            assert_eq!(cell.col % 2, cell.row % 2);
        }
        assert!(grid.cell_at(0, 0).is_some());
        assert!(grid.cell_at(1, 1).is_some());
        assert!(grid.cell_at(1, 0).is_none());
        assert!(grid.cell_at(0, 1).is_none());
    }

    #[test]
    fn test_world_centers_for_two_by_two() {
        let grid = HexGrid::build(2, 2, 64.0);

        assert_eq!(grid.len(), 2);

        let origin = grid.cell_at(0, 0).unwrap();
        assert_eq!(origin.center, Coordinate::ZERO);

        // (1, 1) sits one column right (1.5 * 64) and one half-row down
        let other = grid.cell_at(1, 1).unwrap();
        assert!((other.center.left - 96.0).abs() < 1e-4);
        assert!((other.center.top - 55.425_625).abs() < 1e-3);
    }

    #[test]
    fn test_empty_range_builds_empty_grid() {
        let grid = HexGrid::build(0, 0, 64.0);

        assert!(grid.is_empty());
        assert_eq!(grid.hex_radius(), 64.0);
    }

    #[test]
    fn test_neighbor_steps_stay_on_grid() {
        let grid = HexGrid::build(6, 6, 32.0);
        let start = *grid.cell_at(2, 2).unwrap();

        for direction in Direction::all() {
            let neighbor = grid.neighbor(&start, direction).unwrap();
            let (dcol, drow) = direction.offset();
            assert_eq!((neighbor.col, neighbor.row), (2 + dcol, 2 + drow));
        }
    }

    #[test]
    fn test_neighbors_are_equidistant() {
        // All six neighbors sit at sqrt(3) * radius from the center
        let radius = 32.0;
        let grid = HexGrid::build(6, 6, radius);
        let start = *grid.cell_at(2, 2).unwrap();
        let expected = 3.0_f32.sqrt() * radius;

        for direction in Direction::all() {
            let neighbor = grid.neighbor(&start, direction).unwrap();
            let delta = neighbor.center - start.center;
            let distance = (delta.left * delta.left + delta.top * delta.top).sqrt();
            assert!(
                (distance - expected).abs() < 1e-3,
                "{direction}: {distance} != {expected}"
            );
        }
    }

    #[test]
    fn test_neighbor_is_none_at_boundary() {
        let grid = HexGrid::build(4, 4, 32.0);
        let corner = *grid.cell_at(0, 0).unwrap();

        assert!(grid.neighbor(&corner, Direction::Up).is_none());
        assert!(grid.neighbor(&corner, Direction::LeftUp).is_none());
        assert!(grid.neighbor(&corner, Direction::RightDown).is_some());
    }
}
