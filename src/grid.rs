use thiserror::Error;

use crate::config::{CELL_SIZE, SAFE_MARGIN_CELLS};
use crate::input::Direction;

/// Grid position in logical cell coordinates, not viewport units.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns the neighboring cell one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Viewport dimensions that cannot hold the playable area.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum GeometryError {
    #[error("viewport {width}x{height} units is too small for the playable margins")]
    ViewportTooSmall { width: u16, height: u16 },
}

/// Static playable geometry derived from a viewport.
///
/// Movement bounds are the viewport inset by the safe margin on all
/// sides, with one extra row admitted at the top — the cell-unit
/// counterpart of the border's top/bottom render offsets. Food is
/// placed inside the symmetric inner rectangle, so every food cell is
/// also a legal movement cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    cols: i32,
    rows: i32,
    margin: i32,
}

impl Grid {
    /// Converts viewport dimensions in logical units into cell geometry.
    ///
    /// Fails when the margins leave less than a 2×2 food rectangle, in
    /// which case no game can be started on this viewport.
    pub fn from_viewport(width: u16, height: u16) -> Result<Self, GeometryError> {
        let cols = i32::from(width / CELL_SIZE);
        let rows = i32::from(height / CELL_SIZE);
        let margin = SAFE_MARGIN_CELLS;

        if cols < 2 * margin + 2 || rows < 2 * margin + 2 {
            return Err(GeometryError::ViewportTooSmall { width, height });
        }

        Ok(Self { cols, rows, margin })
    }

    /// Returns true when `cell` lies inside the movement bounds.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= self.margin
            && cell.x < self.cols - self.margin
            && cell.y >= self.margin - 1
            && cell.y < self.rows - self.margin
    }

    /// Returns the center cell, where a new snake is seeded.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell {
            x: self.cols / 2,
            y: self.rows / 2,
        }
    }

    /// Top-left cell of the movement bounds.
    #[must_use]
    pub fn bounds_origin(self) -> Cell {
        Cell {
            x: self.margin,
            y: self.margin - 1,
        }
    }

    /// Width of the movement bounds in cells.
    #[must_use]
    pub fn bounds_width(self) -> i32 {
        self.cols - 2 * self.margin
    }

    /// Height of the movement bounds in cells, including the extra top row.
    #[must_use]
    pub fn bounds_height(self) -> i32 {
        self.rows - 2 * self.margin + 1
    }

    /// Top-left cell of the food rectangle.
    #[must_use]
    pub fn food_origin(self) -> Cell {
        Cell {
            x: self.margin,
            y: self.margin,
        }
    }

    /// Width of the food rectangle in cells.
    #[must_use]
    pub fn food_width(self) -> i32 {
        self.cols - 2 * self.margin
    }

    /// Height of the food rectangle in cells.
    #[must_use]
    pub fn food_height(self) -> i32 {
        self.rows - 2 * self.margin
    }

    /// Iterates over every cell eligible for food placement.
    pub fn food_cells(self) -> impl Iterator<Item = Cell> {
        let origin = self.food_origin();
        (origin.y..origin.y + self.food_height()).flat_map(move |y| {
            (origin.x..origin.x + self.food_width()).map(move |x| Cell { x, y })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Cell, GeometryError, Grid};

    fn grid_280() -> Grid {
        // 280 units / 20 per cell = 14×14 cells, 10×10 food rectangle.
        Grid::from_viewport(280, 280).expect("viewport should be large enough")
    }

    #[test]
    fn cell_steps_one_unit_per_direction() {
        let cell = Cell { x: 5, y: 5 };

        assert_eq!(cell.step(Direction::Up), Cell { x: 5, y: 4 });
        assert_eq!(cell.step(Direction::Down), Cell { x: 5, y: 6 });
        assert_eq!(cell.step(Direction::Left), Cell { x: 4, y: 5 });
        assert_eq!(cell.step(Direction::Right), Cell { x: 6, y: 5 });
    }

    #[test]
    fn movement_bounds_admit_one_extra_top_row() {
        let grid = grid_280();

        assert!(grid.contains(Cell { x: 2, y: 1 }));
        assert!(!grid.contains(Cell { x: 2, y: 0 }));
        assert!(grid.contains(Cell { x: 11, y: 11 }));
        assert!(!grid.contains(Cell { x: 12, y: 11 }));
        assert!(!grid.contains(Cell { x: 11, y: 12 }));
        assert!(!grid.contains(Cell { x: 1, y: 5 }));
    }

    #[test]
    fn food_rectangle_is_symmetric_inset() {
        let grid = grid_280();

        assert_eq!(grid.food_origin(), Cell { x: 2, y: 2 });
        assert_eq!(grid.food_width(), 10);
        assert_eq!(grid.food_height(), 10);
        assert_eq!(grid.food_cells().count(), 100);
        assert!(grid.food_cells().all(|cell| grid.contains(cell)));
    }

    #[test]
    fn center_lies_inside_movement_bounds() {
        let grid = grid_280();
        assert!(grid.contains(grid.center()));
    }

    #[test]
    fn undersized_viewport_is_a_geometry_error() {
        assert_eq!(
            Grid::from_viewport(100, 280),
            Err(GeometryError::ViewportTooSmall {
                width: 100,
                height: 280
            })
        );
        assert_eq!(
            Grid::from_viewport(280, 60),
            Err(GeometryError::ViewportTooSmall {
                width: 280,
                height: 60
            })
        );
    }
}
