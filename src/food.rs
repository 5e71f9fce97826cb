use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Random draws attempted before falling back to an exhaustive scan.
pub const RANDOM_PLACE_RETRIES: u32 = 64;

/// Picks a uniformly random free cell inside the food rectangle.
///
/// Cells occupied by the snake are rejected; after
/// [`RANDOM_PLACE_RETRIES`] colliding draws the remaining free cells
/// are enumerated and one is chosen uniformly, so a crowded board can
/// never loop forever. Returns `None` only when the snake covers every
/// eligible cell.
#[must_use]
pub fn place<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    for _ in 0..RANDOM_PLACE_RETRIES {
        let cell = random_cell(rng, grid);
        if !snake.occupies(cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = grid
        .food_cells()
        .filter(|cell| !snake.occupies(*cell))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: Grid) -> Cell {
    let origin = grid.food_origin();
    Cell {
        x: origin.x + rng.gen_range(0..grid.food_width()),
        y: origin.y + rng.gen_range(0..grid.food_height()),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::grid::{Cell, Grid};
    use crate::snake::Snake;

    use super::place;

    fn small_grid() -> Grid {
        // 6×6 cells, 2×2 food rectangle at (2,2)..(4,4).
        Grid::from_viewport(120, 120).expect("viewport should be large enough")
    }

    #[test]
    fn placement_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::from_viewport(280, 280).expect("viewport should be large enough");
        let snake = Snake::from_segments(vec![
            Cell { x: 5, y: 5 },
            Cell { x: 4, y: 5 },
            Cell { x: 3, y: 5 },
            Cell { x: 2, y: 5 },
        ]);

        for _ in 0..200 {
            let cell = place(&mut rng, grid, &snake).expect("board has free cells");
            assert!(!snake.occupies(cell));
            assert!(grid.contains(cell));
        }
    }

    #[test]
    fn crowded_board_falls_back_to_the_single_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = small_grid();
        // Snake covers three of the four food cells.
        let snake = Snake::from_segments(vec![
            Cell { x: 2, y: 2 },
            Cell { x: 2, y: 3 },
            Cell { x: 3, y: 3 },
        ]);

        for _ in 0..20 {
            assert_eq!(place(&mut rng, grid, &snake), Some(Cell { x: 3, y: 2 }));
        }
    }

    #[test]
    fn full_board_yields_no_placement() {
        let mut rng = StdRng::seed_from_u64(13);
        let grid = small_grid();
        let snake = Snake::from_segments(vec![
            Cell { x: 2, y: 2 },
            Cell { x: 3, y: 2 },
            Cell { x: 3, y: 3 },
            Cell { x: 2, y: 3 },
        ]);

        assert_eq!(place(&mut rng, grid, &snake), None);
    }
}
