use std::collections::VecDeque;

use crate::grid::Cell;

/// Ordered snake body. Head at the front, tail at the back.
///
/// Holds at least one cell for the whole of a game; a head overlapping
/// the body is the game-over signal, not a data-corruption bug.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);
        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Prepends a new head cell.
    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Removes the tail cell (the non-eating half of a movement step).
    pub fn pop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true when `cell` hits any segment except the head.
    ///
    /// Used on the candidate head against the pre-move body, so the
    /// head's own former position never counts as a collision.
    #[must_use]
    pub fn hits_body(&self, cell: Cell) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == cell)
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Snake};

    #[test]
    fn push_head_and_pop_tail_keep_order() {
        let mut snake = Snake::new(Cell { x: 3, y: 3 });

        snake.push_head(Cell { x: 4, y: 3 });
        snake.push_head(Cell { x: 5, y: 3 });
        assert_eq!(snake.head(), Cell { x: 5, y: 3 });
        assert_eq!(snake.len(), 3);

        snake.pop_tail();
        assert_eq!(snake.len(), 2);
        assert!(!snake.occupies(Cell { x: 3, y: 3 }));
    }

    #[test]
    fn hits_body_skips_the_head() {
        let snake = Snake::from_segments(vec![
            Cell { x: 5, y: 5 },
            Cell { x: 4, y: 5 },
            Cell { x: 3, y: 5 },
        ]);

        assert!(!snake.hits_body(Cell { x: 5, y: 5 }));
        assert!(snake.hits_body(Cell { x: 4, y: 5 }));
        assert!(snake.hits_body(Cell { x: 3, y: 5 }));
        assert!(!snake.hits_body(Cell { x: 6, y: 5 }));
    }

    #[test]
    fn occupies_checks_every_segment() {
        let snake = Snake::from_segments(vec![Cell { x: 1, y: 1 }, Cell { x: 1, y: 2 }]);

        assert!(snake.occupies(Cell { x: 1, y: 1 }));
        assert!(snake.occupies(Cell { x: 1, y: 2 }));
        assert!(!snake.occupies(Cell { x: 2, y: 1 }));
    }
}
