/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the cell offset of one step along this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Discrete events delivered by the host at arbitrary wall-clock times.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputEvent {
    Move(Direction),
    TogglePause,
    RequestStart,
}

/// Coalescing buffer between the event source and the tick engine.
///
/// Any number of events may arrive between two ticks; they collapse
/// into one pending direction (last write wins) and two boolean flags,
/// drained exactly once at the start of the next tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InputBuffer {
    pending_direction: Option<Direction>,
    pause_toggled: bool,
    start_requested: bool,
}

/// Buffered input applied to exactly one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DrainedInput {
    pub direction: Option<Direction>,
    pub pause_toggled: bool,
    pub start_requested: bool,
}

impl InputBuffer {
    /// Records one event. Safe to call any number of times between ticks.
    pub fn enqueue(&mut self, event: InputEvent) {
        match event {
            InputEvent::Move(direction) => self.pending_direction = Some(direction),
            InputEvent::TogglePause => self.pause_toggled = true,
            InputEvent::RequestStart => self.start_requested = true,
        }
    }

    /// Empties the buffer, returning everything recorded since the last drain.
    pub fn drain(&mut self) -> DrainedInput {
        let taken = std::mem::take(self);
        DrainedInput {
            direction: taken.pending_direction,
            pause_toggled: taken.pause_toggled,
            start_requested: taken.start_requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, InputBuffer, InputEvent};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_events_coalesce_last_write_wins() {
        let mut buffer = InputBuffer::default();

        buffer.enqueue(InputEvent::Move(Direction::Up));
        buffer.enqueue(InputEvent::Move(Direction::Left));
        buffer.enqueue(InputEvent::Move(Direction::Down));

        assert_eq!(buffer.drain().direction, Some(Direction::Down));
    }

    #[test]
    fn repeated_pause_events_collapse_to_one_toggle() {
        let mut buffer = InputBuffer::default();

        buffer.enqueue(InputEvent::TogglePause);
        buffer.enqueue(InputEvent::TogglePause);

        let drained = buffer.drain();
        assert!(drained.pause_toggled);
        assert!(!drained.start_requested);
    }

    #[test]
    fn drain_empties_the_buffer() {
        let mut buffer = InputBuffer::default();
        buffer.enqueue(InputEvent::RequestStart);
        buffer.enqueue(InputEvent::Move(Direction::Up));

        let first = buffer.drain();
        assert!(first.start_requested);
        assert_eq!(first.direction, Some(Direction::Up));

        let second = buffer.drain();
        assert!(!second.start_requested);
        assert!(!second.pause_toggled);
        assert_eq!(second.direction, None);
    }
}
