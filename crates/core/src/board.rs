//! Board module - snake, apple, and droppings as pure data.
//!
//! A board is one immutable tick's worth of state. The engine never mutates a
//! board in place; each tick builds a replacement, which keeps the previous
//! tick inspectable for diffing and testing.

use arrayvec::ArrayVec;

use crate::types::{Cell, Heading, DROPPING_CAPACITY};

/// One cell of the snake body.
///
/// `entered_from` and `exited_to` exist for the renderer (joint glyphs at
/// turns); the engine computes and carries them but takes no decisions from
/// them. `exited_to` is `None` on the head until the tick it stops being the
/// head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub cell: Cell,
    /// Heading this segment was moving in when it was created.
    pub entered_from: Heading,
    /// Heading the segment moved on toward, set on the old head each tick.
    pub exited_to: Option<Heading>,
    /// True while this segment marks the cell where an apple was eaten; the
    /// marker rides the body out to the tail and becomes a dropping there.
    pub has_eaten: bool,
    /// Head-only presentation hint: the next projected cell holds the apple
    /// or a dropping.
    pub about_to_eat: bool,
}

impl Segment {
    /// A plain body segment with no flags set.
    pub fn new(cell: Cell, entered_from: Heading) -> Self {
        Self {
            cell,
            entered_from,
            exited_to: None,
            has_eaten: false,
            about_to_eat: false,
        }
    }
}

/// Bounded ring of dropping cells, oldest evicted first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppingRing {
    cells: ArrayVec<Cell, DROPPING_CAPACITY>,
    capacity: usize,
}

impl DroppingRing {
    pub fn new() -> Self {
        Self::with_capacity(DROPPING_CAPACITY)
    }

    /// A ring retaining at most `capacity` cells (clamped to
    /// [`DROPPING_CAPACITY`]).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: ArrayVec::new(),
            capacity: capacity.min(DROPPING_CAPACITY),
        }
    }

    /// Record a dropping, evicting the oldest when at capacity.
    pub fn record(&mut self, cell: Cell) {
        if self.capacity == 0 {
            return;
        }
        if self.cells.len() >= self.capacity {
            self.cells.remove(0);
        }
        self.cells.push(cell);
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Oldest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl Default for DroppingRing {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete board state for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Head at index 0, tail last. Never empty while the board exists.
    pub snake: Vec<Segment>,
    /// The single active apple. Never on a snake or dropping cell at spawn
    /// time.
    pub apple: Cell,
    pub droppings: DroppingRing,
}

impl Board {
    pub fn head(&self) -> &Segment {
        self.snake.first().expect("snake is never empty")
    }

    pub fn tail(&self) -> &Segment {
        self.snake.last().expect("snake is never empty")
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Whether any snake segment sits on `cell`.
    pub fn snake_occupies(&self, cell: Cell) -> bool {
        self.snake.iter().any(|segment| segment.cell == cell)
    }

    /// Whether `cell` is taken by the snake or a dropping. Used by apple
    /// spawning; the apple itself does not block anything.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.snake_occupies(cell) || self.droppings.contains(cell)
    }
}
