//! Simulation engine - the per-tick board transition.
//!
//! `advance` is a pure, synchronous function from one board (plus the next
//! committed heading) to the next board. Everything the game does happens
//! here: movement with toroidal wraparound, eating and deferred growth,
//! dropping placement, apple respawn, the one-cell lookahead hint, and
//! collision detection. The caller owns the cadence; the engine advances
//! exactly once per call.

use std::collections::HashSet;

use crate::board::{Board, DroppingRing, Segment};
use crate::config::GameConfig;
use crate::direction::DirectionQueue;
use crate::rng::{SimpleRng, UniformRng};
use crate::types::{Cell, Heading};

/// Outcome of one `advance` call.
///
/// A lethal tick still carries the computed board so the caller can render
/// the losing position; the caller must stop advancing once `dead` is set.
#[derive(Debug, Clone)]
pub struct TickResult {
    pub board: Board,
    pub has_eaten: bool,
    pub dead: bool,
}

/// The simulation engine: grid configuration plus the apple-placement RNG.
///
/// Generic over the random source so tests can script exact placements;
/// gameplay uses the default seeded LCG.
#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng> {
    config: GameConfig,
    rng: R,
}

impl Engine<SimpleRng> {
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: UniformRng> Engine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the starting board: a straight snake centered on the grid with
    /// the head half its length ahead of center along the default heading,
    /// plus the first apple on a free cell.
    pub fn initial_board(&mut self) -> Board {
        let grid = self.config.grid;
        let heading = self.config.default_heading;
        let len = self.config.initial_snake_len.max(1);

        // Lay segments out trailing the head; rem_euclid keeps the layout on
        // the torus even when the snake is long relative to the grid.
        let (dx, dy): (i32, i32) = match heading {
            Heading::Right => (1, 0),
            Heading::Left => (-1, 0),
            Heading::Down => (0, 1),
            Heading::Up => (0, -1),
        };
        let center_x = (grid.width / 2) as i32;
        let center_y = (grid.height / 2) as i32 - 1;
        let head_x = center_x + dx * (len as i32 / 2);
        let head_y = center_y + dy * (len as i32 / 2);

        let snake: Vec<Segment> = (0..len as i32)
            .map(|i| {
                let x = (head_x - dx * i).rem_euclid(grid.width as i32) as u16;
                let y = (head_y - dy * i).rem_euclid(grid.height as i32) as u16;
                Segment {
                    cell: Cell::new(x, y),
                    entered_from: heading.opposite(),
                    exited_to: Some(heading),
                    has_eaten: false,
                    about_to_eat: false,
                }
            })
            .collect();

        let droppings = DroppingRing::with_capacity(self.config.dropping_capacity);
        let apple = self.spawn_apple(&snake, &droppings);

        Board {
            snake,
            apple,
            droppings,
        }
    }

    /// Advance the board by one tick.
    ///
    /// 1. Commit at most one buffered heading change.
    /// 2. Step the head one cell with wraparound; mark it eaten if it landed
    ///    on the apple.
    /// 3. If the outgoing tail had eaten, leave a dropping on its cell
    ///    (oldest evicted past capacity).
    /// 4. Drop the tail unless the head just ate - eating skips the drop, so
    ///    net growth lands on the eating tick and the eaten-marker travels
    ///    the body until it reaches the tail.
    /// 5. Respawn the apple on eat, excluding snake and dropping cells.
    /// 6. Project one more cell ahead for the `about_to_eat` hint.
    /// 7. Scan the post-move snake for fatal overlap.
    pub fn advance(&mut self, board: &Board, directions: &mut DirectionQueue) -> TickResult {
        let grid = self.config.grid;
        let heading = directions.take();

        let mut snake = board.snake.clone();

        let head_cell = board.head().cell;
        if let Some(head) = snake.first_mut() {
            head.exited_to = Some(heading);
        }

        let new_cell = grid.step(head_cell, heading);
        let mut new_head = Segment::new(new_cell, heading.opposite());
        new_head.has_eaten = new_cell == board.apple;
        snake.insert(0, new_head);

        let mut droppings = board.droppings.clone();
        let outgoing_tail = *snake.last().expect("snake is never empty");
        if outgoing_tail.has_eaten {
            droppings.record(outgoing_tail.cell);
        }

        let has_eaten = new_head.has_eaten;
        let mut apple = board.apple;
        if has_eaten {
            apple = self.spawn_apple(&snake, &droppings);
        } else {
            snake.pop();
        }

        let projected = grid.step(new_cell, heading);
        snake[0].about_to_eat = projected == apple || droppings.contains(projected);

        let dead = is_fatal(&snake, &droppings);

        TickResult {
            board: Board {
                snake,
                apple,
                droppings,
            },
            has_eaten,
            dead,
        }
    }

    /// Place an apple on a uniformly random free cell by rejection sampling.
    ///
    /// Free cells must exist; a board with none left is a caller-contract
    /// breach, so this panics rather than spinning forever.
    fn spawn_apple(&mut self, snake: &[Segment], droppings: &DroppingRing) -> Cell {
        let grid = self.config.grid;
        assert!(
            ((snake.len() + droppings.len()) as u32) < grid.cell_count(),
            "no free cell left to spawn an apple on"
        );

        loop {
            let candidate = Cell::new(
                self.rng.next_range(grid.width as u32) as u16,
                self.rng.next_range(grid.height as u32) as u16,
            );
            let occupied = snake.iter().any(|segment| segment.cell == candidate)
                || droppings.contains(candidate);
            if !occupied {
                return candidate;
            }
        }
    }
}

/// Whether the post-move snake is in a lethal position.
///
/// Lethal iff two segments share a cell, or a segment sits on a dropping.
/// The tail is exempt from the dropping check only: it is either about to
/// vacate that cell, or it is the retained growth point still standing on
/// the dropping it just produced.
fn is_fatal(snake: &[Segment], droppings: &DroppingRing) -> bool {
    let tail_index = snake.len() - 1;
    let mut seen: HashSet<Cell> = HashSet::with_capacity(snake.len());

    for (i, segment) in snake.iter().enumerate() {
        if !seen.insert(segment.cell) {
            return true;
        }
        if i != tail_index && droppings.contains(segment.cell) {
            return true;
        }
    }
    false
}
