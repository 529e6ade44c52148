//! Engine behavior tests: movement, eating, droppings, collision.

use tui_snek::core::{
    Board, DirectionQueue, DroppingRing, Engine, GameConfig, GridConfig, Segment, SequenceRng,
};
use tui_snek::types::{Cell, Heading};

fn config(width: u16, height: u16) -> GameConfig {
    GameConfig {
        grid: GridConfig::new(width, height),
        ..GameConfig::default()
    }
}

/// Engine whose apple placements replay the given (x, y) pairs.
fn engine(cfg: GameConfig, placements: &[u16]) -> Engine<SequenceRng> {
    Engine::with_rng(cfg, SequenceRng::new(placements.iter().map(|&v| v as u32).collect()))
}

/// A straight snake on row `y` with the head at `head_x`, trailing left.
fn straight_snake(head_x: u16, y: u16, len: u16) -> Vec<Segment> {
    (0..len)
        .map(|i| {
            let mut segment = Segment::new(Cell::new(head_x - i, y), Heading::Left);
            segment.exited_to = Some(Heading::Right);
            segment
        })
        .collect()
}

fn board(snake: Vec<Segment>, apple: Cell) -> Board {
    Board {
        snake,
        apple,
        droppings: DroppingRing::new(),
    }
}

#[test]
fn test_head_wraps_right_edge() {
    let mut eng = engine(config(10, 8), &[0, 0]);
    let start = board(straight_snake(9, 4, 3), Cell::new(5, 7));
    let mut directions = DirectionQueue::new(Heading::Right);

    let result = eng.advance(&start, &mut directions);

    assert_eq!(result.board.head().cell, Cell::new(0, 4));
    assert!(!result.dead);
    assert!(!result.has_eaten);
}

#[test]
fn test_head_wraps_all_four_edges() {
    let cfg = config(10, 8);
    let cases = [
        (Cell::new(9, 4), Heading::Right, Cell::new(0, 4)),
        (Cell::new(0, 4), Heading::Left, Cell::new(9, 4)),
        (Cell::new(4, 7), Heading::Down, Cell::new(4, 0)),
        (Cell::new(4, 0), Heading::Up, Cell::new(4, 7)),
    ];

    for (start_cell, heading, expected) in cases {
        let mut eng = engine(cfg, &[0, 0]);
        let snake = vec![Segment::new(start_cell, heading.opposite())];
        let start = board(snake, Cell::new(7, 2));
        let mut directions = DirectionQueue::new(heading);

        let result = eng.advance(&start, &mut directions);
        assert_eq!(
            result.board.head().cell, expected,
            "{heading:?} from {start_cell:?}"
        );
    }
}

#[test]
fn test_eating_grows_by_one_and_respawns_apple() {
    // 12-wide so the apple ahead of the head does not involve a wrap.
    let mut eng = engine(config(12, 8), &[11, 3, 0, 0]);
    let mut board = eng.initial_board();
    assert_eq!(board.apple, Cell::new(11, 3));
    assert_eq!(board.head().cell, Cell::new(10, 3));
    let len_before = board.len();

    let mut directions = DirectionQueue::new(Heading::Right);
    let result = eng.advance(&board, &mut directions);

    assert!(result.has_eaten);
    assert!(!result.dead);
    board = result.board;

    // Growth lands with the eating tick: prepend without a tail drop.
    assert_eq!(board.len(), len_before + 1);
    assert!(board.head().has_eaten);

    // Exactly one fresh apple, on a free cell.
    assert_eq!(board.apple, Cell::new(0, 0));
    assert!(!board.snake_occupies(board.apple));

    // The next plain tick keeps the new length.
    let result = eng.advance(&board, &mut directions);
    assert!(!result.has_eaten);
    assert_eq!(result.board.len(), len_before + 1);
}

#[test]
fn test_apple_spawn_rejects_occupied_cells() {
    // First two scripted candidates sit on the snake; the third is free.
    let mut eng = engine(config(12, 8), &[6, 3, 7, 3, 2, 6]);
    let board = eng.initial_board();

    assert_eq!(board.apple, Cell::new(2, 6));
}

#[test]
fn test_eaten_marker_leaves_dropping_at_tail() {
    let mut eng = engine(config(12, 8), &[11, 3, 0, 0]);
    let mut board = eng.initial_board();
    let mut directions = DirectionQueue::new(Heading::Right);

    // Eat at (11, 3).
    let result = eng.advance(&board, &mut directions);
    assert!(result.has_eaten);
    board = result.board;
    let grown_len = board.len();

    // The marker rides back one index per tick; on the tick it reaches the
    // outgoing-tail position it leaves a dropping on its cell and goes.
    let mut dropping_tick = None;
    for tick in 1..=grown_len {
        let result = eng.advance(&board, &mut directions);
        assert!(!result.dead, "died prematurely at tick {tick}");
        board = result.board;
        if !board.droppings.is_empty() {
            dropping_tick = Some(tick);
            break;
        }
    }

    assert_eq!(dropping_tick, Some(grown_len));
    assert!(board.droppings.contains(Cell::new(11, 3)));
    assert_eq!(board.len(), grown_len);
    assert!(board.snake.iter().all(|s| !s.has_eaten));
}

#[test]
fn test_u_turn_into_body_is_lethal() {
    let mut eng = engine(config(10, 8), &[0, 0]);
    let board0 = eng.initial_board();
    let mut directions = DirectionQueue::new(Heading::Right);

    // Two 90° turns fold the head back onto the row the body still occupies.
    directions.push(Heading::Down);
    directions.push(Heading::Left);
    directions.push(Heading::Up);

    let r1 = eng.advance(&board0, &mut directions);
    assert!(!r1.dead);
    let r2 = eng.advance(&r1.board, &mut directions);
    assert!(!r2.dead);
    let r3 = eng.advance(&r2.board, &mut directions);

    assert!(r3.dead, "head re-entered its own body");
    // The losing board is still returned for rendering.
    let cells: Vec<Cell> = r3.board.snake.iter().map(|s| s.cell).collect();
    let unique: std::collections::HashSet<&Cell> = cells.iter().collect();
    assert!(unique.len() < cells.len());
}

#[test]
fn test_dead_tick_flags_but_returns_board() {
    // Head steps straight into a dropping directly ahead.
    let mut eng = engine(config(10, 8), &[0, 0]);
    let mut droppings = DroppingRing::new();
    droppings.record(Cell::new(6, 4));
    let start = Board {
        snake: straight_snake(5, 4, 3),
        apple: Cell::new(0, 0),
        droppings,
    };
    let mut directions = DirectionQueue::new(Heading::Right);

    let result = eng.advance(&start, &mut directions);

    assert!(result.dead);
    assert_eq!(result.board.head().cell, Cell::new(6, 4));
}

#[test]
fn test_about_to_eat_flags_apple_ahead() {
    // Apple two cells ahead: after one advance the projection hits it.
    let mut eng = engine(config(12, 8), &[0, 0]);
    let start = board(straight_snake(5, 4, 3), Cell::new(7, 4));
    let mut directions = DirectionQueue::new(Heading::Right);

    let result = eng.advance(&start, &mut directions);

    assert!(!result.has_eaten);
    assert!(result.board.head().about_to_eat);

    // One more tick eats it for real.
    let result = eng.advance(&result.board, &mut directions);
    assert!(result.has_eaten);
}

#[test]
fn test_about_to_eat_clear_when_nothing_ahead() {
    let mut eng = engine(config(12, 8), &[0, 0]);
    let start = board(straight_snake(5, 4, 3), Cell::new(9, 1));
    let mut directions = DirectionQueue::new(Heading::Right);

    let result = eng.advance(&start, &mut directions);
    assert!(!result.board.head().about_to_eat);
}
