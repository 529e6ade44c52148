//! Direction queue behavior tests.

use tui_snek::core::DirectionQueue;
use tui_snek::types::Heading;

#[test]
fn test_never_accepts_a_reversal() {
    // For every heading, the queue must refuse its opposite, whether the
    // reference is the current heading or the last pending one.
    for h in Heading::ALL {
        let mut queue = DirectionQueue::new(h);
        assert!(!queue.push(h.opposite()), "reversal of current {h:?} accepted");

        // Queue a legal 90° turn, then try to reverse *that*.
        let turn = if h.is_horizontal() { Heading::Up } else { Heading::Left };
        assert!(queue.push(turn));
        assert!(
            !queue.push(turn.opposite()),
            "reversal of pending {turn:?} accepted"
        );
    }
}

#[test]
fn test_duplicates_add_nothing() {
    for h in Heading::ALL {
        let mut queue = DirectionQueue::new(h);
        assert!(!queue.push(h), "duplicate of current {h:?} accepted");
    }
}

#[test]
fn test_one_committed_change_per_take() {
    let mut queue = DirectionQueue::new(Heading::Right);

    // A burst of key events between two ticks.
    queue.push(Heading::Up);
    queue.push(Heading::Right);
    queue.push(Heading::Down);

    // Each tick consumes exactly one entry, in arrival order.
    assert_eq!(queue.take(), Heading::Up);
    assert_eq!(queue.take(), Heading::Right);
    assert_eq!(queue.take(), Heading::Down);
    assert_eq!(queue.take(), Heading::Down);
}

#[test]
fn test_flooding_identical_input_stays_bounded() {
    let mut queue = DirectionQueue::new(Heading::Right);

    for _ in 0..10_000 {
        queue.push(Heading::Up);
    }
    assert_eq!(queue.pending_len(), 1);
    assert_eq!(queue.take(), Heading::Up);
    assert_eq!(queue.pending_len(), 0);
}

#[test]
fn test_clear_restores_default_heading() {
    let mut queue = DirectionQueue::new(Heading::Right);
    queue.push(Heading::Down);
    assert_eq!(queue.take(), Heading::Down);

    queue.clear();
    assert_eq!(queue.current(), Heading::Right);
    assert_eq!(queue.take(), Heading::Right);
}

#[test]
fn test_reversal_chain_through_queue_is_legal() {
    // Right -> Up -> Left ends up opposite the starting heading, which is
    // fine: each step is a 90° turn. Only direct reversals are illegal.
    let mut queue = DirectionQueue::new(Heading::Right);

    assert!(queue.push(Heading::Up));
    assert!(queue.push(Heading::Left));

    assert_eq!(queue.take(), Heading::Up);
    assert_eq!(queue.take(), Heading::Left);
}
