//! Composite behavior nodes.
//!
//! [`Sequence`] (AND) and [`Selector`] (OR) evaluate children left to right
//! and short-circuit, so the first matching branch of an opponent's tree is
//! the one that decides.

use crate::{Behavior, Status};

/// Runs children in order until one fails.
///
/// Returns `Failure` at the first failing child without evaluating the rest,
/// `Success` if every child succeeds. Typically a guard condition followed by
/// the action it protects.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty; an empty sequence is a construction bug.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Runs children in order until one succeeds.
///
/// Returns `Success` at the first succeeding child, `Failure` if all fail.
/// Children are priority-ordered branches; put the fallback last.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty; an empty selector is a construction bug.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{act, condition, guard, selector, sequence};

    #[derive(Default)]
    struct Board {
        distance: i32,
        evaluated: u32,
        decision: Option<&'static str>,
    }

    fn decide(name: &'static str) -> Box<dyn Behavior<Board>> {
        act(move |b: &mut Board| {
            b.evaluated += 1;
            b.decision = Some(name);
            Status::Success
        })
    }

    fn refuse() -> Box<dyn Behavior<Board>> {
        act(|b: &mut Board| {
            b.evaluated += 1;
            Status::Failure
        })
    }

    fn board(distance: i32) -> Board {
        Board {
            distance,
            ..Board::default()
        }
    }

    #[test]
    fn sequence_runs_every_child_on_success() {
        let seq = Sequence::new(vec![decide("step"), decide("punch")]);

        let mut b = board(0);
        assert_eq!(seq.tick(&mut b), Status::Success);
        assert_eq!(b.evaluated, 2);
        assert_eq!(b.decision, Some("punch"));
    }

    #[test]
    fn sequence_stops_at_first_failure() {
        let seq = sequence(vec![decide("step"), refuse(), decide("punch")]);

        let mut b = board(0);
        assert_eq!(seq.tick(&mut b), Status::Failure);
        assert_eq!(b.evaluated, 2);
        assert_eq!(b.decision, Some("step"));
    }

    #[test]
    fn selector_takes_first_matching_branch() {
        let tree = Selector::new(vec![
            guard(condition(|b: &Board| b.distance > 150), decide("approach")),
            guard(condition(|b: &Board| b.distance < 50), decide("block")),
            decide("idle"),
        ]);

        for (distance, expected) in [(200, "approach"), (30, "block"), (100, "idle")] {
            let mut b = board(distance);
            assert_eq!(tree.tick(&mut b), Status::Success);
            assert_eq!(b.decision, Some(expected), "distance {distance}");
            assert_eq!(b.evaluated, 1);
        }
    }

    #[test]
    fn selector_fails_when_every_branch_fails() {
        let tree = selector(vec![refuse(), refuse()]);

        let mut b = board(0);
        assert_eq!(tree.tick(&mut b), Status::Failure);
        assert_eq!(b.evaluated, 2);
        assert!(b.decision.is_none());
    }

    #[test]
    #[should_panic(expected = "at least one child")]
    fn empty_selector_is_rejected() {
        let _ = Selector::<Board>::new(Vec::new());
    }
}
