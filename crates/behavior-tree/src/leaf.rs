//! Leaf nodes backed by closures.

use crate::{Behavior, Status};

/// Succeeds when its predicate holds. Never mutates the blackboard.
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool + Send + Sync,
{
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}

/// Runs a closure that writes to the blackboard and reports its own status.
pub struct Act<F> {
    run: F,
}

impl<F> Act<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<C, F> Behavior<C> for Act<F>
where
    F: Fn(&mut C) -> Status + Send + Sync,
{
    fn tick(&self, ctx: &mut C) -> Status {
        (self.run)(ctx)
    }
}
