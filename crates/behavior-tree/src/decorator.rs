//! Decorator behavior nodes.

use crate::{Behavior, Status};

/// Inverts the result of its child: Success becomes Failure and vice versa.
///
/// Lets a tree express "not within reach" from the same reach condition it
/// uses elsewhere.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}
