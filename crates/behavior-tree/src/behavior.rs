//! Core behavior trait.
//!
//! [`Behavior`] is generic over a blackboard type `C`: nodes read the
//! fighter's view of the round from it and write their decision back.

use crate::Status;

/// A behavior tree node that can be evaluated against a blackboard.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node once.
    ///
    /// `ctx` is read by conditions and written by actions; a node that fails
    /// should leave any decision slot untouched.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Lets `Box<dyn Behavior<C>>` be used wherever a node is expected, so
/// composites can hold heterogeneous children.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
