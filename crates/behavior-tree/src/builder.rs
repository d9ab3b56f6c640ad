//! Builder utilities for ergonomic behavior tree construction.
//!
//! Opponent trees are assembled from these helpers instead of nesting
//! `Box::new(Sequence::new(vec![...]))` by hand.

use crate::{Act, Behavior, Condition, Inverter, Selector, Sequence, Status};

/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Boxes a predicate as a [`Condition`] leaf.
#[inline]
pub fn condition<C, F>(predicate: F) -> Box<dyn Behavior<C>>
where
    C: 'static,
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Box::new(Condition::new(predicate))
}

/// Boxes a closure as an [`Act`] leaf.
#[inline]
pub fn act<C, F>(run: F) -> Box<dyn Behavior<C>>
where
    C: 'static,
    F: Fn(&mut C) -> Status + Send + Sync + 'static,
{
    Box::new(Act::new(run))
}

/// `condition` guarding `then`: succeeds only if both do.
#[inline]
pub fn guard<C: 'static>(
    condition: Box<dyn Behavior<C>>,
    then: Box<dyn Behavior<C>>,
) -> Box<dyn Behavior<C>> {
    sequence(vec![condition, then])
}
