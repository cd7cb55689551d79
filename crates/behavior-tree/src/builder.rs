//! Shorthand constructors returning boxed [`Node`]s.
//!
//! `selector(vec![...])` reads better than
//! `Box::new(Selector::new(vec![...]))` when a rule chain is a dozen levels
//! deep.

use crate::{Behavior, Condition, Inverter, Node, Selector, Sequence};

/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<'a, C: 'a>(children: Vec<Node<'a, C>>) -> Node<'a, C> {
    Box::new(Sequence::new(children))
}

/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<'a, C: 'a>(children: Vec<Node<'a, C>>) -> Node<'a, C> {
    Box::new(Selector::new(children))
}

/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<'a, C: 'a>(child: Node<'a, C>) -> Node<'a, C> {
    Box::new(Inverter::new(child))
}

/// Shorthand for `Box::new(Condition::new(predicate))`.
#[inline]
pub fn condition<'a, C: 'a, F>(predicate: F) -> Node<'a, C>
where
    F: Fn(&C) -> bool + Send + Sync + 'a,
{
    Box::new(Condition::new(predicate))
}

/// Boxes any node.
#[inline]
pub fn node<'a, C: 'a, B>(behavior: B) -> Node<'a, C>
where
    B: Behavior<C> + 'a,
{
    Box::new(behavior)
}
