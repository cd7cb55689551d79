//! Composite behavior nodes.
//!
//! [`Sequence`] short-circuits on the first failure (logical AND) and
//! [`Selector`] short-circuits on the first success (ordered OR). A selector
//! over `Sequence[conditions.., action]` children is a first-match rule chain.

use crate::{Behavior, Node, Status};

/// Ticks children left to right until one fails.
///
/// Returns `Success` only when every child succeeded.
pub struct Sequence<'a, C> {
    children: Vec<Node<'a, C>>,
}

impl<'a, C> Sequence<'a, C> {
    /// Creates a new sequence with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'a, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Ticks children left to right until one succeeds.
///
/// Returns `Failure` only when every child failed. Children after the first
/// success are never ticked, so they observe no side effects.
pub struct Selector<'a, C> {
    children: Vec<Node<'a, C>>,
}

impl<'a, C> Selector<'a, C> {
    /// Creates a new selector with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'a, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
