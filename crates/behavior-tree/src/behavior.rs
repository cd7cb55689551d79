//! Core behavior trait.
//!
//! [`Behavior`] is generic over the context type `C` (the blackboard) so the
//! same node library can drive any decision domain.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node against the given context.
    ///
    /// Nodes may read the context and record intermediate results on it
    /// (for example, the move an action node selected).
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed node that may borrow data for `'a`.
///
/// Trees that close over per-decision data are built with a non-`'static`
/// lifetime; trees made only of unit nodes can use `Node<'static, C>`.
pub type Node<'a, C> = Box<dyn Behavior<C> + 'a>;

impl<C> Behavior<C> for Box<dyn Behavior<C> + '_> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
