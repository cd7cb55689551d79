//! Leaf and decorator nodes.
//!
//! [`Condition`] lifts a read-only predicate over the context into a node;
//! [`Inverter`] negates its child.

use crate::{Behavior, Node, Status};

/// Succeeds when the predicate holds for the context.
///
/// The predicate only sees `&C`, so a condition can never record results.
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
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}

/// Inverts the result of its child (logical NOT).
///
/// The child is still ticked, so any results it records remain visible.
pub struct Inverter<'a, C> {
    child: Node<'a, C>,
}

impl<'a, C> Inverter<'a, C> {
    pub fn new(child: Node<'a, C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    #[test]
    fn condition_reads_context() {
        let positive = Condition::new(|ctx: &TestContext| ctx.value > 0);

        assert_eq!(positive.tick(&mut TestContext { value: 3 }), Status::Success);
        assert_eq!(positive.tick(&mut TestContext { value: -3 }), Status::Failure);
    }

    #[test]
    fn inverter_negates_child() {
        let inverter: Inverter<'_, TestContext> =
            Inverter::new(Box::new(Condition::new(|ctx: &TestContext| ctx.value > 0)));

        assert_eq!(inverter.tick(&mut TestContext { value: 10 }), Status::Failure);
        assert_eq!(inverter.tick(&mut TestContext { value: -10 }), Status::Success);
    }
}
