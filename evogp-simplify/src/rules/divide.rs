//! Simplification rules for division.

use crate::rules::operands;
use crate::step::Step;
use crate::step_collector::StepCollector;
use evogp_expr::{consts, Node};

/// `a/0 = 1`. Division by zero never raises an error in this engine; it folds to the
/// multiplicative identity, matching [`evogp_expr::Value::div`].
pub fn divide_by_zero(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    if !rhs.is_zero() {
        return None;
    }

    step_collector.push(Step::DivideByZero);
    Some(Node::Constant(consts::one(lhs.ty())))
}

/// `a/1 = a`
pub fn divide_one(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    if !rhs.is_one() {
        return None;
    }

    step_collector.push(Step::DivideOne);
    Some(lhs.clone())
}

/// Applies all division rules.
pub fn all(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    divide_by_zero(args, step_collector)
        .or_else(|| divide_one(args, step_collector))
}
