//! Simplification rules for subtraction.

use crate::combine::combine;
use crate::rules::operands;
use crate::step::Step;
use crate::step_collector::StepCollector;
use evogp_expr::{consts, Node, Op};

/// `a-a = 0`
pub fn subtract_self(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    if lhs != rhs {
        return None;
    }

    step_collector.push(Step::SubtractSelf);
    Some(Node::Constant(consts::zero(lhs.ty())))
}

/// `a-0 = a`
pub fn subtract_zero(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    if !rhs.is_zero() {
        return None;
    }

    step_collector.push(Step::SubtractZero);
    Some(lhs.clone())
}

/// `0-(x-y) = y-x` (double-negation collapse)
pub fn double_negation(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    if !lhs.is_zero() {
        return None;
    }
    let Node::Apply(Op::Sub, inner) = rhs else {
        return None;
    };
    let [x, y] = inner.as_slice() else {
        panic!("`-` applied to {} operands", inner.len());
    };

    step_collector.push(Step::DoubleNegation);
    Some(Node::binary(Op::Sub, y.clone(), x.clone()))
}

/// `a-(-c) = a+c`
pub fn negative_subtrahend(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    let Node::Constant(value) = rhs else {
        return None;
    };
    if !value.is_negative() {
        return None;
    }

    step_collector.push(Step::NegativeSubtrahend);
    Some(Node::binary(Op::Add, lhs.clone(), Node::Constant(value.neg())))
}

/// Merges the subtrahend into the left tree as a like term, at arbitrary depth.
pub fn combine_terms(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    let opt = combine(lhs, rhs, false)?;

    step_collector.push(Step::CombineTerms);
    Some(opt)
}

/// Applies all subtraction rules.
pub fn all(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    subtract_self(args, step_collector)
        .or_else(|| subtract_zero(args, step_collector))
        .or_else(|| double_negation(args, step_collector))
        .or_else(|| negative_subtrahend(args, step_collector))
        .or_else(|| combine_terms(args, step_collector))
}
