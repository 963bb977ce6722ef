//! Simplification rules for multiplication.

use crate::order;
use crate::rules::operands;
use crate::step::Step;
use crate::step_collector::StepCollector;
use evogp_expr::{Node, Op};
use std::cmp::Ordering;

/// `b*a = a*b` when `a` sorts strictly before `b` under the canonical order.
pub fn reorder_operands(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    if order::compare(lhs, rhs) != Ordering::Greater {
        return None;
    }

    step_collector.push(Step::ReorderOperands);
    Some(Node::binary(Op::Mul, rhs.clone(), lhs.clone()))
}

/// `0*a = 0`
pub fn multiply_zero(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, _) = operands(args);
    if !lhs.is_zero() {
        return None;
    }

    step_collector.push(Step::MultiplyZero);
    Some(lhs.clone())
}

/// `1*a = a`
pub fn multiply_one(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    if !lhs.is_one() {
        return None;
    }

    step_collector.push(Step::MultiplyOne);
    Some(rhs.clone())
}

/// `c*(d+x) = cd + c*x` and `c*(d-x) = cd - c*x`, folding the constant product.
pub fn distribute_constant(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    let Node::Constant(c) = lhs else {
        return None;
    };
    let Node::Apply(op @ (Op::Add | Op::Sub), inner) = rhs else {
        return None;
    };
    let [first, second] = inner.as_slice() else {
        panic!("`{op}` applied to {} operands", inner.len());
    };
    let Node::Constant(d) = first else {
        return None;
    };

    step_collector.push(Step::DistributeConstant);
    Some(Node::binary(
        *op,
        Node::Constant(c.mul(d)),
        Node::binary(Op::Mul, lhs.clone(), second.clone()),
    ))
}

/// `c*(d*x) = (cd)*x`
pub fn fold_nested_constant(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    let Node::Constant(c) = lhs else {
        return None;
    };
    let Node::Apply(Op::Mul, inner) = rhs else {
        return None;
    };
    let [first, second] = inner.as_slice() else {
        panic!("`*` applied to {} operands", inner.len());
    };
    let Node::Constant(d) = first else {
        return None;
    };

    step_collector.push(Step::FoldNestedConstant);
    Some(Node::binary(Op::Mul, Node::Constant(c.mul(d)), second.clone()))
}

/// Applies all multiplication rules.
pub fn all(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    reorder_operands(args, step_collector)
        .or_else(|| multiply_zero(args, step_collector))
        .or_else(|| multiply_one(args, step_collector))
        .or_else(|| distribute_constant(args, step_collector))
        .or_else(|| fold_nested_constant(args, step_collector))
}
