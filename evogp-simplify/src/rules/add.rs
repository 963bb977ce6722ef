//! Simplification rules for addition, including combining like terms at arbitrary depth.

use crate::combine::combine;
use crate::order;
use crate::rules::operands;
use crate::step::Step;
use crate::step_collector::StepCollector;
use evogp_expr::{consts, Node, Op};
use std::cmp::Ordering;

/// `b+a = a+b` when `a` sorts strictly before `b` under the canonical order.
pub fn reorder_operands(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    if order::compare(lhs, rhs) != Ordering::Greater {
        return None;
    }

    step_collector.push(Step::ReorderOperands);
    Some(Node::binary(Op::Add, rhs.clone(), lhs.clone()))
}

/// `0+a = a`
pub fn add_zero(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    if !lhs.is_zero() {
        return None;
    }

    step_collector.push(Step::AddZero);
    Some(rhs.clone())
}

/// `a+a = 2a` (strength reduction)
pub fn combine_equal_terms(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    if lhs != rhs {
        return None;
    }

    step_collector.push(Step::CombineEqualTerms);
    Some(Node::binary(
        Op::Mul,
        Node::Constant(consts::two(lhs.ty())),
        lhs.clone(),
    ))
}

/// `(-c)+a = a-c`. A negative literal operand of `Add` is never retained; subtraction is the
/// canonical sign form.
pub fn negative_addend(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    let Node::Constant(value) = lhs else {
        return None;
    };
    if !value.is_negative() {
        return None;
    }

    step_collector.push(Step::NegativeAddend);
    Some(Node::binary(Op::Sub, rhs.clone(), Node::Constant(value.neg())))
}

/// Merges one operand into the other as a like term, at arbitrary depth. Tries absorbing the
/// right operand into the left tree first, then the reverse.
pub fn combine_terms(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let (lhs, rhs) = operands(args);
    let opt = combine(lhs, rhs, true).or_else(|| combine(rhs, lhs, true))?;

    step_collector.push(Step::CombineTerms);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    reorder_operands(args, step_collector)
        .or_else(|| add_zero(args, step_collector))
        .or_else(|| combine_equal_terms(args, step_collector))
        .or_else(|| negative_addend(args, step_collector))
        .or_else(|| combine_terms(args, step_collector))
}

#[cfg(test)]
mod tests {
    use evogp_expr::Ty;
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(id: u32) -> Node {
        Node::var(id, Ty::Int)
    }

    #[test]
    fn constant_moves_first() {
        let args = [var(1), Node::int(3)];
        let result = reorder_operands(&args, &mut ()).unwrap();
        assert_eq!(result, Node::binary(Op::Add, Node::int(3), var(1)));
    }

    #[test]
    fn zero_is_dropped() {
        let args = [Node::int(0), var(1)];
        assert_eq!(add_zero(&args, &mut ()), Some(var(1)));
        assert_eq!(add_zero(&[var(1), var(2)], &mut ()), None);
    }

    #[test]
    fn equal_operands_strength_reduce() {
        let args = [var(1), var(1)];
        let result = combine_equal_terms(&args, &mut ()).unwrap();
        assert_eq!(result, Node::binary(Op::Mul, Node::int(2), var(1)));
    }

    #[test]
    fn negative_addend_becomes_subtraction() {
        let args = [Node::int(-7), var(1)];
        let result = negative_addend(&args, &mut ()).unwrap();
        assert_eq!(result, Node::binary(Op::Sub, var(1), Node::int(7)));
    }
}
