//! Simplification rules for the comparison / equality family.

use crate::rules::operands;
use crate::step::Step;
use crate::step_collector::StepCollector;
use evogp_expr::{Node, Op};

/// `op(x, x)` folds to the boolean implied by the operator's reflexivity, independent of whether
/// the operands are constants: `x == x` is `true`, `x > x` is `false`, and so on. Valid because
/// every operator is pure, so structurally equal operands evaluate identically.
pub fn reflexive(op: Op, args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let value = op.reflexive_value()?;
    let (lhs, rhs) = operands(args);
    if lhs != rhs {
        return None;
    }

    step_collector.push(Step::ReflexiveComparison);
    Some(Node::bool(value))
}

/// Applies all comparison rules.
pub fn all(op: Op, args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    reflexive(op, args, step_collector)
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
    fn reflexive_comparisons_fold() {
        let tree = Node::binary(Op::Add, var(0), Node::int(3));
        let args = [tree.clone(), tree];

        assert_eq!(reflexive(Op::Eq, &args, &mut ()), Some(Node::bool(true)));
        assert_eq!(reflexive(Op::Le, &args, &mut ()), Some(Node::bool(true)));
        assert_eq!(reflexive(Op::Ge, &args, &mut ()), Some(Node::bool(true)));
        assert_eq!(reflexive(Op::Ne, &args, &mut ()), Some(Node::bool(false)));
        assert_eq!(reflexive(Op::Lt, &args, &mut ()), Some(Node::bool(false)));
        assert_eq!(reflexive(Op::Gt, &args, &mut ()), Some(Node::bool(false)));
    }

    #[test]
    fn distinct_operands_do_not_fold() {
        let args = [var(0), var(1)];
        assert_eq!(reflexive(Op::Eq, &args, &mut ()), None);
    }
}
