//! The per-operator local rewrite rules.
//!
//! Each rule in this module is a function that takes the operator's (already child-simplified)
//! arguments and returns `Some(node)` with the replacement if the rule applies, or `None` if it
//! does not. The driver calls [`all`] only after ruling out the all-constants case, which is
//! folded generically and subsumes every local rule.
//!
//! A rule must never produce a tree that disagrees with the original's value; in test builds
//! (and with the `verify` feature) every rewrite is checked by the semantic-equivalence oracle
//! before being trusted.

pub mod add;
pub mod compare;
pub mod divide;
pub mod multiply;
pub mod subtract;

use crate::step::Step;
use crate::step_collector::StepCollector;
use evogp_expr::{Node, Op};

/// Applies the operator's rewrite rules to its arguments.
pub fn all(op: Op, args: &[Node], step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    match op {
        Op::Add => add::all(args, step_collector),
        Op::Sub => subtract::all(args, step_collector),
        Op::Mul => multiply::all(args, step_collector),
        Op::Div => divide::all(args, step_collector),
        _ => compare::all(op, args, step_collector),
    }
}

/// Destructures the two operands of a binary operator.
///
/// Wrong arity is a programming error: upstream collaborators only build well-formed trees.
pub(crate) fn operands(args: &[Node]) -> (&Node, &Node) {
    match args {
        [lhs, rhs] => (lhs, rhs),
        _ => panic!("binary operator applied to {} operands", args.len()),
    }
}
