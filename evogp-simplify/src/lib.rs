//! Algebraic simplification of expression trees.
//!
//! Evolved program trees accumulate dead weight: additions of zero, sums of a term with itself,
//! constant subtrees left unfolded by crossover. This crate rewrites such trees into smaller
//! equivalent ones, driven by a bottom-up pass over the tree repeated to a fixpoint. A rewritten
//! tree evaluates to the same value as the original under every assignment.
//!
//! The entry point is [`simplify`]:
//!
//! ```
//! use evogp_expr::{Node, Op, Ty};
//! use evogp_simplify::simplify;
//!
//! // v1+v1 is strength-reduced to 2*v1
//! let tree = Node::binary(Op::Add, Node::var(1, Ty::Int), Node::var(1, Ty::Int));
//! assert_eq!(simplify(&tree)?.to_string(), "(* 2 v1)");
//! # Ok::<_, evogp_simplify::Error>(())
//! ```
//!
//! [`simplify_with_steps`] additionally reports which rewrites fired, which is useful when
//! diagnosing how the rules interact across passes.

pub mod combine;
pub mod error;
pub mod order;
pub mod rules;
pub mod step;
pub mod step_collector;

#[cfg(any(test, feature = "verify"))]
pub mod check;

pub use error::{Error, SoundnessViolation};
pub use step::Step;

use evogp_expr::Node;
use std::collections::HashSet;
use step_collector::StepCollector;

/// The maximum number of whole-tree passes before [`simplify`] gives up.
///
/// Each pass rewrites every node at most once, so a tree that is still changing after this many
/// passes indicates a non-terminating rule interaction rather than a genuinely deep tree.
pub const MAX_PASSES: usize = 100;

/// Simplifies the given tree to a smaller equivalent form.
///
/// Runs bottom-up passes over the tree until a pass changes nothing, a previously seen form
/// reappears (in which case the newest form is returned), or [`MAX_PASSES`] is exhausted.
pub fn simplify(node: &Node) -> Result<Node, Error> {
    inner_simplify(node, &mut ())
}

/// [`simplify`], but never fails: if the retry ceiling is hit, the last (possibly
/// non-fully-reduced) result is returned instead. Still a correct tree, just not a fixpoint.
pub fn simplify_best_effort(node: &Node) -> Node {
    match inner_simplify(node, &mut ()) {
        Ok(node) => node,
        Err(Error::RetryCeiling { last, .. }) => last,
    }
}

/// [`simplify`], but also returns the rewrite steps that fired, in application order.
pub fn simplify_with_steps(node: &Node) -> Result<(Node, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let result = inner_simplify(node, &mut steps)?;
    Ok((result, steps))
}

fn inner_simplify(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Result<Node, Error> {
    let mut current = node.clone();
    let mut seen = HashSet::new();
    seen.insert(current.clone());

    for _ in 0..MAX_PASSES {
        let Some(next) = simplify_once(&current, step_collector) else {
            return Ok(current);
        };

        // structural keys, not rendered ones: the float renderer truncates below f64 precision
        if next == current || !seen.insert(next.clone()) {
            // a cycle: every form in it is equivalent, so keep the newest
            return Ok(next);
        }

        current = next;
    }

    Err(Error::RetryCeiling {
        passes: MAX_PASSES,
        last: current,
    })
}

/// Runs one bottom-up pass, rewriting each node at most once (children before parents). Returns
/// `None` if nothing in the tree changed.
fn simplify_once(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let Node::Apply(op, args) = node else {
        // constants and variables are already minimal
        return None;
    };

    let mut rebuilt: Option<Vec<Node>> = None;
    for (index, child) in args.iter().enumerate() {
        if let Some(new_child) = simplify_once(child, step_collector) {
            rebuilt.get_or_insert_with(|| args.clone())[index] = new_child;
        }
    }
    let args = rebuilt.as_deref().unwrap_or(args);

    let (lhs, rhs) = rules::operands(args);
    let result = if let (Some(lhs), Some(rhs)) = (lhs.as_value(), rhs.as_value()) {
        step_collector.push(Step::FoldConstants);
        Some(Node::Constant(op.evaluate(lhs, rhs)))
    } else {
        rules::all(*op, args, step_collector)
    };

    if let Some(result) = result {
        #[cfg(any(test, feature = "verify"))]
        check::assert_equivalent(&Node::Apply(*op, args.to_vec()), &result);
        return Some(result);
    }

    rebuilt.map(|args| Node::Apply(*op, args))
}
