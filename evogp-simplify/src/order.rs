//! The canonical order used to normalize commutative operand placement.
//!
//! Commutative operators force their operands into one fixed arrangement under this order, so
//! that semantically identical but textually transposed expressions (`x+y` vs `y+x`) converge
//! onto a single structural form. That convergence is what makes "no further change" a reliable
//! fixpoint test for the driver, and what lets the term combiner assume constants sit in the
//! first operand position when matching `c*x` patterns.

use evogp_expr::Node;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compares two nodes under the canonical order.
///
/// Constants sort strictly before every non-constant, `Apply` nodes sort strictly after every
/// non-`Apply`, and variables sit between. Within a category, nodes compare by declared type
/// first, then by a structural hash.
///
/// This is a total *pre*-order: it is antisymmetric and transitive over the equivalence classes
/// it induces, but two structurally distinct nodes may compare [`Ordering::Equal`] (a hash
/// collision). It is sufficient for canonicalization and must not be used as a substitute for
/// structural equality.
pub fn compare(a: &Node, b: &Node) -> Ordering {
    rank(a)
        .cmp(&rank(b))
        .then_with(|| a.ty().cmp(&b.ty()))
        .then_with(|| structural_hash(a).cmp(&structural_hash(b)))
}

fn rank(node: &Node) -> u8 {
    match node {
        Node::Constant(_) => 0,
        Node::Variable(_, _) => 1,
        Node::Apply(_, _) => 2,
    }
}

fn structural_hash(node: &Node) -> u64 {
    let mut hasher = DefaultHasher::new();
    node.hash(&mut hasher);
    hasher.finish()
}
