//! Merging like terms across arbitrarily deep `Add`/`Sub` spines.
//!
//! The per-operator rules only see immediate siblings, but mutation and crossover accumulate
//! related terms at arbitrary depth. This module answers the cross-cutting question: can
//! `target` be merged into some sub-node of `tree`, algebraically, without changing the tree's
//! value?
//!
//! Two nodes are **combinable** when:
//! - both are constants (fold the arithmetic),
//! - they are structurally equal non-constants (`x` and `x` become `2x` when adding, or the
//!   additive identity when subtracting), or
//! - both are constant multiples of the same base (`2x` and `3x` fold their coefficients).
//!
//! Using syntactic equality as proof of semantic equality is valid only because every operator
//! in the library is pure: identical sub-trees necessarily evaluate identically under any single
//! assignment.
//!
//! The traversal tries the left spine before the right. This tie-break is fixed policy, not an
//! accident: it determines which existing term accumulates future merges, and tests pin it.

use evogp_expr::{consts, Node, Op, Value};

/// The result of merging a target term into a tree: the rebuilt tree plus whatever remains of
/// the target. Once a target has been absorbed, the additive identity of its type stands in for
/// it, so on success `rest` is always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
    /// The rebuilt tree with the target (or a remainder of it) folded in.
    pub tree: Node,

    /// What is left of the target. Zero means fully absorbed.
    pub rest: Node,
}

/// Merges `target` into `tree`, returning the rebuilt tree if the target was fully absorbed.
///
/// `add` selects the polarity: `true` merges `tree + target`, `false` merges `tree - target`.
/// Returns `None` if no sub-node of `tree` can absorb the target; the caller may then try the
/// opposite traversal (swapping the roles of the operands) before giving up.
pub fn combine(tree: &Node, target: &Node, add: bool) -> Option<Node> {
    let merged = merge(tree, target, add)?;
    debug_assert!(merged.rest.is_zero(), "successful merge left an unabsorbed remainder");
    Some(merged.tree)
}

fn merge(tree: &Node, target: &Node, add: bool) -> Option<Merge> {
    if let Some(combined) = combine_pair(tree, target, add) {
        return Some(Merge {
            tree: combined,
            rest: absorbed(target),
        });
    }

    match tree {
        Node::Apply(op @ (Op::Add | Op::Sub), children) => {
            let [left, right] = children.as_slice() else {
                panic!("`{op}` applied to {} operands", children.len());
            };

            if let Some(left_merge) = merge(left, target, add) {
                // push the remainder into the right spine; under Sub the polarity flips
                if let Some(right_merge) = merge(right, &left_merge.rest, right_polarity(*op, add)) {
                    return Some(Merge {
                        tree: Node::binary(*op, left_merge.tree, right_merge.tree),
                        rest: right_merge.rest,
                    });
                }
                return Some(Merge {
                    tree: Node::binary(*op, left_merge.tree, right.clone()),
                    rest: left_merge.rest,
                });
            }

            if let Some(right_merge) = merge(right, target, right_polarity(*op, add)) {
                return Some(Merge {
                    tree: Node::binary(*op, left.clone(), right_merge.tree),
                    rest: right_merge.rest,
                });
            }

            split_target(tree, target, add)
        },
        Node::Apply(Op::Mul, children) => {
            if let [coeff, base] = children.as_slice() {
                if let Some(value) = coeff.as_value() {
                    if base == target {
                        // `c*x` absorbs another `x` by bumping the coefficient
                        let bump = consts::one(value.ty());
                        let bumped = if add { value.add(&bump) } else { value.sub(&bump) };
                        return Some(Merge {
                            tree: Node::binary(Op::Mul, Node::Constant(bumped), base.clone()),
                            rest: absorbed(target),
                        });
                    }
                }
            }

            split_target(tree, target, add)
        },
        _ => split_target(tree, target, add),
    }
}

/// Decomposes a compound `Add`/`Sub` target and merges its two pieces in sequence,
/// left-to-right, flipping the polarity for a subtracted piece. All-or-nothing: if either piece
/// fails to merge, the whole decomposition fails and the tree is left untouched.
fn split_target(tree: &Node, target: &Node, add: bool) -> Option<Merge> {
    let Node::Apply(op @ (Op::Add | Op::Sub), children) = target else {
        return None;
    };
    let [first, second] = children.as_slice() else {
        panic!("`{op}` applied to {} operands", children.len());
    };

    let first_merge = merge(tree, first, add)?;
    let second_merge = merge(&first_merge.tree, second, right_polarity(*op, add))?;

    Some(Merge {
        tree: second_merge.tree,
        rest: absorbed(target),
    })
}

/// If two nodes are directly combinable, returns the combined node.
fn combine_pair(a: &Node, b: &Node, add: bool) -> Option<Node> {
    // constants always combine by folding the arithmetic
    if let (Some(x), Some(y)) = (a.as_value(), b.as_value()) {
        let folded = if add { x.add(y) } else { x.sub(y) };
        return Some(Node::Constant(folded));
    }

    // structurally equal sub-trees combine by strength reduction or cancellation
    if a == b {
        return Some(if add {
            Node::binary(Op::Mul, Node::Constant(consts::two(a.ty())), a.clone())
        } else {
            Node::Constant(consts::zero(a.ty()))
        });
    }

    // constant multiples of the same base fold their coefficients
    if let (Some((x, base_a)), Some((y, base_b))) = (as_scaled(a), as_scaled(b)) {
        if base_a == base_b {
            let folded = if add { x.add(y) } else { x.sub(y) };
            return Some(Node::binary(Op::Mul, Node::Constant(folded), base_a.clone()));
        }
    }

    None
}

/// Destructures `c*x` with a constant first operand into `(c, x)`. The canonical ordering
/// guarantees a constant coefficient always sits first.
fn as_scaled(node: &Node) -> Option<(&Value, &Node)> {
    if let Node::Apply(Op::Mul, children) = node {
        if let [coeff, base] = children.as_slice() {
            if let Some(value) = coeff.as_value() {
                return Some((value, base));
            }
        }
    }

    None
}

/// The polarity to use when descending into (or past) the right operand of `op`.
fn right_polarity(op: Op, add: bool) -> bool {
    if op == Op::Sub {
        !add
    } else {
        add
    }
}

/// The additive identity standing in for a fully absorbed target.
fn absorbed(target: &Node) -> Node {
    Node::Constant(consts::zero(target.ty()))
}
