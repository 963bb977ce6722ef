//! The expression trees that make up candidate programs.
//!
//! A candidate program is a finite, immutable tree of [`Node`]s: literal [`Constant`]s, input
//! [`Variable`]s, and [`Apply`] nodes that apply an [`Op`] to their children. Trees are never
//! mutated in place; every transformation builds a new tree, reusing untouched children by
//! cloning them. No registry or cache of nodes is kept anywhere; a tree is dropped as soon as
//! nothing references it.
//!
//! # Equality
//!
//! [`PartialEq`] and [`Hash`] are **structural and order-sensitive**: two nodes are equal iff
//! they are the same variant and, for [`Apply`], apply the same operator to pairwise-equal
//! children *in the same order*. `x + y` and `y + x` are therefore not equal as trees, even
//! though they are semantically equal; the simplifier's canonical ordering is what makes the two
//! converge onto a single structural form.
//!
//! [`Constant`]: Node::Constant
//! [`Variable`]: Node::Variable
//! [`Apply`]: Node::Apply

pub mod iter;

use crate::op::Op;
use crate::primitive::{float, int};
use iter::NodeIter;
use rug::{Assign, Float, Integer};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The type of a value an expression evaluates to.
///
/// The derived [`Ord`] is the canonical order of types; the simplifier uses it to normalize the
/// operand order of commutative operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ty {
    Int,
    Float,
    Bool,
}

/// Identifies an input variable of a candidate program. Variable `3` renders as `v3`.
pub type VarId = u32;

/// A literal value carried by a [`Node::Constant`] or produced by evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// An arbitrary-precision integer, such as `2` or `144`.
    Int(Integer),

    /// A floating-point number, such as `3.14` or `0.5`.
    Float(Float),

    /// A boolean, produced by the comparison operators.
    Bool(bool),
}

/// [`Eq`] is implemented manually to allow comparing [`Value::Float`]s. This crate **must
/// never** produce non-normal [`Float`]s (such as `NaN` or `Infinity`)! Report any bugs that
/// cause this to happen.
impl Eq for Value {}

/// [`Hash`] is implemented manually to allow hashing [`Value::Float`]s. See the [`Eq`] impl for
/// the invariant that makes this valid.
impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Int(n) => n.hash(state),
            Self::Float(f) => {
                f.get_exp().hash(state);
                match f.get_significand() {
                    Some(significand) => significand.hash(state),
                    None => 0u8.hash(state),
                }
            },
            Self::Bool(b) => b.hash(state),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n.to_f64()),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Value {
    /// The type of this value.
    pub fn ty(&self) -> Ty {
        match self {
            Self::Int(_) => Ty::Int,
            Self::Float(_) => Ty::Float,
            Self::Bool(_) => Ty::Bool,
        }
    }

    /// Returns true if the value is the additive identity of its type.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => n.is_zero(),
            Self::Float(f) => f.is_zero(),
            Self::Bool(_) => false,
        }
    }

    /// Returns true if the value is the multiplicative identity of its type.
    pub fn is_one(&self) -> bool {
        match self {
            Self::Int(n) => *n == 1,
            Self::Float(f) => *f == 1,
            Self::Bool(_) => false,
        }
    }

    /// Returns true if the value is a strictly negative number.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Int(n) => n.is_negative(),
            Self::Float(f) => f.is_sign_negative() && !f.is_zero(),
            Self::Bool(_) => false,
        }
    }

    /// Adds two values of the same numeric type.
    ///
    /// # Panics
    ///
    /// Panics if the operand types differ or are boolean; trees handed to the engine are
    /// guaranteed well-typed by construction, so this is a programming error.
    pub fn add(&self, rhs: &Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.clone() + b),
            (Value::Float(a), Value::Float(b)) => Value::Float(a.clone() + b),
            (lhs, rhs) => panic!("cannot add `{lhs}` and `{rhs}`: incompatible types"),
        }
    }

    /// Subtracts two values of the same numeric type. Panics as [`Value::add`] does.
    pub fn sub(&self, rhs: &Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.clone() - b),
            (Value::Float(a), Value::Float(b)) => Value::Float(a.clone() - b),
            (lhs, rhs) => panic!("cannot subtract `{rhs}` from `{lhs}`: incompatible types"),
        }
    }

    /// Multiplies two values of the same numeric type. Panics as [`Value::add`] does.
    pub fn mul(&self, rhs: &Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.clone() * b),
            (Value::Float(a), Value::Float(b)) => Value::Float(a.clone() * b),
            (lhs, rhs) => panic!("cannot multiply `{lhs}` and `{rhs}`: incompatible types"),
        }
    }

    /// Divides two values of the same numeric type. Integer division truncates.
    ///
    /// Division by zero never raises an error in this engine: it returns the multiplicative
    /// identity of the operand type. The simplifier's `Divide` rule folds on the same policy, so
    /// evaluation and rewriting can never disagree.
    pub fn div(&self, rhs: &Value) -> Value {
        if rhs.is_zero() {
            return crate::consts::one(self.ty());
        }

        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.clone() / b),
            (Value::Float(a), Value::Float(b)) => Value::Float(a.clone() / b),
            (lhs, rhs) => panic!("cannot divide `{lhs}` by `{rhs}`: incompatible types"),
        }
    }

    /// Negates a numeric value. Panics on booleans.
    pub fn neg(&self) -> Value {
        match self {
            Value::Int(n) => Value::Int(-n.clone()),
            Value::Float(f) => Value::Float(-f.clone()),
            Value::Bool(_) => panic!("cannot negate a boolean"),
        }
    }

    /// Compares two numeric values of the same type.
    ///
    /// # Panics
    ///
    /// Panics if the operand types differ or are boolean.
    pub fn cmp_numeric(&self, rhs: &Value) -> Ordering {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            // valid because this crate never produces non-normal floats
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b).unwrap(),
            (lhs, rhs) => panic!("cannot order `{lhs}` and `{rhs}`: incompatible types"),
        }
    }
}

/// A single node of a candidate program's expression tree.
///
/// See the [module-level documentation](self) for the equality semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// A literal value.
    Constant(Value),

    /// An input variable with its declared type.
    Variable(VarId, Ty),

    /// An operator applied to an ordered sequence of children.
    Apply(Op, Vec<Node>),
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(id, _) => write!(f, "v{}", id),
            Self::Apply(op, children) => {
                write!(f, "({}", op)?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, ")")
            },
        }
    }
}

impl Node {
    /// Creates a constant integer node.
    pub fn int<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Constant(Value::Int(int(n)))
    }

    /// Creates a constant float node.
    pub fn float<T>(n: T) -> Self
    where
        Float: Assign<T>,
    {
        Self::Constant(Value::Float(float(n)))
    }

    /// Creates a constant boolean node.
    pub fn bool(b: bool) -> Self {
        Self::Constant(Value::Bool(b))
    }

    /// Creates a variable node with the given id and type.
    pub fn var(id: VarId, ty: Ty) -> Self {
        Self::Variable(id, ty)
    }

    /// Applies a binary operator to two operands.
    pub fn binary(op: Op, lhs: Node, rhs: Node) -> Self {
        Self::Apply(op, vec![lhs, rhs])
    }

    /// The type this node evaluates to.
    pub fn ty(&self) -> Ty {
        match self {
            Self::Constant(value) => value.ty(),
            Self::Variable(_, ty) => *ty,
            Self::Apply(op, children) => op.return_ty(children[0].ty()),
        }
    }

    /// If the node is a constant, returns a reference to the contained value.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the node is the constant zero of its type.
    pub fn is_zero(&self) -> bool {
        self.as_value().map(Value::is_zero).unwrap_or(false)
    }

    /// Returns true if the node is the constant one of its type.
    pub fn is_one(&self) -> bool {
        self.as_value().map(Value::is_one).unwrap_or(false)
    }

    /// Returns true if the node is a strictly negative constant.
    pub fn is_negative_constant(&self) -> bool {
        self.as_value().map(Value::is_negative).unwrap_or(false)
    }

    /// The number of nodes in the tree, this node included.
    pub fn count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// The free variables of the tree, with their declared types, in id order.
    pub fn variables(&self) -> BTreeMap<VarId, Ty> {
        self.post_order_iter()
            .filter_map(|node| match node {
                Self::Variable(id, ty) => Some((*id, *ty)),
                _ => None,
            })
            .collect()
    }

    /// Returns an iterator that traverses the tree of nodes in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> NodeIter {
        NodeIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn render_s_expression() {
        let tree = Node::binary(
            Op::Add,
            Node::binary(Op::Mul, Node::int(2), Node::var(0, Ty::Int)),
            Node::int(-7),
        );
        assert_eq!(tree.to_string(), "(+ (* 2 v0) -7)");
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = Node::binary(Op::Add, Node::var(0, Ty::Int), Node::var(1, Ty::Int));
        let b = Node::binary(Op::Add, Node::var(1, Ty::Int), Node::var(0, Ty::Int));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn count_and_variables() {
        let tree = Node::binary(
            Op::Sub,
            Node::binary(Op::Add, Node::var(1, Ty::Int), Node::int(3)),
            Node::var(4, Ty::Int),
        );
        assert_eq!(tree.count(), 5);
        let vars = tree.variables();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[&1], Ty::Int);
        assert_eq!(vars[&4], Ty::Int);
    }

    #[test]
    fn divide_by_zero_policy() {
        let four = Value::Int(int(4));
        let zero = Value::Int(int(0));
        assert_eq!(four.div(&zero), Value::Int(int(1)));

        let f = Value::Float(float(4));
        let fzero = Value::Float(float(0));
        assert_eq!(f.div(&fzero), Value::Float(float(1)));
    }

    #[test]
    fn negative_predicates() {
        assert!(Node::int(-3).is_negative_constant());
        assert!(!Node::int(0).is_negative_constant());
        assert!(!Node::float(0.0).is_negative_constant());
        assert!(Node::float(-0.5).is_negative_constant());
        assert!(!Node::var(0, Ty::Int).is_negative_constant());
    }
}
