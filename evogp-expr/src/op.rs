//! The closed library of operators candidate programs are built from.
//!
//! Every operator here is **pure**: [`Op::evaluate`] is a deterministic function of its operands
//! with no side effects. The simplification engine leans on this everywhere (syntactic equality
//! of two sub-trees is taken as proof that they evaluate identically), so an operator that
//! cannot guarantee purity must not be added to this enum.
//!
//! Operator identity is the enum variant itself, not the display symbol.

use crate::node::{Ty, Value};
use std::cmp::Ordering;

/// A binary operator of the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    /// Arithmetic addition.
    Add,

    /// Arithmetic subtraction.
    Sub,

    /// Arithmetic multiplication.
    Mul,

    /// Arithmetic division. Division by zero yields the multiplicative identity; see
    /// [`Value::div`].
    Div,

    /// Structural equality of the evaluated operands.
    Eq,

    /// Structural inequality of the evaluated operands.
    Ne,

    /// Numeric less-than.
    Lt,

    /// Numeric less-than-or-equal.
    Le,

    /// Numeric greater-than.
    Gt,

    /// Numeric greater-than-or-equal.
    Ge,
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Op {
    /// The number of operands the operator takes. Every operator in the current library is
    /// binary.
    pub fn arity(self) -> usize {
        2
    }

    /// The symbol used when rendering the operator in s-expression form.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }

    /// Returns true if swapping the two operands never changes the result.
    pub fn is_commutative(self) -> bool {
        matches!(self, Self::Add | Self::Mul | Self::Eq | Self::Ne)
    }

    /// Returns true if the operator is in the comparison / equality family.
    pub fn is_comparison(self) -> bool {
        matches!(self, Self::Eq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge)
    }

    /// The declared return type of the operator, given its operand type.
    pub fn return_ty(self, operand: Ty) -> Ty {
        if self.is_comparison() {
            Ty::Bool
        } else {
            operand
        }
    }

    /// The boolean that `op(x, x)` evaluates to for any `x`, if the operator is a comparison.
    ///
    /// `Eq`, `Le` and `Ge` are reflexive; `Ne`, `Lt` and `Gt` are irreflexive. Arithmetic
    /// operators return `None`.
    pub fn reflexive_value(self) -> Option<bool> {
        match self {
            Self::Eq | Self::Le | Self::Ge => Some(true),
            Self::Ne | Self::Lt | Self::Gt => Some(false),
            _ => None,
        }
    }

    /// Evaluates the operator on two literal values.
    ///
    /// # Panics
    ///
    /// Panics if the operand types are incompatible with the operator; trees handed to the
    /// engine are guaranteed well-typed by construction.
    pub fn evaluate(self, lhs: &Value, rhs: &Value) -> Value {
        match self {
            Self::Add => lhs.add(rhs),
            Self::Sub => lhs.sub(rhs),
            Self::Mul => lhs.mul(rhs),
            Self::Div => lhs.div(rhs),
            Self::Eq => Value::Bool(lhs == rhs),
            Self::Ne => Value::Bool(lhs != rhs),
            Self::Lt => Value::Bool(lhs.cmp_numeric(rhs) == Ordering::Less),
            Self::Le => Value::Bool(lhs.cmp_numeric(rhs) != Ordering::Greater),
            Self::Gt => Value::Bool(lhs.cmp_numeric(rhs) == Ordering::Greater),
            Self::Ge => Value::Bool(lhs.cmp_numeric(rhs) != Ordering::Less),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::int;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn evaluate_arithmetic() {
        let eight = Value::Int(int(8));
        let three = Value::Int(int(3));
        assert_eq!(Op::Add.evaluate(&eight, &three), Value::Int(int(11)));
        assert_eq!(Op::Sub.evaluate(&eight, &three), Value::Int(int(5)));
        assert_eq!(Op::Mul.evaluate(&eight, &three), Value::Int(int(24)));
        assert_eq!(Op::Div.evaluate(&eight, &three), Value::Int(int(2)));
    }

    #[test]
    fn evaluate_comparisons() {
        let eight = Value::Int(int(8));
        let three = Value::Int(int(3));
        assert_eq!(Op::Lt.evaluate(&eight, &three), Value::Bool(false));
        assert_eq!(Op::Ge.evaluate(&eight, &three), Value::Bool(true));
        assert_eq!(Op::Eq.evaluate(&three, &three), Value::Bool(true));
        assert_eq!(Op::Ne.evaluate(&eight, &three), Value::Bool(true));
    }

    #[test]
    fn reflexivity_table() {
        assert_eq!(Op::Eq.reflexive_value(), Some(true));
        assert_eq!(Op::Gt.reflexive_value(), Some(false));
        assert_eq!(Op::Add.reflexive_value(), None);
    }
}
