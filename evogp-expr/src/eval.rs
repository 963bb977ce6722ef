//! Evaluation of expression trees against variable assignments.
//!
//! Evaluation is the semantic ground truth of the whole framework: the simplification engine
//! promises that a rewritten tree evaluates to the same value as the original under every
//! assignment. It is pure and synchronous; the only resources it consumes are the call stack
//! (proportional to tree depth) and the values it computes.

use crate::node::{Node, Value, VarId};
use std::collections::HashMap;

/// A binding of variable ids to literal values, used to evaluate a tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    bindings: HashMap<VarId, Value>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable to a value, replacing any previous binding.
    pub fn bind(&mut self, id: VarId, value: Value) {
        self.bindings.insert(id, value);
    }

    /// Returns the value bound to the given variable, if any.
    pub fn get(&self, id: VarId) -> Option<&Value> {
        self.bindings.get(&id)
    }
}

impl FromIterator<(VarId, Value)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (VarId, Value)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut bindings = self.bindings.iter().collect::<Vec<_>>();
        bindings.sort_by_key(|(id, _)| **id);

        write!(f, "{{")?;
        let mut iter = bindings.into_iter();
        if let Some((id, value)) = iter.next() {
            write!(f, "v{} = {}", id, value)?;
            for (id, value) in iter {
                write!(f, ", v{} = {}", id, value)?;
            }
        }
        write!(f, "}}")
    }
}

impl Node {
    /// Evaluates the tree against the given assignment.
    ///
    /// # Panics
    ///
    /// Panics if a variable in the tree is unbound, or if operand types are incompatible with an
    /// operator. Both are programming errors: upstream collaborators guarantee well-typed,
    /// fully-bound trees.
    pub fn eval(&self, assignment: &Assignment) -> Value {
        match self {
            Self::Constant(value) => value.clone(),
            Self::Variable(id, _) => assignment
                .get(*id)
                .unwrap_or_else(|| panic!("variable v{id} is unbound"))
                .clone(),
            Self::Apply(op, children) => match children.as_slice() {
                [lhs, rhs] => op.evaluate(&lhs.eval(assignment), &rhs.eval(assignment)),
                _ => panic!("`{op}` applied to {} operands, expected {}", children.len(), op.arity()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Ty;
    use crate::op::Op;
    use crate::primitive::int;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn eval_tree() {
        // (+ (* v0 v0) (- v1 3))
        let tree = Node::binary(
            Op::Add,
            Node::binary(Op::Mul, Node::var(0, Ty::Int), Node::var(0, Ty::Int)),
            Node::binary(Op::Sub, Node::var(1, Ty::Int), Node::int(3)),
        );

        let assignment = [(0, Value::Int(int(4))), (1, Value::Int(int(10)))]
            .into_iter()
            .collect::<Assignment>();
        assert_eq!(tree.eval(&assignment), Value::Int(int(23)));
    }

    #[test]
    fn eval_division_by_zero() {
        let tree = Node::binary(Op::Div, Node::var(0, Ty::Int), Node::int(0));
        let assignment = [(0, Value::Int(int(4)))].into_iter().collect::<Assignment>();
        assert_eq!(tree.eval(&assignment), Value::Int(int(1)));
    }

    #[test]
    fn display_assignment() {
        let assignment = [(1, Value::Int(int(-7))), (0, Value::Int(int(2)))]
            .into_iter()
            .collect::<Assignment>();
        assert_eq!(assignment.to_string(), "{v0 = 2, v1 = -7}");
    }

    #[test]
    #[should_panic(expected = "unbound")]
    fn eval_unbound_variable() {
        let tree = Node::var(3, Ty::Int);
        tree.eval(&Assignment::new());
    }
}
