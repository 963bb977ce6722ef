//! Typed, immutable expression trees for tree-based genetic programming.
//!
//! A candidate program is a small expression tree built from constants, input variables, and a
//! fixed library of pure operators. This crate defines that tree ([`Node`]), the operator
//! library ([`Op`]), literal values ([`Value`]) and their types ([`Ty`]), and evaluation against
//! a variable [`Assignment`].
//!
//! The evolutionary loop (generation, crossover, mutation, fitness) and the simplification
//! engine are consumers of this crate; nothing here depends on them.
//!
//! ```
//! use evogp_expr::{Assignment, Node, Op, Ty, Value};
//! use evogp_expr::primitive::int;
//!
//! // (+ v0 (* 2 v0))
//! let tree = Node::binary(
//!     Op::Add,
//!     Node::var(0, Ty::Int),
//!     Node::binary(Op::Mul, Node::int(2), Node::var(0, Ty::Int)),
//! );
//!
//! let assignment = [(0, Value::Int(int(5)))].into_iter().collect::<Assignment>();
//! assert_eq!(tree.eval(&assignment), Value::Int(int(15)));
//! assert_eq!(tree.to_string(), "(+ v0 (* 2 v0))");
//! ```

pub mod consts;
pub mod eval;
pub mod node;
pub mod op;
pub mod primitive;

pub use eval::Assignment;
pub use node::{Node, Ty, Value, VarId};
pub use op::Op;
