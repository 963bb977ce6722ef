//! Error types of the simplification engine.
//!
//! There are exactly two failure modes, both internal-consistency failures rather than bad
//! input: the fixpoint loop failing to settle within its retry ceiling, and a rule producing a
//! tree that disagrees with the original. The latter is caught by the development-time oracle,
//! which panics with a [`SoundnessViolation`] rendering; it is deliberately not a [`Result`],
//! since a rule set that miscompiles trees invalidates trust in every future simplification and
//! must not be silently recovered from.

use evogp_expr::{Assignment, Node, Value};
use thiserror::Error;

/// Errors produced by [`simplify`](crate::simplify).
#[derive(Debug, Error)]
pub enum Error {
    /// The fixpoint loop exceeded its retry ceiling without settling. Well-formed rules are
    /// confluent and terminating in practice, so this indicates an internal inconsistency in the
    /// rule set. [`simplify_best_effort`](crate::simplify_best_effort) instead returns the
    /// `last` (possibly non-fully-reduced) result.
    #[error("simplification did not reach a fixpoint within {passes} passes")]
    RetryCeiling {
        /// The number of whole-tree passes that ran.
        passes: usize,

        /// The last result computed before giving up.
        last: Node,
    },
}

/// A rule produced a tree that disagrees with the original's value on a sample assignment.
///
/// Carried in the panic raised by the semantic-equivalence oracle; fatal and non-recoverable.
#[derive(Debug, Error)]
#[error(
    "unsound rewrite: `{before}` evaluates to {before_value} but `{after}` evaluates to \
     {after_value} under {assignment}"
)]
pub struct SoundnessViolation {
    /// The tree before the rewrite.
    pub before: Node,

    /// The tree the rewrite produced.
    pub after: Node,

    /// The assignment the two trees disagree under.
    pub assignment: Assignment,

    /// What `before` evaluates to under `assignment`.
    pub before_value: Value,

    /// What `after` evaluates to under `assignment`.
    pub after_value: Value,
}
