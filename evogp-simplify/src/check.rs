//! Development-time oracle asserting that a rewrite preserved the tree's value.
//!
//! Compiled into test builds unconditionally and into normal builds behind the `verify` feature;
//! release binaries of the evolutionary loop carry no trace of it. The oracle evaluates both
//! trees under a battery of sample assignments and panics on the first disagreement, because an
//! unsound rule invalidates every future simplification and must not be recovered from.

use crate::error::SoundnessViolation;
use evogp_expr::primitive::{float, int, PRECISION};
use evogp_expr::{Assignment, Node, Ty, Value};
use rug::Float;

/// Integer values the oracle cycles through: identities, sign flips, and one value large enough
/// to expose dropped factors.
const INT_SAMPLES: [i64; 6] = [0, 1, -1, 2, -7, 1000];

/// Float values the oracle cycles through.
const FLOAT_SAMPLES: [f64; 6] = [0.0, 1.0, -1.0, 0.5, -7.25, 1000.0];

/// How many assignments each pair of trees is evaluated under. Each round rotates every
/// variable's sample by one slot, so variables do not stay pinned to the same value.
const ROUNDS: usize = 6;

/// Asserts that `before` and `after` evaluate identically under every sample assignment.
///
/// # Panics
///
/// Panics with a [`SoundnessViolation`] rendering on the first disagreement.
pub fn assert_equivalent(before: &Node, after: &Node) {
    let mut variables = before.variables();
    variables.extend(after.variables());
    let variables = variables.into_iter().collect::<Vec<_>>();

    for round in 0..ROUNDS {
        let assignment = variables
            .iter()
            .enumerate()
            .map(|(slot, &(id, ty))| (id, sample(ty, slot + round)))
            .collect::<Assignment>();

        let before_value = before.eval(&assignment);
        let after_value = after.eval(&assignment);
        if !values_agree(&before_value, &after_value) {
            panic!(
                "{}",
                SoundnessViolation {
                    before: before.clone(),
                    after: after.clone(),
                    assignment,
                    before_value,
                    after_value,
                }
            );
        }
    }
}

fn sample(ty: Ty, index: usize) -> Value {
    match ty {
        Ty::Int => Value::Int(int(INT_SAMPLES[index % INT_SAMPLES.len()])),
        Ty::Float => Value::Float(float(FLOAT_SAMPLES[index % FLOAT_SAMPLES.len()])),
        Ty::Bool => Value::Bool(index % 2 == 0),
    }
}

/// Whether two values agree. Integers and booleans must match exactly; floats are compared with
/// a relative tolerance, since reassociating a float computation legitimately perturbs the last
/// few bits.
fn values_agree(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => {
            let diff = Float::with_val(PRECISION, x - y).abs();
            let scale = Float::with_val(PRECISION, 1)
                .max(&x.clone().abs())
                .max(&y.clone().abs());
            let tolerance = Float::with_val(PRECISION, 1e-120);
            diff <= scale * tolerance
        }
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use evogp_expr::Op;
    use super::*;

    #[test]
    fn equivalent_trees_pass() {
        // v0+v0 against 2*v0
        let before = Node::binary(Op::Add, Node::var(0, Ty::Int), Node::var(0, Ty::Int));
        let after = Node::binary(Op::Mul, Node::int(2), Node::var(0, Ty::Int));
        assert_equivalent(&before, &after);
    }

    #[test]
    fn float_roundoff_is_tolerated() {
        // (v0+1)-1 against v0; bit-identical at this precision, but exercised through the
        // tolerant comparison path.
        let before = Node::binary(
            Op::Sub,
            Node::binary(Op::Add, Node::var(0, Ty::Float), Node::float(1.0)),
            Node::float(1.0),
        );
        let after = Node::var(0, Ty::Float);
        assert_equivalent(&before, &after);
    }

    #[test]
    #[should_panic(expected = "unsound rewrite")]
    fn disagreement_panics() {
        let before = Node::binary(Op::Add, Node::var(0, Ty::Int), Node::int(1));
        let after = Node::var(0, Ty::Int);
        assert_equivalent(&before, &after);
    }
}
