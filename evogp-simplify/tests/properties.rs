//! End-to-end properties of the simplification engine, exercised over seeded random trees.

use evogp_expr::primitive::int;
use evogp_expr::{Assignment, Node, Op, Ty, Value};
use evogp_simplify::{combine::combine, order, simplify, simplify_best_effort};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

const TREES: usize = 200;
const ASSIGNMENTS: usize = 8;

fn var(id: u32) -> Node {
    Node::var(id, Ty::Int)
}

/// Builds a random arithmetic tree over `v0..v3` with small integer constants.
fn random_tree(rng: &mut StdRng, depth: u32) -> Node {
    if depth == 0 || rng.gen_bool(0.3) {
        if rng.gen_bool(0.5) {
            Node::int(rng.gen_range(-5..=5))
        } else {
            var(rng.gen_range(0..4))
        }
    } else {
        let op = match rng.gen_range(0..4) {
            0 => Op::Add,
            1 => Op::Sub,
            2 => Op::Mul,
            _ => Op::Div,
        };
        Node::binary(op, random_tree(rng, depth - 1), random_tree(rng, depth - 1))
    }
}

fn random_assignment(rng: &mut StdRng) -> Assignment {
    (0..4)
        .map(|id| (id, Value::Int(int(rng.gen_range(-10..=10)))))
        .collect()
}

#[test]
fn canonical_scenarios() {
    let cases = [
        (Node::binary(Op::Add, Node::int(8), Node::int(3)), "11"),
        (Node::binary(Op::Add, var(1), var(1)), "(* 2 v1)"),
        (Node::binary(Op::Add, var(1), Node::int(0)), "v1"),
        (Node::binary(Op::Add, var(1), Node::int(-7)), "(- v1 7)"),
        (
            Node::binary(
                Op::Add,
                Node::binary(Op::Add, Node::int(3), var(0)),
                Node::binary(Op::Add, Node::int(4), var(0)),
            ),
            "(+ 7 (* 2 v0))",
        ),
        (Node::binary(Op::Div, Node::int(4), Node::int(0)), "1"),
    ];

    for (tree, expected) in cases {
        assert_eq!(simplify(&tree).unwrap().to_string(), expected, "input: {tree}");
    }
}

#[test]
fn simplification_preserves_semantics() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..TREES {
        let tree = random_tree(&mut rng, 4);
        let simplified = simplify(&tree).unwrap();

        for _ in 0..ASSIGNMENTS {
            let assignment = random_assignment(&mut rng);
            assert_eq!(
                tree.eval(&assignment),
                simplified.eval(&assignment),
                "`{tree}` and `{simplified}` disagree under {assignment}",
            );
        }
    }
}

#[test]
fn simplification_never_grows_the_tree() {
    let mut rng = StdRng::seed_from_u64(0xacc);

    for _ in 0..TREES {
        let tree = random_tree(&mut rng, 4);
        let simplified = simplify(&tree).unwrap();
        assert!(
            simplified.count() <= tree.count(),
            "`{tree}` ({} nodes) grew to `{simplified}` ({} nodes)",
            tree.count(),
            simplified.count(),
        );
    }
}

#[test]
fn simplification_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0xf1f0);

    for _ in 0..TREES {
        let tree = random_tree(&mut rng, 4);
        let once = simplify(&tree).unwrap();
        let twice = simplify(&once).unwrap();
        assert_eq!(once, twice, "input: {tree}");
    }
}

#[test]
fn simplified_commutative_operands_are_ordered() {
    let mut rng = StdRng::seed_from_u64(0x0bde);

    for _ in 0..TREES {
        let tree = random_tree(&mut rng, 4);
        let simplified = simplify(&tree).unwrap();

        for node in simplified.post_order_iter() {
            if let Node::Apply(op, children) = node {
                if op.is_commutative() {
                    assert_ne!(
                        order::compare(&children[0], &children[1]),
                        Ordering::Greater,
                        "unordered `{op}` operands in `{simplified}` (from `{tree}`)",
                    );
                }
            }
        }
    }
}

#[test]
fn canonical_form_is_operand_order_independent() {
    let mut rng = StdRng::seed_from_u64(0x0dd5);

    for _ in 0..TREES {
        let x = random_tree(&mut rng, 3);
        let y = random_tree(&mut rng, 3);

        for op in [Op::Add, Op::Mul] {
            let forward = simplify(&Node::binary(op, x.clone(), y.clone())).unwrap();
            let backward = simplify(&Node::binary(op, y.clone(), x.clone())).unwrap();
            assert_eq!(forward, backward, "`{op}` over `{x}` and `{y}`");
        }
    }
}

#[test]
fn best_effort_agrees_with_simplify() {
    let mut rng = StdRng::seed_from_u64(0xbe57);

    for _ in 0..TREES {
        let tree = random_tree(&mut rng, 4);
        assert_eq!(simplify_best_effort(&tree), simplify(&tree).unwrap());
    }
}

#[test]
fn combiner_tie_break_is_left_first() {
    // both spines could absorb v0; the left one must win
    let tree = Node::binary(Op::Add, var(0), Node::binary(Op::Add, var(0), Node::int(3)));
    let merged = combine(&tree, &var(0), true).unwrap();
    assert_eq!(
        merged,
        Node::binary(
            Op::Add,
            Node::binary(Op::Mul, Node::int(2), var(0)),
            Node::binary(Op::Add, var(0), Node::int(3)),
        ),
    );
}

#[test]
fn division_by_zero_policy_is_consistent() {
    // folding (/ v0 0) at rewrite time and evaluating it must agree
    let tree = Node::binary(Op::Div, var(0), Node::int(0));
    let simplified = simplify(&tree).unwrap();
    assert_eq!(simplified, Node::int(1));

    let assignment = [(0, Value::Int(int(42)))].into_iter().collect::<Assignment>();
    assert_eq!(tree.eval(&assignment), Value::Int(int(1)));
}
