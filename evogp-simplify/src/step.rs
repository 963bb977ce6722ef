//! The individual rewrites the simplifier can report having applied.

/// A single rewrite applied somewhere in the tree during one simplification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An operator with all-constant operands was evaluated to a single constant.
    FoldConstants,

    /// The operands of a commutative operator were swapped into canonical order.
    ReorderOperands,

    /// `0+a = a`
    AddZero,

    /// `a+a = 2a`
    CombineEqualTerms,

    /// `a+(-c) = a-c`
    NegativeAddend,

    /// Two like terms were merged somewhere in an `Add`/`Sub` spine.
    CombineTerms,

    /// `a-a = 0`
    SubtractSelf,

    /// `a-0 = a`
    SubtractZero,

    /// `0-(x-y) = y-x`
    DoubleNegation,

    /// `a-(-c) = a+c`
    NegativeSubtrahend,

    /// `0*a = 0`
    MultiplyZero,

    /// `1*a = a`
    MultiplyOne,

    /// `c*(d+x) = cd + cx` (and the `Sub` analogue)
    DistributeConstant,

    /// `c*(d*x) = (cd)*x`
    FoldNestedConstant,

    /// `a/0 = 1`, the engine's documented division policy.
    DivideByZero,

    /// `a/1 = a`
    DivideOne,

    /// `op(x, x)` folded to the boolean implied by the operator's reflexivity.
    ReflexiveComparison,
}
