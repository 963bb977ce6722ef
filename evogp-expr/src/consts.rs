//! Singleton constants shared by the whole process.
//!
//! The simplification rules constantly need the zero / one / two of each numeric kind (additive
//! and multiplicative identities, the strength-reduction coefficient). These are built once,
//! lazily, as read-only statics and cloned out on demand; they are never mutated.

use once_cell::sync::Lazy;
use rug::{Float, Integer};
use crate::node::{Ty, Value};
use crate::primitive::{float, int};

pub static INT_ZERO: Lazy<Integer> = Lazy::new(|| int(0));

pub static INT_ONE: Lazy<Integer> = Lazy::new(|| int(1));

pub static INT_TWO: Lazy<Integer> = Lazy::new(|| int(2));

pub static FLOAT_ZERO: Lazy<Float> = Lazy::new(|| float(0));

pub static FLOAT_ONE: Lazy<Float> = Lazy::new(|| float(1));

pub static FLOAT_TWO: Lazy<Float> = Lazy::new(|| float(2));

/// The additive identity of the given numeric type.
///
/// # Panics
///
/// Panics if `ty` is [`Ty::Bool`]; booleans have no additive identity in this engine.
pub fn zero(ty: Ty) -> Value {
    match ty {
        Ty::Int => Value::Int(INT_ZERO.clone()),
        Ty::Float => Value::Float(FLOAT_ZERO.clone()),
        Ty::Bool => panic!("no additive identity for booleans"),
    }
}

/// The multiplicative identity of the given numeric type.
///
/// # Panics
///
/// Panics if `ty` is [`Ty::Bool`].
pub fn one(ty: Ty) -> Value {
    match ty {
        Ty::Int => Value::Int(INT_ONE.clone()),
        Ty::Float => Value::Float(FLOAT_ONE.clone()),
        Ty::Bool => panic!("no multiplicative identity for booleans"),
    }
}

/// The constant two of the given numeric type, used for strength reduction (`x + x = 2x`).
///
/// # Panics
///
/// Panics if `ty` is [`Ty::Bool`].
pub fn two(ty: Ty) -> Value {
    match ty {
        Ty::Int => Value::Int(INT_TWO.clone()),
        Ty::Float => Value::Float(FLOAT_TWO.clone()),
        Ty::Bool => panic!("booleans have no two"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities() {
        assert!(zero(Ty::Int).is_zero());
        assert!(one(Ty::Float).is_one());
        assert_eq!(two(Ty::Int), Value::Int(int(2)));
    }
}
