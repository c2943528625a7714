// SPDX-License-Identifier: MIT

//! Equality and ordering capability of switch subjects

use serde_json::Value;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A value that can be the subject of a switch.
///
/// Equality is required. Ordering is optional: types without one keep the
/// default `ordering`, and ordering operators on them fail with
/// `SwitchError::NotComparable`.
pub trait Operand: PartialEq + Debug {
    /// Order `self` against `other`, or `None` if the pair has no ordering
    fn ordering(&self, _other: &Self) -> Option<Ordering> {
        None
    }
}

macro_rules! ordered_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                fn ordering(&self, other: &Self) -> Option<Ordering> {
                    self.partial_cmp(other)
                }
            }
        )*
    };
}

ordered_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, (),
);

impl Operand for &str {
    fn ordering(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `None` sorts before any `Some`; two `Some`s defer to the inner ordering
impl<T: Operand> Operand for Option<T> {
    fn ordering(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
            (Some(a), Some(b)) => a.ordering(b),
        }
    }
}

/// JSON values order only within the same scalar kind.
///
/// Integers and floats are different kinds: `json!(10) == json!(10.0)` is
/// false, so ordering them against each other is refused as well.
impl Operand for Value {
    fn ordering(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                if a.is_f64() != b.is_f64() {
                    None
                } else if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                    Some(a.cmp(&b))
                } else if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                    Some(a.cmp(&b))
                } else {
                    a.as_f64()?.partial_cmp(&b.as_f64()?)
                }
            }
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Wraps an equality-only type so it can be switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unordered<T>(pub T);

impl<T: PartialEq + Debug> Operand for Unordered<T> {}

impl<T> Unordered<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_ordering() {
        assert_eq!(5i32.ordering(&3), Some(Ordering::Greater));
        assert_eq!(3u8.ordering(&3), Some(Ordering::Equal));
        assert_eq!((-1i64).ordering(&0), Some(Ordering::Less));
    }

    #[test]
    fn test_float_nan_has_no_ordering() {
        assert_eq!(1.5f64.ordering(&2.0), Some(Ordering::Less));
        assert_eq!(f64::NAN.ordering(&1.0), None);
    }

    #[test]
    fn test_string_ordering() {
        assert_eq!("apple".ordering(&"banana"), Some(Ordering::Less));
        assert_eq!(
            "b".to_string().ordering(&"a".to_string()),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_option_ordering() {
        assert_eq!(None::<i32>.ordering(&Some(1)), Some(Ordering::Less));
        assert_eq!(Some(2i32).ordering(&Some(1)), Some(Ordering::Greater));
        assert_eq!(Some(f64::NAN).ordering(&Some(1.0)), None);
    }

    #[test]
    fn test_json_number_ordering() {
        assert_eq!(json!(5).ordering(&json!(3)), Some(Ordering::Greater));
        assert_eq!(json!(7.5).ordering(&json!(8.0)), Some(Ordering::Less));
        assert_eq!(json!(-2).ordering(&json!(3)), Some(Ordering::Less));
        assert_eq!(
            json!(u64::MAX).ordering(&json!(u64::MAX - 1)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_json_mixed_kinds_have_no_ordering() {
        assert_eq!(json!(5).ordering(&json!("5")), None);
        assert_eq!(json!(null).ordering(&json!(null)), None);
        assert_eq!(json!([1]).ordering(&json!([2])), None);
        assert_eq!(json!({"a": 1}).ordering(&json!({"a": 1})), None);
    }

    #[test]
    fn test_json_integer_and_float_have_no_ordering() {
        assert_eq!(json!(10).ordering(&json!(10.0)), None);
        assert_eq!(json!(10.0).ordering(&json!(10)), None);
        assert_eq!(json!(7.5).ordering(&json!(8)), None);
        // Agrees with equality, which also keeps the kinds apart
        assert_ne!(json!(10), json!(10.0));
    }

    #[test]
    fn test_json_string_and_bool_ordering() {
        assert_eq!(json!("a").ordering(&json!("b")), Some(Ordering::Less));
        assert_eq!(json!(true).ordering(&json!(false)), Some(Ordering::Greater));
    }

    #[test]
    fn test_unordered_is_equality_only() {
        #[derive(Debug, PartialEq)]
        struct Color(&'static str);

        let red = Unordered(Color("red"));
        assert!(red == Unordered(Color("red")));
        assert_eq!(red.ordering(&Unordered(Color("blue"))), None);
        assert_eq!(red.into_inner(), Color("red"));
    }
}
