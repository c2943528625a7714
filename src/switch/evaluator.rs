//! Operator dispatch over switch operands

use std::cmp::Ordering;

use super::op::CompareOp;
use super::operand::Operand;
use crate::error::SwitchError;

/// Evaluate `subject <op> candidate`
pub fn evaluate<T: Operand>(
    op: CompareOp,
    subject: &T,
    candidate: &T,
) -> Result<bool, SwitchError> {
    match op {
        CompareOp::Eq => Ok(subject == candidate),
        CompareOp::NotEq => Ok(subject != candidate),
        CompareOp::Gt => compare_ordered(op, subject, candidate, |o| o == Ordering::Greater),
        CompareOp::Lt => compare_ordered(op, subject, candidate, |o| o == Ordering::Less),
        CompareOp::Lte => compare_ordered(op, subject, candidate, |o| o != Ordering::Greater),
        CompareOp::Gte => compare_ordered(op, subject, candidate, |o| o != Ordering::Less),
    }
}

fn compare_ordered<T, F>(
    op: CompareOp,
    subject: &T,
    candidate: &T,
    accept: F,
) -> Result<bool, SwitchError>
where
    T: Operand,
    F: Fn(Ordering) -> bool,
{
    subject
        .ordering(candidate)
        .map(accept)
        .ok_or_else(|| SwitchError::not_comparable(op, subject, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switch::operand::Unordered;
    use serde_json::json;

    #[test]
    fn test_equality() {
        assert!(evaluate(CompareOp::Eq, &10, &10).unwrap());
        assert!(!evaluate(CompareOp::Eq, &4, &10).unwrap());
        assert!(evaluate(CompareOp::NotEq, &4, &10).unwrap());
        assert!(!evaluate(CompareOp::NotEq, &"x", &"x").unwrap());
    }

    #[test]
    fn test_number_comparison() {
        assert!(evaluate(CompareOp::Gt, &5, &3).unwrap());
        assert!(!evaluate(CompareOp::Gt, &5, &5).unwrap());

        assert!(evaluate(CompareOp::Gte, &5, &5).unwrap());
        assert!(!evaluate(CompareOp::Gte, &4, &5).unwrap());

        assert!(evaluate(CompareOp::Lt, &3, &5).unwrap());
        assert!(!evaluate(CompareOp::Lt, &5, &5).unwrap());

        assert!(evaluate(CompareOp::Lte, &7.5, &7.5).unwrap());
        assert!(!evaluate(CompareOp::Lte, &7.5, &7.0).unwrap());
    }

    #[test]
    fn test_json_values() {
        assert!(evaluate(CompareOp::Eq, &json!("search"), &json!("search")).unwrap());
        assert!(evaluate(CompareOp::Gt, &json!(0.9), &json!(0.8)).unwrap());
        assert!(evaluate(CompareOp::NotEq, &json!(1), &json!("1")).unwrap());
    }

    #[test]
    fn test_equality_on_unordered_succeeds() {
        let subject = Unordered(vec![1, 2]);
        assert!(evaluate(CompareOp::Eq, &subject, &Unordered(vec![1, 2])).unwrap());
        assert!(evaluate(CompareOp::NotEq, &subject, &Unordered(vec![3])).unwrap());
    }

    #[test]
    fn test_ordering_on_unordered_fails() {
        let err = evaluate(CompareOp::Lt, &Unordered("a"), &Unordered("b")).unwrap_err();
        assert!(matches!(
            err,
            SwitchError::NotComparable {
                op: CompareOp::Lt,
                ..
            }
        ));
    }

    #[test]
    fn test_ordering_across_json_kinds_fails() {
        let err = evaluate(CompareOp::Gte, &json!(5), &json!("5")).unwrap_err();
        match err {
            SwitchError::NotComparable {
                op,
                subject,
                candidate,
            } => {
                assert_eq!(op, CompareOp::Gte);
                assert!(subject.contains('5'));
                assert!(candidate.contains("\"5\""));
            }
            other => panic!("Expected NotComparable, got {:?}", other),
        }
    }

    #[test]
    fn test_json_integer_against_float() {
        let (int, float) = (json!(10), json!(10.0));
        assert!(!evaluate(CompareOp::Eq, &int, &float).unwrap());
        assert!(evaluate(CompareOp::NotEq, &int, &float).unwrap());
        for op in [CompareOp::Gt, CompareOp::Lt, CompareOp::Lte, CompareOp::Gte] {
            let err = evaluate(op, &int, &float).unwrap_err();
            assert!(matches!(err, SwitchError::NotComparable { .. }), "{}", op);
        }
    }

    #[test]
    fn test_nan_is_not_comparable() {
        assert!(evaluate(CompareOp::Gt, &f64::NAN, &1.0).is_err());
        // Equality on NaN is still answered
        assert!(!evaluate(CompareOp::Eq, &f64::NAN, &f64::NAN).unwrap());
    }
}
