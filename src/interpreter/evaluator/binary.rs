use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Applies a binary operator to two integers.
///
/// Arithmetic is checked: a result outside the `i64` range is reported as
/// `Overflow` and a zero divisor as `DivisionByZero`. Division truncates
/// toward zero. Relational operators return `1` when the relation holds and
/// `0` otherwise.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use simpas::{ast::BinaryOperator, interpreter::evaluator::binary::apply_binary_op};
///
/// assert_eq!(apply_binary_op(BinaryOperator::Div, 7, 2, 1), Ok(3));
/// assert_eq!(apply_binary_op(BinaryOperator::Div, -7, 2, 1), Ok(-3));
/// assert_eq!(apply_binary_op(BinaryOperator::Greater, 5, 3, 1), Ok(1));
/// assert!(apply_binary_op(BinaryOperator::Div, 1, 0, 1).is_err());
/// ```
pub fn apply_binary_op(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
    let overflow = || RuntimeError::Overflow { line };

    match op {
        BinaryOperator::Add => left.checked_add(right).ok_or_else(overflow),
        BinaryOperator::Sub => left.checked_sub(right).ok_or_else(overflow),
        BinaryOperator::Mul => left.checked_mul(right).ok_or_else(overflow),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            left.checked_div(right).ok_or_else(overflow)
        },
        BinaryOperator::Equal => Ok(i64::from(left == right)),
        BinaryOperator::NotEqual => Ok(i64::from(left != right)),
        BinaryOperator::Less => Ok(i64::from(left < right)),
        BinaryOperator::Greater => Ok(i64::from(left > right)),
        BinaryOperator::LessEqual => Ok(i64::from(left <= right)),
        BinaryOperator::GreaterEqual => Ok(i64::from(left >= right)),
    }
}
