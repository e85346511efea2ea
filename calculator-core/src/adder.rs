use crate::calculator_error::OverflowError;

/// Adds two 64-bit integers, refusing to wrap around.
pub fn add(a: i64, b: i64) -> Result<i64, OverflowError> {
    a.checked_add(b).ok_or(OverflowError::Sum { a, b })
}
