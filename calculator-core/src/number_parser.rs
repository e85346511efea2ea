use crate::{
    calculator_error::{CalculatorError, OverflowError, ValidationError},
    entry_cruncher::EntryCruncher,
};

/// Attempt to parse a signed decimal integer from the given entry,
/// skipping any leading padding.
///
/// The entry must consist of an optional `-` followed by at least one
/// ASCII digit and nothing else. Digits are accumulated toward the sign
/// of the result, so `i64::MIN` is accepted while anything beyond the
/// 64-bit range reports an overflow.
pub fn parse_number<T: AsRef<[u8]>>(token: T) -> Result<i64, CalculatorError> {
    let bytes = token.as_ref();
    let mut index = bytes
        .iter()
        .take_while(|byte| EntryCruncher::is_padding(**byte))
        .count();

    let negative = bytes.get(index) == Some(&b'-');
    if negative {
        index += 1;
    }

    let digits_start = index;
    let mut value: i64 = 0;
    while let Some(byte) = bytes.get(index).filter(|byte| byte.is_ascii_digit()) {
        let digit = i64::from(byte - b'0');
        value = value
            .checked_mul(10)
            .and_then(|value| {
                if negative {
                    value.checked_sub(digit)
                } else {
                    value.checked_add(digit)
                }
            })
            .ok_or(OverflowError::LiteralOutOfRange)?;
        index += 1;
    }

    if index < bytes.len() {
        return Err(ValidationError::UnexpectedCharacter(index).into());
    }
    if index == digits_start {
        return Err(ValidationError::MissingDigits.into());
    }
    Ok(value)
}
