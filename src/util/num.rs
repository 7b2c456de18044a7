use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// Reads a leading integer out of `text`.
///
/// Leading whitespace and a single `-` sign are accepted. Reading stops at the
/// first non-digit, and whatever follows is ignored.
///
/// ## Returns
/// - `Some(BigInt)`: If at least one digit was found.
/// - `None`: If the text does not start with an integer.
///
/// ## Example
/// ```
/// use lisper::util::num::parse_integer_prefix;
/// use num_bigint::BigInt;
///
/// assert_eq!(parse_integer_prefix("12abc"), Some(BigInt::from(12)));
/// assert_eq!(parse_integer_prefix(" -3"), Some(BigInt::from(-3)));
/// assert_eq!(parse_integer_prefix("abc"), None);
/// ```
#[must_use]
pub fn parse_integer_prefix(text: &str) -> Option<BigInt> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let digits_end = unsigned.find(|c: char| !c.is_ascii_digit())
                             .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude = BigInt::parse_bytes(&unsigned.as_bytes()[..digits_end], 10)?;

    Some(if negative { -magnitude } else { magnitude })
}

/// Division rounding toward negative infinity.
///
/// Returns `None` when `divisor` is zero.
#[must_use]
pub fn floor_div(dividend: &BigInt, divisor: &BigInt) -> Option<BigInt> {
    (!divisor.is_zero()).then(|| dividend.div_floor(divisor))
}

/// Modulo whose result takes the sign of the divisor.
///
/// Returns `None` when `divisor` is zero.
#[must_use]
pub fn floor_mod(dividend: &BigInt, divisor: &BigInt) -> Option<BigInt> {
    (!divisor.is_zero()).then(|| dividend.mod_floor(divisor))
}

/// Division rounding toward zero.
///
/// Returns `None` when `divisor` is zero.
#[must_use]
pub fn trunc_div(dividend: &BigInt, divisor: &BigInt) -> Option<BigInt> {
    (!divisor.is_zero()).then(|| dividend / divisor)
}

/// Remainder whose result takes the sign of the dividend.
///
/// Returns `None` when `divisor` is zero.
#[must_use]
pub fn trunc_rem(dividend: &BigInt, divisor: &BigInt) -> Option<BigInt> {
    (!divisor.is_zero()).then(|| dividend % divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn prefix_parsing() {
        assert_eq!(parse_integer_prefix("007"), Some(big(7)));
        assert_eq!(parse_integer_prefix("\t5 6"), Some(big(5)));
        assert_eq!(parse_integer_prefix("-"), None);
        assert_eq!(parse_integer_prefix(""), None);
        assert_eq!(parse_integer_prefix("+5"), None);
        assert_eq!(parse_integer_prefix("123456789012345678901234567890x"),
                   "123456789012345678901234567890".parse().ok());
    }

    #[test]
    fn floor_and_truncating_division_differ_on_signs() {
        assert_eq!(floor_div(&big(-7), &big(2)), Some(big(-4)));
        assert_eq!(trunc_div(&big(-7), &big(2)), Some(big(-3)));
        assert_eq!(floor_mod(&big(-7), &big(2)), Some(big(1)));
        assert_eq!(trunc_rem(&big(-7), &big(2)), Some(big(-1)));
        assert_eq!(floor_mod(&big(7), &big(-2)), Some(big(-1)));
        assert_eq!(trunc_rem(&big(7), &big(-2)), Some(big(1)));
    }

    #[test]
    fn zero_divisor_is_rejected() {
        assert_eq!(floor_div(&big(1), &big(0)), None);
        assert_eq!(floor_mod(&big(1), &big(0)), None);
        assert_eq!(trunc_div(&big(1), &big(0)), None);
        assert_eq!(trunc_rem(&big(1), &big(0)), None);
    }
}
