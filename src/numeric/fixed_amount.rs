// ============================================================================
// Fixed-Point Amounts
// Arbitrary-precision decimal <-> base-unit conversion at a given scale
// ============================================================================

use super::errors::{DomainError, DomainResult};
use num::{BigInt, Signed, Zero};

/// Largest supported decimal scale.
///
/// ERC20 tokens top out at 18 in practice, but the wire format allows any
/// scale a contract declares; 10^256 is far outside machine integers, so
/// everything here runs on [`BigInt`].
pub const MAX_DECIMALS: u32 = 256;

/// `10^decimals` as a [`BigInt`], shared by the conversion entry points.
fn multiplier(decimals: u32) -> DomainResult<BigInt> {
    if decimals > MAX_DECIMALS {
        return Err(DomainError::DecimalsOutOfRange);
    }
    Ok(BigInt::from(10).pow(decimals))
}

/// The scale multiplier `10^decimals` rendered as a decimal string
/// (`"1"` followed by `decimals` zeros), lossless at any supported scale.
///
/// # Errors
/// `DecimalsOutOfRange` if `decimals` is above 256.
pub fn get_multiplier(decimals: u32) -> DomainResult<String> {
    Ok(multiplier(decimals)?.to_string())
}

/// Render a base-unit amount as a human-readable decimal string.
///
/// The fraction keeps at least one digit but is otherwise stripped of
/// trailing zeros, so one full token at scale 6 renders as `"1.0"`, not
/// `"1.000000"`. At scale 0 the result carries no decimal point.
///
/// # Errors
/// `DecimalsOutOfRange` if `decimals` is above 256.
///
/// # Example
/// ```ignore
/// assert_eq!(format_fixed(&BigInt::from(1_000_000), 6)?, "1.0");
/// assert_eq!(format_fixed(&BigInt::from(100_000), 6)?, "0.1");
/// ```
pub fn format_fixed(value: &BigInt, decimals: u32) -> DomainResult<String> {
    let multiplier = multiplier(decimals)?;
    let negative = value.is_negative();
    let magnitude = value.abs();

    let whole = &magnitude / &multiplier;
    let remainder = (&magnitude % &multiplier).to_string();
    let padded = format!("{:0>width$}", remainder, width = decimals as usize);
    let fraction = padded.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    let rendered = if decimals == 0 {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    };
    Ok(if negative {
        format!("-{}", rendered)
    } else {
        rendered
    })
}

/// Parse a human-readable decimal string into base units at `decimals`.
///
/// The integer part defaults to zero (`".5"` is half a unit); trailing
/// fractional zeros are ignored, so `"1.50"` at scale 1 is valid even
/// though it shows two fraction digits.
///
/// # Errors
/// - `DecimalsOutOfRange` if `decimals` is above 256
/// - `MalformedDecimal` for empty, `.`-only, or non-digit input
/// - `TooManyDecimalPoints` for more than one `.`
/// - `FractionExceedsDecimals` when significant fraction digits outnumber
///   `decimals` (precision underflow)
pub fn parse_fixed(value: &str, decimals: u32) -> DomainResult<BigInt> {
    let multiplier = multiplier(decimals)?;
    let trimmed = value.trim();

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if unsigned.is_empty() || unsigned == "." {
        return Err(DomainError::MalformedDecimal);
    }

    let parts: Vec<&str> = unsigned.split('.').collect();
    if parts.len() > 2 {
        return Err(DomainError::TooManyDecimalPoints);
    }
    let whole = if parts[0].is_empty() { "0" } else { parts[0] };
    let fraction = match parts.get(1) {
        Some(f) if !f.is_empty() => *f,
        _ => "0",
    };
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(DomainError::MalformedDecimal);
    }

    let stripped = fraction.trim_end_matches('0');
    if stripped.len() > decimals as usize {
        return Err(DomainError::FractionExceedsDecimals);
    }
    let scaled = format!("{:0<width$}", stripped, width = decimals as usize);

    let whole_units: BigInt = whole.parse().map_err(|_| DomainError::MalformedDecimal)?;
    let fraction_units: BigInt = if scaled.is_empty() {
        BigInt::zero()
    } else {
        scaled.parse().map_err(|_| DomainError::MalformedDecimal)?
    };

    let magnitude = whole_units * multiplier + fraction_units;
    Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn big(value: i64) -> BigInt {
        BigInt::from(value)
    }

    #[test]
    fn test_get_multiplier() {
        assert_eq!(get_multiplier(0).unwrap(), "1");
        assert_eq!(get_multiplier(1).unwrap(), "10");
        assert_eq!(get_multiplier(6).unwrap(), "1000000");
        assert_eq!(get_multiplier(18).unwrap().len(), 19);
        assert_eq!(get_multiplier(256).unwrap().len(), 257);
        assert_eq!(get_multiplier(257), Err(DomainError::DecimalsOutOfRange));
    }

    #[test]
    fn test_format_fixed_strips_trailing_zeros() {
        assert_eq!(format_fixed(&big(1_000_000), 6).unwrap(), "1.0");
        assert_eq!(format_fixed(&big(100_000), 6).unwrap(), "0.1");
        assert_eq!(format_fixed(&big(1_010_000), 6).unwrap(), "1.01");
        assert_eq!(format_fixed(&big(123_456), 3).unwrap(), "123.456");
    }

    #[test]
    fn test_format_fixed_zero_and_scale_zero() {
        assert_eq!(format_fixed(&big(0), 6).unwrap(), "0.0");
        assert_eq!(format_fixed(&big(0), 0).unwrap(), "0");
        assert_eq!(format_fixed(&big(42), 0).unwrap(), "42");
    }

    #[test]
    fn test_format_fixed_negative() {
        assert_eq!(format_fixed(&big(-1_500_000), 6).unwrap(), "-1.5");
        assert_eq!(format_fixed(&big(-100), 6).unwrap(), "-0.0001");
        assert_eq!(format_fixed(&big(-7), 0).unwrap(), "-7");
    }

    #[test]
    fn test_format_fixed_deep_scale() {
        assert_eq!(
            format_fixed(&big(1), 18).unwrap(),
            "0.000000000000000001"
        );
    }

    #[test]
    fn test_parse_fixed_basic() {
        assert_eq!(parse_fixed("1", 6).unwrap(), big(1_000_000));
        assert_eq!(parse_fixed("0.1", 6).unwrap(), big(100_000));
        assert_eq!(parse_fixed("1.5", 6).unwrap(), big(1_500_000));
        assert_eq!(parse_fixed("42", 0).unwrap(), big(42));
    }

    #[test]
    fn test_parse_fixed_defaults_and_padding() {
        assert_eq!(parse_fixed(".5", 1).unwrap(), big(5));
        assert_eq!(parse_fixed("1.", 2).unwrap(), big(100));
        // Trailing fractional zeros do not count against the scale
        assert_eq!(parse_fixed("1.50", 1).unwrap(), big(15));
        assert_eq!(parse_fixed("0.120", 2).unwrap(), big(12));
    }

    #[test]
    fn test_parse_fixed_negative() {
        assert_eq!(parse_fixed("-1.5", 6).unwrap(), big(-1_500_000));
        assert_eq!(parse_fixed("-0.0001", 6).unwrap(), big(-100));
    }

    #[test]
    fn test_parse_fixed_rejects_malformed() {
        assert_eq!(parse_fixed("", 2), Err(DomainError::MalformedDecimal));
        assert_eq!(parse_fixed(".", 2), Err(DomainError::MalformedDecimal));
        assert_eq!(parse_fixed("-.", 2), Err(DomainError::MalformedDecimal));
        assert_eq!(parse_fixed("12a", 2), Err(DomainError::MalformedDecimal));
        assert_eq!(parse_fixed("1.2.3", 2), Err(DomainError::TooManyDecimalPoints));
    }

    #[test]
    fn test_parse_fixed_underflow() {
        assert_eq!(
            parse_fixed("0.123", 2),
            Err(DomainError::FractionExceedsDecimals)
        );
        assert_eq!(
            parse_fixed("1.5", 0),
            Err(DomainError::FractionExceedsDecimals)
        );
    }

    #[test]
    fn test_parse_fixed_out_of_range_decimals() {
        assert_eq!(parse_fixed("1", 257), Err(DomainError::DecimalsOutOfRange));
    }

    #[test]
    fn test_full_scale_conversion() {
        // One unit at the maximum scale is exactly the multiplier
        let unit = parse_fixed("1", 256).unwrap();
        assert_eq!(unit.to_string(), get_multiplier(256).unwrap());
        assert_eq!(format_fixed(&unit, 256).unwrap(), "1.0");
    }

    quickcheck! {
        fn prop_round_trip(value: i128, decimals: u16) -> bool {
            let decimals = u32::from(decimals) % (MAX_DECIMALS + 1);
            let v = BigInt::from(value);
            match format_fixed(&v, decimals) {
                Ok(rendered) => parse_fixed(&rendered, decimals) == Ok(v),
                Err(_) => false,
            }
        }
    }
}
