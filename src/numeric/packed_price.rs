// ============================================================================
// Packed Price
// Decimal prices packed into two 16-bit halves of a 32-bit hex word
// ============================================================================

use super::errors::{DomainError, DomainResult};
use super::hex::{decimal_to_padded_hex_string, to_padded_hex};
use rust_decimal::Decimal;

/// Width of a packed price in bits.
pub const PRICE_BITSIZE: u32 = 32;

/// Width of each packed half (integer part, scaled fraction) in bits.
pub const HALF_BITSIZE: u32 = 16;

/// Digits kept in the scaled fraction half.
const FRACTION_DIGITS: usize = 4;

/// Largest value either 16-bit half may carry as a decimal field.
const MAX_FIELD: u32 = 9999;

/// The maximum packable price, 9999.9999.
///
/// Both halves of the packed word top out at 9999: the integer part
/// directly, the fraction after scaling to four digits.
pub fn max_price() -> Decimal {
    Decimal::new(99_999_999, 4)
}

/// Pack a decimal price string into its `0x`-prefixed 32-bit hex form.
///
/// The high 16 bits carry the integer part, the low 16 bits the fraction
/// scaled to four digits. Fraction digits beyond the fourth are dropped,
/// never rounded, so `"21.99999"` packs exactly like `"21.9999"`.
///
/// # Errors
/// - `TooManyDecimalPoints` for more than one `.`
/// - `MalformedDecimal` for empty or non-digit input
/// - `NegativePrice` if the integer part is below zero
/// - `PriceExceedsMax` if the full input (before truncation) is above
///   9999.9999
///
/// # Example
/// ```ignore
/// assert_eq!(pack_price("1.1")?, "0x000103E8");
/// assert_eq!(pack_price("0")?, "0x00000000");
/// ```
pub fn pack_price(price: &str) -> DomainResult<String> {
    let parts: Vec<&str> = price.trim().split('.').collect();
    if parts.len() > 2 {
        return Err(DomainError::TooManyDecimalPoints);
    }

    let whole_part = parts[0];
    let fraction_part = parts.get(1).copied().unwrap_or("");

    let (signed, whole_digits) = match whole_part.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, whole_part),
    };
    if whole_digits.is_empty()
        || !whole_digits.bytes().all(|b| b.is_ascii_digit())
        || !fraction_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(DomainError::MalformedDecimal);
    }

    // "-0.5" has an integer part of zero and is not negative
    if signed && whole_digits.bytes().any(|b| b != b'0') {
        return Err(DomainError::NegativePrice);
    }

    // A digits-only integer part that overflows the machine parse is
    // necessarily far above the packable maximum
    let whole: u32 = whole_digits
        .parse()
        .map_err(|_| DomainError::PriceExceedsMax)?;
    if whole > MAX_FIELD || (whole == MAX_FIELD && fraction_exceeds_max(fraction_part)) {
        return Err(DomainError::PriceExceedsMax);
    }

    let whole_hex = to_padded_hex(i64::from(whole), HALF_BITSIZE)?;

    if parts.len() == 1 {
        return Ok(format!("{whole_hex}0000"));
    }

    let fraction: u32 = scale_decimal(fraction_part)
        .parse()
        .map_err(|_| DomainError::MalformedDecimal)?;
    let fraction_hex = to_padded_hex(i64::from(fraction), HALF_BITSIZE)?;

    Ok(format!("{}{}", whole_hex, &fraction_hex[2..]))
}

/// Pack a numeric price value.
///
/// Entry point for callers holding a [`Decimal`] rather than the raw
/// string from an event payload; the value is normalized (trailing
/// fractional zeros dropped) and packed via [`pack_price`].
pub fn pack_price_decimal(price: Decimal) -> DomainResult<String> {
    pack_price(&price.normalize().to_string())
}

/// Unpack a 32-bit packed price back into its numeric value.
///
/// The input is re-derived through [`decimal_to_padded_hex_string`] to
/// normalize sign and width, then split into its two halves. Halves above
/// 9999 are clamped to 9999 by policy, never rejected.
///
/// # Errors
/// `MalformedHex` if the input does not parse as a 32-bit hex value.
///
/// # Example
/// ```ignore
/// assert_eq!(unpack_price("0x000103E8")?, "1.1".parse()?);
/// ```
pub fn unpack_price(packed: &str) -> DomainResult<Decimal> {
    let trimmed = packed.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let value = u32::from_str_radix(digits, 16).map_err(|_| DomainError::MalformedHex)?;

    let padded = decimal_to_padded_hex_string(i64::from(value), PRICE_BITSIZE)?;
    let nibbles = &padded[2..];
    let mut whole =
        u32::from_str_radix(&nibbles[..4], 16).map_err(|_| DomainError::MalformedHex)?;
    let mut fraction =
        u32::from_str_radix(&nibbles[4..], 16).map_err(|_| DomainError::MalformedHex)?;

    if whole > MAX_FIELD {
        tracing::debug!("clamping unpacked integer part {} to {}", whole, MAX_FIELD);
        whole = MAX_FIELD;
    }
    if fraction > MAX_FIELD {
        tracing::debug!("clamping unpacked fraction {} to {}", fraction, MAX_FIELD);
        fraction = MAX_FIELD;
    }

    format!("{}.{:04}", whole, fraction)
        .parse()
        .map_err(|_| DomainError::MalformedDecimal)
}

/// Canonicalize fraction digits to exactly four: keep the first four
/// (truncation, not rounding) and right-pad with zeros.
fn scale_decimal(fraction: &str) -> String {
    let mut scaled: String = fraction.chars().take(FRACTION_DIGITS).collect();
    while scaled.len() < FRACTION_DIGITS {
        scaled.push('0');
    }
    scaled
}

/// True when `0.<digits>` is strictly above `0.9999`.
fn fraction_exceeds_max(digits: &str) -> bool {
    digits.len() > FRACTION_DIGITS
        && &digits[..FRACTION_DIGITS] == "9999"
        && digits[FRACTION_DIGITS..].bytes().any(|b| b != b'0')
}
