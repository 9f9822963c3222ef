// ============================================================================
// Numeric Module
// Price packing and fixed-point conversion primitives
// ============================================================================
//
// This module provides:
// - DomainError: the single error family for value-domain violations
// - Padded hex encoding (to_padded_hex / decimal_to_padded_hex_string)
// - Price packing into two 16-bit halves of a 32-bit hex word
// - Fixed-point scale conversion for ERC20-style token amounts
//
// Design principles:
// - Pure functions over primitive values, no shared state
// - All fallible operations return DomainResult (no panics)
// - No floating point anywhere on a conversion path

mod errors;
mod fixed_amount;
mod hex;
mod packed_price;

pub use errors::{DomainError, DomainResult};
pub use fixed_amount::{format_fixed, get_multiplier, parse_fixed, MAX_DECIMALS};
pub use hex::{
    bytes_to_nibbles, decimal_to_padded_hex_string, to_padded_hex, BITSIZE_MAX_VALUE,
    NUM_BITS_IN_BYTE,
};
pub use packed_price::{
    max_price, pack_price, pack_price_decimal, unpack_price, HALF_BITSIZE, PRICE_BITSIZE,
};
