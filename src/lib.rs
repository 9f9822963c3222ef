// ============================================================================
// Price Codec Library
// Fixed-point price packing and decimal scale conversion for NFT rentals
// ============================================================================

//! # price-codec
//!
//! Pure-function codec for the fixed-point price format used by NFT rental
//! contracts, plus the generic decimal scale conversion behind ERC20-style
//! token amounts.
//!
//! ## Features
//!
//! - **Packed prices**: decimal prices encoded as two 16-bit halves
//!   (integer part, fraction scaled to four digits) inside a 32-bit hex
//!   word, with truncation-not-rounding and clamp-on-decode policies
//! - **Fixed-point amounts**: arbitrary-precision conversion between
//!   human-readable decimals and base units at any scale up to 256
//! - **No floating point**: [`rust_decimal::Decimal`] and [`num::BigInt`]
//!   carry every value
//! - **No panics**: every fallible operation returns
//!   [`numeric::DomainResult`]
//!
//! ## Example
//!
//! ```rust
//! use price_codec::prelude::*;
//! use num::BigInt;
//!
//! // Pack a daily rent price the way the rental contracts store it
//! let packed = pack_price("21.42").unwrap();
//! assert_eq!(packed, "0x00151068");
//!
//! // Decode it back to a numeric value
//! let price = unpack_price(&packed).unwrap();
//! assert_eq!(price.to_string(), "21.4200");
//!
//! // Scale a USDC collateral amount to base units and back
//! let base = to_scaled_amount("150.75", PaymentToken::Usdc).unwrap();
//! assert_eq!(base, BigInt::from(150_750_000));
//! assert_eq!(from_scaled_amount(&base, PaymentToken::Usdc).unwrap(), "150.75");
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{from_scaled_amount, to_scaled_amount, PaymentToken};
    pub use crate::numeric::{
        bytes_to_nibbles, decimal_to_padded_hex_string, format_fixed, get_multiplier, max_price,
        pack_price, pack_price_decimal, parse_fixed, to_padded_hex, unpack_price, DomainError,
        DomainResult,
    };
}
