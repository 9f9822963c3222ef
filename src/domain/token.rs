// ============================================================================
// Payment Tokens
// ERC20 settlement tokens accepted by the rental contracts
// ============================================================================

use crate::numeric::{format_fixed, parse_fixed, DomainResult};
use num::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settlement token of a lending or renting, as indexed on-chain.
///
/// Subgraph payloads deliver the token as a small integer. The index
/// mapping is part of the contract ABI and must not be reordered.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaymentToken {
    /// Index 0 marks "no token"; amounts under it are never scaled.
    Sentinel = 0,
    Weth = 1,
    Dai = 2,
    Usdc = 3,
    Usdt = 4,
    Tusd = 5,
    Rent = 6,
    Acs = 7,
}

impl PaymentToken {
    /// Resolve a token from its on-chain index.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Sentinel),
            1 => Some(Self::Weth),
            2 => Some(Self::Dai),
            3 => Some(Self::Usdc),
            4 => Some(Self::Usdt),
            5 => Some(Self::Tusd),
            6 => Some(Self::Rent),
            7 => Some(Self::Acs),
            _ => None,
        }
    }

    /// Ticker symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sentinel => "SENTINEL",
            Self::Weth => "WETH",
            Self::Dai => "DAI",
            Self::Usdc => "USDC",
            Self::Usdt => "USDT",
            Self::Tusd => "TUSD",
            Self::Rent => "RENT",
            Self::Acs => "ACS",
        }
    }

    /// Decimal scale of the token's base units.
    pub fn decimals(self) -> u32 {
        match self {
            Self::Sentinel => 0,
            Self::Usdc | Self::Usdt => 6,
            Self::Weth | Self::Dai | Self::Tusd | Self::Rent | Self::Acs => 18,
        }
    }
}

/// Convert a human-readable amount into the token's base units.
///
/// # Errors
/// Propagates [`parse_fixed`] failures, including precision underflow when
/// the amount carries more fraction digits than the token supports.
pub fn to_scaled_amount(value: &str, token: PaymentToken) -> DomainResult<BigInt> {
    parse_fixed(value, token.decimals())
}

/// Render a base-unit amount as a human-readable decimal string.
///
/// # Errors
/// Propagates [`format_fixed`] failures.
pub fn from_scaled_amount(value: &BigInt, token: PaymentToken) -> DomainResult<String> {
    format_fixed(value, token.decimals())
}
