// ============================================================================
// Domain Models Module
// Value objects shared with the marketplace glue around the codec
// ============================================================================

pub mod token;

pub use token::{from_scaled_amount, to_scaled_amount, PaymentToken};
