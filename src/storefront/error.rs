//! Rejected lifecycle operations

use thiserror::Error;

use super::types::{VendorId, View};

/// A lifecycle operation whose precondition does not hold.
/// Rejected operations leave the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOperation {
    #[error("cart index {index} is out of range for a cart of {len} item(s)")]
    CartIndexOutOfRange { index: usize, len: usize },

    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    #[error("no vendor with id {0} in the catalog")]
    UnknownVendor(VendorId),

    #[error("a service can only be chosen from the options view, not from {from}")]
    NavigationNotAllowed { from: View },
}
