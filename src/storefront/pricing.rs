//! Order pricing
//!
//! Totals are computed as-is: the discount is never clamped, so a caller that
//! needs a non-negative total must keep the discount below subtotal plus
//! delivery charge.

use super::types::Vendor;

/// Flat delivery fee added to every order, regardless of distance or size
pub const DELIVERY_CHARGE: f64 = 20.0;

/// Discount granted when the order-time coin flip comes up heads
pub const BONUS_DISCOUNT: f64 = 10.0;

/// Sum of the unit prices in the cart
pub fn subtotal(cart: &[Vendor]) -> f64 {
    cart.iter().map(|vendor| vendor.unit_price).sum()
}

/// Subtotal plus delivery charge minus discount
pub fn compute_total(cart: &[Vendor], discount: f64) -> f64 {
    subtotal(cart) + DELIVERY_CHARGE - discount
}

/// Line items shown under the cart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub delivery_charge: f64,
    pub discount: f64,
    pub total: f64,
}

impl PriceBreakdown {
    pub fn for_cart(cart: &[Vendor], discount: f64) -> Self {
        Self {
            subtotal: subtotal(cart),
            delivery_charge: DELIVERY_CHARGE,
            discount,
            total: compute_total(cart, discount),
        }
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Subtotal: ₹{} | Delivery Charges: ₹{}",
            self.subtotal, self.delivery_charge
        );
        if self.discount > 0.0 {
            text.push_str(&format!(" | Discount: -₹{}", self.discount));
        }
        text.push_str(&format!(" | Total: ₹{}", self.total));
        text
    }
}
