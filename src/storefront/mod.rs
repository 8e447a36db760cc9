//! Headless storefront engine
//!
//! This module contains the catalog, pricing, filtering and order lifecycle
//! of the fuel & mechanic storefront. It has no rendering code, so a whole
//! session can be driven and inspected from a console or a test.

mod catalog;
mod config;
mod delivery;
mod discount;
mod error;
mod filter;
mod location;
mod notify;
mod pricing;
mod profile;
mod session;
mod types;

// Re-export public types for external use
pub use catalog::Catalog;
pub use config::SessionConfig;
pub use delivery::{
    estimated_minutes, percentage, target_ticks, DeliverySimulator, DeliveryUpdate, TickTimer,
    TICKS_PER_KM, TICK_INTERVAL_SECS,
};
pub use discount::{draw_discount, CoinFlip, FixedCoin, SeededCoin, ThreadCoin};
pub use error::InvalidOperation;
pub use filter::{
    filter_vendors, VendorFilter, DEFAULT_DISTANCE_KM, MAX_DISTANCE_KM, MIN_DISTANCE_KM,
};
pub use location::LocationStatus;
pub use notify::{LogNotifier, Notification, Notifier, Severity};
pub use pricing::{compute_total, subtotal, PriceBreakdown, BONUS_DISCOUNT, DELIVERY_CHARGE};
pub use profile::UserProfile;
pub use session::{OrderReceipt, Session, TrackingSnapshot};
pub use types::{ServiceType, Vendor, VendorId, View};
