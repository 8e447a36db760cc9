//! User-facing notifications
//!
//! Notifications are fire-and-forget: the session hands them to a sink and
//! never waits for an acknowledgement.

use log::info;

use super::types::Vendor;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Default,
    Success,
}

/// A toast shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn added_to_cart(vendor: &Vendor) -> Self {
        Self::new(
            "Added to cart",
            format!("{} has been added to your cart", vendor.name),
            Severity::Default,
        )
    }

    pub fn order_placed() -> Self {
        Self::new(
            "Order placed successfully!",
            "Your order is now being processed",
            Severity::Success,
        )
    }

    pub fn delivery_complete() -> Self {
        Self::new(
            "Delivery complete!",
            "Your order has been delivered",
            Severity::Success,
        )
    }
}

/// Sink for notifications
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        let marker = match notification.severity {
            Severity::Default => "*",
            Severity::Success => "✔",
        };
        info!("{} {}: {}", marker, notification.title, notification.description);
    }
}

/// Collects notifications in order, for callers that render them later
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
