//! Order lifecycle for a single storefront session
//!
//! The session owns the cart, the order history, the tracked order and its
//! delivery simulator. Every user intent and every timer tick is applied here,
//! one at a time.
//!
//! ```text
//!   Options ──choose_service──► Browsing ──open_cart──► CartReview
//!      ▲                                                    │
//!      │                                               place_order
//!      │                                                    ▼
//!      └──────────────── dismiss_tracking ───────────── Tracking
//! ```
//!
//! `Profile` can be opened from anywhere and does not touch the cart.

use log::{debug, info};

use super::catalog::Catalog;
use super::config::SessionConfig;
use super::delivery::{DeliverySimulator, DeliveryUpdate, TickTimer};
use super::discount::{draw_discount, CoinFlip, SeededCoin, ThreadCoin};
use super::error::InvalidOperation;
use super::filter::VendorFilter;
use super::location::LocationStatus;
use super::notify::{LogNotifier, Notification, Notifier};
use super::pricing::{compute_total, PriceBreakdown};
use super::profile::UserProfile;
use super::types::{ServiceType, Vendor, VendorId, View};

/// The order currently being tracked
#[derive(Debug, Clone)]
struct Tracking {
    order: Vendor,
    simulator: DeliverySimulator,
    /// Live tick cadence. `None` once the user navigates away from tracking.
    timer: Option<TickTimer>,
}

/// What a successful `place_order` produced
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub items: Vec<Vendor>,
    pub discount: f64,
    pub total: f64,
}

/// Everything the tracking screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingSnapshot {
    pub vendor: Vendor,
    pub progress: u32,
    pub target: u32,
    pub percentage: u32,
    pub estimated_minutes: u32,
    pub is_delivered: bool,
}

impl TrackingSnapshot {
    pub fn headline(&self) -> &'static str {
        if self.is_delivered {
            "Delivery Complete!"
        } else {
            "Order Confirmed!"
        }
    }

    /// Label of the button that dismisses tracking
    pub fn dismiss_label(&self) -> &'static str {
        if self.is_delivered {
            "Back to Home"
        } else {
            "Cancel Tracking"
        }
    }

    pub fn summary(&self) -> String {
        if self.is_delivered {
            format!("{} | {} | 100%", self.headline(), self.vendor.name)
        } else {
            format!(
                "{} | {} | {}% ({}/{}) | ~{} mins | {}km",
                self.headline(),
                self.vendor.name,
                self.percentage,
                self.progress,
                self.target,
                self.estimated_minutes,
                self.vendor.distance_km
            )
        }
    }
}

/// A storefront session driven by user intents and timer ticks
pub struct Session<N: Notifier = LogNotifier> {
    catalog: Catalog,
    /// Browse controls (search box, distance slider, service tab)
    pub filter: VendorFilter,
    /// Contact details on the profile screen
    pub profile: UserProfile,
    view: View,
    cart: Vec<Vendor>,
    order_history: Vec<Vendor>,
    tracking: Option<Tracking>,
    discount: f64,
    location: LocationStatus,
    config: SessionConfig,
    coin: Box<dyn CoinFlip>,
    notifier: N,
}

impl Default for Session<LogNotifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl Session<LogNotifier> {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session whose discount draws are reproducible
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_config(SessionConfig::with_seed(seed))
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let coin: Box<dyn CoinFlip> = match config.seed {
            Some(seed) => Box::new(SeededCoin::new(seed)),
            None => Box::new(ThreadCoin),
        };
        Self::with_parts(Catalog::standard(), config, coin, LogNotifier)
    }
}

impl<N: Notifier> Session<N> {
    /// Assemble a session from explicit collaborators
    pub fn with_parts(
        catalog: Catalog,
        config: SessionConfig,
        coin: Box<dyn CoinFlip>,
        notifier: N,
    ) -> Self {
        let mut filter = VendorFilter::new(config.initial_service);
        filter.set_max_distance_km(config.initial_max_distance_km);
        Self {
            catalog,
            filter,
            profile: UserProfile::default(),
            view: View::default(),
            cart: Vec::new(),
            order_history: Vec::new(),
            tracking: None,
            discount: 0.0,
            location: LocationStatus::default(),
            config,
            coin,
            notifier,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn cart(&self) -> &[Vendor] {
        &self.cart
    }

    /// Badge count for the cart button
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn order_history(&self) -> &[Vendor] {
        &self.order_history
    }

    /// Discount drawn for the most recent order
    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn tracking_order(&self) -> Option<&Vendor> {
        self.tracking.as_ref().map(|t| &t.order)
    }

    /// Progress ticks of the tracked delivery, zero when nothing is tracked
    pub fn delivery_progress(&self) -> u32 {
        self.tracking.as_ref().map_or(0, |t| t.simulator.progress())
    }

    /// Whether timer ticks are currently being delivered to the simulator
    pub fn is_ticking(&self) -> bool {
        self.view == View::Tracking
            && self
                .tracking
                .as_ref()
                .is_some_and(|t| t.timer.is_some() && !t.simulator.is_completed())
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn location(&self) -> LocationStatus {
        self.location
    }

    /// Record the outcome of the position request
    pub fn set_location(&mut self, status: LocationStatus) {
        self.location = status;
    }

    pub fn location_text(&self) -> String {
        self.location.location_text()
    }

    /// Vendors visible under the current browse controls
    pub fn visible_vendors(&self) -> Vec<&Vendor> {
        self.filter.apply(self.catalog.list_vendors())
    }

    // --- navigation ---

    /// Pick a service on the options screen and start browsing
    pub fn choose_service(&mut self, service: ServiceType) -> Result<(), InvalidOperation> {
        if self.view != View::Options {
            debug!("Rejected service choice from {} view", self.view);
            return Err(InvalidOperation::NavigationNotAllowed { from: self.view });
        }
        self.filter.service_type = service;
        self.switch_view(View::Browsing);
        Ok(())
    }

    /// Footer "Home" button
    pub fn go_home(&mut self) {
        self.switch_view(View::Options);
    }

    /// Footer "Cart" button
    pub fn open_cart(&mut self) {
        self.switch_view(View::CartReview);
    }

    /// Footer "Profile" button
    pub fn open_profile(&mut self) {
        self.switch_view(View::Profile);
    }

    fn switch_view(&mut self, next: View) {
        if self.view == View::Tracking && next != View::Tracking {
            self.cancel_timer();
        }
        debug!("View {} -> {}", self.view, next);
        self.view = next;
    }

    fn cancel_timer(&mut self) {
        if let Some(tracking) = &mut self.tracking {
            if tracking.timer.take().is_some() {
                debug!("Cancelled delivery timer for {}", tracking.order.name);
            }
        }
    }

    // --- cart ---

    /// Append a vendor to the cart. Duplicates are kept as separate entries.
    pub fn add_to_cart(&mut self, vendor: Vendor) {
        info!("Added {} to cart", vendor.name);
        self.notifier.notify(Notification::added_to_cart(&vendor));
        self.cart.push(vendor);
    }

    /// Look a vendor up in the catalog and add it to the cart
    pub fn add_to_cart_by_id(&mut self, id: VendorId) -> Result<(), InvalidOperation> {
        let vendor = self
            .catalog
            .find_vendor(id)
            .cloned()
            .ok_or(InvalidOperation::UnknownVendor(id))?;
        self.add_to_cart(vendor);
        Ok(())
    }

    /// Remove the cart entry at `index` and return it
    pub fn remove_from_cart(&mut self, index: usize) -> Result<Vendor, InvalidOperation> {
        if index >= self.cart.len() {
            return Err(InvalidOperation::CartIndexOutOfRange {
                index,
                len: self.cart.len(),
            });
        }
        let removed = self.cart.remove(index);
        info!("Removed {} from cart", removed.name);
        Ok(removed)
    }

    /// Cart line items, priced with the discount currently on display
    pub fn price_breakdown(&self) -> PriceBreakdown {
        PriceBreakdown::for_cart(&self.cart, self.discount)
    }

    pub fn cart_total(&self) -> f64 {
        compute_total(&self.cart, self.discount)
    }

    // --- orders ---

    /// Check out the cart.
    ///
    /// Appends the cart to the history, tracks the first entry, draws a new
    /// discount, empties the cart and switches to tracking with a fresh
    /// simulator. Any previous simulator is dropped.
    pub fn place_order(&mut self) -> Result<OrderReceipt, InvalidOperation> {
        let first = self.cart.first().cloned().ok_or(InvalidOperation::EmptyCart)?;

        let items = std::mem::take(&mut self.cart);
        self.order_history.extend(items.iter().cloned());
        self.discount = draw_discount(self.coin.as_mut());
        let total = compute_total(&items, self.discount);

        info!(
            "Placed order of {} item(s), total ₹{} (discount ₹{}), tracking {}",
            items.len(),
            total,
            self.discount,
            first.name
        );

        self.tracking = Some(Tracking {
            simulator: DeliverySimulator::new(first.distance_km),
            timer: Some(TickTimer::new(self.config.tick_interval_secs)),
            order: first,
        });
        self.view = View::Tracking;
        self.notifier.notify(Notification::order_placed());

        Ok(OrderReceipt {
            items,
            discount: self.discount,
            total,
        })
    }

    /// Stop tracking, whether or not the delivery finished, and go back to options
    pub fn dismiss_tracking(&mut self) {
        if let Some(tracking) = self.tracking.take() {
            info!(
                "Dismissed tracking for {} at {}/{}",
                tracking.order.name,
                tracking.simulator.progress(),
                tracking.simulator.target()
            );
        }
        self.view = View::Options;
    }

    // --- delivery simulation ---

    /// Deliver one timer tick to the tracked order.
    /// Returns `None` when no tick is delivered (not tracking, or cancelled).
    pub fn tick(&mut self) -> Option<DeliveryUpdate> {
        if self.view != View::Tracking {
            return None;
        }
        let tracking = self.tracking.as_mut()?;
        tracking.timer.as_ref()?;

        let update = tracking.simulator.tick();
        match update {
            DeliveryUpdate::Advanced(progress) => {
                debug!(
                    "Delivery from {}: {}/{}",
                    tracking.order.name,
                    progress,
                    tracking.simulator.target()
                );
            }
            DeliveryUpdate::Completed => {
                info!("Delivery from {} complete", tracking.order.name);
                tracking.timer = None;
                self.notifier.notify(Notification::delivery_complete());
            }
            DeliveryUpdate::Idle => {}
        }
        Some(update)
    }

    /// Advance wall-clock time by `delta_secs` and deliver any ticks that fell due.
    /// Ticks beyond the end of the delivery are discarded.
    pub fn update(&mut self, delta_secs: f32) -> Vec<DeliveryUpdate> {
        let due = match (self.view, self.tracking.as_mut()) {
            (View::Tracking, Some(tracking)) => match tracking.timer.as_mut() {
                Some(timer) => timer
                    .advance(delta_secs)
                    .min(tracking.simulator.remaining_ticks()),
                None => 0,
            },
            _ => 0,
        };

        let mut updates = Vec::new();
        for _ in 0..due {
            match self.tick() {
                Some(update) => updates.push(update),
                None => break,
            }
        }
        updates
    }

    /// View model for the tracking screen
    pub fn tracking_snapshot(&self) -> Option<TrackingSnapshot> {
        self.tracking.as_ref().map(|t| TrackingSnapshot {
            vendor: t.order.clone(),
            progress: t.simulator.progress(),
            target: t.simulator.target(),
            percentage: t.simulator.percentage(),
            estimated_minutes: t.simulator.estimated_minutes(),
            is_delivered: t.simulator.is_delivered(),
        })
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "View: {} | Cart: {} | Orders: {} | Tracking: {} | Location: {}",
            self.view,
            self.cart.len(),
            self.order_history.len(),
            self.tracking_order().map_or("none".to_string(), |v| v.name.clone()),
            self.location_text()
        )
    }
}
