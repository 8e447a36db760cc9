//! Core types for the storefront
//!
//! Plain data shared by the catalog, the filter engine and the session.

use std::fmt;

/// A unique identifier for catalog vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VendorId(pub u32);

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fuel and/or mechanic service point ("bunk")
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    /// Fuel types on offer, in display order. May be empty.
    pub fuel_types: Vec<String>,
    /// Whether a mechanic can be dispatched from this vendor
    pub mechanic_available: bool,
    /// Unit price in rupees (per litre for fuel, per hour for mechanics)
    pub unit_price: f64,
    /// Distance from the user in kilometres
    pub distance_km: f64,
}

impl Vendor {
    pub fn new(
        id: VendorId,
        name: impl Into<String>,
        fuel_types: &[&str],
        mechanic_available: bool,
        unit_price: f64,
        distance_km: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            fuel_types: fuel_types.iter().map(|f| f.to_string()).collect(),
            mechanic_available,
            unit_price,
            distance_km,
        }
    }

    /// Whether the vendor sells at least one kind of fuel
    pub fn offers_fuel(&self) -> bool {
        !self.fuel_types.is_empty()
    }

    /// One-line description used by cart and history listings
    pub fn describe(&self) -> String {
        format!(
            "{} ({}) {} | {}km away | ₹{}",
            self.name,
            self.id,
            self.fuel_types.join(", "),
            self.distance_km,
            self.unit_price
        )
    }
}

/// Which service tab the user is browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceType {
    #[default]
    Fuel,
    Mechanic,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceType::Fuel => write!(f, "fuel"),
            ServiceType::Mechanic => write!(f, "mechanic"),
        }
    }
}

/// The screen a session is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Service picker shown at start and after tracking is dismissed
    #[default]
    Options,
    /// Vendor list with search and filters
    Browsing,
    CartReview,
    Tracking,
    Profile,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Options => "options",
            View::Browsing => "browsing",
            View::CartReview => "cart",
            View::Tracking => "tracking",
            View::Profile => "profile",
        };
        write!(f, "{}", name)
    }
}
