//! Vendor filtering for the browse view
//!
//! A vendor is shown when its name contains the search term (case
//! insensitive), it is within the distance limit, and it matches the service
//! tab. The fuel tab only asks for at least one fuel type, while the mechanic
//! tab checks the mechanic flag.

use super::types::{ServiceType, Vendor};

/// Smallest distance the range slider allows, in km
pub const MIN_DISTANCE_KM: f64 = 1.0;
/// Largest distance the range slider allows, in km
pub const MAX_DISTANCE_KM: f64 = 20.0;
/// Slider position when the browse view opens
pub const DEFAULT_DISTANCE_KM: f64 = 10.0;

/// Keep the vendors that pass every browse predicate, in input order
pub fn filter_vendors<'a>(
    vendors: &'a [Vendor],
    search_term: &str,
    max_distance_km: f64,
    service_type: ServiceType,
) -> Vec<&'a Vendor> {
    let needle = search_term.to_lowercase();
    vendors
        .iter()
        .filter(|vendor| vendor.name.to_lowercase().contains(&needle))
        .filter(|vendor| vendor.distance_km <= max_distance_km)
        .filter(|vendor| matches_service(vendor, service_type))
        .collect()
}

fn matches_service(vendor: &Vendor, service_type: ServiceType) -> bool {
    match service_type {
        ServiceType::Fuel => vendor.offers_fuel(),
        ServiceType::Mechanic => vendor.mechanic_available,
    }
}

/// Current browse controls: search box, distance slider and service tab
#[derive(Debug, Clone, PartialEq)]
pub struct VendorFilter {
    pub search_term: String,
    max_distance_km: f64,
    pub service_type: ServiceType,
}

impl Default for VendorFilter {
    fn default() -> Self {
        Self::new(ServiceType::default())
    }
}

impl VendorFilter {
    pub fn new(service_type: ServiceType) -> Self {
        Self {
            search_term: String::new(),
            max_distance_km: DEFAULT_DISTANCE_KM,
            service_type,
        }
    }

    pub fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    /// Move the distance slider, clamped to the slider range
    pub fn set_max_distance_km(&mut self, km: f64) {
        self.max_distance_km = km.clamp(MIN_DISTANCE_KM, MAX_DISTANCE_KM);
    }

    pub fn apply<'a>(&self, vendors: &'a [Vendor]) -> Vec<&'a Vendor> {
        filter_vendors(
            vendors,
            &self.search_term,
            self.max_distance_km,
            self.service_type,
        )
    }

    /// Message shown when nothing matches
    pub fn empty_message(&self) -> &'static str {
        match self.service_type {
            ServiceType::Fuel => "No fuel stations found. Try adjusting your filters.",
            ServiceType::Mechanic => "No mechanics found. Try adjusting your filters.",
        }
    }
}
