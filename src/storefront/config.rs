//! Session configuration

use super::delivery::TICK_INTERVAL_SECS;
use super::filter::DEFAULT_DISTANCE_KM;
use super::types::ServiceType;

/// Knobs for a storefront session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Seconds between delivery progress ticks
    pub tick_interval_secs: f32,
    /// Distance slider position when browsing starts
    pub initial_max_distance_km: f64,
    /// Service tab selected before the user picks one
    pub initial_service: ServiceType,
    /// Seed for the discount coin; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: TICK_INTERVAL_SECS,
            initial_max_distance_km: DEFAULT_DISTANCE_KM,
            initial_service: ServiceType::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
