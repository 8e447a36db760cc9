//! Location display text
//!
//! The session never reads coordinates; it only shows a one-line string
//! derived from the outcome of a one-shot position request.

use std::fmt;

/// Outcome of the position request
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LocationStatus {
    /// Request still in flight
    #[default]
    Pending,
    Resolved { latitude: f64, longitude: f64 },
    /// No location support on this device
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    /// Any other failure
    Unknown,
}

impl LocationStatus {
    pub fn location_text(&self) -> String {
        match self {
            LocationStatus::Pending => "Fetching location...".to_string(),
            LocationStatus::Resolved {
                latitude,
                longitude,
            } => format!("Lat: {:.2}, Long: {:.2}", latitude, longitude),
            LocationStatus::Unsupported => "Geolocation not supported".to_string(),
            LocationStatus::PermissionDenied => "Location access denied".to_string(),
            LocationStatus::PositionUnavailable => "Location information unavailable".to_string(),
            LocationStatus::Timeout => "Location request timed out".to_string(),
            LocationStatus::Unknown => "An unknown error occurred".to_string(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, LocationStatus::Resolved { .. })
    }
}

impl fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location_text())
    }
}
