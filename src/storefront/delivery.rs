//! Delivery progress simulation
//!
//! A tracked order advances one progress tick per second of wall-clock time
//! until it reaches `distance_km * 10` ticks. The simulator itself only
//! counts ticks; [`TickTimer`] converts elapsed time into due ticks and is
//! dropped to cancel the cadence.

/// Progress ticks per kilometre of delivery distance
pub const TICKS_PER_KM: f64 = 10.0;

/// Default interval between progress ticks, in seconds
pub const TICK_INTERVAL_SECS: f32 = 1.0;

/// Display minutes of travel per kilometre
const MINUTES_PER_KM: f64 = 60.0;

/// Result of a single simulator tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryUpdate {
    /// Progress moved forward but the target is not reached yet
    Advanced(u32),
    /// Progress reached the target on this tick
    Completed,
    /// Already delivered, nothing changed
    Idle,
}

/// Progress counter for a single tracked delivery
#[derive(Debug, Clone, PartialEq)]
pub struct DeliverySimulator {
    distance_km: f64,
    target: u32,
    progress: u32,
    completed: bool,
}

impl DeliverySimulator {
    pub fn new(distance_km: f64) -> Self {
        Self {
            distance_km,
            target: target_ticks(distance_km),
            progress: 0,
            completed: false,
        }
    }

    /// Advance by one tick, clamped to the target.
    /// Returns `Completed` exactly once, on the tick that finishes the delivery.
    pub fn tick(&mut self) -> DeliveryUpdate {
        if self.completed {
            return DeliveryUpdate::Idle;
        }

        if self.progress < self.target {
            self.progress += 1;
        }

        if self.progress >= self.target {
            self.completed = true;
            DeliveryUpdate::Completed
        } else {
            DeliveryUpdate::Advanced(self.progress)
        }
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Ticks still needed to finish, counting the completion tick of a
    /// zero-length delivery
    pub fn remaining_ticks(&self) -> u32 {
        if self.completed {
            0
        } else {
            self.target.saturating_sub(self.progress).max(1)
        }
    }

    /// Whether the completion tick has already fired
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Rounded completion percentage, clamped to 100
    pub fn percentage(&self) -> u32 {
        percentage(self.progress, self.target)
    }

    pub fn is_delivered(&self) -> bool {
        self.percentage() == 100
    }

    /// Display-only estimate of minutes left
    pub fn estimated_minutes(&self) -> u32 {
        estimated_minutes(self.distance_km, self.percentage())
    }
}

/// Number of ticks a delivery over `distance_km` takes
pub fn target_ticks(distance_km: f64) -> u32 {
    (distance_km.max(0.0) * TICKS_PER_KM).round() as u32
}

/// `round(progress / target * 100)`, clamped to 100.
/// A zero-tick delivery counts as finished.
pub fn percentage(progress: u32, target: u32) -> u32 {
    if target == 0 {
        return 100;
    }
    let ratio = progress as f64 / target as f64 * 100.0;
    (ratio.round() as u32).min(100)
}

/// `ceil(distance * 60 * (1 - percentage / 100))` minutes
pub fn estimated_minutes(distance_km: f64, percentage: u32) -> u32 {
    let remaining = 1.0 - percentage.min(100) as f64 / 100.0;
    (distance_km.max(0.0) * MINUTES_PER_KM * remaining).ceil() as u32
}

/// Fixed-cadence timer that turns elapsed time into due ticks
#[derive(Debug, Clone, PartialEq)]
pub struct TickTimer {
    interval_secs: f32,
    elapsed_secs: f32,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_SECS)
    }
}

impl TickTimer {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval_secs,
            elapsed_secs: 0.0,
        }
    }

    /// Accumulate `delta_secs` and return how many whole intervals elapsed.
    /// Saturates at `u32::MAX` and drops the remainder when it does.
    pub fn advance(&mut self, delta_secs: f32) -> u32 {
        if self.interval_secs <= 0.0 {
            return 0;
        }
        self.elapsed_secs += delta_secs.max(0.0);

        let whole = (self.elapsed_secs / self.interval_secs).floor();
        if !whole.is_finite() || whole >= u32::MAX as f32 {
            self.elapsed_secs = 0.0;
            return u32::MAX;
        }
        self.elapsed_secs = (self.elapsed_secs - whole * self.interval_secs).max(0.0);
        whole as u32
    }
}
