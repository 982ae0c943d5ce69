//! Routing configuration.

use serde::{Deserialize, Serialize};

use super::error::RouterError;

/// Parameters used when turning routes into ride-time edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting at a stop before every boarding (minutes).
    pub bus_wait_time: u32,

    /// Vehicle speed (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create a new configuration with the given parameters.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Returns the wait time as fractional minutes, the unit of edge weights.
    pub fn wait_time_mins(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Minutes needed to ride `meters` at the configured velocity.
    pub fn ride_time_mins(&self, meters: u64) -> f64 {
        meters as f64 / 1000.0 / self.bus_velocity * 60.0
    }

    /// Check that the settings produce finite, non-negative weights.
    pub fn validate(&self) -> Result<(), RouterError> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(RouterError::InvalidSettings(
                "bus velocity must be a positive number",
            ));
        }
        Ok(())
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}
