//! Discrete clock for the Wirework framework
//!
//! Time advances only through explicit ticks driven by the update scheduler.
//! There is no wall-clock input anywhere; test code controls time completely.

use serde::{Deserialize, Serialize};

/// Configuration for the scene clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Seconds of scene time per tick
    pub timestep: f32,
    /// Multiplier applied to each tick (0.0 = frozen, 1.0 = normal)
    pub time_scale: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 60.0,
            time_scale: 1.0,
        }
    }
}

/// Scene time tracking, advanced one discrete tick at a time
#[derive(Debug, Clone)]
pub struct Clock {
    config: ClockConfig,
    elapsed: f64,
    delta: f32,
    ticks: u64,
}

impl Clock {
    /// Create a clock with custom config
    pub fn new(config: ClockConfig) -> Self {
        Self {
            config,
            elapsed: 0.0,
            delta: 0.0,
            ticks: 0,
        }
    }

    /// Advance by exactly one timestep
    pub fn tick(&mut self) {
        self.delta = self.config.timestep * self.config.time_scale;
        self.elapsed += self.delta as f64;
        self.ticks += 1;
    }

    /// Total scene time since creation in seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Duration of the most recent tick in seconds
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Number of ticks taken so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Set the time scale for subsequent ticks
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}
