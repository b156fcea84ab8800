//! Seconds-per-frame state adjusted by the user

use crate::config::{CadenceConfig, MAX_CADENCE_SECONDS, MIN_CADENCE_SECONDS};
use std::time::Duration;

/// Delay between generations, always within
/// `[MIN_CADENCE_SECONDS, MAX_CADENCE_SECONDS]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cadence {
    seconds: f64,
    step: f64,
}

impl Cadence {
    /// A NaN `initial` starts at the ceiling and a non-finite `step` never
    /// moves the cadence; anything else is clamped into range
    pub fn new(initial: f64, step: f64) -> Self {
        let seconds = if initial.is_nan() {
            MAX_CADENCE_SECONDS
        } else {
            initial.clamp(MIN_CADENCE_SECONDS, MAX_CADENCE_SECONDS)
        };
        let step = if step.is_finite() { step.abs() } else { 0.0 };
        Self { seconds, step }
    }

    pub fn from_config(config: &CadenceConfig) -> Self {
        Self::new(config.initial_seconds, config.step_seconds)
    }

    /// Shorten the delay by one step, stopping at the floor
    pub fn speed_up(&mut self) {
        self.seconds = (self.seconds - self.step).max(MIN_CADENCE_SECONDS);
    }

    /// Lengthen the delay by one step, stopping at the ceiling
    pub fn slow_down(&mut self) {
        self.seconds = (self.seconds + self.step).min(MAX_CADENCE_SECONDS);
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.seconds)
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new(0.15, 0.01)
    }
}
