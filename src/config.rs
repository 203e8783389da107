//! Field configuration

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a symbolic field.
///
/// Every constant the simulation depends on lives here as a named,
/// overridable parameter. The defaults reproduce the canonical field:
/// values in `[0, 2]` starting at `0.5`, resonance at `0.85`, and a
/// one-second monitoring tick with `±0.1` jitter.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Lower bound of the field value range.
    pub field_min: f32,

    /// Upper bound of the field value range.
    pub field_max: f32,

    /// Field value every node starts at.
    pub initial_value: f32,

    /// Resonance threshold a node must reach to count as resonant.
    pub default_threshold: f32,

    /// Magnitude bound of each monitoring perturbation (delta drawn
    /// uniformly from `[-perturbation, +perturbation]`).
    pub perturbation: f32,

    /// Monitoring tick period.
    pub tick: Duration,
}

impl FieldConfig {
    /// Get the tick period in milliseconds.
    pub fn tick_ms(&self) -> u64 {
        self.tick.as_millis() as u64
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.field_min >= self.field_max {
            return Err("field_min must be < field_max");
        }
        if !(self.field_min..=self.field_max).contains(&self.initial_value) {
            return Err("initial_value must lie within the field range");
        }
        if self.perturbation < 0.0 {
            return Err("perturbation must be >= 0");
        }
        if self.tick.is_zero() {
            return Err("tick must be > 0");
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_min: 0.0,
            field_max: 2.0,
            initial_value: 0.5,
            default_threshold: 0.85,
            perturbation: 0.1,
            tick: Duration::from_secs(1),
        }
    }
}
