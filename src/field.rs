//! Field state - the one mutable store of the simulation
//!
//! Holds a scalar field value per node plus the resonance threshold.
//! Values are presentation data: writes clamp to the configured range
//! instead of rejecting. Only index contract violations are errors.
//!
//! Both the monitoring task and user edits write here, so callers that
//! share a `FieldState` across threads wrap it in
//! `Arc<parking_lot::Mutex<_>>`; each `set` is then atomic with respect
//! to its clamp-and-store pair and no reader can observe an
//! out-of-range value even transiently.

use crate::config::FieldConfig;
use crate::error::{FieldError, FieldResult};
use crate::registry::NODE_COUNT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-node field values and the resonance threshold.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldState {
    /// Current value per node, always within `[field_min, field_max]`.
    values: [f32; NODE_COUNT],

    /// Resonance threshold. Unclamped; monitoring never touches it.
    threshold: f32,

    /// Value range, from configuration.
    field_min: f32,
    field_max: f32,

    /// Bumped on every mutation. Consumers rebuild the scene when it moves.
    revision: u64,
}

impl FieldState {
    /// Create a field with every node at the configured initial value.
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            values: [config.initial_value; NODE_COUNT],
            threshold: config.default_threshold,
            field_min: config.field_min,
            field_max: config.field_max,
            revision: 0,
        }
    }

    fn check_index(&self, index: usize) -> FieldResult<()> {
        if index >= NODE_COUNT {
            return Err(FieldError::InvalidIndex {
                index,
                limit: NODE_COUNT,
            });
        }
        Ok(())
    }

    // =========================================================================
    // READING
    // =========================================================================

    /// Current field value for node `index`.
    pub fn get(&self, index: usize) -> FieldResult<f32> {
        self.check_index(index)?;
        Ok(self.values[index])
    }

    /// Snapshot of all four values in node order.
    pub fn values(&self) -> [f32; NODE_COUNT] {
        self.values
    }

    /// Current resonance threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Strength of the edge between nodes `i` and `j`: the weaker
    /// endpoint bounds the connection, so this is `min(get(i), get(j))`.
    /// Symmetric in its arguments.
    pub fn connection_strength(&self, i: usize, j: usize) -> FieldResult<f32> {
        Ok(self.get(i)?.min(self.get(j)?))
    }

    /// Whether node `index` has reached the resonance threshold.
    /// Pure comparison, no hysteresis.
    pub fn is_resonant(&self, index: usize) -> FieldResult<bool> {
        Ok(self.get(index)? >= self.threshold)
    }

    /// Monotone change counter. Moves on every `set`, `apply_delta`,
    /// and `set_threshold`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // =========================================================================
    // WRITING
    // =========================================================================

    /// Set node `index` to `value`, clamped to the field range.
    ///
    /// The only user-editing entry point. Returns the value actually
    /// stored.
    pub fn set(&mut self, index: usize, value: f32) -> FieldResult<f32> {
        self.check_index(index)?;
        let clamped = value.clamp(self.field_min, self.field_max);
        self.values[index] = clamped;
        self.revision += 1;
        tracing::trace!(node = index, value = clamped, "field value set");
        Ok(clamped)
    }

    /// Shift node `index` by `delta`, clamping the result.
    ///
    /// The perturbation entry point for monitoring; inherits the clamp
    /// behavior of [`set`](Self::set), so the value walks with hard
    /// reflecting boundaries at the range edges.
    pub fn apply_delta(&mut self, index: usize, delta: f32) -> FieldResult<f32> {
        let current = self.get(index)?;
        self.set(index, current + delta)
    }

    /// Set the resonance threshold. Unclamped: any real number is
    /// accepted, though only values within the field range are
    /// practically meaningful.
    pub fn set_threshold(&mut self, value: f32) {
        self.threshold = value;
        self.revision += 1;
        tracing::debug!(threshold = value, "resonance threshold changed");
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new(&FieldConfig::default())
    }
}
