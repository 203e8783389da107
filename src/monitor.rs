//! Field monitoring - the periodic perturbation task
//!
//! A stand-in for a real monitoring feed: while running, every field
//! value takes a small bounded random step each tick and the clamp in
//! [`FieldState`] reflects it at the range edges. That keeps the field
//! visually alive indefinitely without drift or decay to a fixed point.
//!
//! The default jitter is unseeded on purpose - this is visual noise,
//! not a correctness-critical computation. Tests (or reproducible
//! demos) inject their own [`DeltaSource`] instead.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::config::FieldConfig;
use crate::field::FieldState;
use crate::registry::NODE_COUNT;

/// Source of per-node perturbation deltas.
///
/// Implementations return one delta per call, bounded by `bound` in
/// magnitude. Injected into [`FieldMonitor`] so tests can script exact
/// delta sequences.
pub trait DeltaSource: Send + 'static {
    fn next_delta(&mut self, bound: f32) -> f32;
}

/// Uniform random jitter in `[-bound, +bound]`. The default source.
pub struct UniformJitter {
    rng: SmallRng,
}

impl UniformJitter {
    /// Unseeded jitter (entropy-seeded, non-reproducible).
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeded jitter for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl DeltaSource for UniformJitter {
    fn next_delta(&mut self, bound: f32) -> f32 {
        if bound <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-bound..=bound)
    }
}

/// Handle to the monitoring task. At most one task is active per
/// monitor; a second `start` while running is refused.
///
/// Requires a tokio runtime: `start` spawns the periodic task onto the
/// current runtime.
pub struct FieldMonitor {
    field: Arc<Mutex<FieldState>>,
    config: FieldConfig,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FieldMonitor {
    /// Create an idle monitor over a shared field.
    pub fn new(field: Arc<Mutex<FieldState>>, config: FieldConfig) -> Self {
        Self {
            field,
            config,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Clone of the shared field handle.
    pub fn field(&self) -> Arc<Mutex<FieldState>> {
        Arc::clone(&self.field)
    }

    /// Whether the monitoring task is active.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start monitoring with the default [`UniformJitter`].
    ///
    /// Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        self.start_with(UniformJitter::new())
    }

    /// Start monitoring with an injected delta source.
    ///
    /// Returns `false` if already running.
    pub fn start_with(&mut self, mut source: impl DeltaSource) -> bool {
        if self.running.swap(true, Ordering::SeqCst) {
            return false;
        }

        let field = Arc::clone(&self.field);
        let running = Arc::clone(&self.running);
        let tick = self.config.tick;
        let bound = self.config.perturbation;

        self.handle = Some(tokio::spawn(async move {
            loop {
                sleep(tick).await;
                let mut guard = field.lock();
                // Checked under the field lock so stop() can fence out
                // any tick that has not yet applied its mutations.
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                for i in 0..NODE_COUNT {
                    let delta = source.next_delta(bound);
                    let _ = guard.apply_delta(i, delta);
                }
                tracing::trace!(revision = guard.revision(), "monitor tick applied");
            }
        }));

        tracing::info!(tick_ms = self.config.tick_ms(), "field monitoring started");
        true
    }

    /// Stop monitoring. Immediate: once this returns, no further tick
    /// mutates the field.
    ///
    /// Returns `false` if already idle.
    pub fn stop(&mut self) -> bool {
        if !self.running.swap(false, Ordering::SeqCst) {
            return false;
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        // A tick past its flag check holds the field lock; acquiring it
        // once here means any in-flight mutation has finished.
        drop(self.field.lock());
        tracing::info!("field monitoring stopped");
        true
    }
}

impl Drop for FieldMonitor {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Scripted source: replays a fixed delta cycle, ignoring the bound.
    struct Script {
        deltas: Vec<f32>,
        at: usize,
    }

    impl Script {
        fn new(deltas: Vec<f32>) -> Self {
            Self { deltas, at: 0 }
        }
    }

    impl DeltaSource for Script {
        fn next_delta(&mut self, _bound: f32) -> f32 {
            let delta = self.deltas[self.at % self.deltas.len()];
            self.at += 1;
            delta
        }
    }

    fn shared_field(config: &FieldConfig) -> Arc<Mutex<FieldState>> {
        Arc::new(Mutex::new(FieldState::new(config)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_perturb_all_nodes() {
        let config = FieldConfig::default();
        let field = shared_field(&config);
        let mut monitor = FieldMonitor::new(Arc::clone(&field), config);

        assert!(monitor.start_with(Script::new(vec![0.1])));
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Two ticks of +0.1 on every node.
        let values = field.lock().values();
        for value in values {
            assert!((value - 0.7).abs() < 1e-5);
        }
        monitor.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_values_stay_bounded() {
        let config = FieldConfig::default();
        let field = shared_field(&config);
        let mut monitor = FieldMonitor::new(Arc::clone(&field), config);

        // Large positive deltas would overflow the range without the clamp.
        assert!(monitor.start_with(Script::new(vec![5.0, -9.0, 5.0])));
        tokio::time::sleep(Duration::from_millis(6500)).await;

        for value in field.lock().values() {
            assert!((0.0..=2.0).contains(&value));
        }
        monitor.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_mutation() {
        let config = FieldConfig::default();
        let field = shared_field(&config);
        let mut monitor = FieldMonitor::new(Arc::clone(&field), config);

        assert!(monitor.start_with(Script::new(vec![0.05])));
        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert!(monitor.stop());
        assert!(!monitor.is_running());

        let snapshot = field.lock().values();
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(field.lock().values(), snapshot);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_instance() {
        let config = FieldConfig::default();
        let field = shared_field(&config);
        let mut monitor = FieldMonitor::new(field, config);

        assert!(monitor.start());
        assert!(!monitor.start());
        assert!(monitor.is_running());

        assert!(monitor.stop());
        assert!(!monitor.stop());

        // A fresh start after stop is allowed again.
        assert!(monitor.start());
        monitor.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_edits_interleave_with_ticks() {
        let config = FieldConfig::default();
        let field = shared_field(&config);
        let mut monitor = FieldMonitor::new(Arc::clone(&field), config);

        assert!(monitor.start_with(Script::new(vec![0.0])));
        tokio::time::sleep(Duration::from_millis(1500)).await;

        field.lock().set(2, 1.8).unwrap();
        tokio::time::sleep(Duration::from_millis(1000)).await;

        // Zero-delta ticks leave the edit in place.
        assert!((field.lock().get(2).unwrap() - 1.8).abs() < 1e-5);
        monitor.stop();
    }

    #[test]
    fn test_seeded_jitter_reproducible() {
        let mut a = UniformJitter::seeded(42);
        let mut b = UniformJitter::seeded(42);
        for _ in 0..32 {
            let delta = a.next_delta(0.1);
            assert_eq!(delta, b.next_delta(0.1));
            assert!((-0.1..=0.1).contains(&delta));
        }
    }

    #[test]
    fn test_zero_bound_yields_zero() {
        let mut jitter = UniformJitter::seeded(7);
        assert_eq!(jitter.next_delta(0.0), 0.0);
    }
}
