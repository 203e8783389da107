//! Symbolic Field - four-node resonance graph with layout and live monitoring
//!
//! The core of a field visualizer: four fixed symbolic nodes connected as
//! a complete graph, each carrying a scalar field value in `[0, 2]`. The
//! crate owns the simulation and the geometry; rendering stays outside.
//!
//! # Core Types
//!
//! - **FieldState**: per-node field values plus the resonance threshold
//! - **FieldMonitor**: cancellable periodic task that jitters the field
//! - **Scene**: renderable snapshot (placed nodes + weighted edges)
//!
//! # Architecture: Registry / State / Scene
//!
//! The system separates into three roles:
//!
//! 1. **Registry** - static identity: symbols, names, colors, edge pairs
//! 2. **State** - the one mutable store: values, threshold, revision
//! 3. **Scene** - pure projection of registry + state into renderables
//!
//! User edits and the monitor both write into the state through its
//! narrow API; every write clamps, so no reader ever sees a value
//! outside the field range. The rendering collaborator rebuilds the
//! scene after each change - building is pure and cheap by design.
//!
//! # Example: Edit, Query, Render
//!
//! ```rust
//! use symbolic_field::{scene, FieldState, LayoutMode};
//!
//! let mut field = FieldState::default();
//!
//! // A user edit pushes the primary node over the resonance threshold.
//! field.set(0, 0.9)?;
//! assert!(field.is_resonant(0)?);
//! assert_eq!(field.connection_strength(0, 1)?, 0.5);
//!
//! // Project the field into a renderable scene.
//! let scene = scene::build(LayoutMode::Tetrahedral, &field);
//! assert_eq!(scene.nodes.len(), 4);
//! assert_eq!(scene.edges.len(), 6);
//! # Ok::<(), symbolic_field::FieldError>(())
//! ```
//!
//! # Monitoring
//!
//! [`FieldMonitor`] simulates a live feed: each tick nudges every value
//! by a bounded random delta (clamped by the state). It needs a tokio
//! runtime, stops immediately on request, and accepts an injected
//! [`DeltaSource`] when deterministic deltas are wanted.

mod config;
mod error;
mod field;
mod layout;
mod monitor;
pub mod registry;
pub mod scene;

pub use config::FieldConfig;
pub use error::{FieldError, FieldResult};
pub use field::FieldState;
pub use layout::{position, LayoutMode, LayoutParams, Point2, Point3, Position};
pub use monitor::{DeltaSource, FieldMonitor, UniformJitter};
pub use registry::{NodeInfo, Rgb, EDGE_COUNT, NODE_COUNT};
pub use scene::{Scene, SceneEdge, SceneNode};
