//! Layout engine - deterministic node placement per layout mode
//!
//! Positions are pure functions of `(node index, mode)`: cheap to
//! recompute, never cached, never stale. Three modes exist:
//!
//! - **Circular** (2D): nodes on a circle of fixed radius, for the flat
//!   overview. The renderer offsets all positions to center its viewport.
//! - **Tetrahedral** (3D): hand-authored apex/base coordinates. These are
//!   deliberately *not* a regular tetrahedron; the constants match the
//!   shipped visual and correcting them would change it.
//! - **Triadic** (3D): a larger "tripod" variant with one node above,
//!   a lower base pair, and one node centered below.

use std::f32::consts::TAU;

use crate::error::{FieldError, FieldResult};
use crate::registry::NODE_COUNT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which arrangement to place nodes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayoutMode {
    /// Flat circle, 2D.
    Circular,
    /// Apex-over-base arrangement, 3D.
    Tetrahedral,
    /// Larger tripod arrangement, 3D.
    Triadic,
}

/// A 2D point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

/// A 3D point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A node position: planar for 2D modes, spatial for 3D modes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position {
    Planar(Point2),
    Spatial(Point3),
}

/// Layout constants, overridable per instance.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutParams {
    /// Circle radius for [`LayoutMode::Circular`].
    pub circular_radius: f32,

    /// Fixed `(x, y, z)` per node for [`LayoutMode::Tetrahedral`].
    pub tetrahedral: [[f32; 3]; NODE_COUNT],

    /// Fixed `(x, y, z)` per node for [`LayoutMode::Triadic`].
    pub triadic: [[f32; 3]; NODE_COUNT],
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            circular_radius: 120.0,
            tetrahedral: [
                [0.0, 1.0, 0.0],
                [-1.0, -1.0, 0.0],
                [1.0, -1.0, 0.0],
                [0.0, 0.0, -1.0],
            ],
            triadic: [
                [0.0, 2.0, 0.0],
                [-2.0, -1.0, 0.0],
                [2.0, -1.0, 0.0],
                [0.0, -2.0, 0.0],
            ],
        }
    }
}

impl LayoutParams {
    /// Position of node `index` under `mode`.
    ///
    /// Deterministic: the same `(index, mode)` pair always yields the
    /// same point. Indices outside `0..NODE_COUNT` are rejected, not
    /// clamped.
    pub fn position(&self, index: usize, mode: LayoutMode) -> FieldResult<Position> {
        if index >= NODE_COUNT {
            return Err(FieldError::InvalidIndex {
                index,
                limit: NODE_COUNT,
            });
        }
        Ok(self.point(index, mode))
    }

    /// Infallible placement for an already-validated index.
    pub(crate) fn point(&self, index: usize, mode: LayoutMode) -> Position {
        debug_assert!(index < NODE_COUNT);
        match mode {
            LayoutMode::Circular => {
                let angle = TAU * index as f32 / NODE_COUNT as f32;
                Position::Planar(Point2 {
                    x: self.circular_radius * angle.cos(),
                    y: self.circular_radius * angle.sin(),
                })
            }
            LayoutMode::Tetrahedral => {
                let [x, y, z] = self.tetrahedral[index];
                Position::Spatial(Point3 { x, y, z })
            }
            LayoutMode::Triadic => {
                let [x, y, z] = self.triadic[index];
                Position::Spatial(Point3 { x, y, z })
            }
        }
    }
}

/// Position of node `index` under `mode`, using the default constants.
pub fn position(index: usize, mode: LayoutMode) -> FieldResult<Position> {
    LayoutParams::default().position(index, mode)
}
