//! Scene builder - assembles the renderable view of the field
//!
//! A [`Scene`] is a plain value: four placed nodes carrying their field
//! readout and six edges whose opacity encodes connection strength.
//! Building one is pure and cheap, so the rendering collaborator simply
//! rebuilds after every field change instead of diffing; the carried
//! revision lets it skip redraws when nothing moved.

use crate::field::FieldState;
use crate::layout::{LayoutMode, LayoutParams, Position};
use crate::registry::{self, Rgb};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A node ready to render. Serialize-only under the serde feature
/// (scenes are outputs; the node name is a `'static` table entry).
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SceneNode {
    pub index: usize,
    pub symbol: char,
    pub name: &'static str,
    pub color: Rgb,
    pub position: Position,
    /// Field value at build time.
    pub value: f32,
    /// Whether the node had reached the resonance threshold.
    pub resonant: bool,
}

/// An edge ready to render.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SceneEdge {
    /// Node index pair `(i, j)`, `i < j`.
    pub between: (usize, usize),
    pub from: Position,
    pub to: Position,
    /// Connection strength mapped linearly onto `[0, 1]`.
    pub opacity: f32,
}

/// The full renderable scene for one layout mode.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Scene {
    pub mode: LayoutMode,
    /// Field revision this scene reflects.
    pub revision: u64,
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

/// Build a scene with the default layout constants.
pub fn build(mode: LayoutMode, field: &FieldState) -> Scene {
    build_with(mode, field, &LayoutParams::default())
}

/// Build a scene with explicit layout constants.
pub fn build_with(mode: LayoutMode, field: &FieldState, params: &LayoutParams) -> Scene {
    let values = field.values();
    let threshold = field.threshold();

    let nodes = registry::nodes()
        .iter()
        .map(|info| SceneNode {
            index: info.index,
            symbol: info.symbol,
            name: info.name,
            color: info.color,
            position: params.point(info.index, mode),
            value: values[info.index],
            resonant: values[info.index] >= threshold,
        })
        .collect();

    let edges = registry::edge_pairs()
        .map(|(i, j)| {
            let strength = values[i].min(values[j]);
            SceneEdge {
                between: (i, j),
                from: params.point(i, mode),
                to: params.point(j, mode),
                opacity: (strength / 2.0).clamp(0.0, 1.0),
            }
        })
        .collect();

    Scene {
        mode,
        revision: field.revision(),
        nodes,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{EDGE_COUNT, NODE_COUNT};

    #[test]
    fn test_counts_fixed_across_modes() {
        let mut field = FieldState::default();
        field.set(0, 0.0).unwrap();
        field.set(3, 2.0).unwrap();

        for mode in [
            LayoutMode::Circular,
            LayoutMode::Tetrahedral,
            LayoutMode::Triadic,
        ] {
            let scene = build(mode, &field);
            assert_eq!(scene.nodes.len(), NODE_COUNT);
            assert_eq!(scene.edges.len(), EDGE_COUNT);
            assert_eq!(scene.mode, mode);
        }
    }

    #[test]
    fn test_nodes_carry_field_readout() {
        let mut field = FieldState::default();
        field.set(0, 0.9).unwrap();

        let scene = build(LayoutMode::Circular, &field);
        assert!((scene.nodes[0].value - 0.9).abs() < 1e-6);
        assert!(scene.nodes[0].resonant);
        assert!(!scene.nodes[1].resonant);
        assert_eq!(scene.nodes[0].symbol, '●');
        assert_eq!(scene.nodes[0].name, "OBI-WAN");
    }

    #[test]
    fn test_edge_opacity_is_half_strength() {
        let mut field = FieldState::default();
        field.set(0, 1.2).unwrap();
        field.set(1, 0.4).unwrap();

        let scene = build(LayoutMode::Tetrahedral, &field);
        let edge = scene
            .edges
            .iter()
            .find(|e| e.between == (0, 1))
            .expect("edge (0, 1) missing");
        // strength = min(1.2, 0.4) = 0.4 -> opacity 0.2
        assert!((edge.opacity - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_opacity_bounds() {
        let mut field = FieldState::default();
        for i in 0..NODE_COUNT {
            field.set(i, 2.0).unwrap();
        }
        let scene = build(LayoutMode::Triadic, &field);
        for edge in &scene.edges {
            assert!((edge.opacity - 1.0).abs() < 1e-6);
        }

        for i in 0..NODE_COUNT {
            field.set(i, 0.0).unwrap();
        }
        let scene = build(LayoutMode::Triadic, &field);
        for edge in &scene.edges {
            assert_eq!(edge.opacity, 0.0);
        }
    }

    #[test]
    fn test_edge_endpoints_match_node_positions() {
        let field = FieldState::default();
        let scene = build(LayoutMode::Circular, &field);
        for edge in &scene.edges {
            let (i, j) = edge.between;
            assert_eq!(edge.from, scene.nodes[i].position);
            assert_eq!(edge.to, scene.nodes[j].position);
        }
    }

    #[test]
    fn test_revision_tracks_field() {
        let mut field = FieldState::default();
        let before = build(LayoutMode::Circular, &field);
        field.set(1, 1.1).unwrap();
        let after = build(LayoutMode::Circular, &field);
        assert!(after.revision > before.revision);
    }

    #[test]
    fn test_rebuild_is_stable() {
        // Pure: two builds from the same state agree.
        let field = FieldState::default();
        let a = build(LayoutMode::Triadic, &field);
        let b = build(LayoutMode::Triadic, &field);
        assert_eq!(a.revision, b.revision);
        for (x, y) in a.nodes.iter().zip(b.nodes.iter()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.value, y.value);
        }
    }
}
