//! Node registry - the fixed catalog of the four field nodes
//!
//! Node identities never change at runtime: four nodes, stable indices
//! `0..4`, connected as a complete graph (6 edges). Edges are not stored;
//! [`edge_pairs`] derives them on demand.

use crate::error::{FieldError, FieldResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of nodes in the field. Fixed for the process lifetime.
pub const NODE_COUNT: usize = 4;

/// Number of edges in the complete graph over [`NODE_COUNT`] nodes.
pub const EDGE_COUNT: usize = NODE_COUNT * (NODE_COUNT - 1) / 2;

/// Packed RGB color for a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Static identity of a field node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NodeInfo {
    /// Stable index in `0..NODE_COUNT`.
    pub index: usize,

    /// Display glyph.
    pub symbol: char,

    /// Display name.
    pub name: &'static str,

    /// Display color.
    pub color: Rgb,
}

/// The canonical node table. Index 0 is the primary node.
const NODES: [NodeInfo; NODE_COUNT] = [
    NodeInfo {
        index: 0,
        symbol: '●',
        name: "OBI-WAN",
        color: Rgb::new(0, 0, 255),
    },
    NodeInfo {
        index: 1,
        symbol: '▼',
        name: "TATA",
        color: Rgb::new(255, 0, 0),
    },
    NodeInfo {
        index: 2,
        symbol: '▲',
        name: "ATLAS",
        color: Rgb::new(0, 128, 0),
    },
    NodeInfo {
        index: 3,
        symbol: '■',
        name: "DOJO",
        color: Rgb::new(128, 0, 128),
    },
];

/// All four nodes in canonical order.
pub fn nodes() -> &'static [NodeInfo; NODE_COUNT] {
    &NODES
}

/// Look up a single node by index.
pub fn node(index: usize) -> FieldResult<&'static NodeInfo> {
    NODES.get(index).ok_or(FieldError::InvalidIndex {
        index,
        limit: NODE_COUNT,
    })
}

/// All unordered node index pairs `(i, j)` with `i < j`.
///
/// One pair per edge of the complete graph; exactly [`EDGE_COUNT`] items.
pub fn edge_pairs() -> impl Iterator<Item = (usize, usize)> {
    (0..NODE_COUNT).flat_map(|i| (i + 1..NODE_COUNT).map(move |j| (i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let nodes = nodes();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].symbol, '●');
        assert_eq!(nodes[0].name, "OBI-WAN");
        for (i, info) in nodes.iter().enumerate() {
            assert_eq!(info.index, i);
        }
    }

    #[test]
    fn test_node_lookup() {
        assert_eq!(node(3).unwrap().name, "DOJO");
        assert_eq!(
            node(4),
            Err(FieldError::InvalidIndex { index: 4, limit: 4 })
        );
    }

    #[test]
    fn test_edge_pairs_complete() {
        let pairs: Vec<_> = edge_pairs().collect();
        assert_eq!(pairs.len(), EDGE_COUNT);
        assert_eq!(
            pairs,
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }
}
