use std::fmt;

use crate::error::Result;
use crate::topology::{Hemisphere, StructureLayer};

/// Which map a misplaced element was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node,
    Edge,
    Face,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => f.write_str("node"),
            Self::Edge => f.write_str("edge"),
            Self::Face => f.write_str("face"),
        }
    }
}

/// An element stored in the wrong hemisphere map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misplaced {
    pub kind: ElementKind,
    pub key: String,
    /// Map the element is in.
    pub stored: Hemisphere,
    /// Map its current geometry says it belongs in.
    pub expected: Hemisphere,
}

/// Recomputes every element's hemisphere from node positions and reports
/// those whose map disagrees.
///
/// Nodes are judged by z, edges by the mean z of their endpoints and faces
/// by the z of their outward normal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckPartition;

impl CheckPartition {
    /// Creates a new `CheckPartition` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the check. An empty result means the partition is consistent.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge or face references a missing node.
    pub fn execute(&self, layer: &StructureLayer) -> Result<Vec<Misplaced>> {
        let mut misplaced = Vec::new();
        let mut check = |kind: ElementKind,
                         key: &String,
                         stored: Hemisphere,
                         expected: Hemisphere| {
            if stored != expected {
                misplaced.push(Misplaced {
                    kind,
                    key: key.clone(),
                    stored,
                    expected,
                });
            }
        };

        for (stored, key, node) in layer.nodes.iter() {
            check(ElementKind::Node, key, stored, Hemisphere::of_point(&node.position));
        }
        for (stored, key, edge) in layer.edges.iter() {
            let [a, b] = layer.node_positions(&edge.nodes)?;
            check(ElementKind::Edge, key, stored, Hemisphere::of_edge(&a, &b));
        }
        for (stored, key, face) in layer.faces.iter() {
            let [a, b, c] = layer.node_positions(&face.nodes)?;
            check(ElementKind::Face, key, stored, Hemisphere::of_face(&a, &b, &c));
        }
        Ok(misplaced)
    }
}
