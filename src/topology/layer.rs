use crate::error::{Result, TopologyError};
use crate::math::Point3;

use super::color::ColorAssignment;
use super::edge::Edge;
use super::face::Face;
use super::hemisphere::Hemispheres;
use super::node::Node;

/// One step of a geodesic build: every node, edge and face, each split into
/// near and far maps.
#[derive(Debug, Clone, Default)]
pub struct StructureLayer {
    /// Nodes keyed by canonical name.
    pub nodes: Hemispheres<Node>,
    /// Edges keyed by canonical edge key.
    pub edges: Hemispheres<Edge>,
    /// Faces keyed by canonical face key.
    pub faces: Hemispheres<Face>,
    /// Longest edge of the layer, used as the rotation sensitivity threshold.
    pub max_edge_length: f64,
}

impl StructureLayer {
    /// Creates an empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a node by key.
    #[must_use]
    pub fn get_node(&self, key: &str) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Looks up an edge by key.
    #[must_use]
    pub fn get_edge(&self, key: &str) -> Option<&Edge> {
        self.edges.get(key)
    }

    /// Looks up a face by key.
    #[must_use]
    pub fn get_face(&self, key: &str) -> Option<&Face> {
        self.faces.get(key)
    }

    /// Current position of a node that must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if no node has this key.
    pub fn node_position(&self, key: &str) -> Result<Point3> {
        self.nodes
            .get(key)
            .map(|node| node.position)
            .ok_or_else(|| TopologyError::EntityNotFound(format!("node {key}")).into())
    }

    /// Positions of several nodes that must exist, in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if any key is missing.
    pub fn node_positions<const N: usize>(&self, keys: &[String; N]) -> Result<[Point3; N]> {
        let mut out = [Point3::origin(); N];
        for (slot, key) in out.iter_mut().zip(keys.iter()) {
            *slot = self.node_position(key)?;
        }
        Ok(out)
    }
}

/// A freshly built layer together with its rendering color buckets.
#[derive(Debug, Clone, Default)]
pub struct BuiltLayer {
    /// The geometry.
    pub layer: StructureLayer,
    /// Color buckets assigned while building it.
    pub colors: ColorAssignment,
}
