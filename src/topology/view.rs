//! Read-only views handed to a renderer: positions resolved, keys attached.

use crate::error::Result;
use crate::math::Point3;

use super::hemisphere::Hemisphere;
use super::layer::StructureLayer;

/// A node as drawn.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    pub key: &'a str,
    pub position: Point3,
}

/// An edge as drawn.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub key: &'a str,
    pub endpoints: [Point3; 2],
    pub length: f64,
    pub color_bucket: usize,
}

/// A face as drawn, corners counterclockwise seen from outside.
#[derive(Debug, Clone, Copy)]
pub struct FaceView<'a> {
    pub key: &'a str,
    pub corners: [Point3; 3],
    pub area: f64,
    pub color_bucket: usize,
}

impl StructureLayer {
    /// Nodes of one hemisphere.
    pub fn node_views(&self, hemisphere: Hemisphere) -> impl Iterator<Item = NodeView<'_>> {
        self.nodes
            .side(hemisphere)
            .iter()
            .map(|(key, node)| NodeView {
                key,
                position: node.position,
            })
    }

    /// Edges of one hemisphere with their endpoint positions resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a missing node.
    pub fn edge_views(&self, hemisphere: Hemisphere) -> Result<Vec<EdgeView<'_>>> {
        self.edges
            .side(hemisphere)
            .iter()
            .map(|(key, edge)| {
                Ok(EdgeView {
                    key,
                    endpoints: self.node_positions(&edge.nodes)?,
                    length: edge.length,
                    color_bucket: edge.color_bucket,
                })
            })
            .collect()
    }

    /// Faces of one hemisphere with their corner positions resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if a face references a missing node.
    pub fn face_views(&self, hemisphere: Hemisphere) -> Result<Vec<FaceView<'_>>> {
        self.faces
            .side(hemisphere)
            .iter()
            .map(|(key, face)| {
                Ok(FaceView {
                    key,
                    corners: self.node_positions(&face.nodes)?,
                    area: face.area,
                    color_bucket: face.color_bucket,
                })
            })
            .collect()
    }
}
