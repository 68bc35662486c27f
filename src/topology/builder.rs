use nalgebra::distance;

use crate::error::Result;
use crate::math::{triangle_area, winds_outward, Point3};

use super::color::ColorAssignment;
use super::edge::Edge;
use super::face::Face;
use super::hemisphere::Hemisphere;
use super::keys::{edge_key, face_key};
use super::layer::{BuiltLayer, StructureLayer};
use super::node::Node;

/// Incrementally assembles a layer.
///
/// Every `add`/`connect` call is idempotent on the canonical key, so two
/// code paths reaching the same node, edge or face produce one element.
#[derive(Debug, Default)]
pub(crate) struct LayerBuilder {
    layer: StructureLayer,
    colors: ColorAssignment,
}

impl LayerBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts a layer holding copies of `previous`'s nodes with their
    /// connections reset. Edges and faces are not carried.
    pub(crate) fn carrying_nodes(previous: &StructureLayer) -> Self {
        let mut builder = Self::new();
        for (hemisphere, key, node) in previous.nodes.iter() {
            builder
                .layer
                .nodes
                .insert(hemisphere, key.clone(), node.carried_forward());
        }
        builder
    }

    pub(crate) fn has_node(&self, key: &str) -> bool {
        self.layer.nodes.contains(key)
    }

    /// Adds a node unless one with the same key exists.
    pub(crate) fn add_node(&mut self, name: String, position: Point3) {
        if self.has_node(&name) {
            return;
        }
        let hemisphere = Hemisphere::of_point(&position);
        self.layer
            .nodes
            .insert(hemisphere, name.clone(), Node::new(name, position));
    }

    /// Connects two existing nodes. Returns `false` if the edge existed.
    pub(crate) fn connect_edge(&mut self, a: &str, b: &str) -> Result<bool> {
        let key = edge_key(a, b);
        if self.layer.edges.contains(&key) {
            return Ok(false);
        }
        let pa = self.layer.node_position(a)?;
        let pb = self.layer.node_position(b)?;

        let length = distance(&pa, &pb);
        let color_bucket = self.colors.edge_bucket(length);
        self.layer.max_edge_length = self.layer.max_edge_length.max(length);

        self.attach(a, |node| node.add_edge(key.clone()));
        self.attach(b, |node| node.add_edge(key.clone()));

        let edge = Edge {
            nodes: [a.to_string(), b.to_string()],
            length,
            color_bucket,
        };
        self.layer
            .edges
            .insert(Hemisphere::of_edge(&pa, &pb), key, edge);
        Ok(true)
    }

    /// Connects three existing nodes into a face, stored counterclockwise
    /// seen from outside. Returns `false` if the face existed.
    pub(crate) fn connect_face(&mut self, a: &str, b: &str, c: &str) -> Result<bool> {
        let key = face_key(a, b, c);
        if self.layer.faces.contains(&key) {
            return Ok(false);
        }
        let pa = self.layer.node_position(a)?;
        let mut pb = self.layer.node_position(b)?;
        let mut pc = self.layer.node_position(c)?;
        let (b, c) = if winds_outward(&pa, &pb, &pc) {
            (b, c)
        } else {
            std::mem::swap(&mut pb, &mut pc);
            (c, b)
        };

        let area = triangle_area(&pa, &pb, &pc);
        let sides = [
            distance(&pa, &pb),
            distance(&pb, &pc),
            distance(&pc, &pa),
        ];
        let color_bucket = self.colors.face_bucket(area, sides);

        for name in [a, b, c] {
            self.attach(name, |node| node.add_face(key.clone()));
        }

        let face = Face {
            nodes: [a.to_string(), b.to_string(), c.to_string()],
            area,
            color_bucket,
        };
        self.layer
            .faces
            .insert(Hemisphere::of_face(&pa, &pb, &pc), key, face);
        Ok(true)
    }

    /// Connects the three sides and the face of a triangle.
    pub(crate) fn connect_triangle(&mut self, corners: [&str; 3]) -> Result<()> {
        let [a, b, c] = corners;
        self.connect_edge(a, b)?;
        self.connect_edge(b, c)?;
        self.connect_edge(c, a)?;
        self.connect_face(a, b, c)?;
        Ok(())
    }

    pub(crate) fn finish(self) -> BuiltLayer {
        BuiltLayer {
            layer: self.layer,
            colors: self.colors,
        }
    }

    fn attach(&mut self, name: &str, update: impl FnOnce(&mut Node)) {
        if let Some(node) = self.layer.nodes.get_mut(name) {
            update(node);
        }
    }
}
