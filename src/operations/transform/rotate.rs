use std::collections::BTreeSet;

use tracing::debug;

use crate::config::DEFAULT_ROTATION_STEP;
use crate::error::{Result, TopologyError};
use crate::math::{Rotation3, Vector3};
use crate::topology::{Hemisphere, StructureLayer};

/// Rotates a layer about the origin by a pointer delta and keeps its
/// near/far maps consistent.
///
/// `delta_x` turns the layer about the y axis and `delta_y` about the x
/// axis, each by `delta * step` radians.
pub struct Rotate {
    delta_x: f64,
    delta_y: f64,
    step: f64,
}

/// Per-call counters, logged once the layer is consistent again.
#[derive(Debug, Default)]
struct RotationSummary {
    switched_nodes: usize,
    near_plane_nodes: usize,
    collected_edges: usize,
    collected_faces: usize,
    moved_edges: usize,
    moved_faces: usize,
}

impl Rotate {
    /// Creates a new `Rotate` operation with the default step.
    #[must_use]
    pub fn new(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            step: DEFAULT_ROTATION_STEP,
        }
    }

    /// Sets the radians applied per unit of delta.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// The rotation applied to every node: yaw first, then pitch.
    #[must_use]
    pub fn rotation(&self) -> Rotation3 {
        let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), self.delta_x * self.step);
        let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), self.delta_y * self.step);
        pitch * yaw
    }

    /// Executes the rotation, modifying the layer in place.
    ///
    /// All nodes are rotated before any edge or face is reclassified, so
    /// every reclassification sees final positions. Only edges and faces
    /// touching a node that switched hemisphere or lies close to the
    /// viewing plane are reclassified.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge or face references a missing node.
    #[allow(clippy::float_cmp)]
    pub fn execute(&self, layer: &mut StructureLayer) -> Result<()> {
        if self.delta_x == 0.0 && self.delta_y == 0.0 {
            return Ok(());
        }
        let threshold = layer
            .max_edge_length
            .max(self.delta_x.abs())
            .max(self.delta_y.abs());
        let mut summary = RotationSummary::default();

        let touched = rotate_nodes(layer, &self.rotation(), threshold, &mut summary);
        let (edges, faces) = collect_boundary(layer, &touched);
        summary.collected_edges = edges.len();
        summary.collected_faces = faces.len();
        reclassify(layer, &edges, &faces, &mut summary)?;

        debug!(
            switched_nodes = summary.switched_nodes,
            near_plane_nodes = summary.near_plane_nodes,
            collected_edges = summary.collected_edges,
            collected_faces = summary.collected_faces,
            moved_edges = summary.moved_edges,
            moved_faces = summary.moved_faces,
            "rotated layer"
        );
        Ok(())
    }
}

/// Rotates every node once and moves those that crossed the viewing plane.
///
/// Returns the keys of nodes whose incident edges and faces may need a new
/// hemisphere: nodes that switched, and nodes within `threshold` of the
/// plane before or after the rotation.
fn rotate_nodes(
    layer: &mut StructureLayer,
    rotation: &Rotation3,
    threshold: f64,
    summary: &mut RotationSummary,
) -> Vec<String> {
    let mut touched = Vec::new();
    let mut switched = Vec::new();
    for side in Hemisphere::ALL {
        for (key, node) in layer.nodes.iter_side_mut(side) {
            let old_z = node.position.z;
            node.position = rotation * node.position;
            let new_z = node.position.z;

            let target = Hemisphere::of_point(&node.position);
            if target != side {
                switched.push((key.clone(), target));
                touched.push(key.clone());
            } else if old_z.abs() <= threshold || new_z.abs() <= threshold {
                summary.near_plane_nodes += 1;
                touched.push(key.clone());
            }
        }
    }
    summary.switched_nodes = switched.len();
    for (key, target) in switched {
        layer.nodes.move_to(&key, target);
    }
    touched
}

/// Incident edges and faces of the touched nodes, deduplicated.
fn collect_boundary(
    layer: &StructureLayer,
    touched: &[String],
) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut edges = BTreeSet::new();
    let mut faces = BTreeSet::new();
    for node in touched.iter().filter_map(|key| layer.get_node(key)) {
        edges.extend(node.edges.iter().cloned());
        faces.extend(node.faces.iter().cloned());
    }
    (edges, faces)
}

/// Recomputes the hemisphere of each collected edge and face from the
/// rotated node positions.
fn reclassify(
    layer: &mut StructureLayer,
    edges: &BTreeSet<String>,
    faces: &BTreeSet<String>,
    summary: &mut RotationSummary,
) -> Result<()> {
    for key in edges {
        let edge = layer
            .get_edge(key)
            .ok_or_else(|| TopologyError::EntityNotFound(format!("edge {key}")))?;
        let [a, b] = layer.node_positions(&edge.nodes)?;
        if layer.edges.move_to(key, Hemisphere::of_edge(&a, &b)) {
            summary.moved_edges += 1;
        }
    }
    for key in faces {
        let face = layer
            .get_face(key)
            .ok_or_else(|| TopologyError::EntityNotFound(format!("face {key}")))?;
        let [a, b, c] = layer.node_positions(&face.nodes)?;
        if layer.faces.move_to(key, Hemisphere::of_face(&a, &b, &c)) {
            summary.moved_faces += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::config::{BaseShape, BuildOptions, Frequency};
    use crate::math::Point3;
    use crate::operations::creation::MakeBaseSolid;
    use crate::operations::query::CheckPartition;
    use crate::operations::subdivision::Subdivide;

    fn options() -> BuildOptions {
        BuildOptions::new(2.0, 1.0)
    }

    fn geodesic(shape: BaseShape, m: u32, n: u32) -> StructureLayer {
        let base = MakeBaseSolid::new(shape, options()).execute().unwrap().layer;
        let frequency = Frequency::new(m, n).unwrap();
        Subdivide::new(frequency, options())
            .execute(&base)
            .unwrap()
            .layer
    }

    fn near_sets(layer: &StructureLayer) -> [Vec<String>; 3] {
        [
            layer.nodes.side(Hemisphere::Near).keys().cloned().collect(),
            layer.edges.side(Hemisphere::Near).keys().cloned().collect(),
            layer.faces.side(Hemisphere::Near).keys().cloned().collect(),
        ]
    }

    #[test]
    fn zero_delta_changes_nothing() {
        let mut layer = geodesic(BaseShape::Icosahedron, 2, 1);
        let before = near_sets(&layer);
        let position = layer.get_node("A").unwrap().position;
        Rotate::new(0.0, 0.0).execute(&mut layer).unwrap();
        assert_eq!(near_sets(&layer), before);
        assert_eq!(layer.get_node("A").unwrap().position, position);
    }

    #[test]
    fn quarter_turn_about_y() {
        let base = MakeBaseSolid::new(BaseShape::Octahedron, options())
            .execute()
            .unwrap();
        let mut layer = base.layer;
        Rotate::new(1.0, 0.0)
            .with_step(FRAC_PI_2)
            .execute(&mut layer)
            .unwrap();
        // +x turns to -z and +z turns to +x.
        let a = layer.get_node("A").unwrap().position;
        assert_relative_eq!(a, Point3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
        let e = layer.get_node("E").unwrap().position;
        assert_relative_eq!(e, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_eq!(layer.nodes.locate("A"), Some(Hemisphere::Near));
        assert_eq!(layer.nodes.locate("B"), Some(Hemisphere::Far));
        assert!(CheckPartition::new().execute(&layer).unwrap().is_empty());
    }

    #[test]
    fn partition_stays_consistent_over_many_small_steps() {
        let mut layer = geodesic(BaseShape::Icosahedron, 3, 1);
        for i in 0..40 {
            let delta = f64::from(i % 7) - 3.0;
            Rotate::new(delta * 4.0, 5.0 - delta).execute(&mut layer).unwrap();
            assert!(CheckPartition::new().execute(&layer).unwrap().is_empty());
        }
        assert_eq!(layer.nodes.len(), 10 * 13 + 2);
    }

    #[test]
    fn partition_stays_consistent_after_a_large_jump() {
        for (m, n) in [(2, 0), (2, 2), (1, 2)] {
            let mut layer = geodesic(BaseShape::Octahedron, m, n);
            Rotate::new(350.0, -220.0).execute(&mut layer).unwrap();
            assert!(
                CheckPartition::new().execute(&layer).unwrap().is_empty(),
                "({m}, {n})"
            );
        }
    }

    #[test]
    fn rotation_preserves_radius() {
        let mut layer = geodesic(BaseShape::Tetrahedron, 2, 1);
        Rotate::new(123.0, 45.0).execute(&mut layer).unwrap();
        for (_, _, node) in layer.nodes.iter() {
            assert_relative_eq!(node.position.coords.norm(), 1.0, max_relative = 1e-9);
        }
    }
}
