use tracing::{debug, trace};

use crate::config::{BuildOptions, Frequency};
use crate::error::{BuildError, Result, TopologyError};
use crate::math::{barycentric_point, project_to_sphere, Point3};
use crate::topology::builder::LayerBuilder;
use crate::topology::keys::{edge_key, node_key};
use crate::topology::{BuiltLayer, Face, StructureLayer};

use super::lattice::{is_inside, Cell, CellVertex, Lattice, Weights};
use super::seam::{InterFaceConnections, SeamPosition, SeamRecord};

/// Subdivides every face of a layer on the lattice of a frequency pair.
///
/// Nodes of the previous layer are carried over unchanged. New nodes are
/// projected onto the sphere of `options.radius()`.
pub struct Subdivide {
    frequency: Frequency,
    options: BuildOptions,
}

impl Subdivide {
    /// Creates a new `Subdivide` operation.
    #[must_use]
    pub fn new(frequency: Frequency, options: BuildOptions) -> Self {
        Self { frequency, options }
    }

    /// Executes the subdivision, returning the next layer.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyLayer`] if `previous` has no faces, or an
    /// error if the options are invalid or `previous` is inconsistent.
    pub fn execute(&self, previous: &StructureLayer) -> Result<BuiltLayer> {
        self.options.validate()?;
        if previous.faces.is_empty() {
            return Err(BuildError::EmptyLayer.into());
        }

        let mut pass = Pass {
            lattice: Lattice::new(self.frequency),
            radius: self.options.radius(),
            builder: LayerBuilder::carrying_nodes(previous),
            seams: InterFaceConnections::new(),
        };
        for key in previous.faces.sorted_keys() {
            let face = previous
                .get_face(&key)
                .ok_or_else(|| TopologyError::EntityNotFound(format!("face {key}")))?;
            let frame = FaceFrame::new(face, previous)?;
            pass.subdivide_face(&frame)?;
        }

        let seam_count = pass.seams.len();
        let built = pass.builder.finish();
        debug!(
            class = %self.frequency.class(),
            frequency = %self.frequency,
            nodes = built.layer.nodes.len(),
            edges = built.layer.edges.len(),
            faces = built.layer.faces.len(),
            seams = seam_count,
            edge_buckets = built.colors.edge_bucket_count(),
            face_buckets = built.colors.face_bucket_count(),
            "subdivided layer"
        );
        Ok(built)
    }
}

/// Corners of a previous-layer face, counterclockwise from outside and
/// starting at the smallest name, so every face is walked with the same
/// handedness.
struct FaceFrame<'a> {
    names: [&'a str; 3],
    positions: [Point3; 3],
}

impl<'a> FaceFrame<'a> {
    fn new(face: &'a Face, layer: &StructureLayer) -> Result<Self> {
        let [a, b, c] = &face.nodes;
        let names = if a <= b && a <= c {
            [a.as_str(), b.as_str(), c.as_str()]
        } else if b <= c {
            [b.as_str(), c.as_str(), a.as_str()]
        } else {
            [c.as_str(), a.as_str(), b.as_str()]
        };
        let mut positions = [Point3::origin(); 3];
        for (slot, name) in positions.iter_mut().zip(names) {
            *slot = layer.node_position(name)?;
        }
        Ok(Self { names, positions })
    }

    /// The two corners bounding the edge opposite `edge`, smaller name first.
    fn edge_corners(&self, edge: usize) -> (usize, usize) {
        let (p, q) = ((edge + 1) % 3, (edge + 2) % 3);
        if self.names[p] <= self.names[q] {
            (p, q)
        } else {
            (q, p)
        }
    }

    fn edge_key(&self, edge: usize) -> String {
        let (lo, hi) = self.edge_corners(edge);
        edge_key(self.names[lo], self.names[hi])
    }

    fn seam_position(&self, edge: usize, weights: Weights) -> SeamPosition {
        let (lo, _) = self.edge_corners(edge);
        SeamPosition {
            along: weights[lo],
            depth: weights[edge],
        }
    }
}

/// State shared by all faces of one subdivision.
struct Pass {
    lattice: Lattice,
    radius: f64,
    builder: LayerBuilder,
    seams: InterFaceConnections,
}

impl Pass {
    fn subdivide_face(&mut self, frame: &FaceFrame<'_>) -> Result<()> {
        let records = self.place_points(frame)?;

        let lattice = self.lattice;
        for cell in lattice.cells() {
            match cell {
                Cell::Interior(points) => {
                    let keys = [
                        self.place(frame, points[0])?,
                        self.place(frame, points[1])?,
                        self.place(frame, points[2])?,
                    ];
                    self.builder.connect_triangle([&keys[0], &keys[1], &keys[2]])?;
                }
                Cell::Straddling { edge, vertices } => {
                    let edge_key = frame.edge_key(edge);
                    let Some(record) = self.seams.get(&edge_key) else {
                        // Closed by the neighbouring face once it has a record.
                        continue;
                    };
                    let mut keys: [String; 3] = Default::default();
                    for (slot, vertex) in keys.iter_mut().zip(vertices) {
                        *slot = match vertex {
                            CellVertex::Inside(w) => self.existing_key(frame, w)?,
                            CellVertex::Across(w) => {
                                record.lookup(frame.seam_position(edge, w))?.to_string()
                            }
                        };
                    }
                    trace!(edge = %edge_key, "closed seam triangle");
                    self.builder.connect_triangle([&keys[0], &keys[1], &keys[2]])?;
                }
                Cell::Outside => {}
            }
        }

        for (edge, record) in records.into_iter().enumerate() {
            self.seams.register(frame.edge_key(edge), record);
        }
        Ok(())
    }

    /// Creates every lattice point of the face and collects, per base edge,
    /// the points a neighbouring face may need to close its seam triangles.
    fn place_points(&mut self, frame: &FaceFrame<'_>) -> Result<[SeamRecord; 3]> {
        let mut records: [SeamRecord; 3] = Default::default();
        let points: Vec<Weights> = self.lattice.points().collect();
        let max_depth = self.lattice.edge_frequency();
        for weights in points {
            let key = self.place(frame, weights)?;
            for (edge, record) in records.iter_mut().enumerate() {
                let depth = weights[edge];
                if depth > 0 && depth < max_depth {
                    record.insert(frame.seam_position(edge, weights), key.clone());
                }
            }
        }
        Ok(records)
    }

    /// Key of the lattice point, creating its node on first sight.
    fn place(&mut self, frame: &FaceFrame<'_>, weights: Weights) -> Result<String> {
        let key = node_key(
            frame.names,
            self.lattice.key_weights(weights),
            self.lattice.key_total(),
        );
        if !self.builder.has_node(&key) {
            let [a, b, c] = &frame.positions;
            let flat = barycentric_point([a, b, c], weights, self.lattice.total());
            let position = project_to_sphere(&flat, self.radius)?;
            self.builder.add_node(key.clone(), position);
        }
        Ok(key)
    }

    /// Key of a lattice point already created by [`Pass::place_points`].
    fn existing_key(&self, frame: &FaceFrame<'_>, weights: Weights) -> Result<String> {
        debug_assert!(is_inside(&weights));
        let key = node_key(
            frame.names,
            self.lattice.key_weights(weights),
            self.lattice.key_total(),
        );
        if self.builder.has_node(&key) {
            Ok(key)
        } else {
            Err(TopologyError::EntityNotFound(format!("node {key}")).into())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use approx::assert_relative_eq;

    use super::*;
    use crate::config::BaseShape;
    use crate::error::GeodomeError;
    use crate::math::winds_outward;
    use crate::operations::creation::MakeBaseSolid;

    fn options() -> BuildOptions {
        BuildOptions::new(2.0, 1.0)
    }

    fn base(shape: BaseShape) -> StructureLayer {
        MakeBaseSolid::new(shape, options()).execute().unwrap().layer
    }

    fn subdivide(layer: &StructureLayer, m: u32, n: u32) -> StructureLayer {
        let frequency = Frequency::new(m, n).unwrap();
        Subdivide::new(frequency, options())
            .execute(layer)
            .unwrap()
            .layer
    }

    fn counts(layer: &StructureLayer) -> (usize, usize, usize) {
        (layer.nodes.len(), layer.edges.len(), layer.faces.len())
    }

    fn euler(layer: &StructureLayer) -> i64 {
        let (v, e, f) = counts(layer);
        i64::try_from(v).unwrap() - i64::try_from(e).unwrap() + i64::try_from(f).unwrap()
    }

    const PAIRS: [(u32, u32); 9] = [
        (2, 0),
        (0, 3),
        (1, 1),
        (2, 2),
        (2, 1),
        (1, 2),
        (3, 1),
        (4, 2),
        (3, 2),
    ];

    #[test]
    fn icosahedron_closed_form_counts() {
        let ico = base(BaseShape::Icosahedron);
        for (m, n) in PAIRS {
            let t = usize::try_from(Frequency::new(m, n).unwrap().triangulation_number()).unwrap();
            let layer = subdivide(&ico, m, n);
            assert_eq!(counts(&layer), (10 * t + 2, 30 * t, 20 * t), "({m}, {n})");
        }
    }

    #[test]
    fn documented_examples() {
        let ico = base(BaseShape::Icosahedron);
        assert_eq!(counts(&subdivide(&ico, 2, 0)), (42, 120, 80));
        assert_eq!(counts(&subdivide(&ico, 2, 2)), (122, 360, 240));
    }

    #[test]
    fn euler_characteristic_on_every_base() {
        for shape in [BaseShape::Tetrahedron, BaseShape::Octahedron] {
            let solid = base(shape);
            let (_, _, base_faces) = shape.element_counts();
            for (m, n) in PAIRS {
                let layer = subdivide(&solid, m, n);
                assert_eq!(euler(&layer), 2, "{shape} ({m}, {n})");
                let t = usize::try_from(Frequency::new(m, n).unwrap().triangulation_number()).unwrap();
                assert_eq!(layer.faces.len(), base_faces * t, "{shape} ({m}, {n})");
            }
        }
    }

    #[test]
    fn unit_frequency_reproduces_the_base() {
        for shape in [BaseShape::Tetrahedron, BaseShape::Octahedron, BaseShape::Icosahedron] {
            let solid = base(shape);
            for (m, n) in [(1, 0), (0, 1)] {
                let layer = subdivide(&solid, m, n);
                assert_eq!(layer.nodes.sorted_keys(), solid.nodes.sorted_keys());
                assert_eq!(layer.edges.sorted_keys(), solid.edges.sorted_keys());
                assert_eq!(layer.faces.sorted_keys(), solid.faces.sorted_keys());
            }
        }
    }

    #[test]
    fn subdivision_is_deterministic() {
        let ico = base(BaseShape::Icosahedron);
        let first = subdivide(&ico, 3, 1);
        let second = subdivide(&ico, 3, 1);
        assert_eq!(first.nodes.sorted_keys(), second.nodes.sorted_keys());
        assert_eq!(first.edges.sorted_keys(), second.edges.sorted_keys());
        assert_eq!(first.faces.sorted_keys(), second.faces.sorted_keys());
    }

    #[test]
    fn class_iii_mirror_pairs_differ() {
        let ico = base(BaseShape::Icosahedron);
        let left: BTreeSet<_> = subdivide(&ico, 2, 1).nodes.sorted_keys().into_iter().collect();
        let right: BTreeSet<_> = subdivide(&ico, 1, 2).nodes.sorted_keys().into_iter().collect();
        assert_eq!(left.len(), right.len());
        // Only the twelve base corners coincide.
        assert_eq!(left.intersection(&right).count(), 12);
    }

    #[test]
    fn every_edge_borders_two_faces() {
        let layer = subdivide(&base(BaseShape::Octahedron), 3, 2);
        for (_, key, edge) in layer.edges.iter() {
            let [a, b] = &edge.nodes;
            let faces_a = &layer.get_node(a).unwrap().faces;
            let faces_b = &layer.get_node(b).unwrap().faces;
            let shared = faces_a.iter().filter(|f| faces_b.contains(f)).count();
            assert_eq!(shared, 2, "edge {key}");
        }
    }

    #[test]
    fn faces_wind_outward() {
        let layer = subdivide(&base(BaseShape::Icosahedron), 2, 1);
        for (_, key, face) in layer.faces.iter() {
            let [a, b, c] = layer.node_positions(&face.nodes).unwrap();
            assert!(winds_outward(&a, &b, &c), "face {key}");
        }
    }

    #[test]
    fn nodes_stay_on_the_sphere_across_layers() {
        let first = subdivide(&base(BaseShape::Icosahedron), 1, 1);
        let second = subdivide(&first, 2, 1);
        assert_eq!(euler(&second), 2);
        assert_eq!(second.faces.len(), 20 * 3 * 7);
        for (_, _, node) in second.nodes.iter() {
            assert_relative_eq!(node.position.coords.norm(), 1.0, max_relative = 1e-6);
        }
    }

    #[test]
    fn subdivided_edges_are_shorter() {
        let ico = base(BaseShape::Icosahedron);
        let layer = subdivide(&ico, 3, 0);
        assert!(layer.max_edge_length < ico.max_edge_length / 2.0);
        assert!(layer.max_edge_length > ico.max_edge_length / 4.0);
    }

    #[test]
    fn empty_layer_is_rejected() {
        let frequency = Frequency::new(2, 0).unwrap();
        let result = Subdivide::new(frequency, options()).execute(&StructureLayer::new());
        assert!(matches!(
            result,
            Err(GeodomeError::Build(BuildError::EmptyLayer))
        ));
    }
}
