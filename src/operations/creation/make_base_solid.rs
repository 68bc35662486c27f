use tracing::debug;

use crate::config::{BaseShape, BuildOptions};
use crate::error::Result;
use crate::topology::BuiltLayer;

use super::{icosahedron, octahedron, tetrahedron};

/// Creates the undivided base solid, inscribed in the sphere of
/// `options.radius()`.
pub struct MakeBaseSolid {
    shape: BaseShape,
    options: BuildOptions,
}

impl MakeBaseSolid {
    /// Creates a new `MakeBaseSolid` operation.
    #[must_use]
    pub fn new(shape: BaseShape, options: BuildOptions) -> Self {
        Self { shape, options }
    }

    /// Executes the operation, returning the first layer of a structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn execute(&self) -> Result<BuiltLayer> {
        self.options.validate()?;
        let radius = self.options.radius();
        let built = match self.shape {
            BaseShape::Tetrahedron => tetrahedron::build(radius)?,
            BaseShape::Octahedron => octahedron::build(radius)?,
            BaseShape::Icosahedron => icosahedron::build(radius)?,
        };
        debug!(
            shape = %self.shape,
            nodes = built.layer.nodes.len(),
            edges = built.layer.edges.len(),
            faces = built.layer.faces.len(),
            max_edge_length = built.layer.max_edge_length,
            "created base solid"
        );
        Ok(built)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::topology::Hemisphere;

    fn options() -> BuildOptions {
        BuildOptions::new(400.0, 0.5)
    }

    #[test]
    fn element_counts() {
        for shape in [BaseShape::Tetrahedron, BaseShape::Octahedron, BaseShape::Icosahedron] {
            let layer = MakeBaseSolid::new(shape, options()).execute().unwrap().layer;
            let counts = (layer.nodes.len(), layer.edges.len(), layer.faces.len());
            assert_eq!(counts, shape.element_counts(), "{shape}");
        }
    }

    #[test]
    fn nodes_lie_on_the_sphere() {
        for shape in [BaseShape::Tetrahedron, BaseShape::Octahedron, BaseShape::Icosahedron] {
            let layer = MakeBaseSolid::new(shape, options()).execute().unwrap().layer;
            for (_, _, node) in layer.nodes.iter() {
                assert_relative_eq!(node.position.coords.norm(), 100.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn base_edges_share_one_length() {
        for shape in [BaseShape::Tetrahedron, BaseShape::Octahedron, BaseShape::Icosahedron] {
            let built = MakeBaseSolid::new(shape, options()).execute().unwrap();
            for (_, _, edge) in built.layer.edges.iter() {
                assert_relative_eq!(edge.length, built.layer.max_edge_length, max_relative = 1e-12);
            }
            assert_eq!(built.colors.face_bucket_count(), 1);
        }
    }

    #[test]
    fn octahedron_faces_split_evenly() {
        let layer = MakeBaseSolid::new(BaseShape::Octahedron, options())
            .execute()
            .unwrap()
            .layer;
        assert_eq!(layer.faces.side(Hemisphere::Near).len(), 4);
        assert_eq!(layer.faces.side(Hemisphere::Far).len(), 4);
        // Only the +z corner is strictly behind the viewing plane.
        assert_eq!(layer.nodes.side(Hemisphere::Far).len(), 1);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let options = BuildOptions::new(-1.0, 0.5);
        assert!(MakeBaseSolid::new(BaseShape::Icosahedron, options).execute().is_err());
    }
}
