use crate::topology::StructureLayer;

/// Measures how far the nodes of a layer stray from the sphere.
pub struct RadiusDeviation {
    radius: f64,
}

impl RadiusDeviation {
    /// Creates a new `RadiusDeviation` query against `radius`.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Executes the query, returning the largest `|‖p‖ - r| / r` over all
    /// nodes. An empty layer deviates by zero.
    #[must_use]
    pub fn execute(&self, layer: &StructureLayer) -> f64 {
        layer
            .nodes
            .iter()
            .map(|(_, _, node)| (node.position.coords.norm() - self.radius).abs() / self.radius)
            .fold(0.0, f64::max)
    }
}
