use crate::config::DEFAULT_ROTATION_STEP;
use crate::error::Result;
use crate::operations::transform::Rotate;

use super::color::ColorAssignment;
use super::layer::{BuiltLayer, StructureLayer};

/// The ordered layers of a build, base solid first.
///
/// Only the last layer is meant to be drawn and rotated. Earlier layers are
/// kept so the next one can be derived from them.
#[derive(Debug, Clone)]
pub struct Structure {
    /// Layers in build order. Never empty.
    pub layers: Vec<StructureLayer>,
    /// Color buckets of each layer, parallel to `layers`.
    pub colors: Vec<ColorAssignment>,
    rotation_step: f64,
}

impl Structure {
    /// Starts a structure from its base layer.
    #[must_use]
    pub fn new(base: BuiltLayer) -> Self {
        Self {
            layers: vec![base.layer],
            colors: vec![base.colors],
            rotation_step: DEFAULT_ROTATION_STEP,
        }
    }

    /// Sets the radians applied per unit of rotation input.
    #[must_use]
    pub fn with_rotation_step(mut self, step: f64) -> Self {
        self.rotation_step = step;
        self
    }

    #[must_use]
    pub fn rotation_step(&self) -> f64 {
        self.rotation_step
    }

    /// Appends a layer built from the current last layer.
    pub fn push(&mut self, built: BuiltLayer) {
        self.layers.push(built.layer);
        self.colors.push(built.colors);
    }

    /// Number of layers, base included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`: a structure holds at least its base layer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The layer a renderer draws.
    #[must_use]
    pub fn last_layer(&self) -> &StructureLayer {
        // `new` seeds one layer and nothing removes layers.
        &self.layers[self.layers.len() - 1]
    }

    pub fn last_layer_mut(&mut self) -> &mut StructureLayer {
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    /// Color buckets of the last layer.
    #[must_use]
    pub fn last_colors(&self) -> &ColorAssignment {
        &self.colors[self.colors.len() - 1]
    }

    /// Rotates the last layer by an input delta and reclassifies the
    /// elements that may have crossed the viewing plane.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge or face references a missing node.
    pub fn rotate(&mut self, delta_x: f64, delta_y: f64) -> Result<()> {
        let step = self.rotation_step;
        Rotate::new(delta_x, delta_y)
            .with_step(step)
            .execute(self.last_layer_mut())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::config::{BaseShape, Blueprint, BlueprintLayer, BuildOptions, Frequency};
    use crate::operations::query::CheckPartition;
    use crate::topology::Hemisphere;

    fn near_keys(structure: &super::Structure, index: usize) -> Vec<String> {
        structure.layers[index]
            .nodes
            .side(Hemisphere::Near)
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn rotate_acts_on_last_layer_only() {
        let mut blueprint = Blueprint::new(BaseShape::Octahedron);
        blueprint.add_layer(BlueprintLayer::new(Frequency::new(2, 0).unwrap()));
        let mut structure = blueprint.build(&BuildOptions::new(2.0, 1.0)).unwrap();
        let base_near = near_keys(&structure, 0);
        let last_near = near_keys(&structure, 1);

        structure.rotate(200.0, -150.0).unwrap();

        assert_eq!(structure.len(), 2);
        assert_eq!(near_keys(&structure, 0), base_near);
        assert_ne!(near_keys(&structure, 1), last_near);
        let mismatched = CheckPartition::new().execute(structure.last_layer()).unwrap();
        assert!(mismatched.is_empty());
    }

    #[test]
    fn rotation_step_is_configurable() {
        let structure = Blueprint::new(BaseShape::Tetrahedron)
            .build(&BuildOptions::default())
            .unwrap()
            .with_rotation_step(0.01);
        assert!((structure.rotation_step() - 0.01).abs() < f64::EPSILON);
        assert_eq!(structure.last_colors().edge_bucket_count(), 1);
    }
}
