use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{BuildError, GeodomeError, Result};
use crate::operations::creation::MakeBaseSolid;
use crate::operations::subdivision::Subdivide;
use crate::topology::Structure;

use super::frequency::{Frequency, SubdivisionClass};
use super::options::BuildOptions;

/// The undivided platonic solid a build starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BaseShape {
    /// 4 nodes, 6 edges, 4 faces.
    Tetrahedron,
    /// 6 nodes, 12 edges, 8 faces.
    Octahedron,
    /// 12 nodes, 30 edges, 20 faces.
    Icosahedron,
}

impl BaseShape {
    /// `(nodes, edges, faces)` of the undivided solid.
    #[must_use]
    pub fn element_counts(self) -> (usize, usize, usize) {
        match self {
            Self::Tetrahedron => (4, 6, 4),
            Self::Octahedron => (6, 12, 8),
            Self::Icosahedron => (12, 30, 20),
        }
    }
}

impl fmt::Display for BaseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tetrahedron => f.write_str("tetrahedron"),
            Self::Octahedron => f.write_str("octahedron"),
            Self::Icosahedron => f.write_str("icosahedron"),
        }
    }
}

impl FromStr for BaseShape {
    type Err = GeodomeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tetrahedron" => Ok(Self::Tetrahedron),
            "octahedron" => Ok(Self::Octahedron),
            "icosahedron" => Ok(Self::Icosahedron),
            _ => Err(BuildError::UnknownBaseShape(s.to_string()).into()),
        }
    }
}

/// One subdivision step of a blueprint.
///
/// The class is normally inferred from the frequency. A declared class is
/// only a cross-check and must agree with the inferred one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlueprintLayer {
    /// Frequency pair `(m, n)`.
    pub frequency: Frequency,
    /// Class requested by the caller, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub declared_class: Option<SubdivisionClass>,
}

impl BlueprintLayer {
    /// A layer whose class is inferred from `frequency`.
    #[must_use]
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            declared_class: None,
        }
    }

    /// A layer with an explicitly declared class.
    #[must_use]
    pub fn with_class(class: SubdivisionClass, frequency: Frequency) -> Self {
        Self {
            frequency,
            declared_class: Some(class),
        }
    }

    /// A layer from a class and a single edge frequency `v`.
    ///
    /// # Errors
    ///
    /// See [`Frequency::for_class`].
    pub fn from_class_and_frequency(class: SubdivisionClass, v: u32) -> Result<Self> {
        Ok(Self::with_class(class, Frequency::for_class(class, v)?))
    }

    /// The class this layer subdivides with.
    #[must_use]
    pub fn class(&self) -> SubdivisionClass {
        self.frequency.class()
    }

    /// Checks that a declared class agrees with the frequency.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidFrequency`] on a mismatch.
    pub fn validate(&self) -> Result<()> {
        match self.declared_class {
            Some(declared) if declared != self.class() => Err(BuildError::InvalidFrequency {
                m: i64::from(self.frequency.m()),
                n: i64::from(self.frequency.n()),
                reason: "frequency does not match the declared subdivision class",
            }
            .into()),
            _ => Ok(()),
        }
    }
}

/// A declarative build plan: a base shape followed by subdivision layers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blueprint {
    pub base_shape: BaseShape,
    pub layers: Vec<BlueprintLayer>,
}

impl Default for Blueprint {
    /// Icosahedron, then a 2v Class II, a 3v Class I and a 2v Class I layer.
    fn default() -> Self {
        Self {
            base_shape: BaseShape::Icosahedron,
            layers: vec![
                BlueprintLayer::with_class(SubdivisionClass::II, Frequency::from_raw(1, 1)),
                BlueprintLayer::with_class(SubdivisionClass::I, Frequency::from_raw(3, 0)),
                BlueprintLayer::with_class(SubdivisionClass::I, Frequency::from_raw(2, 0)),
            ],
        }
    }
}

impl Blueprint {
    /// A plan with no subdivision layers.
    #[must_use]
    pub fn new(base_shape: BaseShape) -> Self {
        Self {
            base_shape,
            layers: Vec::new(),
        }
    }

    /// Appends a layer.
    pub fn add_layer(&mut self, layer: BlueprintLayer) -> &mut Self {
        self.layers.push(layer);
        self
    }

    /// Replaces the base shape.
    pub fn set_base_shape(&mut self, base_shape: BaseShape) -> &mut Self {
        self.base_shape = base_shape;
        self
    }

    /// Replaces the frequency of layer `index`, clearing any declared class.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoSuchLayer`] if `index` is out of range.
    pub fn set_layer_frequency(&mut self, index: usize, frequency: Frequency) -> Result<()> {
        let layer = self.layer_mut(index)?;
        *layer = BlueprintLayer::new(frequency);
        Ok(())
    }

    /// Switches layer `index` to `class`, keeping its edge frequency `v`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoSuchLayer`] if `index` is out of range, or an
    /// error from [`Frequency::for_class`] if `v` has no form in `class`.
    pub fn set_layer_class(&mut self, index: usize, class: SubdivisionClass) -> Result<()> {
        let layer = self.layer_mut(index)?;
        let v = layer.frequency.edge_frequency();
        *layer = BlueprintLayer::from_class_and_frequency(class, v)?;
        Ok(())
    }

    /// Removes and returns layer `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoSuchLayer`] if `index` is out of range.
    pub fn remove_layer(&mut self, index: usize) -> Result<BlueprintLayer> {
        if index >= self.layers.len() {
            return Err(BuildError::NoSuchLayer(index).into());
        }
        Ok(self.layers.remove(index))
    }

    /// Checks every layer without building anything.
    ///
    /// # Errors
    ///
    /// Returns the first layer validation error.
    pub fn validate(&self) -> Result<()> {
        self.layers.iter().try_for_each(BlueprintLayer::validate)
    }

    /// Builds the base solid and every subdivision layer in order.
    ///
    /// All inputs are validated before any geometry is generated.
    ///
    /// # Errors
    ///
    /// Returns an error if the options or any layer are invalid.
    pub fn build(&self, options: &BuildOptions) -> Result<Structure> {
        options.validate()?;
        self.validate()?;

        let base = MakeBaseSolid::new(self.base_shape, *options).execute()?;
        let mut structure = Structure::new(base);
        for layer in &self.layers {
            let built = Subdivide::new(layer.frequency, *options).execute(structure.last_layer())?;
            structure.push(built);
        }
        debug!(
            base_shape = %self.base_shape,
            layers = structure.layers.len(),
            "built structure"
        );
        Ok(structure)
    }

    fn layer_mut(&mut self, index: usize) -> Result<&mut BlueprintLayer> {
        self.layers
            .get_mut(index)
            .ok_or_else(|| BuildError::NoSuchLayer(index).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn freq(m: u32, n: u32) -> Frequency {
        Frequency::new(m, n).unwrap()
    }

    fn small_options() -> BuildOptions {
        BuildOptions::new(2.0, 1.0)
    }

    #[test]
    fn parse_base_shapes() {
        assert_eq!("Icosahedron".parse::<BaseShape>().unwrap(), BaseShape::Icosahedron);
        assert_eq!("tetrahedron".parse::<BaseShape>().unwrap(), BaseShape::Tetrahedron);
        assert!(matches!(
            "dodecahedron".parse::<BaseShape>(),
            Err(GeodomeError::Build(BuildError::UnknownBaseShape(_)))
        ));
    }

    #[test]
    fn default_blueprint_builds_every_layer() {
        let structure = Blueprint::default().build(&small_options()).unwrap();
        assert_eq!(structure.layers.len(), 4);
        // (1,1) then (3,0) then (2,0): T = 3 * 9 * 4 = 108.
        let last = structure.last_layer();
        assert_eq!(last.faces.len(), 20 * 108);
        assert_eq!(last.edges.len(), 30 * 108);
        assert_eq!(last.nodes.len(), 10 * 108 + 2);
    }

    #[test]
    fn declared_class_must_match() {
        let mut blueprint = Blueprint::new(BaseShape::Octahedron);
        blueprint.add_layer(BlueprintLayer::with_class(SubdivisionClass::I, freq(2, 2)));
        assert!(matches!(
            blueprint.build(&small_options()),
            Err(GeodomeError::Build(BuildError::InvalidFrequency { .. }))
        ));
    }

    #[test]
    fn invalid_options_fail_before_building() {
        let blueprint = Blueprint::default();
        assert!(matches!(
            blueprint.build(&BuildOptions::new(10.0, 0.0)),
            Err(GeodomeError::Build(BuildError::InvalidOptions(_)))
        ));
    }

    #[test]
    fn editing_layers() {
        let mut blueprint = Blueprint::new(BaseShape::Tetrahedron);
        blueprint
            .add_layer(BlueprintLayer::new(freq(2, 0)))
            .add_layer(BlueprintLayer::new(freq(2, 1)));
        blueprint.set_layer_class(0, SubdivisionClass::II).unwrap();
        assert_eq!(blueprint.layers[0].frequency, freq(1, 1));
        blueprint.set_layer_frequency(1, freq(3, 0)).unwrap();
        assert_eq!(blueprint.layers[1].class(), SubdivisionClass::I);
        assert!(blueprint.set_layer_class(1, SubdivisionClass::II).is_err());
        assert!(matches!(
            blueprint.remove_layer(5),
            Err(GeodomeError::Build(BuildError::NoSuchLayer(5)))
        ));
        let removed = blueprint.remove_layer(0).unwrap();
        assert_eq!(removed.frequency, freq(1, 1));
        assert_eq!(blueprint.layers.len(), 1);
        blueprint.set_base_shape(BaseShape::Octahedron);
        let structure = blueprint.build(&small_options()).unwrap();
        assert_eq!(structure.last_layer().faces.len(), 8 * 9);
    }

    #[test]
    fn element_counts_match_generated_base() {
        for shape in [BaseShape::Tetrahedron, BaseShape::Octahedron, BaseShape::Icosahedron] {
            let structure = Blueprint::new(shape).build(&small_options()).unwrap();
            let layer = structure.last_layer();
            let counts = (layer.nodes.len(), layer.edges.len(), layer.faces.len());
            assert_eq!(counts, shape.element_counts());
        }
    }
}
