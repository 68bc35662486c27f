use crate::topology::{Hemisphere, Hemispheres, StructureLayer};

/// Element counts of one kind, per hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HemisphereCounts {
    pub near: usize,
    pub far: usize,
}

impl HemisphereCounts {
    fn of<T>(maps: &Hemispheres<T>) -> Self {
        Self {
            near: maps.side(Hemisphere::Near).len(),
            far: maps.side(Hemisphere::Far).len(),
        }
    }

    /// Near and far together.
    #[must_use]
    pub fn total(&self) -> usize {
        self.near + self.far
    }
}

/// Result of a [`Census`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerCensus {
    pub nodes: HemisphereCounts,
    pub edges: HemisphereCounts,
    pub faces: HemisphereCounts,
}

impl LayerCensus {
    /// `V - E + F`; 2 for every closed layer.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn euler_characteristic(&self) -> i64 {
        self.nodes.total() as i64 - self.edges.total() as i64 + self.faces.total() as i64
    }
}

/// Counts the nodes, edges and faces of a layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Census;

impl Census {
    /// Creates a new `Census` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, layer: &StructureLayer) -> LayerCensus {
        LayerCensus {
            nodes: HemisphereCounts::of(&layer.nodes),
            edges: HemisphereCounts::of(&layer.edges),
            faces: HemisphereCounts::of(&layer.faces),
        }
    }
}
