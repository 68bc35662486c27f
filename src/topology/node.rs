use crate::math::Point3;

/// A point of the mesh.
///
/// The position is the only field mutated after creation (by rotation).
/// `edges` and `faces` list the keys of incident elements, in the order they
/// were connected.
#[derive(Debug, Clone)]
pub struct Node {
    /// Canonical key of the node.
    pub name: String,
    /// Current 3D position.
    pub position: Point3,
    /// Keys of incident edges.
    pub edges: Vec<String>,
    /// Keys of incident faces.
    pub faces: Vec<String>,
}

impl Node {
    /// Creates an unconnected node.
    #[must_use]
    pub fn new(name: String, position: Point3) -> Self {
        Self {
            name,
            position,
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Copy of this node with its connections reset, for carrying it
    /// forward into the next layer.
    #[must_use]
    pub fn carried_forward(&self) -> Self {
        Self::new(self.name.clone(), self.position)
    }

    /// Records an incident edge.
    pub fn add_edge(&mut self, key: String) {
        self.edges.push(key);
    }

    /// Records an incident face.
    pub fn add_face(&mut self, key: String) {
        self.faces.push(key);
    }
}
