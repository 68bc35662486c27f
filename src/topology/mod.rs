//! Mesh data model: nodes, edges and faces keyed by canonical strings and
//! split into near/far hemisphere maps.

pub(crate) mod builder;
pub mod color;
pub mod edge;
pub mod face;
pub mod hemisphere;
pub mod keys;
pub mod layer;
pub mod node;
pub mod structure;
pub mod view;

pub use color::ColorAssignment;
pub use edge::Edge;
pub use face::Face;
pub use hemisphere::{is_near, Hemisphere, Hemispheres};
pub use keys::{edge_key, face_key, node_key};
pub use layer::{BuiltLayer, StructureLayer};
pub use node::Node;
pub use structure::Structure;
pub use view::{EdgeView, FaceView, NodeView};
