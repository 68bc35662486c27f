mod icosahedron;
mod make_base_solid;
mod octahedron;
mod tetrahedron;

pub use icosahedron::icosahedron_neighbors;
pub use make_base_solid::MakeBaseSolid;
