pub mod sphere;
pub mod triangle;

pub use sphere::{barycentric_point, project_to_sphere};
pub use triangle::{outward_normal, triangle_area, winds_outward};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3D rotation type.
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Relative tolerance used when checking that nodes sit on the sphere.
pub const RADIUS_TOLERANCE: f64 = 1e-6;
