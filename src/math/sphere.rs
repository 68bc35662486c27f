use crate::error::{Result, TopologyError};

use super::{Point3, Vector3, TOLERANCE};

/// Weighted average of three corner positions.
///
/// `weights` are integer barycentric weights over `total`; they do not need
/// to be non-negative, but they must sum to `total`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn barycentric_point(corners: [&Point3; 3], weights: [i64; 3], total: i64) -> Point3 {
    let mut acc = Vector3::zeros();
    for (corner, &w) in corners.iter().zip(weights.iter()) {
        acc += corner.coords * w as f64;
    }
    Point3::from(acc / total as f64)
}

/// Pushes `point` radially onto the origin-centered sphere of `radius`.
///
/// # Errors
///
/// Returns an error if the point coincides with the origin, where the
/// radial direction is undefined.
pub fn project_to_sphere(point: &Point3, radius: f64) -> Result<Point3> {
    let len = point.coords.norm();
    if len < TOLERANCE {
        return Err(TopologyError::DegenerateFace(
            "lattice point collapsed onto the sphere center".into(),
        )
        .into());
    }
    Ok(Point3::from(point.coords * (radius / len)))
}
