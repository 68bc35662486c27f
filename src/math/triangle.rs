use super::{Point3, Vector3};

/// Area of the triangle spanned by three points.
#[must_use]
pub fn triangle_area(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    (b - a).cross(&(c - a)).norm() * 0.5
}

/// Normal of the triangle `(a, b, c)` oriented away from the origin.
///
/// The raw normal is the cross product of the two edge vectors leaving `a`.
/// If it makes an obtuse angle with the vector from the origin to `a`, it is
/// flipped. The returned vector is not normalized.
#[must_use]
pub fn outward_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    let raw = (b - a).cross(&(c - a));
    if raw.dot(&a.coords) < 0.0 {
        -raw
    } else {
        raw
    }
}

/// Returns `true` if `(a, b, c)` winds counterclockwise seen from outside.
#[must_use]
pub fn winds_outward(a: &Point3, b: &Point3, c: &Point3) -> bool {
    (b - a).cross(&(c - a)).dot(&a.coords) >= 0.0
}
