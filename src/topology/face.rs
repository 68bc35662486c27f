/// A triangle of the mesh.
///
/// Immutable once created, apart from which hemisphere map holds it.
#[derive(Debug, Clone)]
pub struct Face {
    /// Keys of the three corners, counterclockwise seen from outside.
    pub nodes: [String; 3],
    /// Triangle area at creation time.
    pub area: f64,
    /// Color bucket shared by faces of near-equal area and handedness.
    pub color_bucket: usize,
}
