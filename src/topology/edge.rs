/// A connection between two nodes.
///
/// Immutable once created, apart from which hemisphere map holds it.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Keys of the two endpoints.
    pub nodes: [String; 2],
    /// Euclidean length at creation time.
    pub length: f64,
    /// Color bucket shared by edges of near-equal length.
    pub color_bucket: usize,
}
