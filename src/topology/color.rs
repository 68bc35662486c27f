use std::collections::HashMap;

/// Rendering hint: groups edges by near-equal length and faces by
/// near-equal area.
///
/// Built alongside a layer and returned next to it. Bucket ids are dense
/// and assigned in first-seen order; `edge_lengths[id]` and
/// `face_areas[id]` hold the representative value of each bucket.
#[derive(Debug, Clone, Default)]
pub struct ColorAssignment {
    /// Representative length of each edge bucket.
    pub edge_lengths: Vec<f64>,
    /// Representative area of each face bucket.
    pub face_areas: Vec<f64>,
    edge_index: HashMap<String, usize>,
    face_index: HashMap<String, usize>,
}

impl ColorAssignment {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket for an edge of `length`, creating one if needed.
    ///
    /// Lengths equal to 10 significant digits share a bucket.
    pub fn edge_bucket(&mut self, length: f64) -> usize {
        let key = format!("{length:.9e}");
        if let Some(&id) = self.edge_index.get(&key) {
            return id;
        }
        let id = self.edge_lengths.len();
        self.edge_lengths.push(length);
        self.edge_index.insert(key, id);
        id
    }

    /// Returns the bucket for a face, creating one if needed.
    ///
    /// `side_lengths` must be in outward winding order. Faces share a bucket
    /// when their areas agree to 8 significant digits and the side following
    /// the longest side has the same length, which tells mirror images apart.
    pub fn face_bucket(&mut self, area: f64, side_lengths: [f64; 3]) -> usize {
        let key = format!("{area:.7e}/{:.4e}", chiral_side(side_lengths));
        if let Some(&id) = self.face_index.get(&key) {
            return id;
        }
        let id = self.face_areas.len();
        self.face_areas.push(area);
        self.face_index.insert(key, id);
        id
    }

    /// Number of distinct edge buckets.
    #[must_use]
    pub fn edge_bucket_count(&self) -> usize {
        self.edge_lengths.len()
    }

    /// Number of distinct face buckets.
    #[must_use]
    pub fn face_bucket_count(&self) -> usize {
        self.face_areas.len()
    }
}

/// Length of the side that follows the longest side in winding order.
///
/// Sides are compared at 8 significant digits; when the longest side ties
/// with its successor, the successor is treated as the longest.
#[allow(clippy::float_cmp)]
fn chiral_side(sides: [f64; 3]) -> f64 {
    let rounded = sides.map(|s| round_significant(s, 8));
    let mut longest = 0;
    if rounded[1] > rounded[longest] {
        longest = 1;
    }
    if rounded[2] > rounded[longest] {
        longest = 2;
    }
    if rounded[longest] == rounded[(longest + 1) % 3] {
        longest = (longest + 1) % 3;
    }
    rounded[(longest + 1) % 3]
}

/// Rounds `value` to `digits` significant digits.
fn round_significant(value: f64, digits: usize) -> f64 {
    format!("{value:.*e}", digits.saturating_sub(1))
        .parse()
        .unwrap_or(value)
}
