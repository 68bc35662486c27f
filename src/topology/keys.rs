//! Canonical string identities for nodes, edges and faces.
//!
//! Independent subdivision passes over adjacent base triangles discover that
//! they are creating the same point, edge or face purely by producing the
//! same key. No spatial lookup is involved.

/// Separator between node keys inside edge and face keys.
pub const KEY_SEPARATOR: char = '-';

/// Builds the key of a lattice point from the corners it interpolates.
///
/// Corners with zero weight are dropped. A corner holding the full `total`
/// *is* that corner, so its own name is returned unchanged. Otherwise each
/// remaining corner contributes a `[name]weight` token and the tokens are
/// concatenated in sorted order, which makes the key independent of corner
/// order. Brackets keep nested names from earlier layers unambiguous.
///
/// Weights must be non-negative and sum to `total`.
#[must_use]
pub fn node_key(corners: [&str; 3], weights: [i64; 3], total: i64) -> String {
    debug_assert_eq!(weights.iter().sum::<i64>(), total);
    debug_assert!(weights.iter().all(|&w| w >= 0));

    let mut tokens = Vec::with_capacity(3);
    for (name, &w) in corners.iter().zip(weights.iter()) {
        if w == 0 {
            continue;
        }
        if w == total {
            return (*name).to_string();
        }
        tokens.push(format!("[{name}]{w}"));
    }
    tokens.sort_unstable();
    tokens.concat()
}

/// Builds the order-independent key of the edge between two nodes.
#[must_use]
pub fn edge_key(a: &str, b: &str) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{lo}{KEY_SEPARATOR}{hi}")
}

/// Builds the order-independent key of the face between three nodes.
#[must_use]
pub fn face_key(a: &str, b: &str, c: &str) -> String {
    let mut names = [a, b, c];
    names.sort_unstable();
    format!(
        "{}{KEY_SEPARATOR}{}{KEY_SEPARATOR}{}",
        names[0], names[1], names[2]
    )
}

/// Name of the `index`-th base corner: `A`, `B`, `C`, ...
#[must_use]
pub fn corner_name(index: usize) -> String {
    let offset = u8::try_from(index % 26).unwrap_or(0);
    let letter = char::from(b'A' + offset);
    if index < 26 {
        letter.to_string()
    } else {
        format!("{letter}{}", index / 26)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_weight_corner_keeps_its_name() {
        assert_eq!(node_key(["A", "B", "C"], [0, 4, 0], 4), "B");
    }

    #[test]
    fn zero_weights_are_dropped() {
        assert_eq!(node_key(["A", "B", "C"], [3, 0, 1], 4), "[A]3[C]1");
    }

    #[test]
    fn node_key_ignores_corner_order() {
        let k1 = node_key(["A", "B", "C"], [1, 2, 3], 6);
        let k2 = node_key(["C", "A", "B"], [3, 1, 2], 6);
        assert_eq!(k1, k2);
    }

    #[test]
    fn shared_edge_point_matches_from_both_faces() {
        // The same point on edge AB, seen from face ABC and from face BAD.
        let k1 = node_key(["A", "B", "C"], [2, 1, 0], 3);
        let k2 = node_key(["B", "A", "D"], [1, 2, 0], 3);
        assert_eq!(k1, k2);
    }

    #[test]
    fn nested_names_stay_distinct() {
        let inner = node_key(["A", "B", "C"], [1, 1, 0], 2);
        let outer = node_key([inner.as_str(), "B", "C"], [1, 1, 0], 2);
        assert_eq!(inner, "[A]1[B]1");
        assert_eq!(outer, "[B]1[[A]1[B]1]1");
        assert_ne!(outer, node_key(["A", "B", "C"], [1, 2, 1], 4));
    }

    #[test]
    fn edge_key_is_symmetric() {
        assert_eq!(edge_key("A", "B"), edge_key("B", "A"));
        assert_eq!(edge_key("A", "B"), "A-B");
    }

    #[test]
    fn face_key_is_symmetric() {
        let expected = face_key("A", "B", "C");
        assert_eq!(face_key("C", "A", "B"), expected);
        assert_eq!(face_key("B", "C", "A"), expected);
        assert_eq!(expected, "A-B-C");
    }

    #[test]
    fn corner_names() {
        assert_eq!(corner_name(0), "A");
        assert_eq!(corner_name(11), "L");
    }
}
