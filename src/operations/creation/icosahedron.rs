use crate::error::Result;
use crate::math::Point3;
use crate::topology::builder::LayerBuilder;
use crate::topology::keys::corner_name;
use crate::topology::BuiltLayer;

/// The five neighbors of icosahedron corner `n` (`0..12`), in cyclic order
/// around it.
///
/// Corners are indexed as `4k + 2a + b`: `k` picks the coordinate plane the
/// golden rectangle lies in, `a` and `b` the signs of its long and short
/// side. Consecutive entries (wrapping around) share a face with `n`.
#[must_use]
pub fn icosahedron_neighbors(n: usize) -> [usize; 5] {
    let (k, a, b) = (n / 4, (n >> 1) & 1, n & 1);
    let k1 = (k + 1) % 3;
    let k2 = (k + 2) % 3;
    [
        4 * k + 2 * a + (1 - b),
        4 * k1 + 2 + a,
        4 * k2 + 2 * b + 1,
        4 * k2 + 2 * b,
        4 * k1 + a,
    ]
}

/// Corner positions for an edge length of 2, before scaling.
fn golden_corners() -> [[f64; 3]; 12] {
    let g = (1.0 + 5.0_f64.sqrt()) / 2.0;
    [
        [0.0, -g, -1.0],
        [0.0, -g, 1.0],
        [0.0, g, -1.0],
        [0.0, g, 1.0],
        [-g, -1.0, 0.0],
        [-g, 1.0, 0.0],
        [g, -1.0, 0.0],
        [g, 1.0, 0.0],
        [-1.0, 0.0, -g],
        [1.0, 0.0, -g],
        [-1.0, 0.0, g],
        [1.0, 0.0, g],
    ]
}

/// Edges and faces come from walking each corner's cyclic neighbor ring.
pub(super) fn build(radius: f64) -> Result<BuiltLayer> {
    let g = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let scale = radius / (g * g + 1.0).sqrt();
    let names: Vec<String> = (0..12).map(corner_name).collect();

    let mut builder = LayerBuilder::new();
    for (name, [x, y, z]) in names.iter().zip(golden_corners()) {
        builder.add_node(name.clone(), Point3::new(x, y, z) * scale);
    }
    for (n, name) in names.iter().enumerate() {
        let ring = icosahedron_neighbors(n);
        for (i, &next) in ring.iter().enumerate() {
            let after = ring[(i + 1) % ring.len()];
            builder.connect_triangle([name, &names[next], &names[after]])?;
        }
    }
    Ok(builder.finish())
}
