use crate::error::Result;
use crate::math::Point3;
use crate::topology::builder::LayerBuilder;
use crate::topology::keys::corner_name;
use crate::topology::BuiltLayer;

/// Every pair of corners is an edge and every triple is a face.
pub(super) fn build(radius: f64) -> Result<BuiltLayer> {
    let d = (radius * radius / 3.0).sqrt();
    let corners = [
        Point3::new(d, d, d),
        Point3::new(-d, d, -d),
        Point3::new(d, -d, -d),
        Point3::new(-d, -d, d),
    ];
    let names: Vec<String> = (0..corners.len()).map(corner_name).collect();

    let mut builder = LayerBuilder::new();
    for (name, position) in names.iter().zip(corners) {
        builder.add_node(name.clone(), position);
    }
    for a in 0..4 {
        for b in a + 1..4 {
            for c in b + 1..4 {
                builder.connect_triangle([&names[a], &names[b], &names[c]])?;
            }
        }
    }
    Ok(builder.finish())
}
