use crate::error::Result;
use crate::math::Point3;
use crate::topology::builder::LayerBuilder;
use crate::topology::keys::corner_name;
use crate::topology::BuiltLayer;

/// Corners sit on the axes as `+x, -x, +y, -y, +z, -z`. Each face takes one
/// corner from each axis pair.
pub(super) fn build(radius: f64) -> Result<BuiltLayer> {
    let corners = [
        Point3::new(radius, 0.0, 0.0),
        Point3::new(-radius, 0.0, 0.0),
        Point3::new(0.0, radius, 0.0),
        Point3::new(0.0, -radius, 0.0),
        Point3::new(0.0, 0.0, radius),
        Point3::new(0.0, 0.0, -radius),
    ];
    let names: Vec<String> = (0..corners.len()).map(corner_name).collect();

    let mut builder = LayerBuilder::new();
    for (name, position) in names.iter().zip(corners) {
        builder.add_node(name.clone(), position);
    }
    for x in 0..2 {
        for y in 2..4 {
            for z in 4..6 {
                builder.connect_triangle([&names[x], &names[y], &names[z]])?;
            }
        }
    }
    Ok(builder.finish())
}
