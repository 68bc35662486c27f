//! Builds a geodesic sphere and prints what each layer contains.
//!
//! Usage:
//! ```text
//! cargo run --example build_report                         # default blueprint
//! cargo run --example build_report -- octahedron 2,1 1,1   # base shape + (m,n) layers
//! RUST_LOG=geodome=debug cargo run --example build_report  # per-layer logs
//! ```

use geodome::operations::query::{Census, CheckPartition, RadiusDeviation};
use geodome::{BaseShape, Blueprint, BlueprintLayer, BuildOptions, Frequency, GeodomeError};

fn parse_layer(arg: &str) -> Result<BlueprintLayer, GeodomeError> {
    let (m, n) = arg.split_once(',').unwrap_or((arg, "0"));
    let parse = |s: &str| s.trim().parse::<i64>().unwrap_or(-1);
    Ok(BlueprintLayer::new(Frequency::from_signed(parse(m), parse(n))?))
}

fn blueprint_from_args(args: &[String]) -> Result<Blueprint, GeodomeError> {
    let Some((shape, layers)) = args.split_first() else {
        return Ok(Blueprint::default());
    };
    let mut blueprint = Blueprint::new(shape.parse::<BaseShape>()?);
    for arg in layers {
        blueprint.add_layer(parse_layer(arg)?);
    }
    Ok(blueprint)
}

fn main() -> Result<(), GeodomeError> {
    // Default: WARN for everything, INFO for geodome.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geodome=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("build_report=info".parse().unwrap_or_default())
        .add_directive("geodome=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let blueprint = blueprint_from_args(&args)?;
    let options = BuildOptions::default();
    let mut structure = blueprint.build(&options)?;

    println!("base shape: {}", blueprint.base_shape);
    for (index, (layer, colors)) in structure.layers.iter().zip(&structure.colors).enumerate() {
        let census = Census::new().execute(layer);
        println!(
            "layer {index}: {} nodes, {} edges, {} faces (euler {}), {} edge colors, {} face colors",
            census.nodes.total(),
            census.edges.total(),
            census.faces.total(),
            census.euler_characteristic(),
            colors.edge_bucket_count(),
            colors.face_bucket_count(),
        );
    }

    let deviation = RadiusDeviation::new(options.radius()).execute(structure.last_layer());
    println!("max radius deviation: {deviation:.3e}");

    for (dx, dy) in [(40.0, 0.0), (0.0, -25.0), (120.0, 80.0)] {
        structure.rotate(dx, dy)?;
        let census = Census::new().execute(structure.last_layer());
        let misplaced = CheckPartition::new().execute(structure.last_layer())?;
        println!(
            "rotate({dx}, {dy}): near faces {}, far faces {}, misplaced {}",
            census.faces.near,
            census.faces.far,
            misplaced.len()
        );
    }
    Ok(())
}
