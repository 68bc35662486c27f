mod census;
mod check_partition;
mod radius_deviation;

pub use census::{Census, HemisphereCounts, LayerCensus};
pub use check_partition::{CheckPartition, ElementKind, Misplaced};
pub use radius_deviation::RadiusDeviation;
