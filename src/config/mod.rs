//! Build inputs: sizing options, frequency pairs and the blueprint plan.

mod blueprint;
mod frequency;
mod options;

pub use blueprint::{BaseShape, Blueprint, BlueprintLayer};
pub use frequency::{Frequency, SubdivisionClass};
pub use options::{BuildOptions, DEFAULT_ROTATION_STEP};
