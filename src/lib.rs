pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use config::{BaseShape, Blueprint, BlueprintLayer, BuildOptions, Frequency, SubdivisionClass};
pub use error::{GeodomeError, Result};
pub use topology::{Hemisphere, Structure, StructureLayer};
