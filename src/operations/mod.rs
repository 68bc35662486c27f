//! Operations on layers, one struct per operation: configure with `new` and
//! `with_*`, then `execute`.

pub mod creation;
pub mod query;
pub mod subdivision;
pub mod transform;
