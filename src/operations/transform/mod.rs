mod rotate;

pub use rotate::Rotate;
