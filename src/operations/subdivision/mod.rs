//! Barycentric subdivision of a layer into a finer one.
//!
//! Every face of the previous layer is re-triangulated on the lattice of
//! frequency `(m, n)`. Class I, II and III differ only in the pair, so one
//! integer walk serves all three.

mod lattice;
mod seam;
mod subdivide;

pub use subdivide::Subdivide;
