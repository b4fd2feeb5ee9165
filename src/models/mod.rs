//! Domain models for the snack directory.
//!
//! There is a single entity: [`Snack`]. Snacks carry no identity of their
//! own; the directory key is supplied externally as a path parameter.

mod snack;

pub use snack::*;
