//! Terminal preview animations.

pub mod shooting;
