//! shelf application library
//!
//! Provides the greeting and books modules and the wiring that serves them.

// Module OpenAPI fragments are large `json!` literals.
#![recursion_limit = "256"]

pub mod bootstrap;
pub mod modules;
pub mod utils;

/// Re-export commonly used types
pub use modules::*;
