//! ## Crate layout
//! - `schema`: descriptors, semantic types, the registry builder and the
//!   frozen registry with its validation.
//! - `config`: declarative TOML schema files.
//! - `Describe`: derive macro producing a descriptor from a Rust struct.
//! - `builtin`: the stub types shipped with the crate.

pub use stubs_config as config;
pub use stubs_derive::Describe;
pub use stubs_schema as schema;

pub mod builtin;

// the derive expands to ::stubs paths, including inside this crate
extern crate self as stubs;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use schema::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::Describe;
    pub use crate::schema::prelude::*;
}
