//! Declarative schema files.
//!
//! A schema file is TOML listing type descriptors the same way a derive
//! would produce them, so a registry can be assembled without compiling
//! the types it describes:
//!
//! ```toml
//! [[types]]
//! name = "Domain"
//!
//! [[types.fields]]
//! name = "name"
//! type = "string"
//! key = true
//! encoding = { cpp = "std::string", ipc = "char_string" }
//! ```

mod error;
mod file;

pub use error::ConfigError;
pub use file::{FieldSpec, SchemaFile, TypeSpec};

use std::path::Path;
use stubs_schema::{build::RegistryBuilder, registry::Registry};

/// Load every file into one builder, in order, and freeze it.
///
/// Later files overwrite types of the same name from earlier ones.
pub fn load_registry<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
) -> Result<Registry, ConfigError> {
    let mut builder = RegistryBuilder::new();

    for path in paths {
        SchemaFile::load(path.as_ref())?.register_into(&mut builder)?;
    }

    Ok(builder.freeze()?)
}
