mod field;
mod hints;
mod type_descriptor;

pub use field::*;
pub use hints::*;
pub use type_descriptor::*;

use crate::ThisError;

///
/// NodeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum NodeError {
    #[error("type not found: {0}")]
    NotFound(String),
}

///
/// Describe
///
/// Implemented by Rust types that carry a static field-shape descriptor,
/// usually through `#[derive(Describe)]`.
///

pub trait Describe {
    fn descriptor() -> TypeDescriptor;
}
