use darling::FromMeta;
use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, quote};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// UnknownSemanticType
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown semantic type '{0}'")]
pub struct UnknownSemanticType(pub String);

///
/// SemanticType
///
/// Logical type tag of a field, independent of any target encoding.
/// The textual form is the lowercase variant name (`uint32`, `string`).
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum SemanticType {
    Bool,
    Bytes,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    String,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
}

impl SemanticType {
    pub const ALL: [Self; 13] = [
        Self::Bool,
        Self::Bytes,
        Self::Float32,
        Self::Float64,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::String,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Bytes => "bytes",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::String => "string",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
        }
    }

    //
    // grouped helpers
    //

    #[must_use]
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    #[must_use]
    pub const fn is_unsigned_int(self) -> bool {
        matches!(self, Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64)
    }

    #[must_use]
    pub const fn is_int(self) -> bool {
        self.is_signed_int() || self.is_unsigned_int()
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_int() || self.is_float()
    }

    /// Map a Rust type, as written in source, to its semantic tag.
    ///
    /// Whitespace, a leading reference with its lifetime, and any module
    /// path are ignored, so `&'static str`, `std::string::String` and
    /// `Vec < u8 >` all resolve. Returns `None` for anything else.
    #[must_use]
    pub fn from_rust_type(ty: &str) -> Option<Self> {
        let mut compact = String::with_capacity(ty.len());
        for token in ty.split_whitespace() {
            let token = token.strip_prefix('&').unwrap_or(token);
            if token.starts_with('\'') || token == "mut" {
                continue;
            }
            compact.push_str(token);
        }

        // strip the module path, leaving generic arguments intact
        let base = match compact.find('<') {
            Some(generic) => {
                let (path, args) = compact.split_at(generic);
                let name = path.rsplit("::").next().unwrap_or(path);
                format!("{name}{args}")
            }
            None => compact.rsplit("::").next().unwrap_or(&compact).to_string(),
        };

        let ty = match base.as_str() {
            "bool" => Self::Bool,
            "Vec<u8>" | "[u8]" | "Bytes" => Self::Bytes,
            "f32" => Self::Float32,
            "f64" => Self::Float64,
            "i8" => Self::Int8,
            "i16" => Self::Int16,
            "i32" => Self::Int32,
            "i64" => Self::Int64,
            "String" | "str" => Self::String,
            "u8" => Self::Uint8,
            "u16" => Self::Uint16,
            "u32" => Self::Uint32,
            "u64" => Self::Uint64,
            _ => return None,
        };

        Some(ty)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = UnknownSemanticType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownSemanticType(s.to_string()))
    }
}

impl FromMeta for SemanticType {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        s.parse::<Self>()
            .map_err(|_| darling::Error::unknown_value(s))
    }
}

impl ToTokens for SemanticType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = Ident::new(&format!("{self:?}"), Span::call_site());

        tokens.extend(quote!(::stubs::schema::types::SemanticType::#ident));
    }
}
