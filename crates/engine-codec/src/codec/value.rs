//! # Dynamic Value Tree
//!
//! The intermediate representation the generic walker encodes from and
//! decodes into. Typed structures convert to and from [`Value`] through
//! [`super::walk::WireCodec`]; the walker itself never sees concrete types.

use crate::errors::CodecError;

/// A dynamically-shaped wire value.
///
/// Shapes mirror [`crate::schema::TypeDesc`] one-to-one; a value is only
/// meaningful next to the descriptor it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// Variable-length byte sequence.
    Bytes(Vec<u8>),
    /// UTF-8 string.
    Str(String),
    /// Fixed-width byte array; width is declared by the descriptor.
    Fixed(Vec<u8>),
    /// Optional payload.
    Option(Option<Box<Value>>),
    /// Homogeneous sequence.
    Seq(Vec<Value>),
    /// Struct: field values in descriptor order.
    Struct(Vec<Value>),
    /// Enum: active variant index plus its payload field values.
    Enum {
        /// 0-based variant index (the wire discriminant).
        discriminant: u8,
        /// Payload fields of the active variant, in descriptor order.
        fields: Vec<Value>,
    },
}

impl Value {
    /// Short shape name for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::U8(_) => "u8",
            Self::U64(_) => "u64",
            Self::Bytes(_) => "bytes",
            Self::Str(_) => "string",
            Self::Fixed(_) => "fixed bytes",
            Self::Option(_) => "option",
            Self::Seq(_) => "sequence",
            Self::Struct(_) => "struct",
            Self::Enum { .. } => "enum",
        }
    }

    fn mismatch(self, expected: &'static str) -> CodecError {
        CodecError::SchemaMismatch {
            expected,
            actual: self.kind(),
        }
    }

    /// Narrows to a u8.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] for any other shape.
    pub fn into_u8(self) -> Result<u8, CodecError> {
        match self {
            Self::U8(v) => Ok(v),
            other => Err(other.mismatch("u8")),
        }
    }

    /// Narrows to a u64.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] for any other shape.
    pub fn into_u64(self) -> Result<u64, CodecError> {
        match self {
            Self::U64(v) => Ok(v),
            other => Err(other.mismatch("u64")),
        }
    }

    /// Narrows to variable-length bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] for any other shape.
    pub fn into_bytes(self) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Bytes(v) => Ok(v),
            other => Err(other.mismatch("bytes")),
        }
    }

    /// Narrows to a string.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] for any other shape.
    pub fn into_string(self) -> Result<String, CodecError> {
        match self {
            Self::Str(v) => Ok(v),
            other => Err(other.mismatch("string")),
        }
    }

    /// Narrows to fixed-width bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] for any other shape.
    pub fn into_fixed(self) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Fixed(v) => Ok(v),
            other => Err(other.mismatch("fixed bytes")),
        }
    }

    /// Narrows to an optional payload.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] for any other shape.
    pub fn into_option(self) -> Result<Option<Value>, CodecError> {
        match self {
            Self::Option(v) => Ok(v.map(|boxed| *boxed)),
            other => Err(other.mismatch("option")),
        }
    }

    /// Narrows to a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] for any other shape.
    pub fn into_seq(self) -> Result<Vec<Value>, CodecError> {
        match self {
            Self::Seq(v) => Ok(v),
            other => Err(other.mismatch("sequence")),
        }
    }

    /// Narrows to struct fields.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] for any other shape.
    pub fn into_struct(self) -> Result<Vec<Value>, CodecError> {
        match self {
            Self::Struct(v) => Ok(v),
            other => Err(other.mismatch("struct")),
        }
    }

    /// Narrows to an enum discriminant and payload.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] for any other shape.
    pub fn into_enum(self) -> Result<(u8, Vec<Value>), CodecError> {
        match self {
            Self::Enum {
                discriminant,
                fields,
            } => Ok((discriminant, fields)),
            other => Err(other.mismatch("enum")),
        }
    }

    /// Convenience constructor for a fixed-width field.
    #[must_use]
    pub fn fixed(bytes: &[u8]) -> Self {
        Self::Fixed(bytes.to_vec())
    }

    /// Convenience constructor for an optional payload.
    #[must_use]
    pub fn option(payload: Option<Value>) -> Self {
        Self::Option(payload.map(Box::new))
    }
}

// =============================================================================
// TESTS
// =============================================================================
