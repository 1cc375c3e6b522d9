//! # Generic Struct/Enum Codec
//!
//! The crate's single reused algorithm: a recursive walk over a layout
//! descriptor and a [`Value`] tree (encode) or a byte [`Cursor`] (decode).
//!
//! Encoding concatenates fields in descriptor order with no padding or
//! framing beyond what each field's own layout declares. Decoding mirrors the
//! walk over a shared cursor; an enum decode reads one discriminant byte and
//! then only the active variant's fields. An empty-field struct or variant
//! contributes zero payload bytes.

use crate::codec::cursor::{ByteWriter, Cursor};
use crate::codec::value::Value;
use crate::errors::CodecError;
use crate::schema::TypeDesc;

// =============================================================================
// ENCODE WALK
// =============================================================================

/// Encodes `value` into `writer` following `desc`.
///
/// # Errors
///
/// Returns [`CodecError::WidthMismatch`] for wrong-length fixed fields,
/// [`CodecError::IntegerOverflow`] for sequences or byte fields longer than
/// the u32 framing can carry, [`CodecError::UnknownVariant`] for an enum
/// value whose discriminant exceeds the declared variant count, and
/// [`CodecError::SchemaMismatch`] when the value's shape does not match
/// `desc` (a `to_value` bug, not bad input).
pub fn encode_value(
    writer: &mut ByteWriter,
    value: &Value,
    desc: &TypeDesc,
) -> Result<(), CodecError> {
    match (desc, value) {
        (TypeDesc::U8, Value::U8(v)) => {
            writer.put_u8(*v);
            Ok(())
        }
        (TypeDesc::U64, Value::U64(v)) => {
            writer.put_u64(*v);
            Ok(())
        }
        (TypeDesc::Bytes, Value::Bytes(bytes)) => writer.put_var_bytes(bytes),
        (TypeDesc::Str, Value::Str(s)) => writer.put_str(s),
        (TypeDesc::FixedBytes(width), Value::Fixed(bytes)) => writer.put_fixed(bytes, *width),
        (TypeDesc::Option(inner), Value::Option(payload)) => match payload {
            None => {
                writer.put_u8(0);
                Ok(())
            }
            Some(v) => {
                writer.put_u8(1);
                encode_value(writer, v, inner)
            }
        },
        (TypeDesc::Seq(element), Value::Seq(items)) => {
            let count = u32::try_from(items.len()).map_err(|_| CodecError::IntegerOverflow)?;
            writer.put_u32(count);
            for item in items {
                encode_value(writer, item, element)?;
            }
            Ok(())
        }
        (TypeDesc::Struct(schema), Value::Struct(fields)) => {
            if fields.len() != schema.fields.len() {
                return Err(CodecError::SchemaMismatch {
                    expected: schema.name,
                    actual: "struct with wrong field count",
                });
            }
            for (field, field_desc) in fields.iter().zip(schema.fields) {
                encode_value(writer, field, &field_desc.ty)?;
            }
            Ok(())
        }
        (
            TypeDesc::Enum(schema),
            Value::Enum {
                discriminant,
                fields,
            },
        ) => {
            let Some(variant) = schema.variants.get(*discriminant as usize) else {
                return Err(CodecError::UnknownVariant {
                    type_name: schema.name,
                    discriminant: *discriminant,
                    variant_count: schema.variants.len(),
                });
            };
            if fields.len() != variant.fields.len() {
                return Err(CodecError::SchemaMismatch {
                    expected: schema.name,
                    actual: "variant with wrong field count",
                });
            }
            writer.put_u8(*discriminant);
            for (field, field_desc) in fields.iter().zip(variant.fields) {
                encode_value(writer, field, &field_desc.ty)?;
            }
            Ok(())
        }
        (desc, value) => Err(CodecError::SchemaMismatch {
            expected: desc.kind_name(),
            actual: value.kind(),
        }),
    }
}

// =============================================================================
// DECODE WALK
// =============================================================================

/// Decodes one value described by `desc`, advancing `cursor`.
///
/// The cursor position is mutated even on partial progress; callers that need
/// the final offset must read [`Cursor::position`] afterwards.
///
/// # Errors
///
/// Returns [`CodecError::UnexpectedEnd`] on truncated input,
/// [`CodecError::InvalidUtf8`] on malformed strings, and
/// [`CodecError::UnknownVariant`] on an out-of-range enum discriminant or
/// option presence byte.
pub fn decode_value(cursor: &mut Cursor<'_>, desc: &TypeDesc) -> Result<Value, CodecError> {
    match desc {
        TypeDesc::U8 => Ok(Value::U8(cursor.read_u8()?)),
        TypeDesc::U64 => Ok(Value::U64(cursor.read_u64()?)),
        TypeDesc::Bytes => Ok(Value::Bytes(cursor.read_var_bytes()?.to_vec())),
        TypeDesc::Str => Ok(Value::Str(cursor.read_str()?)),
        TypeDesc::FixedBytes(width) => Ok(Value::Fixed(cursor.read_fixed(*width)?.to_vec())),
        TypeDesc::Option(inner) => match cursor.read_u8()? {
            0 => Ok(Value::Option(None)),
            1 => Ok(Value::option(Some(decode_value(cursor, inner)?))),
            presence => Err(CodecError::UnknownVariant {
                type_name: "option",
                discriminant: presence,
                variant_count: 2,
            }),
        },
        TypeDesc::Seq(element) => {
            let count = cursor.read_u32()? as usize;
            // No pre-reservation from the untrusted count; a lying prefix
            // runs out of bytes before it runs us out of memory.
            let mut items = Vec::new();
            for _ in 0..count {
                items.push(decode_value(cursor, element)?);
            }
            Ok(Value::Seq(items))
        }
        TypeDesc::Struct(schema) => {
            let mut fields = Vec::with_capacity(schema.fields.len());
            for field_desc in schema.fields {
                fields.push(decode_value(cursor, &field_desc.ty)?);
            }
            Ok(Value::Struct(fields))
        }
        TypeDesc::Enum(schema) => {
            let discriminant = cursor.read_u8()?;
            let Some(variant) = schema.variants.get(discriminant as usize) else {
                return Err(CodecError::UnknownVariant {
                    type_name: schema.name,
                    discriminant,
                    variant_count: schema.variants.len(),
                });
            };
            let mut fields = Vec::with_capacity(variant.fields.len());
            for field_desc in variant.fields {
                fields.push(decode_value(cursor, &field_desc.ty)?);
            }
            Ok(Value::Enum {
                discriminant,
                fields,
            })
        }
    }
}

// =============================================================================
// WIRE CODEC TRAIT
// =============================================================================

/// The seam between typed structures and the generic walker.
///
/// Implementors supply their layout descriptor and the conversions to and
/// from the dynamic [`Value`] tree; `encode`/`decode` drive the walker.
pub trait WireCodec: Sized {
    /// Layout descriptor for this type (an entry in the fixed schema table).
    fn descriptor() -> &'static TypeDesc;

    /// Converts to the dynamic value tree, shaped per [`Self::descriptor`].
    fn to_value(&self) -> Value;

    /// Rebuilds a typed structure from a decoded value tree.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] if the tree does not have the
    /// descriptor's shape.
    fn from_value(value: Value) -> Result<Self, CodecError>;

    /// Encodes to wire bytes.
    ///
    /// # Errors
    ///
    /// Propagates walker errors; total for validly constructed values.
    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::new();
        encode_value(&mut writer, &self.to_value(), Self::descriptor())?;
        Ok(writer.into_bytes())
    }

    /// Decodes from wire bytes, requiring the whole buffer to be consumed.
    ///
    /// # Errors
    ///
    /// Propagates walker errors; returns [`CodecError::TrailingBytes`] if the
    /// structure decoded cleanly but bytes remain.
    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut cursor = Cursor::new(bytes);
        let value = decode_value(&mut cursor, Self::descriptor())?;
        if !cursor.is_at_end() {
            return Err(CodecError::TrailingBytes {
                count: cursor.remaining(),
            });
        }
        Self::from_value(value)
    }
}

// =============================================================================
// TESTS
// =============================================================================
