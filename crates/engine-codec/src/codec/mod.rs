//! # Binary Codec
//!
//! The byte-level machinery: primitive read/write operations
//! ([`cursor`]), the dynamic value tree the generic walker operates on
//! ([`value`]), and the descriptor-driven struct/enum codec itself
//! ([`walk`]).

pub mod cursor;
pub mod value;
pub mod walk;

pub use cursor::{ByteWriter, Cursor};
pub use value::Value;
pub use walk::{decode_value, encode_value, WireCodec};
