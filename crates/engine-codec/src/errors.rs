//! # Error Types
//!
//! All error types for the call/result codec.
//!
//! Two families exist and must not be conflated:
//!
//! - [`CodecError`]: structural encode/decode failures. Malformed bytes stay
//!   malformed, so these are terminal for the operation — no retries.
//! - [`ExecutionError`]: domain-level unsuccessful execution carried inside a
//!   *successfully decoded* result (a reverted call is an ordinary business
//!   outcome, not a codec failure).

use crate::domain::value_objects::Bytes;
use thiserror::Error;

// =============================================================================
// CODEC ERRORS
// =============================================================================

/// Structural errors raised while encoding or decoding wire bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A fixed-width field was given input of the wrong length.
    ///
    /// Encode-time caller error: fixed fields are never truncated or padded.
    #[error("fixed-width field expected {expected} bytes, got {actual}")]
    WidthMismatch {
        /// Declared field width in bytes.
        expected: usize,
        /// Length of the input actually supplied.
        actual: usize,
    },

    /// Decoding ran out of bytes (truncated or malformed input).
    #[error("unexpected end of input: needed {needed} more bytes, {remaining} remaining")]
    UnexpectedEnd {
        /// Bytes the current field still required.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// A string field contained malformed UTF-8.
    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,

    /// An enum discriminant was outside the declared variant range.
    #[error("unknown discriminant {discriminant} for {type_name} ({variant_count} variants)")]
    UnknownVariant {
        /// Schema name of the enum being decoded.
        type_name: &'static str,
        /// Discriminant byte read from the wire.
        discriminant: u8,
        /// Number of variants the schema declares.
        variant_count: usize,
    },

    /// A numeric value does not fit the declared wire width.
    #[error("integer value does not fit the declared width")]
    IntegerOverflow,

    /// Decoding finished with unconsumed bytes left in the buffer.
    #[error("decode left {count} trailing bytes unconsumed")]
    TrailingBytes {
        /// Number of unconsumed bytes.
        count: usize,
    },

    /// A versioned structure carried an unexpected version tag.
    #[error("version tag mismatch: expected {expected}, got {actual}")]
    VersionMismatch {
        /// Version byte the schema requires.
        expected: u8,
        /// Version byte found on the wire.
        actual: u8,
    },

    /// A value tree did not match the shape its schema descriptor declares.
    ///
    /// Indicates a bug in a `to_value`/`from_value` implementation rather
    /// than bad wire input.
    #[error("value does not match schema: expected {expected}, got {actual}")]
    SchemaMismatch {
        /// Shape the descriptor expected.
        expected: &'static str,
        /// Shape the value actually had.
        actual: &'static str,
    },
}

impl CodecError {
    /// Returns true if this error indicates malformed *input bytes* (as
    /// opposed to a caller/programming error on the encode side).
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedEnd { .. }
                | Self::InvalidUtf8
                | Self::UnknownVariant { .. }
                | Self::TrailingBytes { .. }
                | Self::VersionMismatch { .. }
        )
    }
}

// =============================================================================
// EXECUTION ERRORS
// =============================================================================

/// Unsuccessful execution outcomes reported by the engine contract.
///
/// These are returned by outcome extraction on a decoded result; they are
/// expected, frequent business outcomes and are never panicked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// Execution reverted; carries the revert output bytes.
    #[error("execution reverted ({} bytes of output)", .0.len())]
    Revert(Bytes),

    /// Execution ran out of gas.
    #[error("out of gas")]
    OutOfGas,

    /// Insufficient funds for the attempted transfer.
    #[error("out of fund")]
    OutOfFund,

    /// Memory/calldata offset out of bounds.
    #[error("out of offset")]
    OutOfOffset,

    /// Call depth exceeded the engine limit.
    #[error("call too deep")]
    CallTooDeep,

    /// A legacy-format result reported failure via its boolean status.
    ///
    /// The legacy layout carries no failure detail beyond the flag, so the
    /// output bytes accompanying it are not trustworthy and are dropped.
    #[error("legacy result reported failure")]
    LegacyStatusFalse,
}

impl ExecutionError {
    /// Returns the revert output, if this outcome carries one.
    #[must_use]
    pub fn revert_output(&self) -> Option<&Bytes> {
        match self {
            Self::Revert(output) => Some(output),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
