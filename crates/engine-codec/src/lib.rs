//! # Engine Codec - Call and Result Wire Protocol
//!
//! Binary codec for the parameters and results of a VM-execution engine
//! contract. Hosts build typed argument structures, encode them to the wire,
//! and decode the engine's execution results, including the three result
//! layouts that have accumulated over the protocol's lifetime.
//!
//! ## Wire Format
//!
//! | Element | Layout |
//! |---------|--------|
//! | fixed-width integers | little-endian, natural width |
//! | fixed byte arrays | raw bytes, no prefix |
//! | variable bytes / strings | u32 little-endian length prefix, then bytes |
//! | structs | fields concatenated in declaration order, no padding |
//! | enums | one discriminant byte (0-based), then the active variant's fields |
//! | options | one presence byte (0 or 1), then the payload if present |
//!
//! Decoding is strict: truncated input, unknown discriminants, malformed
//! UTF-8, and leftover bytes are all errors, never coerced.
//!
//! ## Layers
//!
//! | Layer | Location | Purpose |
//! |-------|----------|---------|
//! | Value objects | `domain/value_objects.rs` | Width-checked primitives (Address, Hash, ...) |
//! | Primitive codec | `codec/cursor.rs` | LE integers, fixed and framed bytes |
//! | Schema table | `schema/tables.rs` | Static layout descriptors for every wire type |
//! | Generic walker | `codec/walk.rs` | One recursive codec driven by the descriptors |
//! | Parameters | `params.rs` | Typed call argument structures |
//! | Results | `results.rs` | Execution results and versioned decoding |
//!
//! ## Usage Example
//!
//! ```ignore
//! use engine_codec::prelude::*;
//!
//! let args = FunctionCallArgsV2::new(contract, RawU256::from(value), input);
//! let wire = CallArgs::V2(args).encode()?;
//!
//! // ... submit to the engine, read back the raw result ...
//!
//! let result = SubmitResult::decode_versioned(&raw)?;
//! let output = result.into_outcome()?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// =============================================================================
// MODULES
// =============================================================================

pub mod codec;
pub mod domain;
pub mod errors;
pub mod params;
pub mod results;
pub mod schema;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Value objects
    pub use crate::domain::value_objects::{Address, Bytes, Hash, RawU256, Signature, U256};

    // Codec machinery
    pub use crate::codec::{ByteWriter, Cursor, Value, WireCodec};

    // Schema
    pub use crate::schema::{SchemaKind, SchemaRegistry, TypeDesc};

    // Call arguments
    pub use crate::params::{
        BeginBlockArgs, BeginChainArgs, CallArgs, ConnectorInitArgs, FunctionCallArgsV1,
        FunctionCallArgsV2, FungibleTokenMetadata, GetBalanceArgs, GetStorageAtArgs,
        InitEngineArgs, MetaCallArgs, TransferEthArgs, ViewCallArgs,
    };

    // Results
    pub use crate::results::{
        AddressedLogEvent, ExecutionStatus, LegacyExecutionResult, LogEvent, SubmitResult,
        SubmitResultV1, SubmitResultV2, SUBMIT_RESULT_VERSION,
    };

    // Errors
    pub use crate::errors::{CodecError, ExecutionError};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
