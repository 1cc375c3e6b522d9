//! # Execution Result Structures
//!
//! The engine's `submit` entry point has answered in three wire layouts over
//! its lifetime, and all three still circulate:
//!
//! | Layout | Leading byte | Shape |
//! |--------|--------------|-------|
//! | versioned | the constant [`SUBMIT_RESULT_VERSION`] | version, status enum, gas, addressed logs |
//! | status-first | status discriminant (0..=5) | status enum, gas, logs |
//! | legacy | boolean status | status u8, gas, output, logs |
//!
//! [`SubmitResult::decode_versioned`] disambiguates by inspecting the first
//! byte and trial-decoding, first match wins. Only the middle trial swallows
//! its decode failure; the first and last surface theirs.

use crate::codec::{Value, WireCodec};
use crate::domain::value_objects::{Address, Bytes, Hash};
use crate::errors::{CodecError, ExecutionError};
use crate::params::take_fields;
use crate::schema::{tables, TypeDesc};
use serde::{Deserialize, Serialize};

/// Version tag carried in the leading byte of the current result layout.
pub const SUBMIT_RESULT_VERSION: u8 = 7;

// =============================================================================
// EXECUTION STATUS
// =============================================================================

/// Terminal status of one VM execution.
///
/// Exactly one variant is ever populated; the wire discriminant is the
/// variant's position here, so the order is load-bearing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Execution completed; carries the return data.
    Success(Bytes),
    /// Execution reverted; carries the revert data.
    Revert(Bytes),
    /// Execution ran out of gas.
    OutOfGas,
    /// Attached value exceeded the sender's balance.
    OutOfFund,
    /// Memory access outside the addressable range.
    OutOfOffset,
    /// Call stack exceeded the depth limit.
    CallTooDeep,
}

impl ExecutionStatus {
    /// Returns true for the success variant only.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Collapses the status into an outcome: success output, or the failure
    /// as a typed error.
    ///
    /// # Errors
    ///
    /// Returns the corresponding [`ExecutionError`] for every non-success
    /// variant; the revert error keeps the revert data.
    pub fn into_outcome(self) -> Result<Bytes, ExecutionError> {
        match self {
            Self::Success(output) => Ok(output),
            Self::Revert(output) => Err(ExecutionError::Revert(output)),
            Self::OutOfGas => Err(ExecutionError::OutOfGas),
            Self::OutOfFund => Err(ExecutionError::OutOfFund),
            Self::OutOfOffset => Err(ExecutionError::OutOfOffset),
            Self::CallTooDeep => Err(ExecutionError::CallTooDeep),
        }
    }
}

impl WireCodec for ExecutionStatus {
    fn descriptor() -> &'static TypeDesc {
        &tables::EXECUTION_STATUS_TY
    }

    fn to_value(&self) -> Value {
        let (discriminant, fields) = match self {
            Self::Success(output) => (0, vec![Value::Bytes(output.as_slice().to_vec())]),
            Self::Revert(output) => (1, vec![Value::Bytes(output.as_slice().to_vec())]),
            Self::OutOfGas => (2, vec![]),
            Self::OutOfFund => (3, vec![]),
            Self::OutOfOffset => (4, vec![]),
            Self::CallTooDeep => (5, vec![]),
        };
        Value::Enum {
            discriminant,
            fields,
        }
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let (discriminant, mut fields) = value.into_enum()?;
        let mut payload = || {
            fields
                .pop()
                .ok_or(CodecError::SchemaMismatch {
                    expected: "ExecutionStatus",
                    actual: "variant with wrong field count",
                })?
                .into_bytes()
                .map(Bytes::from_vec)
        };
        match discriminant {
            0 => Ok(Self::Success(payload()?)),
            1 => Ok(Self::Revert(payload()?)),
            2 => Ok(Self::OutOfGas),
            3 => Ok(Self::OutOfFund),
            4 => Ok(Self::OutOfOffset),
            5 => Ok(Self::CallTooDeep),
            other => Err(CodecError::UnknownVariant {
                type_name: "ExecutionStatus",
                discriminant: other,
                variant_count: 6,
            }),
        }
    }
}

// =============================================================================
// LOG EVENTS
// =============================================================================

/// Log entry as emitted in the status-first and legacy result layouts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Indexed topics, 32 bytes each.
    pub topics: Vec<Hash>,
    /// Unindexed payload.
    pub data: Bytes,
}

impl WireCodec for LogEvent {
    fn descriptor() -> &'static TypeDesc {
        &tables::LOG_EVENT_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::Seq(self.topics.iter().map(|t| Value::fixed(t.as_bytes())).collect()),
            Value::Bytes(self.data.as_slice().to_vec()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [topics, data] = take_fields(value, "LogEvent")?;
        Ok(Self {
            topics: decode_topics(topics)?,
            data: Bytes::from_vec(data.into_bytes()?),
        })
    }
}

/// Log entry in the versioned result layout, qualified with the address of
/// the contract that emitted it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressedLogEvent {
    /// Emitting contract address.
    pub address: Address,
    /// Indexed topics, 32 bytes each.
    pub topics: Vec<Hash>,
    /// Unindexed payload.
    pub data: Bytes,
}

impl WireCodec for AddressedLogEvent {
    fn descriptor() -> &'static TypeDesc {
        &tables::ADDRESSED_LOG_EVENT_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::fixed(self.address.as_bytes()),
            Value::Seq(self.topics.iter().map(|t| Value::fixed(t.as_bytes())).collect()),
            Value::Bytes(self.data.as_slice().to_vec()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [address, topics, data] = take_fields(value, "AddressedLogEvent")?;
        Ok(Self {
            address: Address::try_from_slice(&address.into_fixed()?)?,
            topics: decode_topics(topics)?,
            data: Bytes::from_vec(data.into_bytes()?),
        })
    }
}

fn decode_topics(value: Value) -> Result<Vec<Hash>, CodecError> {
    value
        .into_seq()?
        .into_iter()
        .map(|topic| Hash::try_from_slice(&topic.into_fixed()?))
        .collect()
}

// =============================================================================
// RESULT LAYOUTS
// =============================================================================

/// Current result layout, tagged with [`SUBMIT_RESULT_VERSION`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResultV2 {
    /// Terminal execution status.
    pub status: ExecutionStatus,
    /// Gas consumed by the execution.
    pub gas_used: u64,
    /// Logs emitted during execution.
    pub logs: Vec<AddressedLogEvent>,
}

impl SubmitResultV2 {
    /// Creates a versioned result. The version tag is fixed and supplied at
    /// encode time, never stored.
    #[must_use]
    pub fn new(status: ExecutionStatus, gas_used: u64, logs: Vec<AddressedLogEvent>) -> Self {
        Self {
            status,
            gas_used,
            logs,
        }
    }
}

impl WireCodec for SubmitResultV2 {
    fn descriptor() -> &'static TypeDesc {
        &tables::SUBMIT_RESULT_V2_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::U8(SUBMIT_RESULT_VERSION),
            self.status.to_value(),
            Value::U64(self.gas_used),
            Value::Seq(self.logs.iter().map(AddressedLogEvent::to_value).collect()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [version, status, gas_used, logs] = take_fields(value, "SubmitResultV2")?;
        let version = version.into_u8()?;
        if version != SUBMIT_RESULT_VERSION {
            return Err(CodecError::VersionMismatch {
                expected: SUBMIT_RESULT_VERSION,
                actual: version,
            });
        }
        Ok(Self {
            status: ExecutionStatus::from_value(status)?,
            gas_used: gas_used.into_u64()?,
            logs: logs
                .into_seq()?
                .into_iter()
                .map(AddressedLogEvent::from_value)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Status-first result layout: no version byte, status discriminant leads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResultV1 {
    /// Terminal execution status.
    pub status: ExecutionStatus,
    /// Gas consumed by the execution.
    pub gas_used: u64,
    /// Logs emitted during execution.
    pub logs: Vec<LogEvent>,
}

impl WireCodec for SubmitResultV1 {
    fn descriptor() -> &'static TypeDesc {
        &tables::SUBMIT_RESULT_V1_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            self.status.to_value(),
            Value::U64(self.gas_used),
            Value::Seq(self.logs.iter().map(LogEvent::to_value).collect()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [status, gas_used, logs] = take_fields(value, "SubmitResultV1")?;
        Ok(Self {
            status: ExecutionStatus::from_value(status)?,
            gas_used: gas_used.into_u64()?,
            logs: logs
                .into_seq()?
                .into_iter()
                .map(LogEvent::from_value)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Oldest result layout: a boolean status byte and a flat output field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyExecutionResult {
    /// True on success, false on any failure.
    pub status: bool,
    /// Gas consumed by the execution.
    pub gas_used: u64,
    /// Return or revert data.
    pub output: Bytes,
    /// Logs emitted during execution.
    pub logs: Vec<LogEvent>,
}

impl WireCodec for LegacyExecutionResult {
    fn descriptor() -> &'static TypeDesc {
        &tables::LEGACY_EXECUTION_RESULT_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::U8(u8::from(self.status)),
            Value::U64(self.gas_used),
            Value::Bytes(self.output.as_slice().to_vec()),
            Value::Seq(self.logs.iter().map(LogEvent::to_value).collect()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [status, gas_used, output, logs] = take_fields(value, "LegacyExecutionResult")?;
        Ok(Self {
            // Producers wrote 0 or 1; any nonzero byte reads as true.
            status: status.into_u8()? != 0,
            gas_used: gas_used.into_u64()?,
            output: Bytes::from_vec(output.into_bytes()?),
            logs: logs
                .into_seq()?
                .into_iter()
                .map(LogEvent::from_value)
                .collect::<Result<_, _>>()?,
        })
    }
}

// =============================================================================
// VERSIONED DECODING
// =============================================================================

/// A submit result in whichever layout it arrived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitResult {
    /// Versioned layout.
    V2(SubmitResultV2),
    /// Status-first layout.
    V1(SubmitResultV1),
    /// Boolean-status layout.
    Legacy(LegacyExecutionResult),
}

impl SubmitResult {
    /// Decodes a result in any of the three layouts.
    ///
    /// A leading [`SUBMIT_RESULT_VERSION`] byte commits to the versioned
    /// layout; its decode errors surface as-is. Otherwise the status-first
    /// layout is tried, and only if that trial fails (including on leftover
    /// bytes) does the legacy layout get its turn. The status-first
    /// discriminant range never collides with the version tag, so a
    /// versioned result can never fall through to the older layouts.
    ///
    /// # Errors
    ///
    /// Returns the versioned layout's decode error when the version byte
    /// matched, or the legacy layout's decode error when both fallback
    /// trials failed.
    pub fn decode_versioned(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.first() == Some(&SUBMIT_RESULT_VERSION) {
            return SubmitResultV2::decode(bytes).map(Self::V2);
        }
        match SubmitResultV1::decode(bytes) {
            Ok(result) => Ok(Self::V1(result)),
            Err(trial_error) => {
                tracing::debug!(
                    error = %trial_error,
                    "status-first result decode failed, trying legacy layout"
                );
                LegacyExecutionResult::decode(bytes).map(Self::Legacy)
            }
        }
    }

    /// Gas consumed, uniform across layouts.
    #[must_use]
    pub fn gas_used(&self) -> u64 {
        match self {
            Self::V2(r) => r.gas_used,
            Self::V1(r) => r.gas_used,
            Self::Legacy(r) => r.gas_used,
        }
    }

    /// Returns true if the execution succeeded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        match self {
            Self::V2(r) => r.status.is_ok(),
            Self::V1(r) => r.status.is_ok(),
            Self::Legacy(r) => r.status,
        }
    }

    /// Collapses the result into an outcome, whichever layout it arrived in.
    ///
    /// # Errors
    ///
    /// Returns the failure as a typed [`ExecutionError`]. A failed legacy
    /// result maps to [`ExecutionError::LegacyStatusFalse`]; its output field
    /// is discarded because the boolean layout does not say whether the data
    /// is revert output.
    pub fn into_outcome(self) -> Result<Bytes, ExecutionError> {
        match self {
            Self::V2(r) => r.status.into_outcome(),
            Self::V1(r) => r.status.into_outcome(),
            Self::Legacy(r) => {
                if r.status {
                    Ok(r.output)
                } else {
                    Err(ExecutionError::LegacyStatusFalse)
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
