//! # Schema Model & Registry
//!
//! Declarative layout descriptors for every structured type on the wire,
//! plus the process-wide registry that maps each wire type to its descriptor.
//!
//! Field order inside a descriptor IS the encode/decode order and therefore
//! part of the wire contract: reordering fields breaks compatibility with
//! every deployed engine contract.
//!
//! The registry is immutable configuration: built once on first use from the
//! fixed table in [`tables`], shared by reference, never mutated.

pub mod tables;

use std::collections::HashMap;
use std::sync::OnceLock;

// =============================================================================
// DESCRIPTOR MODEL
// =============================================================================

/// A type descriptor: the layout of one field or value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDesc {
    /// Unsigned 8-bit integer, one byte.
    U8,
    /// Unsigned 64-bit integer, eight bytes little-endian.
    U64,
    /// Variable-length byte sequence, u32 little-endian length prefix.
    Bytes,
    /// UTF-8 string, u32 little-endian length prefix.
    Str,
    /// Raw fixed-width byte array of the declared width, no prefix.
    FixedBytes(usize),
    /// Optional value: one presence byte (0/1), then the payload if present.
    Option(&'static TypeDesc),
    /// Homogeneous sequence: u32 little-endian count, then the elements.
    Seq(&'static TypeDesc),
    /// Nested struct: fields concatenated in declaration order.
    Struct(&'static StructDescriptor),
    /// Enum: one discriminant byte, then the active variant's fields.
    Enum(&'static EnumDescriptor),
}

impl TypeDesc {
    /// Short shape name for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U64 => "u64",
            Self::Bytes => "bytes",
            Self::Str => "string",
            Self::FixedBytes(_) => "fixed bytes",
            Self::Option(_) => "option",
            Self::Seq(_) => "sequence",
            Self::Struct(_) => "struct",
            Self::Enum(_) => "enum",
        }
    }
}

/// One named field inside a struct or enum variant.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldDesc {
    /// Field name (diagnostics only; names are never serialized).
    pub name: &'static str,
    /// Field layout.
    pub ty: TypeDesc,
}

/// Layout of a struct: ordered field list.
#[derive(Debug, PartialEq, Eq)]
pub struct StructDescriptor {
    /// Schema name of the struct.
    pub name: &'static str,
    /// Fields in wire order.
    pub fields: &'static [FieldDesc],
}

/// One enum variant and its payload fields.
#[derive(Debug, PartialEq, Eq)]
pub struct VariantDesc {
    /// Variant name (diagnostics only).
    pub name: &'static str,
    /// Payload fields in wire order; empty for unit variants.
    pub fields: &'static [FieldDesc],
}

/// Layout of an enum: ordered variant list.
///
/// The wire discriminant is the 0-based index into `variants`.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumDescriptor {
    /// Schema name of the enum.
    pub name: &'static str,
    /// Variants in discriminant order.
    pub variants: &'static [VariantDesc],
}

// =============================================================================
// SCHEMA REGISTRY
// =============================================================================

/// Identifier of a registered wire type.
///
/// Closed set: every structured type the protocol exchanges has exactly one
/// entry here and one descriptor in [`tables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// Engine initialization arguments.
    InitEngineArgs,
    /// Chain-begin arguments.
    BeginChainArgs,
    /// Block-begin context arguments.
    BeginBlockArgs,
    /// Current-revision function call arguments.
    FunctionCallArgsV2,
    /// Legacy function call arguments (no attached value).
    FunctionCallArgsV1,
    /// Call-argument revision wrapper.
    CallArgs,
    /// View call arguments.
    ViewCallArgs,
    /// Storage read arguments.
    GetStorageAtArgs,
    /// Meta-transaction call arguments.
    MetaCallArgs,
    /// Balance query arguments.
    GetBalanceArgs,
    /// Base-token transfer arguments.
    TransferEthArgs,
    /// Fungible-token connector initialization arguments.
    ConnectorInitArgs,
    /// Fungible-token metadata.
    FungibleTokenMetadata,
    /// Execution status enum.
    ExecutionStatus,
    /// Log event (status-first result revisions).
    LogEvent,
    /// Address-qualified log event (versioned result revision).
    AddressedLogEvent,
    /// Versioned submit result.
    SubmitResultV2,
    /// Status-first submit result.
    SubmitResultV1,
    /// Legacy boolean-status execution result.
    LegacyExecutionResult,
}

/// Process-wide mapping from wire type to layout descriptor.
#[derive(Debug)]
pub struct SchemaRegistry {
    table: HashMap<SchemaKind, &'static TypeDesc>,
}

impl SchemaRegistry {
    fn build() -> Self {
        use SchemaKind::*;
        let mut table: HashMap<SchemaKind, &'static TypeDesc> = HashMap::new();
        table.insert(InitEngineArgs, &tables::INIT_ENGINE_ARGS_TY);
        table.insert(BeginChainArgs, &tables::BEGIN_CHAIN_ARGS_TY);
        table.insert(BeginBlockArgs, &tables::BEGIN_BLOCK_ARGS_TY);
        table.insert(FunctionCallArgsV2, &tables::FUNCTION_CALL_ARGS_V2_TY);
        table.insert(FunctionCallArgsV1, &tables::FUNCTION_CALL_ARGS_V1_TY);
        table.insert(CallArgs, &tables::CALL_ARGS_TY);
        table.insert(ViewCallArgs, &tables::VIEW_CALL_ARGS_TY);
        table.insert(GetStorageAtArgs, &tables::GET_STORAGE_AT_ARGS_TY);
        table.insert(MetaCallArgs, &tables::META_CALL_ARGS_TY);
        table.insert(GetBalanceArgs, &tables::GET_BALANCE_ARGS_TY);
        table.insert(TransferEthArgs, &tables::TRANSFER_ETH_ARGS_TY);
        table.insert(ConnectorInitArgs, &tables::CONNECTOR_INIT_ARGS_TY);
        table.insert(FungibleTokenMetadata, &tables::FUNGIBLE_TOKEN_METADATA_TY);
        table.insert(ExecutionStatus, &tables::EXECUTION_STATUS_TY);
        table.insert(LogEvent, &tables::LOG_EVENT_TY);
        table.insert(AddressedLogEvent, &tables::ADDRESSED_LOG_EVENT_TY);
        table.insert(SubmitResultV2, &tables::SUBMIT_RESULT_V2_TY);
        table.insert(SubmitResultV1, &tables::SUBMIT_RESULT_V1_TY);
        table.insert(LegacyExecutionResult, &tables::LEGACY_EXECUTION_RESULT_TY);
        Self { table }
    }

    /// Returns the shared, immutable registry, building it on first use.
    pub fn global() -> &'static SchemaRegistry {
        static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::build)
    }

    /// Looks up the layout descriptor for a wire type.
    ///
    /// # Panics
    ///
    /// Panics if the fixed table is missing an entry for `kind`. That is a
    /// programming error (the table and [`SchemaKind`] drifted apart), not a
    /// runtime condition.
    #[must_use]
    pub fn describe(&self, kind: SchemaKind) -> &'static TypeDesc {
        self.table
            .get(&kind)
            .copied()
            .unwrap_or_else(|| panic!("schema not registered: {kind:?}"))
    }

    /// Number of registered wire types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the registry is empty (never, once built).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
