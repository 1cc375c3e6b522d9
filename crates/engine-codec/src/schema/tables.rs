//! # Fixed Descriptor Table
//!
//! One layout descriptor per registered wire type. These constants are the
//! single source of truth for the byte layout of every call argument and
//! result structure; [`super::SchemaRegistry`] is built from them once at
//! first use.
//!
//! Field order is wire contract. Do not reorder.

use super::{EnumDescriptor, FieldDesc, StructDescriptor, TypeDesc, VariantDesc};

// =============================================================================
// SHARED ELEMENT TYPES
// =============================================================================

/// 20-byte address field.
const ADDRESS_TY: TypeDesc = TypeDesc::FixedBytes(20);
/// 32-byte hash / raw-u256 field.
const WORD_TY: TypeDesc = TypeDesc::FixedBytes(32);
/// 64-byte signature field.
const SIGNATURE_TY: TypeDesc = TypeDesc::FixedBytes(64);
/// Sequence of 32-byte log topics.
const TOPICS_TY: TypeDesc = TypeDesc::Seq(&WORD_TY);
/// Optional string field.
const OPT_STR_TY: TypeDesc = TypeDesc::Option(&TypeDesc::Str);
/// Optional 32-byte hash field.
const OPT_WORD_TY: TypeDesc = TypeDesc::Option(&WORD_TY);

// =============================================================================
// ARGUMENT STRUCTURES
// =============================================================================

const INIT_ENGINE_ARGS: StructDescriptor = StructDescriptor {
    name: "InitEngineArgs",
    fields: &[
        FieldDesc { name: "chain_id", ty: WORD_TY },
        FieldDesc { name: "owner_id", ty: TypeDesc::Str },
        FieldDesc { name: "bridge_prover_id", ty: TypeDesc::Str },
        FieldDesc { name: "upgrade_delay_blocks", ty: TypeDesc::U64 },
    ],
};
/// Top-level descriptor for the engine initialization arguments.
pub const INIT_ENGINE_ARGS_TY: TypeDesc = TypeDesc::Struct(&INIT_ENGINE_ARGS);

const BEGIN_CHAIN_ARGS: StructDescriptor = StructDescriptor {
    name: "BeginChainArgs",
    fields: &[FieldDesc { name: "chain_id", ty: WORD_TY }],
};
/// Top-level descriptor for the chain-begin arguments.
pub const BEGIN_CHAIN_ARGS_TY: TypeDesc = TypeDesc::Struct(&BEGIN_CHAIN_ARGS);

const BEGIN_BLOCK_ARGS: StructDescriptor = StructDescriptor {
    name: "BeginBlockArgs",
    fields: &[
        FieldDesc { name: "hash", ty: WORD_TY },
        FieldDesc { name: "coinbase", ty: ADDRESS_TY },
        FieldDesc { name: "timestamp", ty: WORD_TY },
        FieldDesc { name: "number", ty: WORD_TY },
        FieldDesc { name: "difficulty", ty: WORD_TY },
        FieldDesc { name: "gas_limit", ty: WORD_TY },
    ],
};
/// Top-level descriptor for the block-begin context.
pub const BEGIN_BLOCK_ARGS_TY: TypeDesc = TypeDesc::Struct(&BEGIN_BLOCK_ARGS);

const FUNCTION_CALL_ARGS_V2: StructDescriptor = StructDescriptor {
    name: "FunctionCallArgsV2",
    fields: &[
        FieldDesc { name: "contract", ty: ADDRESS_TY },
        FieldDesc { name: "value", ty: WORD_TY },
        FieldDesc { name: "input", ty: TypeDesc::Bytes },
    ],
};
/// Top-level descriptor for the current call arguments.
pub const FUNCTION_CALL_ARGS_V2_TY: TypeDesc = TypeDesc::Struct(&FUNCTION_CALL_ARGS_V2);

const FUNCTION_CALL_ARGS_V1: StructDescriptor = StructDescriptor {
    name: "FunctionCallArgsV1",
    fields: &[
        FieldDesc { name: "contract", ty: ADDRESS_TY },
        FieldDesc { name: "input", ty: TypeDesc::Bytes },
    ],
};
/// Top-level descriptor for the legacy call arguments.
pub const FUNCTION_CALL_ARGS_V1_TY: TypeDesc = TypeDesc::Struct(&FUNCTION_CALL_ARGS_V1);

const CALL_ARGS: EnumDescriptor = EnumDescriptor {
    name: "CallArgs",
    variants: &[
        VariantDesc {
            name: "V2",
            fields: &[FieldDesc { name: "args", ty: FUNCTION_CALL_ARGS_V2_TY }],
        },
        VariantDesc {
            name: "V1",
            fields: &[FieldDesc { name: "args", ty: FUNCTION_CALL_ARGS_V1_TY }],
        },
    ],
};
/// Top-level descriptor for the call-argument revision wrapper.
pub const CALL_ARGS_TY: TypeDesc = TypeDesc::Enum(&CALL_ARGS);

const VIEW_CALL_ARGS: StructDescriptor = StructDescriptor {
    name: "ViewCallArgs",
    fields: &[
        FieldDesc { name: "sender", ty: ADDRESS_TY },
        FieldDesc { name: "address", ty: ADDRESS_TY },
        FieldDesc { name: "amount", ty: WORD_TY },
        FieldDesc { name: "input", ty: TypeDesc::Bytes },
    ],
};
/// Top-level descriptor for the view call arguments.
pub const VIEW_CALL_ARGS_TY: TypeDesc = TypeDesc::Struct(&VIEW_CALL_ARGS);

const GET_STORAGE_AT_ARGS: StructDescriptor = StructDescriptor {
    name: "GetStorageAtArgs",
    fields: &[
        FieldDesc { name: "address", ty: ADDRESS_TY },
        FieldDesc { name: "key", ty: WORD_TY },
    ],
};
/// Top-level descriptor for the storage read arguments.
pub const GET_STORAGE_AT_ARGS_TY: TypeDesc = TypeDesc::Struct(&GET_STORAGE_AT_ARGS);

const META_CALL_ARGS: StructDescriptor = StructDescriptor {
    name: "MetaCallArgs",
    fields: &[
        FieldDesc { name: "signature", ty: SIGNATURE_TY },
        FieldDesc { name: "v", ty: TypeDesc::U8 },
        FieldDesc { name: "nonce", ty: WORD_TY },
        FieldDesc { name: "fee_amount", ty: WORD_TY },
        FieldDesc { name: "fee_address", ty: ADDRESS_TY },
        FieldDesc { name: "contract_address", ty: ADDRESS_TY },
        FieldDesc { name: "value", ty: WORD_TY },
        FieldDesc { name: "method_def", ty: TypeDesc::Str },
        FieldDesc { name: "args", ty: TypeDesc::Bytes },
    ],
};
/// Top-level descriptor for the meta-transaction call arguments.
pub const META_CALL_ARGS_TY: TypeDesc = TypeDesc::Struct(&META_CALL_ARGS);

const GET_BALANCE_ARGS: StructDescriptor = StructDescriptor {
    name: "GetBalanceArgs",
    fields: &[FieldDesc { name: "address", ty: ADDRESS_TY }],
};
/// Top-level descriptor for the balance query arguments.
pub const GET_BALANCE_ARGS_TY: TypeDesc = TypeDesc::Struct(&GET_BALANCE_ARGS);

const TRANSFER_ETH_ARGS: StructDescriptor = StructDescriptor {
    name: "TransferEthArgs",
    fields: &[
        FieldDesc { name: "address", ty: ADDRESS_TY },
        FieldDesc { name: "amount", ty: WORD_TY },
    ],
};
/// Top-level descriptor for the base-token transfer arguments.
pub const TRANSFER_ETH_ARGS_TY: TypeDesc = TypeDesc::Struct(&TRANSFER_ETH_ARGS);

const CONNECTOR_INIT_ARGS: StructDescriptor = StructDescriptor {
    name: "ConnectorInitArgs",
    fields: &[
        FieldDesc { name: "prover_account", ty: TypeDesc::Str },
        FieldDesc { name: "custodian_address", ty: ADDRESS_TY },
    ],
};
/// Top-level descriptor for the token connector initialization arguments.
pub const CONNECTOR_INIT_ARGS_TY: TypeDesc = TypeDesc::Struct(&CONNECTOR_INIT_ARGS);

const FUNGIBLE_TOKEN_METADATA: StructDescriptor = StructDescriptor {
    name: "FungibleTokenMetadata",
    fields: &[
        FieldDesc { name: "spec", ty: TypeDesc::Str },
        FieldDesc { name: "name", ty: TypeDesc::Str },
        FieldDesc { name: "symbol", ty: TypeDesc::Str },
        FieldDesc { name: "icon", ty: OPT_STR_TY },
        FieldDesc { name: "reference", ty: OPT_STR_TY },
        FieldDesc { name: "reference_hash", ty: OPT_WORD_TY },
        FieldDesc { name: "decimals", ty: TypeDesc::U8 },
    ],
};
/// Top-level descriptor for the fungible-token metadata.
pub const FUNGIBLE_TOKEN_METADATA_TY: TypeDesc = TypeDesc::Struct(&FUNGIBLE_TOKEN_METADATA);

// =============================================================================
// RESULT STRUCTURES
// =============================================================================

const EXECUTION_STATUS: EnumDescriptor = EnumDescriptor {
    name: "ExecutionStatus",
    variants: &[
        VariantDesc {
            name: "Success",
            fields: &[FieldDesc { name: "output", ty: TypeDesc::Bytes }],
        },
        VariantDesc {
            name: "Revert",
            fields: &[FieldDesc { name: "output", ty: TypeDesc::Bytes }],
        },
        VariantDesc { name: "OutOfGas", fields: &[] },
        VariantDesc { name: "OutOfFund", fields: &[] },
        VariantDesc { name: "OutOfOffset", fields: &[] },
        VariantDesc { name: "CallTooDeep", fields: &[] },
    ],
};
/// Top-level descriptor for the execution status enum.
pub const EXECUTION_STATUS_TY: TypeDesc = TypeDesc::Enum(&EXECUTION_STATUS);

const LOG_EVENT: StructDescriptor = StructDescriptor {
    name: "LogEvent",
    fields: &[
        FieldDesc { name: "topics", ty: TOPICS_TY },
        FieldDesc { name: "data", ty: TypeDesc::Bytes },
    ],
};
/// Top-level descriptor for the status-first-revision log event.
pub const LOG_EVENT_TY: TypeDesc = TypeDesc::Struct(&LOG_EVENT);

const ADDRESSED_LOG_EVENT: StructDescriptor = StructDescriptor {
    name: "AddressedLogEvent",
    fields: &[
        FieldDesc { name: "address", ty: ADDRESS_TY },
        FieldDesc { name: "topics", ty: TOPICS_TY },
        FieldDesc { name: "data", ty: TypeDesc::Bytes },
    ],
};
/// Top-level descriptor for the address-qualified log event.
pub const ADDRESSED_LOG_EVENT_TY: TypeDesc = TypeDesc::Struct(&ADDRESSED_LOG_EVENT);

const SUBMIT_RESULT_V2: StructDescriptor = StructDescriptor {
    name: "SubmitResultV2",
    fields: &[
        FieldDesc { name: "version", ty: TypeDesc::U8 },
        FieldDesc { name: "status", ty: EXECUTION_STATUS_TY },
        FieldDesc { name: "gas_used", ty: TypeDesc::U64 },
        FieldDesc { name: "logs", ty: TypeDesc::Seq(&ADDRESSED_LOG_EVENT_TY) },
    ],
};
/// Top-level descriptor for the versioned submit result.
pub const SUBMIT_RESULT_V2_TY: TypeDesc = TypeDesc::Struct(&SUBMIT_RESULT_V2);

const SUBMIT_RESULT_V1: StructDescriptor = StructDescriptor {
    name: "SubmitResultV1",
    fields: &[
        FieldDesc { name: "status", ty: EXECUTION_STATUS_TY },
        FieldDesc { name: "gas_used", ty: TypeDesc::U64 },
        FieldDesc { name: "logs", ty: TypeDesc::Seq(&LOG_EVENT_TY) },
    ],
};
/// Top-level descriptor for the status-first submit result.
pub const SUBMIT_RESULT_V1_TY: TypeDesc = TypeDesc::Struct(&SUBMIT_RESULT_V1);

const LEGACY_EXECUTION_RESULT: StructDescriptor = StructDescriptor {
    name: "LegacyExecutionResult",
    fields: &[
        FieldDesc { name: "status", ty: TypeDesc::U8 },
        FieldDesc { name: "gas_used", ty: TypeDesc::U64 },
        FieldDesc { name: "output", ty: TypeDesc::Bytes },
        FieldDesc { name: "logs", ty: TypeDesc::Seq(&LOG_EVENT_TY) },
    ],
};
/// Top-level descriptor for the legacy boolean-status result.
pub const LEGACY_EXECUTION_RESULT_TY: TypeDesc = TypeDesc::Struct(&LEGACY_EXECUTION_RESULT);
