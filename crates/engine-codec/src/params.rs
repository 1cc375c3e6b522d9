//! # Call Argument Structures
//!
//! Typed parameter structures for the engine contract's callable entry
//! points. Each type is a plain value: constructed by the caller immediately
//! before encoding, stateless, and discarded afterwards.
//!
//! Every type carries a fixed entry in the schema table
//! ([`crate::schema::tables`]); `encode()` is total for any validly
//! constructed instance. Width checking happens at construction time through
//! the value objects — a wrong-length slice surfaces as
//! [`crate::errors::CodecError::WidthMismatch`], never as silent truncation
//! or padding.

use crate::codec::{Value, WireCodec};
use crate::domain::value_objects::{Address, Bytes, Hash, RawU256, Signature};
use crate::errors::CodecError;
use crate::schema::{tables, TypeDesc};
use serde::{Deserialize, Serialize};

/// Destructures a struct value into exactly `N` fields.
pub(crate) fn take_fields<const N: usize>(
    value: Value,
    name: &'static str,
) -> Result<[Value; N], CodecError> {
    value.into_struct()?.try_into().map_err(|_| CodecError::SchemaMismatch {
        expected: name,
        actual: "struct with wrong field count",
    })
}

// =============================================================================
// ENGINE LIFECYCLE
// =============================================================================

/// Arguments for initializing a fresh engine instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitEngineArgs {
    /// Chain id the engine will serve (32 bytes).
    pub chain_id: Hash,
    /// Account that owns the engine contract.
    pub owner_id: String,
    /// Account of the bridge prover contract.
    pub bridge_prover_id: String,
    /// Blocks to wait before a staged upgrade may be applied.
    pub upgrade_delay_blocks: u64,
}

impl InitEngineArgs {
    /// Creates initialization arguments.
    #[must_use]
    pub fn new(
        chain_id: Hash,
        owner_id: impl Into<String>,
        bridge_prover_id: impl Into<String>,
        upgrade_delay_blocks: u64,
    ) -> Self {
        Self {
            chain_id,
            owner_id: owner_id.into(),
            bridge_prover_id: bridge_prover_id.into(),
            upgrade_delay_blocks,
        }
    }
}

impl WireCodec for InitEngineArgs {
    fn descriptor() -> &'static TypeDesc {
        &tables::INIT_ENGINE_ARGS_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::fixed(self.chain_id.as_bytes()),
            Value::Str(self.owner_id.clone()),
            Value::Str(self.bridge_prover_id.clone()),
            Value::U64(self.upgrade_delay_blocks),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [chain_id, owner_id, bridge_prover_id, upgrade_delay_blocks] =
            take_fields(value, "InitEngineArgs")?;
        Ok(Self {
            chain_id: Hash::try_from_slice(&chain_id.into_fixed()?)?,
            owner_id: owner_id.into_string()?,
            bridge_prover_id: bridge_prover_id.into_string()?,
            upgrade_delay_blocks: upgrade_delay_blocks.into_u64()?,
        })
    }
}

/// Arguments for (re)starting a chain with a given id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginChainArgs {
    /// Chain id (32 bytes).
    pub chain_id: Hash,
}

impl BeginChainArgs {
    /// Creates chain-begin arguments.
    #[must_use]
    pub const fn new(chain_id: Hash) -> Self {
        Self { chain_id }
    }
}

impl WireCodec for BeginChainArgs {
    fn descriptor() -> &'static TypeDesc {
        &tables::BEGIN_CHAIN_ARGS_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![Value::fixed(self.chain_id.as_bytes())])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [chain_id] = take_fields(value, "BeginChainArgs")?;
        Ok(Self {
            chain_id: Hash::try_from_slice(&chain_id.into_fixed()?)?,
        })
    }
}

/// Block context announced at the start of each block.
///
/// The numeric fields travel as 32-byte big-endian words even where the
/// host's values fit in 64 bits, matching the engine's storage layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginBlockArgs {
    /// Block hash.
    pub hash: Hash,
    /// Block producer address.
    pub coinbase: Address,
    /// Block timestamp.
    pub timestamp: RawU256,
    /// Block height.
    pub number: RawU256,
    /// Block difficulty.
    pub difficulty: RawU256,
    /// Block gas limit.
    pub gas_limit: RawU256,
}

impl WireCodec for BeginBlockArgs {
    fn descriptor() -> &'static TypeDesc {
        &tables::BEGIN_BLOCK_ARGS_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::fixed(self.hash.as_bytes()),
            Value::fixed(self.coinbase.as_bytes()),
            Value::fixed(self.timestamp.as_bytes()),
            Value::fixed(self.number.as_bytes()),
            Value::fixed(self.difficulty.as_bytes()),
            Value::fixed(self.gas_limit.as_bytes()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [hash, coinbase, timestamp, number, difficulty, gas_limit] =
            take_fields(value, "BeginBlockArgs")?;
        Ok(Self {
            hash: Hash::try_from_slice(&hash.into_fixed()?)?,
            coinbase: Address::try_from_slice(&coinbase.into_fixed()?)?,
            timestamp: RawU256::try_from_slice(&timestamp.into_fixed()?)?,
            number: RawU256::try_from_slice(&number.into_fixed()?)?,
            difficulty: RawU256::try_from_slice(&difficulty.into_fixed()?)?,
            gas_limit: RawU256::try_from_slice(&gas_limit.into_fixed()?)?,
        })
    }
}

// =============================================================================
// FUNCTION CALLS
// =============================================================================

/// Current-revision arguments for the engine `call` entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCallArgsV2 {
    /// Target contract address.
    pub contract: Address,
    /// Base-token value attached to the call.
    pub value: RawU256,
    /// Call input (calldata).
    pub input: Bytes,
}

impl FunctionCallArgsV2 {
    /// Creates call arguments.
    #[must_use]
    pub fn new(contract: Address, value: RawU256, input: Bytes) -> Self {
        Self {
            contract,
            value,
            input,
        }
    }
}

impl WireCodec for FunctionCallArgsV2 {
    fn descriptor() -> &'static TypeDesc {
        &tables::FUNCTION_CALL_ARGS_V2_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::fixed(self.contract.as_bytes()),
            Value::fixed(self.value.as_bytes()),
            Value::Bytes(self.input.as_slice().to_vec()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [contract, attached, input] = take_fields(value, "FunctionCallArgsV2")?;
        Ok(Self {
            contract: Address::try_from_slice(&contract.into_fixed()?)?,
            value: RawU256::try_from_slice(&attached.into_fixed()?)?,
            input: Bytes::from_vec(input.into_bytes()?),
        })
    }
}

/// Legacy arguments for the engine `call` entry point: no attached value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCallArgsV1 {
    /// Target contract address.
    pub contract: Address,
    /// Call input (calldata).
    pub input: Bytes,
}

impl FunctionCallArgsV1 {
    /// Creates legacy call arguments.
    #[must_use]
    pub fn new(contract: Address, input: Bytes) -> Self {
        Self { contract, input }
    }
}

impl WireCodec for FunctionCallArgsV1 {
    fn descriptor() -> &'static TypeDesc {
        &tables::FUNCTION_CALL_ARGS_V1_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::fixed(self.contract.as_bytes()),
            Value::Bytes(self.input.as_slice().to_vec()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [contract, input] = take_fields(value, "FunctionCallArgsV1")?;
        Ok(Self {
            contract: Address::try_from_slice(&contract.into_fixed()?)?,
            input: Bytes::from_vec(input.into_bytes()?),
        })
    }
}

/// Call-argument revision wrapper: one discriminant byte selects which
/// revision of the call arguments follows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArgs {
    /// Current revision with an attached value.
    V2(FunctionCallArgsV2),
    /// Legacy revision without a value field.
    V1(FunctionCallArgsV1),
}

impl WireCodec for CallArgs {
    fn descriptor() -> &'static TypeDesc {
        &tables::CALL_ARGS_TY
    }

    fn to_value(&self) -> Value {
        match self {
            Self::V2(args) => Value::Enum {
                discriminant: 0,
                fields: vec![args.to_value()],
            },
            Self::V1(args) => Value::Enum {
                discriminant: 1,
                fields: vec![args.to_value()],
            },
        }
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let (discriminant, mut fields) = value.into_enum()?;
        let payload = fields.pop().ok_or(CodecError::SchemaMismatch {
            expected: "CallArgs",
            actual: "variant with wrong field count",
        })?;
        match discriminant {
            0 => Ok(Self::V2(FunctionCallArgsV2::from_value(payload)?)),
            1 => Ok(Self::V1(FunctionCallArgsV1::from_value(payload)?)),
            other => Err(CodecError::UnknownVariant {
                type_name: "CallArgs",
                discriminant: other,
                variant_count: 2,
            }),
        }
    }
}

/// Arguments for the read-only `view` entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCallArgs {
    /// Simulated sender address.
    pub sender: Address,
    /// Target contract address.
    pub address: Address,
    /// Simulated attached amount.
    pub amount: RawU256,
    /// Call input (calldata).
    pub input: Bytes,
}

impl WireCodec for ViewCallArgs {
    fn descriptor() -> &'static TypeDesc {
        &tables::VIEW_CALL_ARGS_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::fixed(self.sender.as_bytes()),
            Value::fixed(self.address.as_bytes()),
            Value::fixed(self.amount.as_bytes()),
            Value::Bytes(self.input.as_slice().to_vec()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [sender, address, amount, input] = take_fields(value, "ViewCallArgs")?;
        Ok(Self {
            sender: Address::try_from_slice(&sender.into_fixed()?)?,
            address: Address::try_from_slice(&address.into_fixed()?)?,
            amount: RawU256::try_from_slice(&amount.into_fixed()?)?,
            input: Bytes::from_vec(input.into_bytes()?),
        })
    }
}

/// Meta-transaction call: a signed payload relayed on behalf of the signer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaCallArgs {
    /// Signature over the meta-transaction body (r || s, 64 bytes).
    pub signature: Signature,
    /// Signature recovery id.
    pub v: u8,
    /// Signer nonce.
    pub nonce: RawU256,
    /// Fee paid to the relayer.
    pub fee_amount: RawU256,
    /// Token the fee is denominated in.
    pub fee_address: Address,
    /// Contract the inner call targets.
    pub contract_address: Address,
    /// Base-token value attached to the inner call.
    pub value: RawU256,
    /// Method signature definition of the inner call.
    pub method_def: String,
    /// Packed arguments of the inner call.
    pub args: Bytes,
}

impl WireCodec for MetaCallArgs {
    fn descriptor() -> &'static TypeDesc {
        &tables::META_CALL_ARGS_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::Fixed(self.signature.to_bytes().to_vec()),
            Value::U8(self.v),
            Value::fixed(self.nonce.as_bytes()),
            Value::fixed(self.fee_amount.as_bytes()),
            Value::fixed(self.fee_address.as_bytes()),
            Value::fixed(self.contract_address.as_bytes()),
            Value::fixed(self.value.as_bytes()),
            Value::Str(self.method_def.clone()),
            Value::Bytes(self.args.as_slice().to_vec()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [signature, v, nonce, fee_amount, fee_address, contract_address, attached, method_def, args] =
            take_fields(value, "MetaCallArgs")?;
        Ok(Self {
            signature: Signature::try_from_slice(&signature.into_fixed()?)?,
            v: v.into_u8()?,
            nonce: RawU256::try_from_slice(&nonce.into_fixed()?)?,
            fee_amount: RawU256::try_from_slice(&fee_amount.into_fixed()?)?,
            fee_address: Address::try_from_slice(&fee_address.into_fixed()?)?,
            contract_address: Address::try_from_slice(&contract_address.into_fixed()?)?,
            value: RawU256::try_from_slice(&attached.into_fixed()?)?,
            method_def: method_def.into_string()?,
            args: Bytes::from_vec(args.into_bytes()?),
        })
    }
}

// =============================================================================
// STATE QUERIES
// =============================================================================

/// Arguments for reading one storage slot of a contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStorageAtArgs {
    /// Contract address.
    pub address: Address,
    /// Storage key (32 bytes).
    pub key: Hash,
}

impl GetStorageAtArgs {
    /// Creates storage read arguments.
    #[must_use]
    pub const fn new(address: Address, key: Hash) -> Self {
        Self { address, key }
    }
}

impl WireCodec for GetStorageAtArgs {
    fn descriptor() -> &'static TypeDesc {
        &tables::GET_STORAGE_AT_ARGS_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::fixed(self.address.as_bytes()),
            Value::fixed(self.key.as_bytes()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [address, key] = take_fields(value, "GetStorageAtArgs")?;
        Ok(Self {
            address: Address::try_from_slice(&address.into_fixed()?)?,
            key: Hash::try_from_slice(&key.into_fixed()?)?,
        })
    }
}

/// Arguments for querying the base-token balance of an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBalanceArgs {
    /// Address to query.
    pub address: Address,
}

impl WireCodec for GetBalanceArgs {
    fn descriptor() -> &'static TypeDesc {
        &tables::GET_BALANCE_ARGS_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![Value::fixed(self.address.as_bytes())])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [address] = take_fields(value, "GetBalanceArgs")?;
        Ok(Self {
            address: Address::try_from_slice(&address.into_fixed()?)?,
        })
    }
}

/// Arguments for transferring base tokens between engine accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEthArgs {
    /// Recipient address.
    pub address: Address,
    /// Amount to transfer.
    pub amount: RawU256,
}

impl WireCodec for TransferEthArgs {
    fn descriptor() -> &'static TypeDesc {
        &tables::TRANSFER_ETH_ARGS_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::fixed(self.address.as_bytes()),
            Value::fixed(self.amount.as_bytes()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [address, amount] = take_fields(value, "TransferEthArgs")?;
        Ok(Self {
            address: Address::try_from_slice(&address.into_fixed()?)?,
            amount: RawU256::try_from_slice(&amount.into_fixed()?)?,
        })
    }
}

// =============================================================================
// FUNGIBLE TOKEN CONNECTOR
// =============================================================================

/// Arguments for initializing the fungible-token connector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorInitArgs {
    /// Account of the proof-verifying contract.
    pub prover_account: String,
    /// Custodian contract address on the origin chain.
    pub custodian_address: Address,
}

impl WireCodec for ConnectorInitArgs {
    fn descriptor() -> &'static TypeDesc {
        &tables::CONNECTOR_INIT_ARGS_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::Str(self.prover_account.clone()),
            Value::fixed(self.custodian_address.as_bytes()),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [prover_account, custodian_address] = take_fields(value, "ConnectorInitArgs")?;
        Ok(Self {
            prover_account: prover_account.into_string()?,
            custodian_address: Address::try_from_slice(&custodian_address.into_fixed()?)?,
        })
    }
}

/// Fungible-token metadata document.
///
/// Also circulates as JSON on the host side; the serde derives carry that
/// representation, the schema entry carries the wire one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FungibleTokenMetadata {
    /// Metadata spec version string.
    pub spec: String,
    /// Human-readable token name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Optional icon data URL.
    pub icon: Option<String>,
    /// Optional link to off-chain metadata.
    pub reference: Option<String>,
    /// Optional hash of the referenced metadata (32 bytes).
    pub reference_hash: Option<Hash>,
    /// Decimal places.
    pub decimals: u8,
}

impl WireCodec for FungibleTokenMetadata {
    fn descriptor() -> &'static TypeDesc {
        &tables::FUNGIBLE_TOKEN_METADATA_TY
    }

    fn to_value(&self) -> Value {
        Value::Struct(vec![
            Value::Str(self.spec.clone()),
            Value::Str(self.name.clone()),
            Value::Str(self.symbol.clone()),
            Value::option(self.icon.clone().map(Value::Str)),
            Value::option(self.reference.clone().map(Value::Str)),
            Value::option(self.reference_hash.map(|h| Value::fixed(h.as_bytes()))),
            Value::U8(self.decimals),
        ])
    }

    fn from_value(value: Value) -> Result<Self, CodecError> {
        let [spec, name, symbol, icon, reference, reference_hash, decimals] =
            take_fields(value, "FungibleTokenMetadata")?;
        Ok(Self {
            spec: spec.into_string()?,
            name: name.into_string()?,
            symbol: symbol.into_string()?,
            icon: icon.into_option()?.map(Value::into_string).transpose()?,
            reference: reference.into_option()?.map(Value::into_string).transpose()?,
            reference_hash: reference_hash
                .into_option()?
                .map(|v| Hash::try_from_slice(&v.into_fixed()?))
                .transpose()?,
            decimals: decimals.into_u8()?,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
