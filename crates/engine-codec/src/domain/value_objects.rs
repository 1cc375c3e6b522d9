//! # Value Objects
//!
//! Immutable wire primitives for the engine call/result protocol.
//! These types represent concepts defined by their value, not identity, and
//! each one carries a fixed, documented wire width.

use crate::errors::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export U256 from primitive-types for 256-bit arithmetic
pub use primitive_types::U256;

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte engine address.
///
/// All address fields on the wire are exactly 20 raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Wire width in bytes.
    pub const WIDTH: usize = 20;

    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice, checking the width.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::WidthMismatch`] if the slice is not 20 bytes.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, CodecError> {
        if slice.len() == Self::WIDTH {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Ok(Self(bytes))
        } else {
            Err(CodecError::WidthMismatch {
                expected: Self::WIDTH,
                actual: slice.len(),
            })
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

// =============================================================================
// HASH (32 bytes)
// =============================================================================

/// A 32-byte hash, used for chain hashes, block hashes, storage keys, and
/// log topics.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Wire width in bytes.
    pub const WIDTH: usize = 32;

    /// The zero hash.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a hash from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a hash from a slice, checking the width.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::WidthMismatch`] if the slice is not 32 bytes.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, CodecError> {
        if slice.len() == Self::WIDTH {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Ok(Self(bytes))
        } else {
            Err(CodecError::WidthMismatch {
                expected: Self::WIDTH,
                actual: slice.len(),
            })
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the zero hash.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for [u8; 32] {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

// =============================================================================
// RAW U256 (32 bytes, big-endian)
// =============================================================================

/// A 256-bit amount in its 32-byte big-endian wire form.
///
/// Used for attached value, balances, nonces, and the block context numerics.
/// Kept raw on the wire; convert through [`U256`] for arithmetic.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RawU256(pub [u8; 32]);

impl RawU256 {
    /// Wire width in bytes.
    pub const WIDTH: usize = 32;

    /// The zero amount.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a raw amount from a 32-byte big-endian array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a raw amount from a [`U256`].
    #[must_use]
    pub fn from_u256(value: U256) -> Self {
        let mut bytes = [0u8; 32];
        value.to_big_endian(&mut bytes);
        Self(bytes)
    }

    /// Creates a raw amount from a slice, checking the width.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::WidthMismatch`] if the slice is not 32 bytes.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, CodecError> {
        if slice.len() == Self::WIDTH {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Ok(Self(bytes))
        } else {
            Err(CodecError::WidthMismatch {
                expected: Self::WIDTH,
                actual: slice.len(),
            })
        }
    }

    /// Converts to [`U256`].
    #[must_use]
    pub fn to_u256(&self) -> U256 {
        U256::from_big_endian(&self.0)
    }

    /// Narrows to a u64.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::IntegerOverflow`] if the value does not fit in
    /// 64 bits.
    pub fn to_u64(&self) -> Result<u64, CodecError> {
        let value = self.to_u256();
        if value > U256::from(u64::MAX) {
            Err(CodecError::IntegerOverflow)
        } else {
            Ok(value.as_u64())
        }
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for RawU256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawU256({})", self.to_u256())
    }
}

impl From<U256> for RawU256 {
    fn from(value: U256) -> Self {
        Self::from_u256(value)
    }
}

impl From<u64> for RawU256 {
    fn from(value: u64) -> Self {
        Self::from_u256(U256::from(value))
    }
}

// =============================================================================
// SIGNATURE (64 bytes)
// =============================================================================

/// A 64-byte recoverable signature body (r, s), serialized as r then s.
///
/// The recovery id travels as a separate u8 field next to the signature
/// (see the meta-call arguments), never inside it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Signature {
    /// r component (32 bytes).
    pub r: [u8; 32],
    /// s component (32 bytes).
    pub s: [u8; 32],
}

impl Signature {
    /// Wire width in bytes.
    pub const WIDTH: usize = 64;

    /// Creates a signature from its components.
    #[must_use]
    pub const fn new(r: [u8; 32], s: [u8; 32]) -> Self {
        Self { r, s }
    }

    /// Creates a signature from a 64-byte slice, checking the width.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::WidthMismatch`] if the slice is not 64 bytes.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, CodecError> {
        if slice.len() == Self::WIDTH {
            let mut r = [0u8; 32];
            let mut s = [0u8; 32];
            r.copy_from_slice(&slice[..32]);
            s.copy_from_slice(&slice[32..]);
            Ok(Self { r, s })
        } else {
            Err(CodecError::WidthMismatch {
                expected: Self::WIDTH,
                actual: slice.len(),
            })
        }
    }

    /// Returns the 64-byte wire form, r then s.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.r);
        out[32..].copy_from_slice(&self.s);
        out
    }
}

// =============================================================================
// BYTES (variable length)
// =============================================================================

/// Variable-length byte vector for call input, execution output, and log data.
///
/// Framed on the wire as a u32 little-endian length prefix plus raw bytes.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    /// Creates an empty Bytes.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates Bytes from a vector.
    #[must_use]
    pub fn from_vec(vec: Vec<u8>) -> Self {
        Self(vec)
    }

    /// Creates Bytes from a slice.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Self {
        Self(slice.to_vec())
    }

    /// Returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Returns a reference to the underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() <= 8 {
            write!(f, "0x")?;
            for byte in &self.0 {
                write!(f, "{byte:02x}")?;
            }
        } else {
            write!(f, "0x")?;
            for byte in &self.0[..4] {
                write!(f, "{byte:02x}")?;
            }
            write!(f, "..({} bytes)", self.0.len())?;
        }
        Ok(())
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(vec: Vec<u8>) -> Self {
        Self(vec)
    }
}

impl From<&[u8]> for Bytes {
    fn from(slice: &[u8]) -> Self {
        Self(slice.to_vec())
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
