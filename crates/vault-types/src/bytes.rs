//! # Byte Sequence Primitives
//!
//! [`Bytes32`] is the fixed-size blob: its storage width is always 32 bytes
//! regardless of the logical content, with trailing bytes zero-filled.
//! [`Bytes`] is the variable-length sequence used for dynamic data and call
//! payloads.

use crate::error::{strip_prefix, HexError};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// BYTES32 (fixed 32 bytes)
// =============================================================================

/// A fixed 32-byte blob.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bytes32(pub [u8; 32]);

impl Bytes32 {
    /// The width of the blob in bytes.
    pub const WIDTH: usize = 32;

    /// The zero blob.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a blob from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a blob from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == Self::WIDTH {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Creates a blob from up to 32 input bytes, zero-filling the tail.
    ///
    /// Returns None when the input exceeds 32 bytes; the caller decides how
    /// to surface the rejection.
    #[must_use]
    pub fn right_padded(input: &[u8]) -> Option<Self> {
        if input.len() > Self::WIDTH {
            return None;
        }
        let mut bytes = [0u8; 32];
        bytes[..input.len()].copy_from_slice(input);
        Some(Self(bytes))
    }

    /// Parses a blob from hex text, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`HexError`] on malformed digits or a width other than
    /// 32 bytes.
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        let raw = hex::decode(strip_prefix(input))?;
        Self::from_slice(&raw).ok_or(HexError::InvalidLength {
            expected: Self::WIDTH,
            actual: raw.len(),
        })
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the zero blob.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Bytes32> for [u8; 32] {
    fn from(blob: Bytes32) -> Self {
        blob.0
    }
}

impl AsRef<[u8]> for Bytes32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// BYTES (variable length)
// =============================================================================

/// Variable-length byte vector for dynamic data and call payloads.
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
