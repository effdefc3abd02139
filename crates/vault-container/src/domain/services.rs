//! # Domain Services
//!
//! Pure functions used by the container and its deployment surface.
//! No I/O, no async code, deterministic.

use sha3::{Digest, Keccak256};
use vault_types::{Address, Bytes32};

// =============================================================================
// FIXED-WIDTH PADDING
// =============================================================================

/// Right-pads `input` with zero bytes to the fixed 32-byte width.
///
/// Returns None when `input` exceeds 32 bytes. This is the precondition
/// check for `set_fixed_data`: it must run to completion before any field
/// write.
#[must_use]
pub fn pad_fixed(input: &[u8]) -> Option<Bytes32> {
    Bytes32::right_padded(input)
}

// =============================================================================
// CONTAINER ADDRESS DERIVATION
// =============================================================================

/// Derives the address of a newly deployed container.
///
/// Address = keccak256(rlp(\[deployer, nonce\]))\[12..\], the hosting
/// environment's standard creation derivation, so a deployment report is
/// deterministic for a given deployer account.
#[must_use]
pub fn compute_container_address(deployer: Address, nonce: u64) -> Address {
    // RLP encode [deployer, nonce]
    let mut content = Vec::with_capacity(32);

    // 20-byte string header (0x80 + 20)
    content.push(0x94);
    content.extend_from_slice(deployer.as_bytes());

    if nonce == 0 {
        content.push(0x80); // Empty byte string
    } else if nonce < 128 {
        content.push(nonce as u8);
    } else {
        let nonce_bytes = trim_leading_zeros(nonce);
        content.push(0x80 + nonce_bytes.len() as u8);
        content.extend_from_slice(&nonce_bytes);
    }

    // List header; content is always short here (< 56 bytes).
    let mut rlp_data = Vec::with_capacity(content.len() + 1);
    rlp_data.push(0xc0 + content.len() as u8);
    rlp_data.extend_from_slice(&content);

    // Hash and take last 20 bytes.
    let hash = Keccak256::digest(&rlp_data);
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&hash[12..32]);
    Address::new(addr)
}

/// Helper to encode a u64 as big-endian bytes without leading zeros.
fn trim_leading_zeros(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(7);
    bytes[start..].to_vec()
}

// =============================================================================
// TESTS
// =============================================================================
