//! Fingerprint computation for attestations and the replay guard.
//!
//! A fingerprint is keccak256 over a fixed byte layout. Variable-length
//! fields (token identifier, recipient, transaction identifier) enter the
//! layout as their own keccak256, so field boundaries stay unambiguous.
//!
//! # Claim fingerprint layout (192 bytes)
//! - Bytes 0-15:    source chain ID (u128, big-endian)
//! - Bytes 16-31:   destination chain ID (u128, big-endian)
//! - Bytes 32-63:   amount (u256, big-endian, left-padded)
//! - Bytes 64-95:   gasless claim reward (u256, big-endian, left-padded)
//! - Bytes 96-127:  keccak256(token)
//! - Bytes 128-159: keccak256(recipient)
//! - Bytes 160-191: keccak256(txHash)
//!
//! # Fee settlement fingerprint layout (80 bytes)
//! - Bytes 0-31:  block height (u256, big-endian, left-padded)
//! - Bytes 32-47: chain ID (u128, big-endian)
//! - Bytes 48-79: keccak256(token)

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the claim attestation fingerprint.
///
/// Binds the exact tuple (sourceChain, destinationChain, amount, reward,
/// token, recipient, txHash) consumed at-most-once by the replay guard.
pub fn claim_fingerprint(
    src_chain: u64,
    dest_chain: u64,
    amount: u128,
    reward: u128,
    token: &str,
    recipient: &str,
    tx_hash: &[u8],
) -> [u8; 32] {
    let mut data = [0u8; 192];

    // Chain IDs occupy 16-byte slots; u64 values are left-padded
    data[8..16].copy_from_slice(&src_chain.to_be_bytes());
    data[24..32].copy_from_slice(&dest_chain.to_be_bytes());

    // Amounts occupy u256 slots; u128 goes into the low 16 bytes
    data[48..64].copy_from_slice(&amount.to_be_bytes());
    data[80..96].copy_from_slice(&reward.to_be_bytes());

    data[96..128].copy_from_slice(&keccak256(token.as_bytes()));
    data[128..160].copy_from_slice(&keccak256(recipient.as_bytes()));
    data[160..192].copy_from_slice(&keccak256(tx_hash));

    keccak256(&data)
}

/// Compute the fee settlement attestation fingerprint over
/// (blockHeight, chainId, token).
pub fn fee_fingerprint(block_height: u64, chain_id: u64, token: &str) -> [u8; 32] {
    let mut data = [0u8; 80];

    data[24..32].copy_from_slice(&block_height.to_be_bytes());
    data[40..48].copy_from_slice(&chain_id.to_be_bytes());
    data[48..80].copy_from_slice(&keccak256(token.as_bytes()));

    keccak256(&data)
}

/// Convert a 32-byte hash to a 0x-prefixed hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
