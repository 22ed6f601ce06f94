//! Attestation signature verification.
//!
//! Attestations are 65-byte ECDSA signatures (r ‖ s ‖ v) over a fingerprint
//! hashed under the `"\x19Ethereum Signed Message:\n32"` prefix, the format
//! produced by standard oracle signing tooling. The signer identity is the
//! Ethereum-style address derived from the recovered public key: the last
//! 20 bytes of keccak256(pubkey).
//!
//! Validation is strict and each malformation is a distinct error:
//! - length must be exactly 65 bytes
//! - `v` must be 27 or 28
//! - `s` must be in the lower half of the curve order (malleability guard)

use cosmwasm_std::Deps;

use crate::error::ContractError;
use crate::hash::keccak256;

/// secp256k1 half curve order; signatures with s above this are rejected
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b,
    0x20, 0xa0,
];

/// Domain prefix applied to every fingerprint before recovery
const MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// A structurally valid 65-byte signature, split into its components.
#[derive(Debug)]
pub struct Signature {
    pub rs: [u8; 64],
    pub recovery_id: u8,
}

/// Parse and structurally validate a 65-byte r ‖ s ‖ v signature.
pub fn parse_signature(signature: &[u8]) -> Result<Signature, ContractError> {
    if signature.len() != 65 {
        return Err(ContractError::InvalidSignatureLength {
            got: signature.len(),
        });
    }

    let v = signature[64];
    if v != 27 && v != 28 {
        return Err(ContractError::InvalidSignatureV);
    }

    let s = &signature[32..64];
    if s > SECP256K1_HALF_ORDER.as_slice() {
        return Err(ContractError::InvalidSignatureS);
    }

    let mut rs = [0u8; 64];
    rs.copy_from_slice(&signature[0..64]);
    Ok(Signature {
        rs,
        recovery_id: v - 27,
    })
}

/// Recover the signer address of an attestation over `fingerprint`.
///
/// Returns the lowercase 0x-hex 20-byte address for comparison against the
/// registered protocol signer.
pub fn recover_signer(
    deps: Deps,
    fingerprint: &[u8; 32],
    signature: &[u8],
) -> Result<String, ContractError> {
    let sig = parse_signature(signature)?;
    let digest = prefixed_digest(fingerprint);

    let pubkey = deps
        .api
        .secp256k1_recover_pubkey(&digest, &sig.rs, sig.recovery_id)
        .map_err(|_| ContractError::UnauthorizedSigner)?;

    Ok(eth_address_from_pubkey(&pubkey))
}

/// Hash a fingerprint under the signed-message domain prefix.
pub fn prefixed_digest(fingerprint: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 60];
    data[..28].copy_from_slice(MESSAGE_PREFIX);
    data[28..].copy_from_slice(fingerprint);
    keccak256(&data)
}

/// Derive the eth-style address from a 65-byte uncompressed public key.
pub fn eth_address_from_pubkey(pubkey: &[u8]) -> String {
    // Skip the 0x04 uncompressed-point tag
    let hash = keccak256(&pubkey[1..]);
    format!("0x{}", hex::encode(&hash[12..]))
}

/// Validate and normalize a signer address supplied by the owner.
pub fn normalize_signer_address(input: &str) -> Result<String, ContractError> {
    let stripped = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if stripped.len() != 40 {
        return Err(ContractError::InvalidSignerAddress {
            reason: format!("expected 40 hex characters, got {}", stripped.len()),
        });
    }

    let bytes = hex::decode(stripped).map_err(|_| ContractError::InvalidSignerAddress {
        reason: "not a hex string".to_string(),
    })?;

    if bytes.iter().all(|b| *b == 0) {
        return Err(ContractError::InvalidSignerAddress {
            reason: "zero address".to_string(),
        });
    }

    Ok(format!("0x{}", hex::encode(bytes)))
}
