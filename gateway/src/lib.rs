//! Gateway Contract - Cross-Chain Asset Bridgehead
//!
//! This contract is one end of a cross-chain asset bridge. It accepts
//! outbound value from users bridging a native coin or CW20 token to another
//! chain, and releases value to users presenting an oracle-signed attestation
//! that the paired transfer happened on the remote chain.
//!
//! # Outbound Flow (Transfer)
//! 1. User sends funds to this contract with a destination chain and recipient
//! 2. The protocol fee is withheld into the fee ledger, the rest is custodied
//!    (or burned, for bridge-minted tokens)
//! 3. An off-chain relay observes the Transfer event and forwards it
//!
//! # Inbound Flow (Claim)
//! 1. The oracle signs an attestation binding the remote transfer to a
//!    32-byte fingerprint
//! 2. Anyone submits the attestation; the fingerprint is consumed exactly once
//! 3. The recipient receives the amount minus the gasless-claim reward, the
//!    submitting caller receives the reward
//!
//! # Security
//! - Replay guard: append-only fingerprint set, marked before funds move
//! - 65-byte ECDSA attestations with strict v/s validation
//! - Two-phase ownership transfer, signer rotation, and emergency withdrawal
//! - Signer rotation and emergency withdrawal gated behind pause

pub mod contract;
pub mod error;
mod execute;
pub mod fee;
pub mod hash;
pub mod msg;
mod query;
pub mod state;
pub mod verify;

pub use crate::error::ContractError;
pub use crate::fee::{compute_withholding, Withholding};
pub use crate::hash::{claim_fingerprint, fee_fingerprint, keccak256};
