//! # veiled-primitives: shared types for veiled-coin Σ-proofs
//!
//! Everything the prover and the verifier must agree on byte-for-byte lives
//! here:
//!
//! - the group parameters `G` (Ristretto basepoint) and `H` (Pedersen
//!   randomness base, see [`pedersen_h_generator`]),
//! - canonical 32-byte point and scalar codecs,
//! - the ElGamal [`Ciphertext`], Pedersen [`Commitment`] and [`PublicKey`]
//!   wrappers,
//! - the public statements and proof objects together with their fixed-width
//!   wire encodings,
//! - the Fiat–Shamir challenge derivation,
//! - the [`VeiledVerifier`] boundary a host implements or consumes.
//!
//! ## Proof Byte Layouts
//!
//! **Withdrawal subproof (160 bytes):**
//! ```text
//! X1(32) || X2(32) || X3(32) || alpha1(32) || alpha2(32)
//! ```
//!
//! **Transfer subproof (352 bytes):**
//! ```text
//! X1(32) || .. || X7(32) || alpha1(32) || .. || alpha4(32)
//! ```
//!
//! The crate is `no_std` unless the default `std` feature is enabled.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod challenge;
pub mod elgamal;
pub mod pedersen;
pub mod proofs;
pub mod statement;
#[cfg(any(test, feature = "test-utils"))]
pub mod tamper;

use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_POINT,
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
};
use sha2::Sha512;
use thiserror::Error;

pub use challenge::{derive_transfer_challenge, derive_withdrawal_challenge, FiatShamir};
pub use elgamal::{Ciphertext, PublicKey};
pub use pedersen::Commitment;
pub use proofs::{TransferSubproof, WithdrawalSubproof};
pub use statement::{StatementError, TransferStatement, WithdrawalStatement};

/// Size of a compressed Ristretto point.
pub const POINT_LEN: usize = 32;
/// Size of a canonical scalar.
pub const SCALAR_LEN: usize = 32;
/// Size of an ElGamal ciphertext `c1 || c2`.
pub const CIPHERTEXT_LEN: usize = 2 * POINT_LEN;

/// Primary generator `G`.
pub const G: RistrettoPoint = RISTRETTO_BASEPOINT_POINT;

/// Domain-separation labels. Changing any of these is a wire-breaking change.
pub mod labels {
    /// Hashed to a point to obtain the Pedersen randomness base `H`.
    pub const PEDERSEN_H: &[u8] = b"VeiledCoin/PedersenH";
    /// Prefix of every withdrawal subproof challenge.
    pub const WITHDRAWAL_DST: &[u8] = b"VeiledCoin/WithdrawalSubproofFiatShamir";
    /// Prefix of every transfer subproof challenge.
    pub const TRANSFER_DST: &[u8] = b"VeiledCoin/TransferSubproofFiatShamir";
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("expected {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },
    #[error("bytes are not a canonical Ristretto point")]
    InvalidPoint,
    #[error("bytes are not a canonical scalar")]
    InvalidScalar,
}

fn derive_pedersen_h() -> RistrettoPoint {
    RistrettoPoint::hash_from_bytes::<Sha512>(labels::PEDERSEN_H)
}

/// Pedersen randomness base `H`, independent of `G` under the discrete-log
/// assumption (nobody knows `log_G(H)` since it is a hash output).
pub fn pedersen_h_generator() -> RistrettoPoint {
    #[cfg(feature = "std")]
    {
        static H: std::sync::OnceLock<RistrettoPoint> = std::sync::OnceLock::new();
        *H.get_or_init(derive_pedersen_h)
    }
    #[cfg(not(feature = "std"))]
    {
        derive_pedersen_h()
    }
}

pub fn point_to_bytes(p: &RistrettoPoint) -> [u8; POINT_LEN] {
    p.compress().to_bytes()
}

/// Decode a compressed Ristretto point, rejecting non-canonical encodings.
pub fn point_from_bytes(bytes: &[u8]) -> Result<RistrettoPoint, CodecError> {
    let arr: [u8; POINT_LEN] = bytes.try_into().map_err(|_| CodecError::Length {
        expected: POINT_LEN,
        got: bytes.len(),
    })?;
    CompressedRistretto(arr)
        .decompress()
        .ok_or(CodecError::InvalidPoint)
}

/// Decode a scalar, rejecting values `>= ℓ`.
pub fn scalar_from_bytes(bytes: &[u8]) -> Result<Scalar, CodecError> {
    let arr: [u8; SCALAR_LEN] = bytes.try_into().map_err(|_| CodecError::Length {
        expected: SCALAR_LEN,
        got: bytes.len(),
    })?;
    Option::<Scalar>::from(Scalar::from_canonical_bytes(arr)).ok_or(CodecError::InvalidScalar)
}

/// Byte-level verification boundary exposed to a host (ledger, settlement
/// layer). Implementations decode every input and must fail closed.
pub trait VeiledVerifier {
    type Error;

    /// Check that `balance_ct` (under `sender_pk`) and `balance_comm` hide the
    /// same value with the same randomness.
    ///
    /// Inputs:
    /// - `sender_pk`: 32B compressed point
    /// - `balance_ct`: 64B ciphertext `c1 || c2`
    /// - `balance_comm`: 32B commitment
    /// - `proof`: 160B withdrawal subproof
    fn verify_withdrawal(
        sender_pk: &[u8],
        balance_ct: &[u8],
        balance_comm: &[u8],
        proof: &[u8],
    ) -> Result<(), Self::Error>;

    /// Check a transfer subproof.
    ///
    /// Inputs:
    /// - `sender_pk`, `recipient_pk`: 32B compressed points
    /// - `withdraw_ct`, `deposit_ct`: 64B ciphertexts of the amount under each key
    /// - `amount_comm`: 32B commitment to the amount
    /// - `balance_ct`, `balance_comm`: the sender's new balance, 64B and 32B
    /// - `proof`: 352B transfer subproof
    fn verify_transfer(
        sender_pk: &[u8],
        recipient_pk: &[u8],
        withdraw_ct: &[u8],
        deposit_ct: &[u8],
        amount_comm: &[u8],
        balance_ct: &[u8],
        balance_comm: &[u8],
        proof: &[u8],
    ) -> Result<(), Self::Error>;
}
