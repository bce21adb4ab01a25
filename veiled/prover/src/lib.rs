//! # veiled-prover: Σ-proof generation for veiled coins
//!
//! Client-side counterpart of `veiled-verifier`. Produces the two subproofs a
//! veiled-coin host checks before it touches any balance:
//!
//! - [`prove_withdrawal`]: the sender's balance ciphertext and a Pedersen
//!   commitment hide the same value, so a range proof can run over the
//!   commitment instead of the ciphertext.
//! - [`prove_transfer`]: the amount is encrypted under both keys and committed
//!   with the same randomness, and the sender's new balance is consistently
//!   encrypted and committed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use veiled_prover::{prove_withdrawal, Keypair, WithdrawalInput};
//! use veiled_primitives::{Ciphertext, Commitment};
//! use curve25519_dalek::scalar::Scalar;
//!
//! let mut rng = rand::rng();
//! let sender = Keypair::generate(&mut rng);
//! let r = veiled_prover::random_scalar(&mut rng);
//!
//! let input = WithdrawalInput {
//!     sender_pk: sender.public(),
//!     balance_ct: Ciphertext::new(Scalar::from(50u64), &r, &sender.public()),
//!     balance_comm: Commitment::new(Scalar::from(50u64), &r),
//!     randomness: r,
//!     value: 50,
//! };
//! let proof = prove_withdrawal(&input, &mut rng)?;
//!
//! // Submit proof.to_bytes() (160 bytes) alongside the statement.
//! ```
//!
//! ## Security Notes
//!
//! - Blinding scalars use a 512-bit wide reduction, never `Scalar::from(u64)`.
//! - Provers refuse witnesses that do not open the statement, so a proof that
//!   leaves this crate always verifies.

pub mod bench_vectors;
pub mod keys;
#[cfg(test)]
mod tests;

use curve25519_dalek::scalar::Scalar;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

use veiled_primitives::{
    derive_transfer_challenge, derive_withdrawal_challenge, pedersen_h_generator, Ciphertext,
    Commitment, PublicKey, StatementError, TransferStatement, TransferSubproof,
    WithdrawalStatement, WithdrawalSubproof, G,
};

pub use keys::Keypair;

#[derive(Debug, Error)]
pub enum ProverError {
    #[error("witness does not open the statement: {0}")]
    WitnessMismatch(&'static str),
    #[error(transparent)]
    Statement(#[from] StatementError),
}

/// Generate a random scalar with full 512-bit wide reduction.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    let mut bytes = [0u8; 64];
    rng.fill_bytes(&mut bytes);
    Scalar::from_bytes_mod_order_wide(&bytes)
}

// ========================= Withdrawal =========================

pub struct WithdrawalInput {
    pub sender_pk: PublicKey,
    pub balance_ct: Ciphertext,
    pub balance_comm: Commitment,

    /// Randomness shared by `balance_ct` and `balance_comm`.
    pub randomness: Scalar,
    /// Balance `b`.
    pub value: u64,
}

impl WithdrawalInput {
    pub fn statement(&self) -> WithdrawalStatement {
        WithdrawalStatement {
            sender_pk: self.sender_pk,
            balance_ct: self.balance_ct,
            balance_comm: self.balance_comm,
        }
    }
}

/// Prove that `balance_ct` and `balance_comm` hide `value` under `randomness`.
///
/// # Errors
/// * `ProverError::WitnessMismatch` - if `(value, randomness)` does not open
///   the ciphertext or the commitment
pub fn prove_withdrawal<R: RngCore + CryptoRng>(
    inp: &WithdrawalInput,
    rng: &mut R,
) -> Result<WithdrawalSubproof, ProverError> {
    let r = inp.randomness;
    let b = Scalar::from(inp.value);

    if Ciphertext::new(b, &r, &inp.sender_pk) != inp.balance_ct {
        return Err(ProverError::WitnessMismatch("balance ciphertext"));
    }
    if Commitment::new(b, &r) != inp.balance_comm {
        return Err(ProverError::WitnessMismatch("balance commitment"));
    }

    let h = pedersen_h_generator();
    let y = inp.sender_pk.as_point();

    // Σ-blinding for r and b
    let x1 = random_scalar(rng);
    let x2 = random_scalar(rng);

    let big_x1 = x1 * G;
    let big_x2 = x1 * y + x2 * G;
    let big_x3 = x1 * h + x2 * G;

    let rho = derive_withdrawal_challenge(&inp.statement(), &big_x1, &big_x2, &big_x3);

    let alpha1 = x1 + rho * r;
    let alpha2 = x2 + rho * b;

    log::trace!(target: "veiled::prover", "built withdrawal subproof");

    Ok(WithdrawalSubproof::new(big_x1, big_x2, big_x3, alpha1, alpha2))
}

// ========================= Transfer =========================

pub struct TransferInput {
    pub statement: TransferStatement,

    /// Randomness `r` shared by the withdraw/deposit ciphertexts and the amount commitment.
    pub amount_randomness: Scalar,
    /// Amount `v`.
    pub amount: u64,

    /// Randomness `r_b` of the sender's new balance ciphertext and commitment.
    pub balance_randomness: Scalar,
    /// Sender's new balance `b`.
    pub balance: u64,
}

/// Prove a transfer statement.
///
/// # Errors
/// * `ProverError::WitnessMismatch` - if `(amount, amount_randomness)` or
///   `(balance, balance_randomness)` does not open the corresponding
///   ciphertexts and commitments
pub fn prove_transfer<R: RngCore + CryptoRng>(
    inp: &TransferInput,
    rng: &mut R,
) -> Result<TransferSubproof, ProverError> {
    let stmt = &inp.statement;
    let v = Scalar::from(inp.amount);
    let r = inp.amount_randomness;
    let b = Scalar::from(inp.balance);
    let r_b = inp.balance_randomness;

    if Ciphertext::new(v, &r, stmt.sender_pk()) != *stmt.withdraw_ct() {
        return Err(ProverError::WitnessMismatch("withdraw ciphertext"));
    }
    if Ciphertext::new(v, &r, stmt.recipient_pk()) != *stmt.deposit_ct() {
        return Err(ProverError::WitnessMismatch("deposit ciphertext"));
    }
    if Commitment::new(v, &r) != *stmt.amount_comm() {
        return Err(ProverError::WitnessMismatch("amount commitment"));
    }
    if Ciphertext::new(b, &r_b, stmt.sender_pk()) != *stmt.balance_ct() {
        return Err(ProverError::WitnessMismatch("balance ciphertext"));
    }
    if Commitment::new(b, &r_b) != *stmt.balance_comm() {
        return Err(ProverError::WitnessMismatch("balance commitment"));
    }

    let h = pedersen_h_generator();
    let y_s = stmt.sender_pk().as_point();
    let y_r = stmt.recipient_pk().as_point();

    // Σ-blinding for v, r, b, r_b
    let x1 = random_scalar(rng);
    let x2 = random_scalar(rng);
    let x3 = random_scalar(rng);
    let x4 = random_scalar(rng);

    let xs = [
        x2 * G,            // D
        x1 * G + x2 * y_s, // C
        x1 * G + x2 * y_r, // C'
        x3 * G + x4 * y_s, // c1
        x4 * G,            // c2
        x3 * G + x4 * h,   // c'
        x1 * G + x2 * h,   // c
    ];

    let rho = derive_transfer_challenge(stmt, &xs);

    let alphas = [x1 + rho * v, x2 + rho * r, x3 + rho * b, x4 + rho * r_b];

    log::trace!(target: "veiled::prover", "built transfer subproof");

    Ok(TransferSubproof::new(xs, alphas))
}
