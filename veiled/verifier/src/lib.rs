//! no_std verifier for veiled-coin Σ-subproofs.
//!
//! Two layers:
//! - [`verify_withdrawal`] / [`verify_transfer`] check an already decoded
//!   proof against a typed statement,
//! - [`SigmaVerifier`] implements the byte-level [`VeiledVerifier`] boundary:
//!   it decodes statement elements and the proof, then calls the typed layer.
//!
//! Every verification equation is evaluated before the result is returned,
//! so a rejection can name the first equation that did not hold.
#![cfg_attr(not(feature = "std"), no_std)]


use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
use subtle::{Choice, ConstantTimeEq};
use thiserror::Error;

use veiled_primitives::{
    derive_transfer_challenge, derive_withdrawal_challenge, pedersen_h_generator, Ciphertext,
    Commitment, PublicKey, TransferStatement, TransferSubproof, VeiledVerifier,
    WithdrawalStatement, WithdrawalSubproof, G,
};

const LOG_TARGET: &str = "veiled::verifier";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerifierError {
    /// Fields decode but equation `equation` (1-based) does not hold.
    #[error("proof rejected: equation {equation} does not hold")]
    ProofInvalid { equation: usize },
    /// Wrong length, or a field is not a canonical point/scalar.
    #[error("malformed proof encoding")]
    MalformedProof,
    /// A statement element could not be decoded or is inconsistent.
    #[error("malformed statement: {0}")]
    MalformedStatement(&'static str),
}

impl VerifierError {
    /// Stable numeric code for hosts that abort with an integer.
    pub fn code(&self) -> u32 {
        match self {
            VerifierError::ProofInvalid { .. } => 1,
            VerifierError::MalformedProof => 2,
            VerifierError::MalformedStatement(_) => 3,
        }
    }
}

/// Collapse per-equation results into the verdict. All failures are logged,
/// the first one is returned.
fn verdict(kind: &str, checks: &[Choice]) -> Result<(), VerifierError> {
    let mut first = None;
    for (i, ok) in checks.iter().enumerate() {
        if !bool::from(*ok) {
            log::debug!(target: LOG_TARGET, "{kind}: equation {} failed", i + 1);
            first.get_or_insert(i + 1);
        }
    }
    match first {
        None => Ok(()),
        Some(equation) => Err(VerifierError::ProofInvalid { equation }),
    }
}

/// `ρ·lhs + x == rhs`
fn holds(rho: &Scalar, lhs: &RistrettoPoint, x: &RistrettoPoint, rhs: RistrettoPoint) -> Choice {
    (rho * lhs + x).ct_eq(&rhs)
}

/// Verify a withdrawal subproof.
///
/// Equations:
/// 1. `ρ·c2 + X1 = α1·G`
/// 2. `ρ·c1 + X2 = α2·G + α1·Y`
/// 3. `ρ·c  + X3 = α2·G + α1·H`
pub fn verify_withdrawal(
    stmt: &WithdrawalStatement,
    proof: &WithdrawalSubproof,
) -> Result<(), VerifierError> {
    let h = pedersen_h_generator();
    let y = stmt.sender_pk.as_point();
    let (c1, c2) = (stmt.balance_ct.c1(), stmt.balance_ct.c2());
    let c = stmt.balance_comm.as_point();
    let (a1, a2) = (proof.alpha1(), proof.alpha2());

    let rho = derive_withdrawal_challenge(stmt, proof.x1(), proof.x2(), proof.x3());

    let checks = [
        holds(&rho, c2, proof.x1(), a1 * G),
        holds(&rho, c1, proof.x2(), a2 * G + a1 * y),
        holds(&rho, c, proof.x3(), a2 * G + a1 * h),
    ];
    verdict("withdrawal", &checks)
}

/// Verify a transfer subproof.
///
/// With `withdraw_ct = (C, D)`, `deposit_ct = (C', D)`, `amount_comm = c`,
/// `balance_ct = (c1, c2)` and `balance_comm = c'`:
/// 1. `ρ·D  + X1 = α2·G`
/// 2. `ρ·C  + X2 = α1·G + α2·Ys`
/// 3. `ρ·C' + X3 = α1·G + α2·Yr`
/// 4. `ρ·c1 + X4 = α3·G + α4·Ys`
/// 5. `ρ·c2 + X5 = α4·G`
/// 6. `ρ·c' + X6 = α3·G + α4·H`
/// 7. `ρ·c  + X7 = α1·G + α2·H`
pub fn verify_transfer(
    stmt: &TransferStatement,
    proof: &TransferSubproof,
) -> Result<(), VerifierError> {
    let h = pedersen_h_generator();
    let y_s = stmt.sender_pk().as_point();
    let y_r = stmt.recipient_pk().as_point();

    let big_c = stmt.withdraw_ct().c1();
    let big_d = stmt.withdraw_ct().c2();
    let big_c_prime = stmt.deposit_ct().c1();
    let c1 = stmt.balance_ct().c1();
    let c2 = stmt.balance_ct().c2();
    let c_prime = stmt.balance_comm().as_point();
    let c = stmt.amount_comm().as_point();

    let [x1, x2, x3, x4, x5, x6, x7] = proof.commitments();
    let [a1, a2, a3, a4] = proof.responses();

    let rho = derive_transfer_challenge(stmt, proof.commitments());

    let checks = [
        holds(&rho, big_d, x1, a2 * G),
        holds(&rho, big_c, x2, a1 * G + a2 * y_s),
        holds(&rho, big_c_prime, x3, a1 * G + a2 * y_r),
        holds(&rho, c1, x4, a3 * G + a4 * y_s),
        holds(&rho, c2, x5, a4 * G),
        holds(&rho, c_prime, x6, a3 * G + a4 * h),
        holds(&rho, c, x7, a1 * G + a2 * h),
    ];
    verdict("transfer", &checks)
}

// ========================= Byte-level boundary =========================

/// Byte-level verifier handed to a host.
pub struct SigmaVerifier;

fn statement_field<T, E>(what: &'static str, decoded: Result<T, E>) -> Result<T, VerifierError> {
    decoded.map_err(|_| {
        log::debug!(target: LOG_TARGET, "undecodable statement element: {what}");
        VerifierError::MalformedStatement(what)
    })
}

fn proof_field<T>(kind: &str, decoded: Option<T>) -> Result<T, VerifierError> {
    decoded.ok_or_else(|| {
        log::debug!(target: LOG_TARGET, "{kind}: undecodable proof bytes");
        VerifierError::MalformedProof
    })
}

impl VeiledVerifier for SigmaVerifier {
    type Error = VerifierError;

    fn verify_withdrawal(
        sender_pk: &[u8],
        balance_ct: &[u8],
        balance_comm: &[u8],
        proof: &[u8],
    ) -> Result<(), Self::Error> {
        let stmt = WithdrawalStatement {
            sender_pk: statement_field("sender_pk", PublicKey::from_bytes(sender_pk))?,
            balance_ct: statement_field("balance_ct", Ciphertext::from_bytes(balance_ct))?,
            balance_comm: statement_field("balance_comm", Commitment::from_bytes(balance_comm))?,
        };
        let proof = proof_field("withdrawal", WithdrawalSubproof::from_bytes(proof))?;

        verify_withdrawal(&stmt, &proof)
    }

    fn verify_transfer(
        sender_pk: &[u8],
        recipient_pk: &[u8],
        withdraw_ct: &[u8],
        deposit_ct: &[u8],
        amount_comm: &[u8],
        balance_ct: &[u8],
        balance_comm: &[u8],
        proof: &[u8],
    ) -> Result<(), Self::Error> {
        let stmt = TransferStatement::new(
            statement_field("sender_pk", PublicKey::from_bytes(sender_pk))?,
            statement_field("recipient_pk", PublicKey::from_bytes(recipient_pk))?,
            statement_field("withdraw_ct", Ciphertext::from_bytes(withdraw_ct))?,
            statement_field("deposit_ct", Ciphertext::from_bytes(deposit_ct))?,
            statement_field("amount_comm", Commitment::from_bytes(amount_comm))?,
            statement_field("balance_ct", Ciphertext::from_bytes(balance_ct))?,
            statement_field("balance_comm", Commitment::from_bytes(balance_comm))?,
        );
        let stmt = statement_field("deposit_ct handle", stmt)?;
        let proof = proof_field("transfer", TransferSubproof::from_bytes(proof))?;

        verify_transfer(&stmt, &proof)
    }
}
