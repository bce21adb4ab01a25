//! Fiat–Shamir challenge derivation.
//!
//! The challenge is `SHA-512(dst || G || H || statement || commitments)`
//! reduced mod ℓ. Field order is part of the wire contract: prover and
//! verifier must feed the exact same sequence.

use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
use sha2::{Digest, Sha512};

use crate::{labels, pedersen_h_generator, TransferStatement, WithdrawalStatement, G};

/// Incremental transcript hash for a single challenge.
#[derive(Clone)]
pub struct FiatShamir {
    hasher: Sha512,
}

impl FiatShamir {
    /// Start a transcript bound to `dst` and the group parameters `(G, H)`.
    pub fn new(dst: &[u8]) -> Self {
        let mut fs = Self {
            hasher: Sha512::new(),
        };
        fs.append_bytes(dst);
        fs.append_point(&G);
        fs.append_point(&pedersen_h_generator());
        fs
    }

    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Absorb the compressed encoding of `p`.
    pub fn append_point(&mut self, p: &RistrettoPoint) {
        self.hasher.update(p.compress().as_bytes());
    }

    pub fn with_point(mut self, p: &RistrettoPoint) -> Self {
        self.append_point(p);
        self
    }

    /// Wide (512-bit) reduction to a scalar.
    pub fn finish(self) -> Scalar {
        Scalar::from_hash(self.hasher)
    }
}

/// `ρ` for a withdrawal subproof: `dst, G, H, Y, c1, c2, c, X1, X2, X3`.
pub fn derive_withdrawal_challenge(
    stmt: &WithdrawalStatement,
    x1: &RistrettoPoint,
    x2: &RistrettoPoint,
    x3: &RistrettoPoint,
) -> Scalar {
    FiatShamir::new(labels::WITHDRAWAL_DST)
        .with_point(stmt.sender_pk.as_point())
        .with_point(stmt.balance_ct.c1())
        .with_point(stmt.balance_ct.c2())
        .with_point(stmt.balance_comm.as_point())
        .with_point(x1)
        .with_point(x2)
        .with_point(x3)
        .finish()
}

/// `ρ` for a transfer subproof:
/// `dst, G, H, Y_s, Y_r, C, C', D, c, c1, c2, c', X1..X7`.
///
/// The deposit handle `D'` is omitted; [`TransferStatement`] guarantees
/// `D' == D`.
pub fn derive_transfer_challenge(stmt: &TransferStatement, xs: &[RistrettoPoint; 7]) -> Scalar {
    let mut fs = FiatShamir::new(labels::TRANSFER_DST)
        .with_point(stmt.sender_pk().as_point())
        .with_point(stmt.recipient_pk().as_point())
        .with_point(stmt.withdraw_ct().c1())
        .with_point(stmt.deposit_ct().c1())
        .with_point(stmt.withdraw_ct().c2())
        .with_point(stmt.amount_comm().as_point())
        .with_point(stmt.balance_ct().c1())
        .with_point(stmt.balance_ct().c2())
        .with_point(stmt.balance_comm().as_point());
    for x in xs {
        fs.append_point(x);
    }
    fs.finish()
}
