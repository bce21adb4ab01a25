//! Public statements the Σ-proofs are checked against.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Ciphertext, Commitment, PublicKey};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatementError {
    /// The deposit ciphertext must reuse the withdraw ciphertext's decrypt
    /// handle `D = r·G`; it is not bound by the challenge otherwise.
    #[error("deposit ciphertext decrypt handle differs from withdraw ciphertext")]
    HandleMismatch,
}

/// `balance_ct` under `sender_pk` and `balance_comm` hide the same value with
/// the same randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WithdrawalStatement {
    pub sender_pk: PublicKey,
    pub balance_ct: Ciphertext,
    pub balance_comm: Commitment,
}

/// Public side of a veiled transfer:
/// - `withdraw_ct = (C, D)` encrypts the amount under the sender key,
/// - `deposit_ct = (C', D)` encrypts it under the recipient key,
/// - `amount_comm = c` commits to it,
/// - `balance_ct = (c1, c2)` and `balance_comm = c'` hide the sender's new balance.
///
/// Only constructible through [`TransferStatement::new`], which enforces the
/// shared decrypt handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferStatement {
    sender_pk: PublicKey,
    recipient_pk: PublicKey,
    withdraw_ct: Ciphertext,
    deposit_ct: Ciphertext,
    amount_comm: Commitment,
    balance_ct: Ciphertext,
    balance_comm: Commitment,
}

impl TransferStatement {
    pub fn new(
        sender_pk: PublicKey,
        recipient_pk: PublicKey,
        withdraw_ct: Ciphertext,
        deposit_ct: Ciphertext,
        amount_comm: Commitment,
        balance_ct: Ciphertext,
        balance_comm: Commitment,
    ) -> Result<Self, StatementError> {
        if withdraw_ct.c2() != deposit_ct.c2() {
            return Err(StatementError::HandleMismatch);
        }
        Ok(Self {
            sender_pk,
            recipient_pk,
            withdraw_ct,
            deposit_ct,
            amount_comm,
            balance_ct,
            balance_comm,
        })
    }

    pub fn sender_pk(&self) -> &PublicKey {
        &self.sender_pk
    }

    pub fn recipient_pk(&self) -> &PublicKey {
        &self.recipient_pk
    }

    pub fn withdraw_ct(&self) -> &Ciphertext {
        &self.withdraw_ct
    }

    pub fn deposit_ct(&self) -> &Ciphertext {
        &self.deposit_ct
    }

    pub fn amount_comm(&self) -> &Commitment {
        &self.amount_comm
    }

    pub fn balance_ct(&self) -> &Ciphertext {
        &self.balance_ct
    }

    pub fn balance_comm(&self) -> &Commitment {
        &self.balance_comm
    }
}
