use curve25519_dalek::scalar::Scalar;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use veiled_primitives::{Ciphertext, Commitment, TransferStatement};

use crate::{
    prove_transfer, prove_withdrawal, random_scalar, Keypair, ProverError, TransferInput,
    WithdrawalInput,
};

#[derive(Serialize)]
pub struct WithdrawalVector {
    pub sender_pk: String,
    pub balance_ct: String,
    pub balance_comm: String,
    pub proof: String,
}

#[derive(Serialize)]
pub struct TransferVector {
    pub sender_pk: String,
    pub recipient_pk: String,
    pub withdraw_ct: String,
    pub deposit_ct: String,
    pub amount_comm: String,
    pub balance_ct: String,
    pub balance_comm: String,
    pub proof: String,
}

#[derive(Serialize)]
pub struct Vectors {
    pub withdrawal: WithdrawalVector,
    pub transfer: TransferVector,
}

/// Build deterministic withdrawal and transfer vectors from a fixed ChaCha20 seed.
pub fn build_vectors(seed: [u8; 32]) -> Result<Vectors, ProverError> {
    let mut rng = ChaCha20Rng::from_seed(seed);

    // ---- keys ----
    let sender = Keypair::from_secret(Scalar::from(5u64));
    let recipient = Keypair::from_secret(Scalar::from(9u64));
    let pk_s = sender.public();
    let pk_r = recipient.public();

    // ===================== WITHDRAWAL =====================
    // Sender starts with 150 and unveils 100 publicly: new balance = old - 100.
    let old_r = random_scalar(&mut rng);
    let old_ct = Ciphertext::new(Scalar::from(150u64), &old_r, &pk_s);
    let new_ct = old_ct.sub_amount(100);
    let new_comm = Commitment::new(Scalar::from(50u64), &old_r);

    let w_in = WithdrawalInput {
        sender_pk: pk_s,
        balance_ct: new_ct,
        balance_comm: new_comm,
        randomness: old_r,
        value: 50,
    };
    let w_proof = prove_withdrawal(&w_in, &mut rng)?;

    // ===================== TRANSFER =====================
    let v = 50u64;
    let r = random_scalar(&mut rng);
    let b = 100u64;
    let r_b = random_scalar(&mut rng);

    let withdraw_ct = Ciphertext::new(Scalar::from(v), &r, &pk_s);
    let deposit_ct = Ciphertext::new(Scalar::from(v), &r, &pk_r);
    let amount_comm = Commitment::new(Scalar::from(v), &r);
    let balance_ct = Ciphertext::new(Scalar::from(b), &r_b, &pk_s);
    let balance_comm = Commitment::new(Scalar::from(b), &r_b);

    let statement = TransferStatement::new(
        pk_s,
        pk_r,
        withdraw_ct,
        deposit_ct,
        amount_comm,
        balance_ct,
        balance_comm,
    )?;

    let t_in = TransferInput {
        statement,
        amount_randomness: r,
        amount: v,
        balance_randomness: r_b,
        balance: b,
    };
    let t_proof = prove_transfer(&t_in, &mut rng)?;

    Ok(Vectors {
        withdrawal: WithdrawalVector {
            sender_pk: hex::encode(pk_s.to_bytes()),
            balance_ct: hex::encode(new_ct.to_bytes()),
            balance_comm: hex::encode(new_comm.to_bytes()),
            proof: hex::encode(w_proof.to_bytes()),
        },
        transfer: TransferVector {
            sender_pk: hex::encode(pk_s.to_bytes()),
            recipient_pk: hex::encode(pk_r.to_bytes()),
            withdraw_ct: hex::encode(withdraw_ct.to_bytes()),
            deposit_ct: hex::encode(deposit_ct.to_bytes()),
            amount_comm: hex::encode(amount_comm.to_bytes()),
            balance_ct: hex::encode(balance_ct.to_bytes()),
            balance_comm: hex::encode(balance_comm.to_bytes()),
            proof: hex::encode(t_proof.to_bytes()),
        },
    })
}

/// Deterministic vectors as pretty JSON.
pub fn some_valid_proofs() -> Result<String, ProverError> {
    let mut seed = [0u8; 32];
    seed[0] = 7;
    let vectors = build_vectors(seed)?;
    // Only strings inside; serialization cannot fail.
    Ok(serde_json::to_string_pretty(&vectors).unwrap_or_default())
}
