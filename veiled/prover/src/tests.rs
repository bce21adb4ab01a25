use crate::*;
use curve25519_dalek::scalar::Scalar;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use veiled_primitives::{Ciphertext, Commitment, TransferStatement, TransferSubproof, G};

fn seeded(tag: u8) -> ChaCha20Rng {
    let mut seed = [0u8; 32];
    seed[0] = tag;
    ChaCha20Rng::from_seed(seed)
}

fn withdrawal_input(rng: &mut ChaCha20Rng, value: u64) -> WithdrawalInput {
    let sender = Keypair::generate(rng);
    let r = random_scalar(rng);
    WithdrawalInput {
        sender_pk: sender.public(),
        balance_ct: Ciphertext::new(Scalar::from(value), &r, &sender.public()),
        balance_comm: Commitment::new(Scalar::from(value), &r),
        randomness: r,
        value,
    }
}

fn transfer_input(rng: &mut ChaCha20Rng, amount: u64, balance: u64) -> TransferInput {
    let sender = Keypair::generate(rng);
    let recipient = Keypair::generate(rng);
    let (pk_s, pk_r) = (sender.public(), recipient.public());
    let r = random_scalar(rng);
    let r_b = random_scalar(rng);
    let v = Scalar::from(amount);
    let b = Scalar::from(balance);

    let statement = TransferStatement::new(
        pk_s,
        pk_r,
        Ciphertext::new(v, &r, &pk_s),
        Ciphertext::new(v, &r, &pk_r),
        Commitment::new(v, &r),
        Ciphertext::new(b, &r_b, &pk_s),
        Commitment::new(b, &r_b),
    )
    .expect("statement");

    TransferInput {
        statement,
        amount_randomness: r,
        amount,
        balance_randomness: r_b,
        balance,
    }
}

#[test]
fn withdrawal_proof_is_deterministic_for_a_seed() {
    let inp = withdrawal_input(&mut seeded(1), 50);

    let a = prove_withdrawal(&inp, &mut seeded(2)).expect("prove");
    let b = prove_withdrawal(&inp, &mut seeded(2)).expect("prove");
    assert_eq!(a, b);

    // Fresh blinding gives a different but equally sized proof.
    let c = prove_withdrawal(&inp, &mut seeded(3)).expect("prove");
    assert_ne!(a, c);
    assert_eq!(c.to_bytes().len(), 160);
}

#[test]
fn withdrawal_first_message_matches_blinding() {
    let inp = withdrawal_input(&mut seeded(1), 50);
    let proof = prove_withdrawal(&inp, &mut seeded(4)).expect("prove");

    // X1 = x1·G where x1 is the first blinding scalar drawn.
    let x1 = random_scalar(&mut seeded(4));
    assert_eq!(*proof.x1(), x1 * G);
}

#[test]
fn withdrawal_rejects_wrong_value() {
    let mut inp = withdrawal_input(&mut seeded(1), 50);
    inp.value = 51;
    let err = prove_withdrawal(&inp, &mut seeded(2)).unwrap_err();
    assert!(matches!(err, ProverError::WitnessMismatch("balance ciphertext")));
}

#[test]
fn withdrawal_rejects_wrong_commitment() {
    let mut rng = seeded(1);
    let mut inp = withdrawal_input(&mut rng, 50);
    inp.balance_comm = Commitment::new(Scalar::from(50u64), &random_scalar(&mut rng));
    let err = prove_withdrawal(&inp, &mut rng).unwrap_err();
    assert!(matches!(err, ProverError::WitnessMismatch("balance commitment")));
}

#[test]
fn transfer_proof_shape() {
    let inp = transfer_input(&mut seeded(5), 50, 100);
    let proof = prove_transfer(&inp, &mut seeded(6)).expect("prove");
    assert_eq!(proof.to_bytes().len(), TransferSubproof::SIZE);
    assert_eq!(TransferSubproof::from_bytes(&proof.to_bytes()), Some(proof));
}

#[test]
fn transfer_rejects_wrong_balance_witness() {
    let mut inp = transfer_input(&mut seeded(5), 50, 100);
    inp.balance = 99;
    let err = prove_transfer(&inp, &mut seeded(6)).unwrap_err();
    assert!(matches!(err, ProverError::WitnessMismatch("balance ciphertext")));
}

#[test]
fn transfer_rejects_wrong_amount_randomness() {
    let mut rng = seeded(5);
    let mut inp = transfer_input(&mut rng, 50, 100);
    inp.amount_randomness = random_scalar(&mut rng);
    let err = prove_transfer(&inp, &mut rng).unwrap_err();
    assert!(matches!(err, ProverError::WitnessMismatch("withdraw ciphertext")));
}

#[test]
fn keypair_decrypts_to_message_point() {
    let mut rng = seeded(9);
    let kp = Keypair::generate(&mut rng);
    let r = random_scalar(&mut rng);
    let ct = Ciphertext::new(Scalar::from(42u64), &r, &kp.public());
    assert_eq!(kp.decrypt_to_point(&ct), Scalar::from(42u64) * G);

    // Subtracting a public amount shows up in the decryption.
    assert_eq!(
        kp.decrypt_to_point(&ct.sub_amount(2)),
        Scalar::from(40u64) * G
    );
}

#[test]
fn vectors_json_has_expected_sizes() {
    let json = bench_vectors::some_valid_proofs().expect("vectors");
    let v: serde_json::Value = serde_json::from_str(&json).expect("json");

    let w_proof = hex::decode(v["withdrawal"]["proof"].as_str().expect("str")).expect("hex");
    assert_eq!(w_proof.len(), 160);
    let t_proof = hex::decode(v["transfer"]["proof"].as_str().expect("str")).expect("hex");
    assert_eq!(t_proof.len(), 352);
    let ct = hex::decode(v["transfer"]["deposit_ct"].as_str().expect("str")).expect("hex");
    assert_eq!(ct.len(), 64);

    // Same seed, same document.
    assert_eq!(json, bench_vectors::some_valid_proofs().expect("vectors"));
}
