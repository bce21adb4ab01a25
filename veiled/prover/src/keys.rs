use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
use rand::{CryptoRng, RngCore};

use veiled_primitives::{Ciphertext, PublicKey, G};

use crate::random_scalar;

/// ElGamal keypair `(sk, Y = sk·G)`.
pub struct Keypair {
    secret: Scalar,
    public: PublicKey,
}

impl Keypair {
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self::from_secret(random_scalar(rng))
    }

    pub fn from_secret(secret: Scalar) -> Self {
        Self {
            secret,
            public: PublicKey::from_point(secret * G),
        }
    }

    pub fn public(&self) -> PublicKey {
        self.public
    }

    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// Recover `v·G` from a ciphertext of `v`. Turning that into `v` needs a
    /// discrete log, which callers only do for small test values.
    pub fn decrypt_to_point(&self, ct: &Ciphertext) -> RistrettoPoint {
        ct.c1() - self.secret * ct.c2()
    }
}
