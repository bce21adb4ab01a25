//! Exponential ElGamal over Ristretto255.
//!
//! A ciphertext of `v` under public key `Y` with randomness `r` is
//! `(c1, c2) = (v·G + r·Y, r·G)`. `c2` is the decrypt handle; ciphertexts are
//! additively homomorphic.

use core::ops::{Add, Sub};

use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{point_from_bytes, point_to_bytes, CodecError, CIPHERTEXT_LEN, G, POINT_LEN};

/// ElGamal public key `Y = sk·G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicKey(RistrettoPoint);

impl PublicKey {
    pub fn from_point(point: RistrettoPoint) -> Self {
        Self(point)
    }

    pub fn as_point(&self) -> &RistrettoPoint {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; POINT_LEN] {
        point_to_bytes(&self.0)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        point_from_bytes(bytes).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ciphertext {
    c1: RistrettoPoint,
    c2: RistrettoPoint,
}

impl Ciphertext {
    /// Encrypt `value` under `pk` with the caller's `randomness`.
    pub fn new(value: Scalar, randomness: &Scalar, pk: &PublicKey) -> Self {
        Self {
            c1: value * G + randomness * pk.as_point(),
            c2: randomness * G,
        }
    }

    /// Encryption of a public amount with zero randomness, i.e. `(v·G, 0)`.
    pub fn from_amount(amount: u64) -> Self {
        Self {
            c1: Scalar::from(amount) * G,
            c2: RistrettoPoint::default(),
        }
    }

    pub fn from_points(c1: RistrettoPoint, c2: RistrettoPoint) -> Self {
        Self { c1, c2 }
    }

    pub fn c1(&self) -> &RistrettoPoint {
        &self.c1
    }

    /// Decrypt handle `r·G`.
    pub fn c2(&self) -> &RistrettoPoint {
        &self.c2
    }

    /// Subtract a publicly known amount; the randomness is unchanged.
    pub fn sub_amount(&self, amount: u64) -> Self {
        *self - Self::from_amount(amount)
    }

    pub fn to_bytes(&self) -> [u8; CIPHERTEXT_LEN] {
        let mut out = [0u8; CIPHERTEXT_LEN];
        out[..POINT_LEN].copy_from_slice(&point_to_bytes(&self.c1));
        out[POINT_LEN..].copy_from_slice(&point_to_bytes(&self.c2));
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() != CIPHERTEXT_LEN {
            return Err(CodecError::Length {
                expected: CIPHERTEXT_LEN,
                got: bytes.len(),
            });
        }
        Ok(Self {
            c1: point_from_bytes(&bytes[..POINT_LEN])?,
            c2: point_from_bytes(&bytes[POINT_LEN..])?,
        })
    }
}

impl Add for Ciphertext {
    type Output = Ciphertext;

    fn add(self, rhs: Ciphertext) -> Ciphertext {
        Ciphertext {
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }
}

impl Sub for Ciphertext {
    type Output = Ciphertext;

    fn sub(self, rhs: Ciphertext) -> Ciphertext {
        Ciphertext {
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }
}
