//! Pedersen commitments `v·G + r·H`.

use core::ops::{Add, Sub};

use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{pedersen_h_generator, point_from_bytes, point_to_bytes, CodecError, G, POINT_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Commitment(RistrettoPoint);

impl Commitment {
    pub fn new(value: Scalar, randomness: &Scalar) -> Self {
        Self(value * G + randomness * pedersen_h_generator())
    }

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

impl Add for Commitment {
    type Output = Commitment;

    fn add(self, rhs: Commitment) -> Commitment {
        Commitment(self.0 + rhs.0)
    }
}

impl Sub for Commitment {
    type Output = Commitment;

    fn sub(self, rhs: Commitment) -> Commitment {
        Commitment(self.0 - rhs.0)
    }
}
