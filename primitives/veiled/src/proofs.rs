//! Σ-proof objects and their fixed-width encodings.
//!
//! Both proofs are immutable once built. Decoding is all-or-nothing: the
//! length is checked first, then every 32-byte field is decoded left to right
//! and must be canonical.

use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{point_from_bytes, point_to_bytes, scalar_from_bytes, POINT_LEN, SCALAR_LEN};

/// Reads consecutive 32-byte fields from an input of already-checked length.
struct FieldReader<'a> {
    chunks: core::slice::ChunksExact<'a, u8>,
}

impl<'a> FieldReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            chunks: bytes.chunks_exact(POINT_LEN),
        }
    }

    fn point(&mut self) -> Option<RistrettoPoint> {
        point_from_bytes(self.chunks.next()?).ok()
    }

    fn scalar(&mut self) -> Option<Scalar> {
        scalar_from_bytes(self.chunks.next()?).ok()
    }
}

/// Proof that a balance ciphertext and a balance commitment hide the same
/// value `b` under the same randomness `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WithdrawalSubproof {
    x1: RistrettoPoint,
    x2: RistrettoPoint,
    x3: RistrettoPoint,
    alpha1: Scalar,
    alpha2: Scalar,
}

impl WithdrawalSubproof {
    pub const SIZE: usize = 3 * POINT_LEN + 2 * SCALAR_LEN;

    pub fn new(
        x1: RistrettoPoint,
        x2: RistrettoPoint,
        x3: RistrettoPoint,
        alpha1: Scalar,
        alpha2: Scalar,
    ) -> Self {
        Self {
            x1,
            x2,
            x3,
            alpha1,
            alpha2,
        }
    }

    pub fn x1(&self) -> &RistrettoPoint {
        &self.x1
    }

    pub fn x2(&self) -> &RistrettoPoint {
        &self.x2
    }

    pub fn x3(&self) -> &RistrettoPoint {
        &self.x3
    }

    pub fn alpha1(&self) -> &Scalar {
        &self.alpha1
    }

    pub fn alpha2(&self) -> &Scalar {
        &self.alpha2
    }

    /// First-message commitments `[X1, X2, X3]`.
    pub fn commitments(&self) -> [RistrettoPoint; 3] {
        [self.x1, self.x2, self.x3]
    }

    /// Responses `[alpha1, alpha2]`.
    pub fn responses(&self) -> [Scalar; 2] {
        [self.alpha1, self.alpha2]
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..32].copy_from_slice(&point_to_bytes(&self.x1));
        out[32..64].copy_from_slice(&point_to_bytes(&self.x2));
        out[64..96].copy_from_slice(&point_to_bytes(&self.x3));
        out[96..128].copy_from_slice(self.alpha1.as_bytes());
        out[128..160].copy_from_slice(self.alpha2.as_bytes());
        out
    }

    /// `None` on a length other than [`Self::SIZE`] or on any non-canonical field.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::SIZE {
            return None;
        }
        let mut r = FieldReader::new(bytes);
        Some(Self {
            x1: r.point()?,
            x2: r.point()?,
            x3: r.point()?,
            alpha1: r.scalar()?,
            alpha2: r.scalar()?,
        })
    }
}

/// Proof that a transfer amount is consistently encrypted under both keys and
/// committed, and that the sender's new balance is consistently encrypted and
/// committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransferSubproof {
    xs: [RistrettoPoint; 7],
    alphas: [Scalar; 4],
}

impl TransferSubproof {
    pub const SIZE: usize = 7 * POINT_LEN + 4 * SCALAR_LEN;

    pub fn new(xs: [RistrettoPoint; 7], alphas: [Scalar; 4]) -> Self {
        Self { xs, alphas }
    }

    pub fn x1(&self) -> &RistrettoPoint {
        &self.xs[0]
    }

    pub fn x2(&self) -> &RistrettoPoint {
        &self.xs[1]
    }

    pub fn x3(&self) -> &RistrettoPoint {
        &self.xs[2]
    }

    pub fn x4(&self) -> &RistrettoPoint {
        &self.xs[3]
    }

    pub fn x5(&self) -> &RistrettoPoint {
        &self.xs[4]
    }

    pub fn x6(&self) -> &RistrettoPoint {
        &self.xs[5]
    }

    pub fn x7(&self) -> &RistrettoPoint {
        &self.xs[6]
    }

    pub fn alpha1(&self) -> &Scalar {
        &self.alphas[0]
    }

    pub fn alpha2(&self) -> &Scalar {
        &self.alphas[1]
    }

    pub fn alpha3(&self) -> &Scalar {
        &self.alphas[2]
    }

    pub fn alpha4(&self) -> &Scalar {
        &self.alphas[3]
    }

    pub fn commitments(&self) -> &[RistrettoPoint; 7] {
        &self.xs
    }

    pub fn responses(&self) -> &[Scalar; 4] {
        &self.alphas
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        let (points, scalars) = out.split_at_mut(7 * POINT_LEN);
        for (chunk, x) in points.chunks_exact_mut(POINT_LEN).zip(self.xs.iter()) {
            chunk.copy_from_slice(&point_to_bytes(x));
        }
        for (chunk, alpha) in scalars.chunks_exact_mut(SCALAR_LEN).zip(self.alphas.iter()) {
            chunk.copy_from_slice(alpha.as_bytes());
        }
        out
    }

    /// `None` on a length other than [`Self::SIZE`] or on any non-canonical field.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::SIZE {
            return None;
        }
        let mut r = FieldReader::new(bytes);
        let mut xs = [RistrettoPoint::default(); 7];
        for x in xs.iter_mut() {
            *x = r.point()?;
        }
        let mut alphas = [Scalar::ZERO; 4];
        for alpha in alphas.iter_mut() {
            *alpha = r.scalar()?;
        }
        Some(Self { xs, alphas })
    }
}
