//! Builders for deliberately corrupted proofs, used by negative tests only.
//!
//! Indices are 1-based so that `replace_commitment(1, ..)` targets `x1` and
//! `replace_response(1, ..)` targets `alpha1`.

use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};

use crate::{TransferSubproof, WithdrawalSubproof};

pub trait Tamper: Sized {
    /// Copy of `self` with commitment `x{index}` replaced, or `None` if there is no such field.
    fn replace_commitment(&self, index: usize, point: RistrettoPoint) -> Option<Self>;

    /// Copy of `self` with response `alpha{index}` replaced, or `None` if there is no such field.
    fn replace_response(&self, index: usize, scalar: Scalar) -> Option<Self>;
}

impl Tamper for WithdrawalSubproof {
    fn replace_commitment(&self, index: usize, point: RistrettoPoint) -> Option<Self> {
        let mut xs = self.commitments();
        *xs.get_mut(index.checked_sub(1)?)? = point;
        let [alpha1, alpha2] = self.responses();
        Some(WithdrawalSubproof::new(xs[0], xs[1], xs[2], alpha1, alpha2))
    }

    fn replace_response(&self, index: usize, scalar: Scalar) -> Option<Self> {
        let mut alphas = self.responses();
        *alphas.get_mut(index.checked_sub(1)?)? = scalar;
        let [x1, x2, x3] = self.commitments();
        Some(WithdrawalSubproof::new(x1, x2, x3, alphas[0], alphas[1]))
    }
}

impl Tamper for TransferSubproof {
    fn replace_commitment(&self, index: usize, point: RistrettoPoint) -> Option<Self> {
        let mut xs = *self.commitments();
        *xs.get_mut(index.checked_sub(1)?)? = point;
        Some(TransferSubproof::new(xs, *self.responses()))
    }

    fn replace_response(&self, index: usize, scalar: Scalar) -> Option<Self> {
        let mut alphas = *self.responses();
        *alphas.get_mut(index.checked_sub(1)?)? = scalar;
        Some(TransferSubproof::new(*self.commitments(), alphas))
    }
}
