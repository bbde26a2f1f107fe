//! Uniform sampling of non-zero scalars and random group points.
//!
//! Scalars are drawn as `FIELD_BYTES + SECURITY_MARGIN_BYTES` random bytes, reduced
//! modulo `n - 1` and shifted by one, so the result lies in `[1, n - 1]` with a bias
//! of at most `2^-64`.

use crypto_bigint::{Encoding, NonZero, U320};
use rand_core::{CryptoRngCore, RngCore};
use zeroize::Zeroize;

use crate::primitives::crypto::{Curve, FIELD_BYTES};
use crate::{Error, Result};

/// Extra bytes drawn beyond the scalar width to flatten modulo bias.
pub const SECURITY_MARGIN_BYTES: usize = 8;

const WIDE_BYTES: usize = FIELD_BYTES + SECURITY_MARGIN_BYTES;

/// Draws a uniformly random scalar in `[1, n - 1]`.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`] if the random source fails. No weaker source is
/// substituted.
pub fn random_scalar<C: Curve, R: CryptoRngCore>(rng: &mut R) -> Result<C::Scalar> {
    let mut wide = [0u8; WIDE_BYTES];
    RngCore::try_fill_bytes(rng, &mut wide)
        .map_err(|e| Error::EntropyUnavailable(e.to_string()))?;

    let modulus = Option::<NonZero<U320>>::from(NonZero::new(C::ORDER_MINUS_ONE))
        .ok_or_else(|| Error::InvalidScalar("Group order must exceed one".to_string()))?;

    let mut value = U320::from_be_slice(&wide);
    wide.zeroize();

    let mut reduced = value.rem(&modulus).wrapping_add(&U320::ONE);
    value.zeroize();

    let mut encoded = reduced.to_be_bytes();
    reduced.zeroize();

    let mut repr = [0u8; FIELD_BYTES];
    repr.copy_from_slice(&encoded[SECURITY_MARGIN_BYTES..]);
    encoded.zeroize();

    // Already below n, so the reduction is the identity map here.
    let scalar = C::scalar_reduce(&repr);
    repr.zeroize();

    Ok(scalar)
}

/// Draws a random point `k * G` together with its discrete log `k`.
pub fn random_point<C: Curve, R: CryptoRngCore>(rng: &mut R) -> Result<(C::Point, C::Scalar)> {
    let k = random_scalar::<C, R>(rng)?;
    Ok((C::scalar_mult_base(&k), k))
}
