use rand_core::CryptoRngCore;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use super::hasher::hash_point;
use super::{ChameleonHasher, ChameleonTag, HashValue, KeyPair, MismatchPolicy, TrapdoorConfig};
use crate::primitives::{digest, sampler};
use crate::{Curve, Error, Result};

/// Private-key side of the chameleon hash.
///
/// Given a tag for one message, finds a new commitment `R'` and blinding scalar `s'` under
/// which a different message hashes to the same value. A `Trapdoor` can only be built from a
/// [`KeyPair`], so public-key-only code has no path to collision finding:
///
/// ```compile_fail
/// use chameleon_hash::{PublicKey, Trapdoor, P256};
///
/// fn forge(public_key: PublicKey<P256>) {
///     let _ = Trapdoor::new(public_key);
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use chameleon_hash::{KeyPair, P256, SecretKey, SecureRng, Trapdoor};
/// use chameleon_hash::primitives::sampler;
///
/// let mut rng = SecureRng::new();
/// let secret = SecretKey::<P256>::new(sampler::random_scalar::<P256, _>(&mut rng).unwrap()).unwrap();
/// let trapdoor = Trapdoor::new(KeyPair::from_secret(secret));
/// let hasher = trapdoor.hasher();
///
/// let tag = hasher.compute_hash(b"hello world!", &mut rng).unwrap();
/// let rebound = trapdoor
///     .find_collision(b"hello world!", &tag, b"hello shadowlands!", &mut rng)
///     .unwrap();
///
/// assert_eq!(rebound.h(), tag.h());
/// assert!(hasher.verify_hash(b"hello shadowlands!", &rebound));
/// ```
#[derive(Clone, Debug)]
pub struct Trapdoor<C: Curve> {
    key_pair: KeyPair<C>,
    config: TrapdoorConfig,
}

impl<C: Curve> Trapdoor<C> {
    /// Creates a trapdoor with the default configuration (mismatches are rejected).
    pub fn new(key_pair: KeyPair<C>) -> Self {
        Self::with_config(key_pair, TrapdoorConfig::default())
    }

    pub fn with_config(key_pair: KeyPair<C>, config: TrapdoorConfig) -> Self {
        Self { key_pair, config }
    }

    pub fn config(&self) -> &TrapdoorConfig {
        &self.config
    }

    pub fn key_pair(&self) -> &KeyPair<C> {
        &self.key_pair
    }

    /// A hasher bound to this trapdoor's public key.
    pub fn hasher(&self) -> ChameleonHasher<C> {
        ChameleonHasher::new(self.key_pair.public_key().clone())
    }

    /// Rebinds `tag`, issued for `message`, to `new_message`.
    ///
    /// Returns a tag `(R', s', h)` with `R' = h + k * G` for a fresh `k` and
    /// `s' = k - e' * x mod n`, where `e'` is the digest of `new_message` and `R'`.
    ///
    /// # Errors
    ///
    /// - [`Error::HashMismatch`] if `tag` does not verify for `message` under this key and the
    ///   policy is [`MismatchPolicy::Reject`]
    /// - [`Error::EntropyUnavailable`] if `rng` fails
    pub fn find_collision<R: CryptoRngCore>(
        &self,
        message: &[u8],
        tag: &ChameleonTag<C>,
        new_message: &[u8],
        rng: &mut R,
    ) -> Result<ChameleonTag<C>> {
        let h_point = hash_point(message, tag.r(), tag.s(), self.key_pair.public_key())?;
        let h = HashValue::from_point::<C>(&h_point)?;

        if !bool::from(h.ct_eq(tag.h())) {
            match self.config.mismatch_policy {
                MismatchPolicy::Reject => {
                    debug!(curve = C::name(), "rejecting collision request for unverified tag");
                    return Err(Error::HashMismatch);
                }
                MismatchPolicy::Warn => {
                    warn!(
                        curve = C::name(),
                        supplied = %tag.h(),
                        recomputed = %h,
                        "supplied tag does not verify; rebinding the recomputed hash"
                    );
                }
            }
        }

        let k = sampler::random_scalar::<C, R>(rng)?;
        let new_r = C::add(&h_point, &C::scalar_mult_base(&k));

        let e = digest::challenge_scalar::<C>(new_message, &new_r)?;
        let ex = C::scalar_mul_scalar(&e, self.key_pair.secret_key().secret());
        let new_s = C::scalar_sub(&k, &ex);

        debug!(curve = C::name(), "found chameleon hash collision");
        ChameleonTag::new(new_r, new_s, h)
    }
}
