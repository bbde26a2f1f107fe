use rand_core::CryptoRngCore;
use subtle::ConstantTimeEq;
use tracing::debug;

use super::{ChameleonTag, HashValue, PublicKey};
use crate::primitives::{digest, sampler};
use crate::{Curve, Result};

/// Public-key side of the chameleon hash.
///
/// Computes and verifies tags. Anyone holding the public key can do both; neither
/// operation gives any way to find a second preimage for an existing hash.
///
/// # Examples
///
/// ```rust
/// use chameleon_hash::{ChameleonHasher, KeyPair, P256, SecretKey, SecureRng};
/// use chameleon_hash::primitives::sampler;
///
/// let mut rng = SecureRng::new();
/// let secret = SecretKey::<P256>::new(sampler::random_scalar::<P256, _>(&mut rng).unwrap()).unwrap();
/// let keys = KeyPair::from_secret(secret);
///
/// let hasher = ChameleonHasher::new(keys.public_key().clone());
/// let tag = hasher.compute_hash(b"hello world!", &mut rng).unwrap();
/// assert!(hasher.verify_hash(b"hello world!", &tag));
/// ```
#[derive(Clone, Debug)]
pub struct ChameleonHasher<C: Curve> {
    public_key: PublicKey<C>,
}

impl<C: Curve> ChameleonHasher<C> {
    pub fn new(public_key: PublicKey<C>) -> Self {
        Self { public_key }
    }

    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }

    /// Hashes `message` under a fresh random commitment `R` and blinding scalar `s`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if `rng`
    /// cannot supply randomness. No partial tag is ever returned.
    pub fn compute_hash<R: CryptoRngCore>(
        &self,
        message: &[u8],
        rng: &mut R,
    ) -> Result<ChameleonTag<C>> {
        let (r, _) = sampler::random_point::<C, R>(rng)?;
        let s = sampler::random_scalar::<C, R>(rng)?;

        let h = hash_point(message, &r, &s, &self.public_key)?;
        let h = HashValue::from_point::<C>(&h)?;

        debug!(curve = C::name(), message_len = message.len(), "computed chameleon hash");
        ChameleonTag::new(r, s, h)
    }

    /// Recomputes the hash from the tag's `R` and `s` and compares it with `h`.
    ///
    /// Deterministic and side-effect free. The comparison covers the full 32-byte value in
    /// constant time.
    pub fn verify_hash(&self, message: &[u8], tag: &ChameleonTag<C>) -> bool {
        let recomputed = hash_point(message, tag.r(), tag.s(), &self.public_key)
            .and_then(|h| HashValue::from_point::<C>(&h));

        let valid = match recomputed {
            Ok(h) => h.ct_eq(tag.h()).into(),
            Err(_) => false,
        };

        debug!(curve = C::name(), valid, "verified chameleon hash");
        valid
    }
}

/// `h = R - e * pub - s * G` with `e = SHA-256(message || R.x || R.y)`.
pub(crate) fn hash_point<C: Curve>(
    message: &[u8],
    r: &C::Point,
    s: &C::Scalar,
    public_key: &PublicKey<C>,
) -> Result<C::Point> {
    let e = digest::challenge_scalar::<C>(message, r)?;

    let t1 = C::scalar_mult(public_key.point(), &e);
    let t2 = C::scalar_mult_base(s);

    Ok(C::add(&C::add(r, &C::negate(&t1)), &C::negate(&t2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyPair, SecretKey, SecureRng, K256, P256};

    fn keys<C: Curve>(rng: &mut SecureRng) -> KeyPair<C> {
        let x = sampler::random_scalar::<C, _>(rng).unwrap();
        KeyPair::from_secret(SecretKey::new(x).unwrap())
    }

    #[test]
    fn compute_then_verify() {
        let mut rng = SecureRng::new();
        let hasher = ChameleonHasher::new(keys::<P256>(&mut rng).public_key().clone());

        let tag = hasher.compute_hash(b"hello world!", &mut rng).unwrap();
        assert!(hasher.verify_hash(b"hello world!", &tag));
    }

    #[test]
    fn hash_point_matches_closed_form() {
        // h = R - (e * x + s) * G
        let mut rng = SecureRng::new();
        let pair = keys::<P256>(&mut rng);
        let (r, _) = sampler::random_point::<P256, _>(&mut rng).unwrap();
        let s = sampler::random_scalar::<P256, _>(&mut rng).unwrap();

        let h = hash_point(b"m", &r, &s, pair.public_key()).unwrap();

        let e = digest::challenge_scalar::<P256>(b"m", &r).unwrap();
        let ex = P256::scalar_mul_scalar(&e, pair.secret_key().secret());
        let expected = P256::sub(
            &P256::sub(&r, &P256::scalar_mult_base(&ex)),
            &P256::scalar_mult_base(&s),
        );
        assert_eq!(h, expected);
    }

    fn p256_scalar(n: u64) -> <P256 as Curve>::Scalar {
        let mut bytes = [0u8; crate::FIELD_BYTES];
        bytes[24..].copy_from_slice(&n.to_be_bytes());
        P256::scalar_reduce(&bytes)
    }

    fn known_answer(r_multiple: u64, expected_hx: &str) {
        let secret = SecretKey::<P256>::new(p256_scalar(123_456_789)).unwrap();
        let hasher = ChameleonHasher::new(secret.public_key());
        let r = P256::scalar_mult_base(&p256_scalar(r_multiple));
        let s = p256_scalar(987_654_321);

        let h = hash_point(b"hello world!", &r, &s, hasher.public_key()).unwrap();
        let h = HashValue::from_point::<P256>(&h).unwrap();
        assert_eq!(h.to_string(), expected_hx);

        let tag = ChameleonTag::new(r, s, h).unwrap();
        assert!(hasher.verify_hash(b"hello world!", &tag));
    }

    #[test]
    fn known_answer_p256() {
        known_answer(
            7,
            "e4d80f4b998f75a4dca130cfc30e3f7622cedc76d84eef595ce05dc714d0a722",
        );
    }

    #[test]
    fn known_answer_p256_commitment_with_short_x() {
        let r = P256::scalar_mult_base(&p256_scalar(379));
        let (x, _) = P256::point_to_coordinates(&r).unwrap();
        assert_eq!(x[0], 0, "commitment x must have a leading zero byte");

        known_answer(
            379,
            "e2a9b95209844b2e5ef82d982bcb5c5a650df8caa60be27aa6dccbdeb4e9f3df",
        );
    }

    #[test]
    fn fresh_randomness_per_call() {
        let mut rng = SecureRng::new();
        let hasher = ChameleonHasher::new(keys::<K256>(&mut rng).public_key().clone());

        let a = hasher.compute_hash(b"same", &mut rng).unwrap();
        let b = hasher.compute_hash(b"same", &mut rng).unwrap();
        assert_ne!(a.r(), b.r());
        assert_ne!(a.h(), b.h());
    }

    #[test]
    fn verify_rejects_other_message() {
        let mut rng = SecureRng::new();
        let hasher = ChameleonHasher::new(keys::<P256>(&mut rng).public_key().clone());

        let tag = hasher.compute_hash(b"hello world!", &mut rng).unwrap();
        assert!(!hasher.verify_hash(b"hello world?", &tag));
    }

    #[test]
    fn verify_rejects_other_public_key() {
        let mut rng = SecureRng::new();
        let hasher = ChameleonHasher::new(keys::<P256>(&mut rng).public_key().clone());
        let other = ChameleonHasher::new(keys::<P256>(&mut rng).public_key().clone());

        let tag = hasher.compute_hash(b"hello world!", &mut rng).unwrap();
        assert!(!other.verify_hash(b"hello world!", &tag));
    }
}
