//! Hashing of a message and commitment point into a challenge scalar.
//!
//! The digest input is the plain concatenation `message || x || y`, where the coordinates
//! are big-endian with leading zero bytes stripped. There are no length prefixes or
//! separators; changing the layout breaks compatibility with existing tags.

use sha2::{Digest, Sha256};

use crate::primitives::crypto::{Curve, FIELD_BYTES};
use crate::{Error, Result};

/// Size of the SHA-256 output.
pub const DIGEST_BYTES: usize = 32;

/// Hashes `message || x || y` with SHA-256 and returns the raw digest.
pub fn commitment_digest(
    message: &[u8],
    x: &[u8; FIELD_BYTES],
    y: &[u8; FIELD_BYTES],
) -> [u8; DIGEST_BYTES] {
    let mut hasher = Sha256::new();
    hasher.update(message);
    hasher.update(strip_leading_zeros(x));
    hasher.update(strip_leading_zeros(y));

    let mut out = [0u8; DIGEST_BYTES];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Digest of `message` and `point`, read as a big-endian integer modulo the group order.
///
/// Reducing here is equivalent to using the raw digest as an exponent, since
/// `k * P = (k mod n) * P` in a group of order `n`.
pub fn challenge_scalar<C: Curve>(message: &[u8], point: &C::Point) -> Result<C::Scalar> {
    let (x, y) = C::point_to_coordinates(point).ok_or_else(|| {
        Error::InvalidPoint("Cannot hash the identity as a commitment point".to_string())
    })?;

    Ok(C::scalar_reduce(&commitment_digest(message, &x, &y)))
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

#[cfg(test)]
mod tests {
    use crypto_bigint::Encoding;
    use num_bigint::BigUint;

    use super::*;
    use crate::{K256, P256};

    fn generator_coordinates() -> ([u8; FIELD_BYTES], [u8; FIELD_BYTES]) {
        P256::point_to_coordinates(&P256::generator()).unwrap()
    }

    #[test]
    fn known_answer_for_generator() {
        let (x, y) = generator_coordinates();
        let digest = commitment_digest(b"hello world!", &x, &y);
        assert_eq!(
            hex::encode(digest),
            "e6453f1db49ab0517edde27bea475a95fb6b1ae5c52624f2b66974bd07bdbe89"
        );
    }

    #[test]
    fn leading_zero_bytes_are_not_hashed() {
        let mut x = [0u8; FIELD_BYTES];
        let mut y = [0u8; FIELD_BYTES];
        x[2..].copy_from_slice(&[0xab; FIELD_BYTES - 2]);
        y[FIELD_BYTES - 1] = 0x01;

        let mut expected = Sha256::new();
        expected.update(b"msg");
        expected.update([0xab; FIELD_BYTES - 2]);
        expected.update([0x01]);

        assert_eq!(
            commitment_digest(b"msg", &x, &y).as_slice(),
            expected.finalize().as_slice()
        );
    }

    #[test]
    fn all_zero_coordinates_contribute_nothing() {
        let zero = [0u8; FIELD_BYTES];
        assert_eq!(
            hex::encode(commitment_digest(b"", &zero, &zero)),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn challenge_depends_on_message_and_point() {
        let g = P256::generator();
        let g2 = P256::add(&g, &g);

        let base = challenge_scalar::<P256>(b"hello world!", &g).unwrap();
        assert_eq!(base, challenge_scalar::<P256>(b"hello world!", &g).unwrap());
        assert_ne!(base, challenge_scalar::<P256>(b"hello world?", &g).unwrap());
        assert_ne!(base, challenge_scalar::<P256>(b"hello world!", &g2).unwrap());
    }

    fn order<C: Curve>() -> BigUint {
        BigUint::from_bytes_be(&C::ORDER_MINUS_ONE.to_be_bytes()) + 1u32
    }

    fn assert_digest_read_big_endian<C: Curve>() {
        let mut point = C::generator();
        let long = [0xffu8; 97];
        let messages: [&[u8]; 4] = [b"", b"hello world!", b"hello shadowlands!", &long];
        for message in messages {
            let (x, y) = C::point_to_coordinates(&point).unwrap();
            let digest = commitment_digest(message, &x, &y);

            let expected = BigUint::from_bytes_be(&digest) % order::<C>();
            let e = challenge_scalar::<C>(message, &point).unwrap();
            assert_eq!(
                BigUint::from_bytes_be(&C::scalar_to_bytes(&e)),
                expected,
                "{} message of {} bytes",
                C::name(),
                message.len()
            );

            point = C::add(&point, &C::generator());
        }
    }

    #[test]
    fn challenge_is_digest_as_big_endian_integer_mod_order() {
        assert_digest_read_big_endian::<P256>();
        assert_digest_read_big_endian::<K256>();
    }

    #[test]
    fn challenge_rejects_identity() {
        assert!(matches!(
            challenge_scalar::<P256>(b"m", &P256::identity()),
            Err(Error::InvalidPoint(_))
        ));
    }
}
