//! secp256k1 curve arithmetic.

use crypto_bigint::U320;
use k256::elliptic_curve::group::Group as _;
use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::{Field, PrimeField};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar as K256Scalar, U256};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::primitives::crypto::{Curve, FIELD_BYTES};
use crate::{Error, Result};

const ORDER_MINUS_ONE: U320 = U320::from_be_hex(
    "0000000000000000fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
);

/// secp256k1 curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct K256;

/// Scalar modulo the secp256k1 group order. Zeroized on drop.
#[derive(Clone, Debug)]
pub struct Scalar(K256Scalar);

/// Point on secp256k1 in projective coordinates.
#[derive(Clone, Debug)]
pub struct Point(ProjectivePoint);

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0 = K256Scalar::ZERO;
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_affine().eq(&other.0.to_affine())
    }
}

impl Eq for Point {}

impl Curve for K256 {
    type Scalar = Scalar;
    type Point = Point;

    const ORDER_MINUS_ONE: U320 = ORDER_MINUS_ONE;

    fn name() -> &'static str {
        "secp256k1"
    }

    fn generator() -> Self::Point {
        Point(ProjectivePoint::GENERATOR)
    }

    fn identity() -> Self::Point {
        Point(ProjectivePoint::IDENTITY)
    }

    fn is_identity(p: &Self::Point) -> bool {
        p.0.is_identity().into()
    }

    fn scalar_mult_base(k: &Self::Scalar) -> Self::Point {
        Point(ProjectivePoint::GENERATOR * k.0)
    }

    fn scalar_mult(p: &Self::Point, k: &Self::Scalar) -> Self::Point {
        Point(p.0 * k.0)
    }

    fn add(p: &Self::Point, q: &Self::Point) -> Self::Point {
        Point(p.0 + q.0)
    }

    fn negate(p: &Self::Point) -> Self::Point {
        Point(-p.0)
    }

    fn point_from_coordinates(
        x: &[u8; FIELD_BYTES],
        y: &[u8; FIELD_BYTES],
    ) -> Result<Self::Point> {
        let x: FieldBytes = (*x).into();
        let y: FieldBytes = (*y).into();
        let encoded = EncodedPoint::from_affine_coordinates(&x, &y, false);

        let affine = Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .ok_or_else(|| {
                Error::InvalidPoint("Coordinates do not lie on secp256k1".to_string())
            })?;

        Ok(Point(ProjectivePoint::from(affine)))
    }

    fn point_to_coordinates(p: &Self::Point) -> Option<([u8; FIELD_BYTES], [u8; FIELD_BYTES])> {
        let encoded = p.0.to_affine().to_encoded_point(false);
        let (x, y) = (encoded.x()?, encoded.y()?);

        let mut x_bytes = [0u8; FIELD_BYTES];
        let mut y_bytes = [0u8; FIELD_BYTES];
        x_bytes.copy_from_slice(x);
        y_bytes.copy_from_slice(y);
        Some((x_bytes, y_bytes))
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar> {
        if bytes.len() != FIELD_BYTES {
            return Err(Error::InvalidScalar(format!(
                "Expected {} bytes, got {}",
                FIELD_BYTES,
                bytes.len()
            )));
        }

        let mut arr = [0u8; FIELD_BYTES];
        arr.copy_from_slice(bytes);

        Option::<K256Scalar>::from(K256Scalar::from_repr(arr.into()))
            .map(Scalar)
            .ok_or_else(|| {
                Error::InvalidScalar(
                    "Bytes do not represent a canonical secp256k1 scalar".to_string(),
                )
            })
    }

    fn scalar_to_bytes(s: &Self::Scalar) -> [u8; FIELD_BYTES] {
        let mut out = [0u8; FIELD_BYTES];
        out.copy_from_slice(&s.0.to_repr());
        out
    }

    fn scalar_reduce(b: &[u8; FIELD_BYTES]) -> Self::Scalar {
        let bytes: FieldBytes = (*b).into();
        Scalar(<K256Scalar as Reduce<U256>>::reduce_bytes(&bytes))
    }

    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 * b.0)
    }

    fn scalar_sub(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 - b.0)
    }

    fn scalar_is_zero(s: &Self::Scalar) -> bool {
        s.0.is_zero().into()
    }
}
