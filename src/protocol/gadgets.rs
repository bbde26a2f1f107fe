//! Value types exchanged by the chameleon hash protocol.
//!
//! Keys, the hash value and the `(R, s, h)` tag. All are immutable once built; the
//! constructors validate points and scalars so the hashing code never sees an
//! off-curve point or an identity commitment.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::primitives::crypto::{Curve, FIELD_BYTES};
use crate::{Error, Result};

/// Tag encoding version for serialization compatibility.
const TAG_VERSION: u8 = 1;

/// Encoded tag length: version, `R.x`, `R.y`, `s`, `h`.
pub const TAG_BYTES: usize = 1 + 4 * FIELD_BYTES;

/// Private trapdoor key.
///
/// Holding this is what allows collision finding. Zeroized when dropped.
#[derive(Clone)]
pub struct SecretKey<C: Curve> {
    x: C::Scalar,
}

impl<C: Curve> SecretKey<C> {
    /// Wraps a scalar as a secret key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScalar`] for the zero scalar, whose public key would be the
    /// identity.
    pub fn new(x: C::Scalar) -> Result<Self> {
        if C::scalar_is_zero(&x) {
            return Err(Error::InvalidScalar(
                "Secret key cannot be zero".to_string(),
            ));
        }
        Ok(Self { x })
    }

    /// Parses a 32-byte big-endian secret key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(C::scalar_from_bytes(bytes)?)
    }

    /// Returns the big-endian encoding of the key.
    pub fn to_bytes(&self) -> [u8; FIELD_BYTES] {
        C::scalar_to_bytes(&self.x)
    }

    /// Derives `x * G`.
    pub fn public_key(&self) -> PublicKey<C> {
        PublicKey {
            point: C::scalar_mult_base(&self.x),
        }
    }

    pub(crate) fn secret(&self) -> &C::Scalar {
        &self.x
    }
}

impl<C: Curve> Zeroize for SecretKey<C> {
    fn zeroize(&mut self) {
        self.x.zeroize();
    }
}

impl<C: Curve> Drop for SecretKey<C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C: Curve> ZeroizeOnDrop for SecretKey<C> {}

impl<C: Curve> fmt::Debug for SecretKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("curve", &C::name())
            .finish_non_exhaustive()
    }
}

/// Public hashing key `pub = x * G`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey<C: Curve> {
    point: C::Point,
}

impl<C: Curve> PublicKey<C> {
    /// Wraps a curve point as a public key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPoint`] for the identity.
    pub fn from_point(point: C::Point) -> Result<Self> {
        if C::is_identity(&point) {
            return Err(Error::InvalidPoint(
                "Public key cannot be the identity".to_string(),
            ));
        }
        Ok(Self { point })
    }

    /// Builds a public key from big-endian affine coordinates, checking it lies on the curve.
    pub fn from_coordinates(x: &[u8; FIELD_BYTES], y: &[u8; FIELD_BYTES]) -> Result<Self> {
        Self::from_point(C::point_from_coordinates(x, y)?)
    }

    /// Big-endian affine coordinates `(x, y)`.
    pub fn to_coordinates(&self) -> ([u8; FIELD_BYTES], [u8; FIELD_BYTES]) {
        // Construction rules out the identity.
        C::point_to_coordinates(&self.point).unwrap_or(([0u8; FIELD_BYTES], [0u8; FIELD_BYTES]))
    }

    /// Returns the underlying curve point.
    pub fn point(&self) -> &C::Point {
        &self.point
    }
}

/// A secret key with its derived public key.
///
/// Keys are supplied by the caller; nothing in this crate generates them.
#[derive(Clone, Debug)]
pub struct KeyPair<C: Curve> {
    secret: SecretKey<C>,
    public: PublicKey<C>,
}

impl<C: Curve> KeyPair<C> {
    /// Recomputes the public key from `secret`.
    pub fn from_secret(secret: SecretKey<C>) -> Self {
        let public = secret.public_key();
        Self { secret, public }
    }

    pub fn secret_key(&self) -> &SecretKey<C> {
        &self.secret
    }

    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public
    }
}

/// The chameleon hash value: the x-coordinate of the hash point `h`.
///
/// Equality is exact over all 32 bytes and constant-time.
#[derive(Clone, Copy, Debug)]
pub struct HashValue([u8; FIELD_BYTES]);

impl HashValue {
    /// Wraps a big-endian x-coordinate.
    pub fn from_bytes(bytes: [u8; FIELD_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; FIELD_BYTES] {
        &self.0
    }

    /// Projects a hash point to its x-coordinate.
    pub(crate) fn from_point<C: Curve>(point: &C::Point) -> Result<Self> {
        let (x, _) = C::point_to_coordinates(point).ok_or_else(|| {
            Error::InvalidPoint("Hash point is the identity".to_string())
        })?;
        Ok(Self(x))
    }
}

impl ConstantTimeEq for HashValue {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for HashValue {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for HashValue {}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// The tuple `(R, s, h)`: commitment point, blinding scalar and hash value.
///
/// Produced by [`ChameleonHasher::compute_hash`](crate::ChameleonHasher::compute_hash) and
/// [`Trapdoor::find_collision`](crate::Trapdoor::find_collision); consumed by verification and
/// further collision finding.
///
/// # Encoding
///
/// [`ChameleonTag::to_bytes`] emits `[version (1 byte)][R.x][R.y][s][h]`, each field 32 bytes
/// big-endian. The serde representation is the same byte string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChameleonTag<C: Curve> {
    r: C::Point,
    s: C::Scalar,
    h: HashValue,
}

impl<C: Curve> ChameleonTag<C> {
    /// Assembles a tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPoint`] if `r` is the identity.
    pub fn new(r: C::Point, s: C::Scalar, h: HashValue) -> Result<Self> {
        if C::is_identity(&r) {
            return Err(Error::InvalidPoint(
                "Commitment point cannot be the identity".to_string(),
            ));
        }
        Ok(Self { r, s, h })
    }

    /// Commitment point `R`.
    pub fn r(&self) -> &C::Point {
        &self.r
    }

    /// Blinding scalar `s`.
    pub fn s(&self) -> &C::Scalar {
        &self.s
    }

    /// Hash value `h`.
    pub fn h(&self) -> &HashValue {
        &self.h
    }

    /// Big-endian affine coordinates of `R`.
    pub fn r_coordinates(&self) -> ([u8; FIELD_BYTES], [u8; FIELD_BYTES]) {
        C::point_to_coordinates(&self.r).unwrap_or(([0u8; FIELD_BYTES], [0u8; FIELD_BYTES]))
    }

    /// Serializes the tag to its fixed-width encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let (rx, ry) = self.r_coordinates();

        let mut out = Vec::with_capacity(TAG_BYTES);
        out.push(TAG_VERSION);
        out.extend_from_slice(&rx);
        out.extend_from_slice(&ry);
        out.extend_from_slice(&C::scalar_to_bytes(&self.s));
        out.extend_from_slice(self.h.as_bytes());
        out
    }

    /// Parses a tag, validating `R` on the curve and `s` below the group order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != TAG_BYTES {
            return Err(Error::InvalidTag(format!(
                "Expected {} bytes, got {}",
                TAG_BYTES,
                bytes.len()
            )));
        }

        if bytes[0] != TAG_VERSION {
            return Err(Error::InvalidTag(format!(
                "Unsupported tag version: {}",
                bytes[0]
            )));
        }

        let field = |i: usize| -> [u8; FIELD_BYTES] {
            let start = 1 + i * FIELD_BYTES;
            let mut out = [0u8; FIELD_BYTES];
            out.copy_from_slice(&bytes[start..start + FIELD_BYTES]);
            out
        };

        let r = C::point_from_coordinates(&field(0), &field(1))?;
        let s = C::scalar_from_bytes(&field(2))?;
        let h = HashValue::from_bytes(field(3));

        Self::new(r, s, h)
    }
}

impl<C: Curve> Serialize for ChameleonTag<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, C: Curve> Deserialize<'de> for ChameleonTag<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}
