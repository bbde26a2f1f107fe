use core::fmt::Debug;

use crypto_bigint::U320;
use zeroize::Zeroize;

use crate::Result;

/// Width in bytes of every encoded coordinate and scalar (256-bit curves).
pub const FIELD_BYTES: usize = 32;

/// Arithmetic over a fixed prime-order elliptic curve group.
///
/// Implementations must be constant-time with respect to scalars: the private key,
/// the blinding scalar and the collision nonce all flow through `scalar_mult_base`,
/// `scalar_mult` and the scalar field operations.
pub trait Curve: Clone + Debug + Send + Sync + 'static {
    /// Integer modulo the group order `n`.
    type Scalar: Clone + Debug + Eq + PartialEq + Zeroize + Send + Sync;
    /// Curve point, including the identity.
    type Point: Clone + Debug + Eq + PartialEq + Send + Sync;

    /// Group order minus one, widened to 320 bits for wide reduction of random bytes.
    const ORDER_MINUS_ONE: U320;

    /// Curve name used in log fields.
    fn name() -> &'static str;

    /// The standard base point `G`.
    fn generator() -> Self::Point;

    /// The point at infinity.
    fn identity() -> Self::Point;

    /// Whether `p` is the point at infinity.
    fn is_identity(p: &Self::Point) -> bool;

    /// Returns `k * G`.
    fn scalar_mult_base(k: &Self::Scalar) -> Self::Point;

    /// Returns `k * P`.
    fn scalar_mult(p: &Self::Point, k: &Self::Scalar) -> Self::Point;

    /// Returns `P + Q`.
    fn add(p: &Self::Point, q: &Self::Point) -> Self::Point;

    /// Additive inverse: `(x, y)` becomes `(x, -y mod p)`.
    fn negate(p: &Self::Point) -> Self::Point;

    /// Returns `P - Q`.
    fn sub(p: &Self::Point, q: &Self::Point) -> Self::Point {
        Self::add(p, &Self::negate(q))
    }

    /// Builds a point from big-endian affine coordinates, rejecting anything off the curve.
    fn point_from_coordinates(
        x: &[u8; FIELD_BYTES],
        y: &[u8; FIELD_BYTES],
    ) -> Result<Self::Point>;

    /// Big-endian affine coordinates, or `None` for the identity.
    fn point_to_coordinates(p: &Self::Point) -> Option<([u8; FIELD_BYTES], [u8; FIELD_BYTES])>;

    /// Parses a canonical big-endian scalar (must be below the group order).
    fn scalar_from_bytes(b: &[u8]) -> Result<Self::Scalar>;

    /// Fixed-width big-endian encoding of a scalar.
    fn scalar_to_bytes(s: &Self::Scalar) -> [u8; FIELD_BYTES];

    /// Interprets 32 big-endian bytes as an integer and reduces it modulo the group order.
    fn scalar_reduce(b: &[u8; FIELD_BYTES]) -> Self::Scalar;

    /// Returns `a * b mod n`.
    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Returns `a - b mod n`.
    fn scalar_sub(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Whether `s` is zero modulo the group order.
    fn scalar_is_zero(s: &Self::Scalar) -> bool;
}
