//! Building blocks of the chameleon hash.
//!
//! - **crypto**: the [`Curve`] trait and the default secure random source
//! - **groups**: concrete curves (P-256, secp256k1)
//! - **sampler**: uniform non-zero scalars and random points
//! - **digest**: SHA-256 of a message and commitment point, as a challenge scalar

/// Curve trait and secure randomness.
pub mod crypto;
/// Digest mixing of message and commitment point.
pub mod digest;
/// Curve implementations.
pub mod groups;
/// Random scalar and point sampling.
pub mod sampler;

pub use crypto::{Curve, SecureRng, FIELD_BYTES};
pub use groups::{K256, P256};
