//! Chameleon hash over prime-order elliptic curves.
//!
//! A chameleon hash is a randomized hash keyed by a public key `pub = x * G`. Anyone with
//! the public key can hash a message into a tag `(R, s, h)`:
//!
//! ```text
//! e = SHA-256(message || R.x || R.y)
//! h = R - e * pub - s * G
//! ```
//!
//! Only the holder of `x` can later produce `(R', s')` binding a different message to the
//! same `h`, which makes the scheme suitable for chameleon signatures and revocable
//! commitments.
//!
//! - [`ChameleonHasher`] computes and verifies tags with a [`PublicKey`]
//! - [`Trapdoor`] finds collisions with a [`KeyPair`]
//! - [`P256`] (default) and [`K256`] implement the [`Curve`] arithmetic
//!
//! Randomness is always injected as a [`rand_core::CryptoRngCore`]; [`SecureRng`] wraps
//! the operating system source.
//!
//! # Example
//!
//! ```rust
//! use chameleon_hash::{KeyPair, P256, SecretKey, SecureRng, Trapdoor};
//! use chameleon_hash::primitives::sampler;
//!
//! let mut rng = SecureRng::new();
//! let x = sampler::random_scalar::<P256, _>(&mut rng).unwrap();
//! let trapdoor = Trapdoor::new(KeyPair::from_secret(SecretKey::<P256>::new(x).unwrap()));
//! let hasher = trapdoor.hasher();
//!
//! let tag = hasher.compute_hash(b"hello world!", &mut rng).unwrap();
//! assert!(hasher.verify_hash(b"hello world!", &tag));
//!
//! let rebound = trapdoor
//!     .find_collision(b"hello world!", &tag, b"hello shadowlands!", &mut rng)
//!     .unwrap();
//! assert_eq!(rebound.h(), tag.h());
//! ```

mod error;
/// Curve arithmetic, sampling and digest building blocks.
pub mod primitives;
/// Chameleon hash computation, verification and collision finding.
pub mod protocol;

pub use error::Error;
pub use primitives::{Curve, SecureRng, FIELD_BYTES, K256, P256};
pub use protocol::{
    ChameleonHasher, ChameleonTag, HashValue, KeyPair, MismatchPolicy, PublicKey, SecretKey,
    Trapdoor, TrapdoorConfig, TAG_BYTES,
};

/// Result type for chameleon hash operations.
pub type Result<T> = std::result::Result<T, Error>;
