/// Trapdoor configuration.
pub mod config;
/// Keys, hash value and tag types.
pub mod gadgets;
/// Hash computation and verification with a public key.
pub mod hasher;
/// Collision finding with the private key.
pub mod trapdoor;

pub use config::{MismatchPolicy, TrapdoorConfig};
pub use gadgets::{ChameleonTag, HashValue, KeyPair, PublicKey, SecretKey, TAG_BYTES};
pub use hasher::ChameleonHasher;
pub use trapdoor::Trapdoor;
