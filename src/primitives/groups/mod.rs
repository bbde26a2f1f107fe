/// secp256k1 curve implementation.
pub mod k256;
/// NIST P-256 curve implementation (default).
pub mod p256;

pub use self::k256::K256;
pub use self::p256::P256;
