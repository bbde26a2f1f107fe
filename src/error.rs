//! Error types for the chameleon hash.

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entropy source could not supply the requested bytes.
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// The tag handed to collision finding does not verify under the trapdoor's public key.
    #[error("Hash mismatch: supplied tag does not verify for the original message")]
    HashMismatch,

    /// A point is not on the curve, or is the identity where that is not allowed.
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    /// A scalar value is invalid or out of range.
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// A serialized tag is malformed.
    #[error("Invalid tag: {0}")]
    InvalidTag(String),
}
