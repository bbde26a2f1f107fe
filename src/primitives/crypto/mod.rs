/// Curve trait and operations.
pub mod group;
/// Cryptographically secure random number generation.
pub mod rng;

pub use group::{Curve, FIELD_BYTES};
pub use rng::SecureRng;
