//! Walks through hashing a message, verifying it, and rebinding the hash to a new message.
//!
//! Run with `RUST_LOG=chameleon_hash=debug` to see the library's tracing output.

use chameleon_hash::primitives::sampler;
use chameleon_hash::{ChameleonTag, KeyPair, SecretKey, SecureRng, Trapdoor, P256};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("Chameleon Hash: Basic Example\n");

    println!("Step 1: Set up keys (normally supplied by your key store)");
    let mut rng = SecureRng::new();
    let x = sampler::random_scalar::<P256, _>(&mut rng).expect("OS entropy should be available");
    let keys = KeyPair::from_secret(SecretKey::new(x).expect("Sampled scalars are non-zero"));
    let (px, py) = keys.public_key().to_coordinates();
    println!("  Curve: P-256");
    println!("  Public key x: {}", hex::encode(px));
    println!("  Public key y: {}\n", hex::encode(py));

    let trapdoor = Trapdoor::new(keys);
    let hasher = trapdoor.hasher();

    println!("Step 2: Hash \"hello world!\" with the public key");
    let tag = hasher
        .compute_hash(b"hello world!", &mut rng)
        .expect("Hash computation should succeed");
    let (rx, ry) = tag.r_coordinates();
    println!("  R.x: {}", hex::encode(rx));
    println!("  R.y: {}", hex::encode(ry));
    println!("  h:   {}\n", tag.h());

    println!("Step 3: Serialize the tag for transmission");
    let bytes = tag.to_bytes();
    println!("  Tag size: {} bytes\n", bytes.len());
    let received = ChameleonTag::<P256>::from_bytes(&bytes).expect("Tag should decode");

    println!("Step 4: Verify");
    println!(
        "  hello world!: {}\n",
        hasher.verify_hash(b"hello world!", &received)
    );

    println!("Step 5: Rebind the hash to \"hello shadowlands!\" with the private key");
    let rebound = trapdoor
        .find_collision(b"hello world!", &received, b"hello shadowlands!", &mut rng)
        .expect("Collision finding should succeed");
    println!("  h:   {}", rebound.h());
    println!("  same hash: {}", rebound.h() == received.h());
    println!(
        "  hello shadowlands!: {}",
        hasher.verify_hash(b"hello shadowlands!", &rebound)
    );
}
