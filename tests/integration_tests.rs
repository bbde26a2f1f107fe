mod common;

use chameleon_hash::{
    ChameleonHasher, ChameleonTag, Curve, PublicKey, SecureRng, Trapdoor, K256, P256, TAG_BYTES,
};

fn hello_scenario<C: Curve>() {
    common::init_tracing();
    let mut rng = SecureRng::new();
    let keys = common::key_pair::<C>(&mut rng);

    let hasher = ChameleonHasher::new(keys.public_key().clone());
    let message = b"hello world!";
    let tag = hasher
        .compute_hash(message, &mut rng)
        .expect("Hash computation should succeed");
    assert!(hasher.verify_hash(message, &tag), "Fresh tag should verify");

    let new_message = b"hello shadowlands!";
    let trapdoor = Trapdoor::new(keys);
    let rebound = trapdoor
        .find_collision(message, &tag, new_message, &mut rng)
        .expect("Collision finding should succeed");

    assert_eq!(rebound.h().as_bytes(), tag.h().as_bytes());
    assert!(hasher.verify_hash(new_message, &rebound));
    assert!(!hasher.verify_hash(message, &rebound));
    assert!(!hasher.verify_hash(new_message, &tag));
}

#[test]
fn hello_shadowlands_on_p256() {
    hello_scenario::<P256>();
}

#[test]
fn hello_shadowlands_on_secp256k1() {
    hello_scenario::<K256>();
}

#[test]
fn tag_survives_transport_encoding() {
    common::init_tracing();
    let mut rng = SecureRng::new();
    let keys = common::key_pair::<P256>(&mut rng);

    // Public key and tag cross the wire as fixed-width big-endian bytes.
    let (px, py) = keys.public_key().to_coordinates();
    let receiver_key = PublicKey::<P256>::from_coordinates(&px, &py).unwrap();

    let tag = ChameleonHasher::new(keys.public_key().clone())
        .compute_hash(b"transported", &mut rng)
        .unwrap();
    let bytes = tag.to_bytes();
    assert_eq!(bytes.len(), TAG_BYTES);

    let received = ChameleonTag::<P256>::from_bytes(&bytes).unwrap();
    assert!(ChameleonHasher::new(receiver_key).verify_hash(b"transported", &received));
}

#[test]
fn rebound_tag_can_be_rebound_again_after_transport() {
    let mut rng = SecureRng::new();
    let trapdoor = Trapdoor::new(common::key_pair::<P256>(&mut rng));
    let hasher = trapdoor.hasher();

    let tag = hasher.compute_hash(b"v1", &mut rng).unwrap();
    let v2 = trapdoor.find_collision(b"v1", &tag, b"v2", &mut rng).unwrap();
    let v2 = ChameleonTag::<P256>::from_bytes(&v2.to_bytes()).unwrap();
    let v3 = trapdoor.find_collision(b"v2", &v2, b"v3", &mut rng).unwrap();

    assert_eq!(v3.h(), tag.h());
    assert!(hasher.verify_hash(b"v3", &v3));
}

#[test]
fn empty_and_large_messages() {
    let mut rng = SecureRng::new();
    let trapdoor = Trapdoor::new(common::key_pair::<P256>(&mut rng));
    let hasher = trapdoor.hasher();
    let large = vec![0x42u8; 1 << 16];

    let tag = hasher.compute_hash(b"", &mut rng).unwrap();
    assert!(hasher.verify_hash(b"", &tag));

    let rebound = trapdoor.find_collision(b"", &tag, &large, &mut rng).unwrap();
    assert!(hasher.verify_hash(&large, &rebound));
}

#[test]
fn parallel_hashing_needs_no_coordination() {
    let mut rng = SecureRng::new();
    let trapdoor = Trapdoor::new(common::key_pair::<P256>(&mut rng));

    std::thread::scope(|scope| {
        for i in 0..4u8 {
            let trapdoor = &trapdoor;
            scope.spawn(move || {
                let mut rng = SecureRng::new();
                let hasher = trapdoor.hasher();
                let message = [i; 8];
                let tag = hasher.compute_hash(&message, &mut rng).unwrap();
                let rebound = trapdoor
                    .find_collision(&message, &tag, b"shared target", &mut rng)
                    .unwrap();
                assert!(hasher.verify_hash(b"shared target", &rebound));
            });
        }
    });
}
