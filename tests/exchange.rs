mod common;

use common::ShakeRng;
use rand::thread_rng;
use sike_rs::{
    EncryptedMessage, KeyGenerator, OptimizedEngine, ParamSet, Party, ReferenceEngine, Sidh,
    SidhPublicKey, Sike, SikeError, SikeParam,
};
use sike_rs::fields::FpOpti;

#[test]
fn exchange_all_sets() {
    let mut rng = thread_rng();
    for set in ParamSet::ALL {
        let param = SikeParam::get(set).unwrap();
        let generator = KeyGenerator::<OptimizedEngine>::new(param);
        let sidh = Sidh::<OptimizedEngine>::new(param);

        let alice = generator.generate_key_pair(&mut rng, Party::Alice).unwrap();
        let bob = generator.generate_key_pair(&mut rng, Party::Bob).unwrap();
        let ss_a = sidh.generate_shared_secret(&alice.private, &bob.public).unwrap();
        let ss_b = sidh.generate_shared_secret(&bob.private, &alice.public).unwrap();
        assert_eq!(ss_a, ss_b, "{set}");
    }
}

#[test]
fn engines_agree_p610() {
    // Odd eA: the walk starts with a lone 2-isogeny
    let param = SikeParam::get(ParamSet::P610).unwrap();
    let mut rng = ShakeRng::new(ParamSet::P610);
    let reference = KeyGenerator::<ReferenceEngine>::new(param);
    let optimized = KeyGenerator::<OptimizedEngine>::new(param);

    for party in [Party::Alice, Party::Bob] {
        let private = reference.generate_private_key(&mut rng, party);
        let slow = reference.derive_public_key(&private).unwrap();
        let fast = optimized.derive_public_key(&private).unwrap();
        assert_eq!(slow.encode(), fast.encode());
    }
}

#[test]
fn mixed_engines_share_secrets() {
    let param = SikeParam::get(ParamSet::P503).unwrap();
    let mut rng = thread_rng();
    let alice = KeyGenerator::<ReferenceEngine>::new(param)
        .generate_key_pair(&mut rng, Party::Alice)
        .unwrap();
    let bob = KeyGenerator::<OptimizedEngine>::new(param)
        .generate_key_pair(&mut rng, Party::Bob)
        .unwrap();

    // Public keys travel as bytes between the two field representations
    let bob_public =
        SidhPublicKey::decode(param, Party::Bob, &bob.public.encode()).unwrap();
    let alice_public =
        SidhPublicKey::decode(param, Party::Alice, &alice.public.encode()).unwrap();
    let ss_a = Sidh::<ReferenceEngine>::new(param)
        .generate_shared_secret(&alice.private, &bob_public)
        .unwrap();
    let ss_b = Sidh::<OptimizedEngine>::new(param)
        .generate_shared_secret(&bob.private, &alice_public)
        .unwrap();
    assert_eq!(ss_a, ss_b);
}

#[test]
fn kem_round_trip_all_sets() {
    let mut rng = thread_rng();
    for set in ParamSet::ALL {
        let param = SikeParam::get(set).unwrap();
        let bob = KeyGenerator::<OptimizedEngine>::new(param)
            .generate_key_pair(&mut rng, Party::Bob)
            .unwrap();
        let sike = Sike::<OptimizedEngine>::new(param);

        let encapsulated = sike.encapsulate(&mut rng, &bob.public).unwrap();
        let bytes = encapsulated.message.encode();
        assert_eq!(bytes.len(), param.ciphertext_bytes());
        let received = EncryptedMessage::decode(param, &bytes).unwrap();
        let secret = sike.decapsulate(&bob.private, &bob.public, &received).unwrap();
        assert_eq!(secret, encapsulated.secret, "{set}");
    }
}

#[test]
fn tampered_c0_is_rejected() {
    let param = SikeParam::get(ParamSet::P434).unwrap();
    let mut rng = thread_rng();
    let generator = KeyGenerator::<OptimizedEngine>::new(param);
    let bob = generator.generate_key_pair(&mut rng, Party::Bob).unwrap();
    let sike = Sike::<OptimizedEngine>::new(param);
    let encapsulated = sike.encapsulate(&mut rng, &bob.public).unwrap();

    // Swap in another valid Alice public key as c0
    let other = generator.generate_key_pair(&mut rng, Party::Alice).unwrap();
    let forged =
        EncryptedMessage::new(other.public, encapsulated.message.c1().to_vec()).unwrap();
    let secret = sike.decapsulate(&bob.private, &bob.public, &forged).unwrap();
    assert_ne!(secret, encapsulated.secret);
    assert_eq!(secret.len(), param.crypto_bytes);
}

#[test]
fn wrong_inputs() {
    let p434 = SikeParam::get(ParamSet::P434).unwrap();
    let p503 = SikeParam::get(ParamSet::P503).unwrap();
    let mut rng = thread_rng();
    let bob_434 = KeyGenerator::<OptimizedEngine>::new(p434)
        .generate_key_pair(&mut rng, Party::Bob)
        .unwrap();

    let sidh = Sidh::<OptimizedEngine>::new(p503);
    assert!(matches!(
        sidh.generate_shared_secret(&bob_434.private, &bob_434.public),
        Err(SikeError::InvalidParameter(_))
    ));

    let sike = Sike::<OptimizedEngine>::new(p434);
    let encapsulated = sike.encapsulate(&mut rng, &bob_434.public).unwrap();
    let alice = KeyGenerator::<OptimizedEngine>::new(p434)
        .generate_private_key(&mut rng, Party::Alice);
    assert!(matches!(
        sike.decapsulate(&alice, &bob_434.public, &encapsulated.message),
        Err(SikeError::PartyMismatch { .. })
    ));

    let short: sike_rs::Result<EncryptedMessage<FpOpti>> =
        EncryptedMessage::decode(p434, &[0u8; 10]);
    assert!(matches!(short, Err(SikeError::InvalidLength { .. })));
    assert!("p999".parse::<ParamSet>().is_err());
}
