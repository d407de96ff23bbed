//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::thread_rng;
use sike_rs::fields::{Fp2Opti, Fp2Ref, FpElement};
use sike_rs::{EncryptedMessage, KeyGenerator, OptimizedEngine, ParamSet, Party, Sike, SikeParam};

fn bench_field_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp2");
    let param = SikeParam::get(ParamSet::P434).unwrap();

    let a = Fp2Opti::from_u64(param, 0x1234_5678_9abc_def0).inverse();
    let b = Fp2Opti::from_u64(param, 0x0fed_cba9_8765_4321).inverse();
    group.bench_function("mul_opti", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b))
    });
    group.bench_function("inverse_opti", |bencher| {
        bencher.iter(|| black_box(&a).inverse())
    });

    let a = Fp2Ref::from_biguint(param, &a.x0.to_biguint(), &a.x1.to_biguint());
    let b = Fp2Ref::from_biguint(param, &b.x0.to_biguint(), &b.x1.to_biguint());
    group.bench_function("mul_ref", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b))
    });
    group.bench_function("inverse_ref", |bencher| {
        bencher.iter(|| black_box(&a).inverse())
    });

    group.finish();
}

fn bench_kem(c: &mut Criterion) {
    let mut group = c.benchmark_group("sike");
    group.sample_size(10);
    let mut rng = thread_rng();

    for set in ParamSet::ALL {
        let param = SikeParam::get(set).unwrap();
        let generator = KeyGenerator::<OptimizedEngine>::new(param);
        let sike = Sike::<OptimizedEngine>::new(param);
        let bob = generator.generate_key_pair(&mut rng, Party::Bob).unwrap();
        let encapsulated = sike.encapsulate(&mut rng, &bob.public).unwrap();
        let mut flipped = encapsulated.message.encode();
        flipped[param.public_key_bytes()] ^= 1;
        let rejected = EncryptedMessage::decode(param, &flipped).unwrap();

        group.bench_with_input(BenchmarkId::new("keygen", set), &set, |bencher, _| {
            bencher.iter(|| generator.generate_key_pair(&mut thread_rng(), Party::Bob))
        });
        group.bench_with_input(BenchmarkId::new("encaps", set), &set, |bencher, _| {
            bencher.iter(|| sike.encapsulate(&mut thread_rng(), black_box(&bob.public)))
        });
        group.bench_with_input(BenchmarkId::new("decaps", set), &set, |bencher, _| {
            bencher.iter(|| {
                sike.decapsulate(&bob.private, &bob.public, black_box(&encapsulated.message))
            })
        });
        group.bench_with_input(BenchmarkId::new("decaps_rejected", set), &set, |bencher, _| {
            bencher.iter(|| sike.decapsulate(&bob.private, &bob.public, black_box(&rejected)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_field_ops, bench_kem);
criterion_main!(benches);
