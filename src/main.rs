use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sike_rs::{
    KeyGenerator, OptimizedEngine, ParamSet, Party, Result, Sidh, Sike, SikeError, SikeParam,
};
use std::env;
use std::time::Instant;

fn sike_bench(set: ParamSet, total_cases: usize, rng: &mut ChaCha20Rng) -> Result<()> {
    let timer = Instant::now();
    let param = SikeParam::get(set)?;
    param.validate()?;
    println!("{set} setup elapsed : {} ms", timer.elapsed().as_millis());

    let generator = KeyGenerator::<OptimizedEngine>::new(param);
    let sidh = Sidh::<OptimizedEngine>::new(param);
    let sike = Sike::<OptimizedEngine>::new(param);

    for case_num in 0..total_cases {
        println!("=========TEST #{case_num}=======");
        let timer = Instant::now();
        let alice = generator.generate_key_pair(rng, Party::Alice)?;
        let bob = generator.generate_key_pair(rng, Party::Bob)?;
        println!("keygen elapsed : {} ms", timer.elapsed().as_millis());

        let timer = Instant::now();
        let ss_a = sidh.generate_shared_secret(&alice.private, &bob.public)?;
        let ss_b = sidh.generate_shared_secret(&bob.private, &alice.public)?;
        println!("exchange elapsed : {} ms", timer.elapsed().as_millis());
        assert_eq!(ss_a, ss_b);

        let timer = Instant::now();
        let encapsulated = sike.encapsulate(rng, &bob.public)?;
        println!("encaps elapsed : {} ms", timer.elapsed().as_millis());

        let timer = Instant::now();
        let secret = sike.decapsulate(&bob.private, &bob.public, &encapsulated.message)?;
        println!("decaps elapsed : {} ms", timer.elapsed().as_millis());
        assert_eq!(secret, encapsulated.secret);
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let sets = match args.next() {
        Some(name) if name != "all" => vec![name.parse::<ParamSet>()?],
        _ => ParamSet::ALL.to_vec(),
    };
    let total_cases = match args.next() {
        Some(n) => n
            .parse()
            .map_err(|_| SikeError::InvalidParameter(format!("bad case count {n}")))?,
        None => 10,
    };
    // A seed makes the run reproducible, keys and messages included
    let mut rng = match args.next() {
        Some(seed) => ChaCha20Rng::seed_from_u64(
            seed.parse()
                .map_err(|_| SikeError::InvalidParameter(format!("bad seed {seed}")))?,
        ),
        None => ChaCha20Rng::from_entropy(),
    };

    for set in sets {
        sike_bench(set, total_cases, &mut rng)?;
    }
    Ok(())
}
