#[macro_use]
extern crate criterion;

use criterion::Criterion;
use rand::{rngs::OsRng, RngCore};

use hbs_mss::{keygen, sign, verify, LmotsAlgorithm, MerkleAgent, MssParameter, Seed, Sha256_256};

const MESSAGE: [u8; 17] = [
    32u8, 48, 2, 1, 48, 58, 20, 57, 9, 83, 99, 255, 0, 34, 2, 1, 0,
];

fn random_seed() -> Seed {
    let mut seed = Seed::default();
    OsRng.fill_bytes(&mut seed);
    seed
}

fn parameter(tree_height: u32) -> MssParameter<Sha256_256> {
    MssParameter::new(LmotsAlgorithm::LmotsW2, tree_height).unwrap()
}

fn fresh_agent(tree_height: u32) -> MerkleAgent<Sha256_256> {
    keygen(&parameter(tree_height), &random_seed()).unwrap().0
}

fn bench_keygen(tree_height: u32, c: &mut Criterion) {
    c.bench_function(format!("KeyGen with height: {}", tree_height).as_str(), |b| {
        b.iter(|| keygen(&parameter(tree_height), &random_seed()).unwrap())
    });
}

fn bench_sign(tree_height: u32, c: &mut Criterion) {
    c.bench_function(format!("Sign with height: {}", tree_height).as_str(), |b| {
        let mut agent = fresh_agent(tree_height);
        b.iter(|| {
            if agent.remaining_signatures() == 0 {
                agent = fresh_agent(tree_height);
            }
            sign(&mut agent, &MESSAGE).unwrap()
        })
    });
}

fn bench_verify(tree_height: u32, c: &mut Criterion) {
    c.bench_function(format!("Verify with height: {}", tree_height).as_str(), |b| {
        let (mut agent, public_key) = keygen(&parameter(tree_height), &random_seed()).unwrap();
        let signature = sign(&mut agent, &MESSAGE).unwrap();
        b.iter(|| assert!(verify(&public_key, &MESSAGE, &signature)))
    });
}

fn keygen_height5(c: &mut Criterion) {
    bench_keygen(5, c)
}
fn keygen_height8(c: &mut Criterion) {
    bench_keygen(8, c)
}

fn sign_height5(c: &mut Criterion) {
    bench_sign(5, c)
}
fn sign_height10(c: &mut Criterion) {
    bench_sign(10, c)
}

fn verify_height10(c: &mut Criterion) {
    bench_verify(10, c)
}

criterion_group!(keygen_benches, keygen_height5, keygen_height8);
criterion_group!(sign_benches, sign_height5, sign_height10);
criterion_group!(verify_benches, verify_height10);
criterion_main!(keygen_benches, sign_benches, verify_benches);
