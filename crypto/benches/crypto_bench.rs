use collector_types::{Address, BallotDomain, NetworkId, ProposalId, VoteSupport};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_domain() -> BallotDomain {
    BallotDomain::new("Collector", NetworkId::Main, Address::new([0x42; 20]))
}

fn ballot_digest_bench(c: &mut Criterion) {
    let domain = bench_domain();

    c.bench_function("ballot_digest", |b| {
        b.iter(|| {
            collector_crypto::ballot_digest(
                black_box(&domain),
                ProposalId::new(7),
                VoteSupport::For,
            )
        })
    });
}

fn sign_ballot_bench(c: &mut Criterion) {
    let domain = bench_domain();
    let kp = collector_crypto::generate_keypair();

    c.bench_function("sign_ballot", |b| {
        b.iter(|| {
            collector_crypto::sign_ballot(
                black_box(&domain),
                ProposalId::new(7),
                VoteSupport::For,
                &kp,
            )
        })
    });
}

fn recover_voter_bench(c: &mut Criterion) {
    let domain = bench_domain();
    let kp = collector_crypto::generate_keypair();
    let ballot = collector_crypto::sign_ballot(&domain, ProposalId::new(7), VoteSupport::For, &kp);

    c.bench_function("recover_voter", |b| {
        b.iter(|| {
            collector_crypto::recover_voter(
                black_box(&domain),
                ProposalId::new(7),
                VoteSupport::For,
                &ballot,
            )
        })
    });
}

fn blake2b_256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("blake2b_256_256B", |b| {
        b.iter(|| collector_crypto::blake2b_256(black_box(&data)))
    });
}

criterion_group!(
    benches,
    ballot_digest_bench,
    sign_ballot_bench,
    recover_voter_bench,
    blake2b_256_bench
);
criterion_main!(benches);
