//! Criterion benchmarks for auth47 parsing.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use auth47::{Auth47Uri, Challenge, FixedClock, SorobanUri};

const NOW: FixedClock = FixedClock::new(1_600_000_000);

/// Benchmark: `Auth47Uri::parse` with varying URI shapes
fn bench_parse_uri(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_uri");

    let test_cases = [
        ("soroban_bare", "auth47://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef"),
        (
            "soroban_gateway",
            "auth47://aZrzsdfsfs343432sdf?c=srbn://123aef4567890aef@samourai.onion/rpc",
        ),
        ("http", "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io"),
        (
            "full",
            "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io&e=2208988800&r=https://samourai.io/resource1",
        ),
    ];

    for (name, uri) in test_cases {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| Auth47Uri::parse(black_box(uri)));
        });
    }

    group.finish();
}

/// Benchmark: `Challenge::parse_with_clock` with varying challenge shapes
fn bench_parse_challenge(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_challenge");

    let test_cases = [
        ("srbn", "auth47://aZrzsdfsfs343432sdf?r=srbn"),
        ("srbn_expiry", "auth47://aZrzsdfsfs343432sdf?r=srbn&e=2208988800"),
        (
            "http_expiry",
            "auth47://aZrzsdfsfs343432sdf?r=https://samourai.io&e=2208988800",
        ),
    ];

    for (name, challenge) in test_cases {
        group.throughput(Throughput::Bytes(challenge.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("challenge", name),
            &challenge,
            |b, challenge| {
                b.iter(|| Challenge::parse_with_clock(black_box(challenge), &NOW));
            },
        );
    }

    group.finish();
}

/// Benchmark: `SorobanUri::parse`
fn bench_parse_soroban(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_soroban");

    let test_cases = [
        ("bare", "srbn://123aef4567890aef"),
        ("gateway", "srbns://123aef4567890aef@samourai.io/rpc"),
    ];

    for (name, uri) in test_cases {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("soroban", name), &uri, |b, uri| {
            b.iter(|| SorobanUri::parse(black_box(uri)));
        });
    }

    group.finish();
}

/// Benchmark: serialization of a parsed URI
fn bench_serialize(c: &mut Criterion) {
    let uri = Auth47Uri::parse(
        "auth47://aZrzsdfsfs343432sdf?c=https://samourai.io&e=2208988800&r=srbn",
    )
    .unwrap();

    c.bench_function("serialize_uri", |b| {
        b.iter(|| black_box(&uri).to_string());
    });
}

criterion_group!(
    benches,
    bench_parse_uri,
    bench_parse_challenge,
    bench_parse_soroban,
    bench_serialize
);
criterion_main!(benches);
