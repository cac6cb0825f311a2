use std::hint::black_box;

use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::TryRngCore;
use rand::rngs::OsRng;
use siphasher::sip::SipHasher;

use std::hash::BuildHasher;
use std::hash::Hash;
use std::hash::Hasher;

#[derive(Clone)]
struct SipBuild {
    k0: u64,
    k1: u64,
}

impl SipBuild {
    fn random() -> Self {
        let mut rng = OsRng;
        Self {
            k0: rng.try_next_u64().unwrap_or(0x5bd1_e995),
            k1: rng.try_next_u64().unwrap_or(0x2545_f491),
        }
    }
}

impl BuildHasher for SipBuild {
    type Hasher = SipHasher;

    fn build_hasher(&self) -> SipHasher {
        SipHasher::new_with_keys(self.k0, self.k1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct TestKey(String);

impl TestKey {
    fn new(i: u64) -> Self {
        black_box(TestKey(format!("key_{i}")))
    }
}

const SIZES: &[usize] = &[1 << 10, 1 << 14, 1 << 17];

type HopscotchMap = hopscotch_map::HashMap<TestKey, u64, SipBuild>;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let items: Vec<(TestKey, u64)> = (0..size as u64).map(|i| (TestKey::new(i), i)).collect();

        group.bench_function(format!("hopscotch/{size}"), |b| {
            let build = SipBuild::random();
            b.iter(|| {
                let mut map: HopscotchMap = hopscotch_map::HashMap::with_hasher(build.clone());
                for (key, value) in items.iter().cloned() {
                    map.insert(key, value);
                }
                black_box(map)
            })
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            let build = SipBuild::random();
            b.iter(|| {
                let mut map = hashbrown::HashMap::with_hasher(build.clone());
                for (key, value) in items.iter().cloned() {
                    map.insert(key, value);
                }
                black_box(map)
            })
        });
        group.bench_function(format!("std/{size}"), |b| {
            let build = SipBuild::random();
            b.iter(|| {
                let mut map = std::collections::HashMap::with_hasher(build.clone());
                for (key, value) in items.iter().cloned() {
                    map.insert(key, value);
                }
                black_box(map)
            })
        });
    }

    group.finish();
}

fn bench_lookup_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_hit");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let items: Vec<(TestKey, u64)> = (0..size as u64).map(|i| (TestKey::new(i), i)).collect();

        let build = SipBuild::random();
        let mut hopscotch: HopscotchMap = hopscotch_map::HashMap::with_hasher(build.clone());
        let mut brown = hashbrown::HashMap::with_hasher(build.clone());
        for (key, value) in items.iter().cloned() {
            hopscotch.insert(key.clone(), value);
            brown.insert(key, value);
        }

        group.bench_function(format!("hopscotch/{size}"), |b| {
            b.iter(|| {
                let mut sum = 0u64;
                for (key, _) in items.iter() {
                    sum = sum.wrapping_add(*hopscotch.get(key).unwrap());
                }
                black_box(sum)
            })
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut sum = 0u64;
                for (key, _) in items.iter() {
                    sum = sum.wrapping_add(*brown.get(key).unwrap());
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

fn bench_lookup_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_miss");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let build = SipBuild::random();
        let mut hopscotch: HopscotchMap = hopscotch_map::HashMap::with_hasher(build.clone());
        let mut brown = hashbrown::HashMap::with_hasher(build.clone());
        for i in 0..size as u64 {
            hopscotch.insert(TestKey::new(i), i);
            brown.insert(TestKey::new(i), i);
        }
        let misses: Vec<TestKey> = (size as u64..2 * size as u64).map(TestKey::new).collect();

        group.bench_function(format!("hopscotch/{size}"), |b| {
            b.iter(|| {
                let mut found = 0usize;
                for key in misses.iter() {
                    found += usize::from(hopscotch.contains_key(key));
                }
                black_box(found)
            })
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut found = 0usize;
                for key in misses.iter() {
                    found += usize::from(brown.contains_key(key));
                }
                black_box(found)
            })
        });
    }

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let build = SipBuild::random();
        let mut map: HopscotchMap = hopscotch_map::HashMap::with_hasher(build);
        for i in 0..size as u64 {
            map.insert(TestKey::new(i), i);
        }

        group.bench_function(format!("hopscotch/{size}"), |b| {
            b.iter(|| {
                let mut sum = 0u64;
                for (_, value) in map.iter() {
                    sum = sum.wrapping_add(*value);
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_lookup_hit,
    bench_lookup_miss,
    bench_iterate
);
criterion_main!(benches);
