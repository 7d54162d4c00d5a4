use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use oxistr::scratch::SystemAllocator;
use oxistr::similarity::levenshtein;
use oxistr::{bytes, hash, search, utf8};

fn gen_data(size: usize, seed: u64) -> Vec<u8> {
    let mut out = vec![0u8; size];
    bytes::fill_random(&mut out, seed);
    out
}

/// ASCII-heavy text with occasional multi-byte characters, like real logs.
fn gen_text(size: usize) -> Vec<u8> {
    let phrase = "The QUICK brown Fox jumps über the läzy dog. Ελληνικά 123\n";
    let mut out = Vec::with_capacity(size + phrase.len());
    while out.len() < size {
        out.extend_from_slice(phrase.as_bytes());
    }
    out.truncate(size);
    // Avoid a truncated multi-byte tail.
    while let Some(&last) = out.last() {
        if last & 0xC0 == 0x80 {
            out.pop();
        } else if last >= 0xC0 {
            out.pop();
        } else {
            break;
        }
    }
    out
}

fn bench_byte_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes");
    for &size in &[4 * 1024usize, 1024 * 1024] {
        let src = gen_data(size, 1);
        let mut dst = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("copy", size), &size, |b, _| {
            b.iter(|| bytes::copy(black_box(&mut dst), black_box(&src)));
        });
        group.bench_with_input(BenchmarkId::new("bytesum", size), &size, |b, _| {
            b.iter(|| black_box(bytes::bytesum(black_box(&src))));
        });
        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = (i as u8).wrapping_mul(31);
        }
        group.bench_with_input(BenchmarkId::new("lookup", size), &size, |b, _| {
            b.iter(|| bytes::lookup(black_box(&mut dst), black_box(&src), &table));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let haystack = gen_text(1024 * 1024);
    group.throughput(Throughput::Bytes(haystack.len() as u64));

    group.bench_function("find_byte_missing", |b| {
        b.iter(|| black_box(search::find_byte(black_box(&haystack), 0x00)));
    });
    group.bench_function("find_substring_late", |b| {
        // "läzy dog" occurs once per phrase; force a long scan by asking
        // for a needle that straddles the final phrase boundary.
        let needle = &haystack[haystack.len() - 13..];
        b.iter(|| black_box(search::find(black_box(&haystack), black_box(needle))));
    });
    group.bench_function("rfind_substring", |b| {
        b.iter(|| black_box(search::rfind(black_box(&haystack), b"QUICK brown")));
    });

    let digits: oxistr::ByteSet = (b'0'..=b'9').collect();
    group.bench_function("find_byteset_digits", |b| {
        b.iter(|| black_box(search::find_byteset(black_box(&haystack), &digits)));
    });
    group.finish();
}

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");
    for &size in &[64usize, 4 * 1024, 1024 * 1024] {
        let data = gen_data(size, 2);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("one_shot", size), &size, |b, _| {
            b.iter(|| black_box(hash::hash(black_box(&data), 42)));
        });
        group.bench_with_input(BenchmarkId::new("streamed_1k_chunks", size), &size, |b, _| {
            b.iter(|| {
                let mut state = hash::Hasher::new(42);
                for chunk in data.chunks(1024) {
                    state.update(chunk);
                }
                black_box(state.digest())
            });
        });
    }
    group.finish();
}

fn bench_utf8(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8");
    let text = gen_text(1024 * 1024);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("validate", |b| {
        b.iter(|| black_box(utf8::valid(black_box(&text))));
    });
    group.bench_function("count_codepoints", |b| {
        b.iter(|| black_box(utf8::find_nth(black_box(&text), usize::MAX)));
    });
    let mut folded = vec![0u8; text.len() * 3];
    group.bench_function("case_fold", |b| {
        b.iter(|| black_box(utf8::case_fold(black_box(&text), &mut folded)));
    });
    group.bench_function("case_insensitive_find", |b| {
        b.iter(|| {
            black_box(utf8::case_insensitive_find(
                black_box(&text),
                "ελληνικά 123".as_bytes(),
            ))
        });
    });
    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");
    for &len in &[64usize, 512, 4096] {
        let a = gen_data(len, 3);
        let mut b_side = a.clone();
        for i in (0..b_side.len()).step_by(9) {
            b_side[i] = b_side[i].wrapping_add(1);
        }
        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::new("levenshtein", len), &len, |bench, _| {
            bench.iter(|| {
                black_box(levenshtein(black_box(&a), black_box(&b_side), &SystemAllocator).unwrap())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_byte_kernels,
    bench_search,
    bench_hash,
    bench_utf8,
    bench_similarity
);
criterion_main!(benches);
