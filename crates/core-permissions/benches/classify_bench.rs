use core_permissions::{classify, decode, PERMISSION_TABLE};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_exact_match(c: &mut Criterion) {
    // Last entry of the last table walks every exact rule
    let last = PERMISSION_TABLE
        .last()
        .and_then(|(_, names)| names.last())
        .copied()
        .unwrap_or("addExceptionList");

    c.bench_function("classify_exact_first", |b| {
        b.iter(|| classify(black_box(Some("view"))));
    });
    c.bench_function("classify_exact_last", |b| {
        b.iter(|| classify(black_box(Some(last))));
    });
}

fn benchmark_keyword_fallback(c: &mut Criterion) {
    c.bench_function("classify_keyword", |b| {
        b.iter(|| classify(black_box(Some("bulkManageWidgetsForTenants"))));
    });
    c.bench_function("classify_unknown", |b| {
        b.iter(|| classify(black_box(Some("somethingEntirelyDifferent"))));
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let raw = "@{view=1;edit=0;export=1;manage=0;fullAccess=0;triage=1;scan=1;isolate=0}";

    c.bench_function("decode_bag", |b| {
        b.iter(|| decode(black_box(raw)).get("isolate"));
    });
}

criterion_group!(
    benches,
    benchmark_exact_match,
    benchmark_keyword_fallback,
    benchmark_decode
);
criterion_main!(benches);
