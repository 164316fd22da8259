use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use uvie_compose::{Composer, InputMethod, KeyComposer, TypingSession};
use vi::methods::transform_buffer as vi_transform_buffer;

fn type_seq(session: &mut TypingSession, seq: &str) {
    session.clear();
    for c in seq.chars() {
        black_box(session.feed(c));
    }
}

fn type_seq_vi(def: &vi::Definition, out: &mut String, seq: &str) {
    out.clear();
    vi_transform_buffer(def, seq.chars(), out);
    black_box(&out);
}

const TELEX_CASES: &[(&str, &str)] = &[
    ("simple", "phoos"),
    ("sentence", "Tooi ddang gox Tieengs Vieejt "),
    ("uow", "huows"),
    ("cluster", "nghieengf"),
    ("ui", "guwir tuis"),
];

const VNI_CASES: &[(&str, &str)] = &[
    ("simple", "pho61"),
    ("sentence", "To6i d9ang go4 Tie6ng1 Vie6t5 "),
    ("uow_like", "huo71"),
    ("cluster", "nghie6ng2"),
    ("ui", "gu7i3 tui1"),
];

fn bench_process_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_key");

    for (method, key) in [(InputMethod::Telex, 'f'), (InputMethod::Vni, '2')] {
        group.bench_with_input(BenchmarkId::from_parameter(method), &key, |b, &key| {
            let mut composer = Composer::new(method);
            b.iter(|| {
                composer.reset();
                for k in "nguo".chars() {
                    black_box(composer.process_key(k));
                }
                black_box(composer.process_key(key))
            })
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion, name: &str, method: InputMethod, cases: &[(&str, &str)]) {
    let mut group = c.benchmark_group(name);

    for (case, seq) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(*case), seq, |b, input| {
            let mut s = TypingSession::new(method);
            b.iter(|| {
                type_seq(&mut s, input);
            })
        });
    }

    group.finish();
}

fn bench_uvie_telex(c: &mut Criterion) {
    bench_session(c, "uvie_telex", InputMethod::Telex, TELEX_CASES);
}

fn bench_uvie_vni(c: &mut Criterion) {
    bench_session(c, "uvie_vni", InputMethod::Vni, VNI_CASES);
}

fn bench_compare(
    c: &mut Criterion,
    name: &str,
    method: InputMethod,
    def: &vi::Definition,
    cases: &[(&str, &str)],
) {
    let mut group = c.benchmark_group(name);

    for (case, seq) in cases {
        group.bench_with_input(BenchmarkId::new("uvie", *case), seq, |b, input| {
            let mut s = TypingSession::new(method);
            b.iter(|| {
                type_seq(&mut s, input);
            })
        });

        group.bench_with_input(BenchmarkId::new("vi", *case), seq, |b, input| {
            let mut out = String::new();
            b.iter(|| {
                type_seq_vi(def, &mut out, input);
            })
        });
    }

    group.finish();
}

fn bench_compare_telex(c: &mut Criterion) {
    bench_compare(c, "compare_telex", InputMethod::Telex, &vi::TELEX, TELEX_CASES);
}

fn bench_compare_vni(c: &mut Criterion) {
    bench_compare(c, "compare_vni", InputMethod::Vni, &vi::VNI, VNI_CASES);
}

criterion_group!(
    benches,
    bench_process_key,
    bench_uvie_telex,
    bench_uvie_vni,
    bench_compare_telex,
    bench_compare_vni
);
criterion_main!(benches);
