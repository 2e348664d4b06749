//! Benchmarks for RTTTL parsing and tone resolution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use racetimer_audio::catalog::RTTTL_SONGS;
use racetimer_audio::pcm::{render_tones, RenderOptions};
use racetimer_audio::rtttl;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtttl_parse");

    for song in RTTTL_SONGS.iter() {
        group.bench_with_input(BenchmarkId::new("tune", song.id), song.text, |b, text| {
            b.iter(|| black_box(rtttl::parse(text).unwrap()));
        });
    }

    group.finish();
}

fn bench_parse_all(c: &mut Criterion) {
    c.bench_function("rtttl_parse_catalog", |b| {
        b.iter(|| {
            for song in RTTTL_SONGS.iter() {
                black_box(song.parse().unwrap());
            }
        });
    });
}

fn bench_tones(c: &mut Criterion) {
    let tunes: Vec<_> = RTTTL_SONGS.iter().map(|s| s.parse().unwrap()).collect();

    c.bench_function("rtttl_resolve_tones", |b| {
        b.iter(|| {
            for tune in &tunes {
                black_box(tune.tones().unwrap());
            }
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let tones = RTTTL_SONGS[0].parse().unwrap().tones().unwrap();

    c.bench_function("render_disabled_tone", |b| {
        b.iter(|| black_box(render_tones(&tones, RenderOptions::default()).unwrap()));
    });
}

criterion_group!(benches, bench_parse, bench_parse_all, bench_tones, bench_render);
criterion_main!(benches);
