use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use anticlust::{optimize_diversity, optimize_variance};

fn even_frequencies(n: usize, k: usize) -> Vec<usize> {
    let base = n / k;
    let remainder = n % k;
    (0..k).map(|c| base + if c < remainder { 1 } else { 0 }).collect()
}

fn line_features(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

fn line_distances(n: usize) -> Vec<f64> {
    let x = line_features(n);
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            data[j * n + i] = (x[i] - x[j]).abs();
        }
    }
    data
}

fn striped_clusters(n: usize, k: usize, frequencies: &[usize]) -> Vec<usize> {
    let mut clusters = Vec::with_capacity(n);
    for (c, &size) in frequencies.iter().enumerate() {
        clusters.extend(std::iter::repeat(c).take(size));
    }
    debug_assert_eq!(clusters.len(), n);
    let _ = k;
    clusters
}

fn bench_variance_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_variance_pass");
    for &n in &[100usize, 1_000, 5_000] {
        let k = 10;
        let frequencies = even_frequencies(n, k);
        let features = line_features(n);
        let clusters = striped_clusters(n, k, &frequencies);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| {
                let mut clusters = clusters.clone();
                optimize_variance(
                    black_box(&features),
                    n,
                    1,
                    &frequencies,
                    &mut clusters,
                )
                .unwrap();
                black_box(clusters);
            })
        });
    }
    group.finish();
}

fn bench_diversity_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_diversity_pass");
    for &n in &[100usize, 1_000] {
        let k = 10;
        let frequencies = even_frequencies(n, k);
        let distances = line_distances(n);
        let clusters = striped_clusters(n, k, &frequencies);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| {
                let mut clusters = clusters.clone();
                optimize_diversity(
                    black_box(&distances),
                    n,
                    &frequencies,
                    &mut clusters,
                    None,
                    None,
                )
                .unwrap();
                black_box(clusters);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_variance_pass, bench_diversity_pass);
criterion_main!(benches);
