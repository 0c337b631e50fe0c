mod generator;
mod summary;

use anticlust::{optimize_diversity, optimize_variance};
use generator::InstanceGenerator;
use summary::{count_swaps, mean, Summary};

fn variance_objective(features: &[f64], n: usize, m: usize, clusters: &[usize], k: usize) -> f64 {
    let mut sums = vec![vec![0.0; m]; k];
    let mut counts = vec![0usize; k];
    for i in 0..n {
        let c = clusters[i];
        counts[c] += 1;
        for d in 0..m {
            sums[c][d] += features[d * n + i];
        }
    }
    let mut total = 0.0;
    for c in 0..k {
        if counts[c] == 0 {
            continue;
        }
        let centroid: Vec<f64> = sums[c].iter().map(|s| s / counts[c] as f64).collect();
        for i in 0..n {
            if clusters[i] == c {
                for d in 0..m {
                    let diff = features[d * n + i] - centroid[d];
                    total += diff * diff;
                }
            }
        }
    }
    total
}

fn diversity_objective(distances: &[f64], n: usize, clusters: &[usize], k: usize) -> f64 {
    let mut total = 0.0;
    for c in 0..k {
        let members: Vec<usize> = (0..n).filter(|&i| clusters[i] == c).collect();
        for a in 0..members.len() {
            for b in (a + 1)..members.len() {
                total += distances[members[b] * n + members[a]];
            }
        }
    }
    total
}

fn run_variance_scenario(n: usize, k: usize, m: usize, num_instances: usize) -> Vec<Summary> {
    let generator = InstanceGenerator::new(n, k, m, -100.0, 100.0, 1);
    generator
        .generate_variance(num_instances)
        .into_iter()
        .map(|instance| {
            let initial_objective =
                variance_objective(&instance.features, n, m, &instance.clusters, k);
            let mut clusters = instance.clusters.clone();
            optimize_variance(&instance.features, n, m, &instance.frequencies, &mut clusters)
                .expect("benchmark instances never exhaust memory");
            let final_objective = variance_objective(&instance.features, n, m, &clusters, k);
            Summary {
                initial_objective,
                final_objective,
                swaps_committed: count_swaps(&instance.clusters, &clusters),
            }
        })
        .collect()
}

fn run_diversity_scenario(n: usize, k: usize, num_instances: usize) -> Vec<Summary> {
    let generator = InstanceGenerator::new(n, k, 1, 0.0, 1000.0, 2);
    generator
        .generate_diversity(num_instances)
        .into_iter()
        .map(|instance| {
            let initial_objective =
                diversity_objective(&instance.distances, n, &instance.clusters, k);
            let mut clusters = instance.clusters.clone();
            optimize_diversity(
                &instance.distances,
                n,
                &instance.frequencies,
                &mut clusters,
                None,
                None,
            )
            .expect("benchmark instances never exhaust memory");
            let final_objective = diversity_objective(&instance.distances, n, &clusters, k);
            Summary {
                initial_objective,
                final_objective,
                swaps_committed: count_swaps(&instance.clusters, &clusters),
            }
        })
        .collect()
}

fn report(label: &str, summaries: &[Summary]) {
    let improvements: Vec<f64> = summaries.iter().map(Summary::improvement).collect();
    let swaps: Vec<f64> = summaries.iter().map(|s| s.swaps_committed as f64).collect();
    println!(
        "{label}: mean improvement {:.4}, mean swaps committed {:.2} ({} instances)",
        mean(&improvements),
        mean(&swaps),
        summaries.len()
    );
}

fn main() {
    env_logger::init();

    log::info!("generating variance instances, N=200 K=4 M=3");
    let variance_summaries = run_variance_scenario(200, 4, 3, 20);
    report("variance N=200 K=4 M=3", &variance_summaries);

    log::info!("generating diversity instances, N=200 K=4");
    let diversity_summaries = run_diversity_scenario(200, 4, 20);
    report("diversity N=200 K=4", &diversity_summaries);
}
