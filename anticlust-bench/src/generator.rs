use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;

/// A random fixed-size-cluster instance of the variance variant: an
/// `n*m` column-major feature matrix plus a starting assignment whose
/// per-cluster sizes match `frequencies`.
pub struct VarianceInstance {
    pub n: usize,
    pub m: usize,
    pub features: Vec<f64>,
    pub frequencies: Vec<usize>,
    pub clusters: Vec<usize>,
}

/// A random fixed-size-cluster instance of the diversity variant: an
/// `n*n` column-major distance matrix (derived from random points on a
/// line, so it is guaranteed symmetric with a zero diagonal) plus a
/// starting assignment.
pub struct DiversityInstance {
    pub n: usize,
    pub distances: Vec<f64>,
    pub frequencies: Vec<usize>,
    pub clusters: Vec<usize>,
}

fn even_frequencies(n: usize, k: usize) -> Vec<usize> {
    let base = n / k;
    let remainder = n % k;
    (0..k).map(|c| base + if c < remainder { 1 } else { 0 }).collect()
}

fn random_assignment(frequencies: &[usize], rng: &mut StdRng) -> Vec<usize> {
    let mut clusters = Vec::new();
    for (c, &size) in frequencies.iter().enumerate() {
        clusters.extend(std::iter::repeat(c).take(size));
    }
    clusters.shuffle(rng);
    clusters
}

/// Generates random instances in parallel, the way
/// `ClusterGenerator::generate` spreads work across clusters with
/// `into_par_iter`.
pub struct InstanceGenerator {
    pub n: usize,
    pub k: usize,
    pub m: usize,
    pub min_value: f64,
    pub max_value: f64,
    pub seed: u64,
}

impl InstanceGenerator {
    pub fn new(n: usize, k: usize, m: usize, min_value: f64, max_value: f64, seed: u64) -> Self {
        InstanceGenerator { n, k, m, min_value, max_value, seed }
    }

    pub fn generate_variance(&self, num_instances: usize) -> Vec<VarianceInstance> {
        (0..num_instances)
            .into_par_iter()
            .map(|i| self.generate_one_variance(i as u64))
            .collect()
    }

    pub fn generate_diversity(&self, num_instances: usize) -> Vec<DiversityInstance> {
        (0..num_instances)
            .into_par_iter()
            .map(|i| self.generate_one_diversity(i as u64))
            .collect()
    }

    fn generate_one_variance(&self, salt: u64) -> VarianceInstance {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(salt));
        let value_distribution = Uniform::new(self.min_value, self.max_value);
        let features: Vec<f64> = value_distribution
            .sample_iter(&mut rng)
            .take(self.n * self.m)
            .collect();
        let frequencies = even_frequencies(self.n, self.k);
        let clusters = random_assignment(&frequencies, &mut rng);
        VarianceInstance { n: self.n, m: self.m, features, frequencies, clusters }
    }

    fn generate_one_diversity(&self, salt: u64) -> DiversityInstance {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(salt));
        let value_distribution = Uniform::new(self.min_value, self.max_value);
        let points: Vec<f64> = value_distribution
            .sample_iter(&mut rng)
            .take(self.n)
            .collect();
        let mut distances = vec![0.0; self.n * self.n];
        for i in 0..self.n {
            for j in 0..self.n {
                distances[j * self.n + i] = (points[i] - points[j]).abs();
            }
        }
        let frequencies = even_frequencies(self.n, self.k);
        let clusters = random_assignment(&frequencies, &mut rng);
        DiversityInstance { n: self.n, distances, frequencies, clusters }
    }
}
