use crate::error::{try_vec_filled, AnticlustError};
use crate::membership::MembershipIndex;
use crate::objective::Objective;
use crate::point::PointStore;

/// `centroids[c]` is the running centroid of cluster `c`, maintained by an
/// incremental update rather than recomputed from members on every swap.
/// `contributions[c]` is `v_c`, the within-cluster sum of squared distances
/// to `centroids[c]`; it *is* fully recomputed from members on every swap
/// (only `O(|c|*M)`, and cheap next to the `O(N)` candidates evaluated per
/// element).
pub struct VarianceObjective {
    m: usize,
    frequencies: Vec<usize>,
    centroids: Vec<Vec<f64>>,
    contributions: Vec<f64>,
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

impl VarianceObjective {
    pub fn init(
        points: &PointStore,
        membership: &MembershipIndex,
        k: usize,
        m: usize,
        frequencies: &[usize],
    ) -> Result<Self, AnticlustError> {
        let mut centroids: Vec<Vec<f64>> = Vec::new();
        centroids.try_reserve_exact(k)?;
        let mut contributions = try_vec_filled(0.0, k)?;

        for c in 0..k {
            let members = membership.members(c);
            let mut centroid = try_vec_filled(0.0, m)?;
            if !members.is_empty() {
                for &id in members {
                    let f = points.features(id);
                    for d in 0..m {
                        centroid[d] += f[d];
                    }
                }
                let n = members.len() as f64;
                for d in 0..m {
                    centroid[d] /= n;
                }
            }
            contributions[c] = members
                .iter()
                .map(|&id| squared_distance(points.features(id), &centroid))
                .sum();
            centroids.push(centroid);
        }

        Ok(VarianceObjective {
            m,
            frequencies: frequencies.to_vec(),
            centroids,
            contributions,
        })
    }

    #[inline]
    pub fn contribution(&self, cluster: usize) -> f64 {
        self.contributions[cluster]
    }

    #[inline]
    pub fn centroid(&self, cluster: usize) -> &[f64] {
        &self.centroids[cluster]
    }

    fn recompute_contribution(&self, points: &PointStore, membership: &MembershipIndex, cluster: usize) -> f64 {
        membership
            .members(cluster)
            .iter()
            .map(|&id| squared_distance(points.features(id), &self.centroids[cluster]))
            .sum()
    }
}

impl Objective for VarianceObjective {
    fn total(&self) -> f64 {
        self.contributions.iter().sum()
    }

    fn swap_and_rescore(
        &mut self,
        membership: &mut MembershipIndex,
        points: &PointStore,
        leaving_a: usize,
        a: usize,
        leaving_b: usize,
        b: usize,
    ) -> f64 {
        debug_assert_ne!(a, b);
        let freq_a = self.frequencies[a] as f64;
        let freq_b = self.frequencies[b] as f64;

        let fa = points.features(leaving_a);
        let fb = points.features(leaving_b);
        for d in 0..self.m {
            let delta = fb[d] - fa[d];
            self.centroids[a][d] += delta / freq_a;
            self.centroids[b][d] -= delta / freq_b;
        }

        membership.swap(points, leaving_a, leaving_b);

        self.contributions[a] = self.recompute_contribution(points, membership, a);
        self.contributions[b] = self.recompute_contribution(points, membership, b);

        self.total()
    }
}
