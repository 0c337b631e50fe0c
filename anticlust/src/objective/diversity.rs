use crate::error::{try_vec_filled, AnticlustError};
use crate::membership::MembershipIndex;
use crate::objective::Objective;
use crate::point::PointStore;
use itertools::Itertools;

/// A symmetric N×N distance matrix with a zero diagonal, as supplied by the
/// caller in column-major order (`data[j*N + i]`, which for a symmetric
/// matrix is indistinguishable from row-major; the accessor below only
/// picks one convention for definiteness).
pub struct DistanceMatrix<'a> {
    data: &'a [f64],
    n: usize,
}

impl<'a> DistanceMatrix<'a> {
    pub fn new(data: &'a [f64], n: usize) -> Self {
        debug_assert_eq!(data.len(), n * n);
        DistanceMatrix { data, n }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[j * self.n + i]
    }
}

/// `contributions[c]` is `v_c`, the sum of pairwise distances among members
/// of cluster `c`, counted once per unordered pair. Maintained purely
/// incrementally, with no full-recompute step the way the variance variant
/// has one, because the incremental update here is already `O(|cluster|)`
/// rather than `O(|cluster|^2)`.
pub struct DiversityObjective<'a> {
    distances: DistanceMatrix<'a>,
    contributions: Vec<f64>,
}

impl<'a> DiversityObjective<'a> {
    pub fn init(
        membership: &MembershipIndex,
        distances: DistanceMatrix<'a>,
        k: usize,
    ) -> Result<Self, AnticlustError> {
        let mut contributions = try_vec_filled(0.0, k)?;
        for c in 0..k {
            let members = membership.members(c);
            let sum: f64 = members
                .iter()
                .tuple_combinations()
                .map(|(&e, &other)| distances.get(e, other))
                .sum();
            contributions[c] = sum;
        }
        Ok(DiversityObjective { distances, contributions })
    }

    #[inline]
    pub fn contribution(&self, cluster: usize) -> f64 {
        self.contributions[cluster]
    }

    /// Sum of `D[id, other]` over `other` in `members`, excluding `id`
    /// itself (`D[id,id] = 0` anyway, this just avoids reading the
    /// diagonal).
    fn sum_distances_to(&self, members: &[usize], id: usize) -> f64 {
        members
            .iter()
            .filter(|&&other| other != id)
            .map(|&other| self.distances.get(id, other))
            .sum()
    }
}

impl<'a> Objective for DiversityObjective<'a> {
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

        let sub_a = self.sum_distances_to(membership.members(a), leaving_a);
        let sub_b = self.sum_distances_to(membership.members(b), leaving_b);
        self.contributions[a] -= sub_a;
        self.contributions[b] -= sub_b;

        membership.swap(points, leaving_a, leaving_b);

        // `leaving_b` now sits in `a` in `leaving_a`'s old place, and vice
        // versa; the cross-pair D[leaving_a, leaving_b] is never summed in
        // either phase, because each element's contribution is taken before
        // it has joined the cluster it is moving into.
        let add_a = self.sum_distances_to(membership.members(a), leaving_b);
        let add_b = self.sum_distances_to(membership.members(b), leaving_a);
        self.contributions[a] += add_a;
        self.contributions[b] += add_b;

        self.total()
    }
}
