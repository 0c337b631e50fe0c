use std::cell::Cell;

use smallvec::SmallVec;

use crate::error::{try_collect_exact, AnticlustError};

/// Feature vectors are usually low-dimensional (a handful of variables per
/// element); inline storage avoids a heap allocation per element for the
/// common case and falls back transparently for larger M.
pub type Features = SmallVec<[f64; 8]>;

/// A single element of the partition.
///
/// `cluster` is the only field any component besides
/// [`crate::membership::MembershipIndex::swap`] is allowed to write. It is
/// a cache kept in lock-step with the membership index's own back-reference
/// array, not an independent source of truth.
#[derive(Debug)]
pub struct Point {
    pub id: usize,
    pub category: usize,
    pub cluster: Cell<usize>,
    pub features: Features,
}

/// Owns every element's record. Built once from the caller's buffers and
/// mutated only through `set_cluster`, which [`crate::membership::MembershipIndex`]
/// calls as part of `swap`.
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Variance variant: `data` is `N*M` doubles, column-major
    /// (`data[j*N + i]` is feature `j` of element `i`).
    pub fn from_variance_input(
        data: &[f64],
        n: usize,
        m: usize,
        clusters: &[usize],
        categories: Option<&[usize]>,
    ) -> Result<Self, AnticlustError> {
        debug_assert_eq!(data.len(), n * m);
        debug_assert_eq!(clusters.len(), n);
        let points = try_collect_exact(
            (0..n).map(|i| {
                let mut features = Features::with_capacity(m);
                for j in 0..m {
                    features.push(data[j * n + i]);
                }
                Point {
                    id: i,
                    category: categories.map_or(0, |c| c[i]),
                    cluster: Cell::new(clusters[i]),
                    features,
                }
            }),
            n,
        )?;
        Ok(PointStore { points })
    }

    /// Diversity variant: elements carry no feature vector, only identity,
    /// category and cluster. The objective reads pairwise distances from a
    /// separately-owned distance matrix instead.
    pub fn from_diversity_input(
        n: usize,
        clusters: &[usize],
        categories: Option<&[usize]>,
    ) -> Result<Self, AnticlustError> {
        debug_assert_eq!(clusters.len(), n);
        let points = try_collect_exact(
            (0..n).map(|i| Point {
                id: i,
                category: categories.map_or(0, |c| c[i]),
                cluster: Cell::new(clusters[i]),
                features: Features::new(),
            }),
            n,
        )?;
        Ok(PointStore { points })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn cluster_of(&self, id: usize) -> usize {
        self.points[id].cluster.get()
    }

    #[inline]
    pub fn category_of(&self, id: usize) -> usize {
        self.points[id].category
    }

    #[inline]
    pub fn features(&self, id: usize) -> &[f64] {
        &self.points[id].features
    }

    /// Called only by [`crate::membership::MembershipIndex::swap`].
    #[inline]
    pub(crate) fn set_cluster(&self, id: usize, cluster: usize) {
        self.points[id].cluster.set(cluster);
    }

    /// Writes the current cluster assignment back into the caller's buffer,
    /// the final step of both entry points.
    pub fn write_clusters(&self, out: &mut [usize]) {
        for p in &self.points {
            out[p.id] = p.cluster.get();
        }
    }
}
