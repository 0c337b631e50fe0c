/*!
This crate implements the *exchange method* for anticlustering: partitioning
`N` elements into `K` groups of fixed size so that a heterogeneity objective
across the partition is maximized, rather than minimized as in ordinary
clustering.

Two objective variants are supported:

* [`optimize_variance`] maximizes the sum, over clusters, of squared
  Euclidean distances from each member to its cluster centroid, given a
  column-major feature matrix.
* [`optimize_diversity`] maximizes the sum, over clusters, of pairwise
  distances among members, given a precomputed distance matrix, optionally
  honoring categorical exchange constraints (elements may only swap with a
  same-category partner, which keeps every category's distribution across
  clusters unchanged).

Both entry points run exactly one pass of the exchange method over the
initial assignment supplied by the caller and return the possibly-improved
assignment in place. Neither chooses `K` or the cluster sizes (those are
invariants carried over from the initial assignment), and neither iterates
to convergence. Call again with the previous output as the new input for
further improvement.

## Example

```
use anticlust::optimize_variance;

// N=6 points on a line, K=2, starting from the minimum-variance partition.
let features = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
let frequencies = [3, 3];
let mut clusters = [0usize, 0, 0, 1, 1, 1];
optimize_variance(&features, 6, 1, &frequencies, &mut clusters).unwrap();
```
*/
#![allow(clippy::too_many_arguments)]

pub mod category;
pub mod error;
pub mod membership;
pub mod objective;
pub mod optimizer;
pub mod point;

pub use error::AnticlustError;

use category::CategoryIndex;
use membership::MembershipIndex;
use objective::diversity::DistanceMatrix;
use objective::{DiversityObjective, VarianceObjective};
use optimizer::run_pass;
use point::PointStore;

/// Variance-objective entry point.
///
/// `data` is `N*M` doubles, column-major: feature `j` of element `i` is
/// `data[j*N + i]`. `frequencies[c]` is the required size of cluster `c`
/// (`sum(frequencies) == N`). `clusters` is both the initial assignment on
/// entry and, on a successful return, the optimized assignment; cluster
/// sizes are preserved.
///
/// Precondition violations (inconsistent sizes, out-of-range cluster ids,
/// a `clusters` whose per-cluster counts don't match `frequencies`) are the
/// caller's responsibility and are not validated here; behavior is
/// undefined if they are violated. The only error this function can return
/// is [`AnticlustError::OutOfMemory`], in which case `clusters` is left
/// unmodified.
pub fn optimize_variance(
    data: &[f64],
    n: usize,
    m: usize,
    frequencies: &[usize],
    clusters: &mut [usize],
) -> Result<(), AnticlustError> {
    let k = frequencies.len();
    let points = PointStore::from_variance_input(data, n, m, clusters, None)?;
    let mut membership = MembershipIndex::new(k, clusters)?;
    let categories = CategoryIndex::new(n, None)?;
    let mut objective = VarianceObjective::init(&points, &membership, k, m, frequencies)?;

    run_pass(&points, &mut membership, &mut objective, &categories);

    points.write_clusters(clusters);
    Ok(())
}

/// Diversity-objective entry point.
///
/// `distances` is `N*N` doubles, column-major, a symmetric matrix with a
/// zero diagonal. `categories`/`cat_frequencies` are `None` when categorical
/// constraints are disabled, in which case the optimizer treats every
/// element as belonging to one category, so any element in a different
/// cluster is an admissible partner. When `Some`, the per-category
/// distribution of elements across clusters is preserved: a swap only ever
/// exchanges two elements of the same category.
///
/// `cat_frequencies` is accepted for parity with the caller's usual
/// bookkeeping (a statistical front-end would compute it alongside
/// `categories`) but the optimizer never needs it: [`category::CategoryIndex`]
/// derives the same grouping directly from `categories`, and preserving
/// per-category cluster counts falls out of only ever swapping same-category
/// elements, not out of knowing the counts up front.
///
/// Same failure and precondition-responsibility contract as
/// [`optimize_variance`].
pub fn optimize_diversity(
    distances: &[f64],
    n: usize,
    frequencies: &[usize],
    clusters: &mut [usize],
    categories: Option<&[usize]>,
    _cat_frequencies: Option<&[usize]>,
) -> Result<(), AnticlustError> {
    let k = frequencies.len();
    let points = PointStore::from_diversity_input(n, clusters, categories)?;
    let mut membership = MembershipIndex::new(k, clusters)?;
    let category_index = CategoryIndex::new(n, categories)?;
    let distance_matrix = DistanceMatrix::new(distances, n);
    let mut objective = DiversityObjective::init(&membership, distance_matrix, k)?;

    run_pass(&points, &mut membership, &mut objective, &category_index);

    points.write_clusters(clusters);
    Ok(())
}
