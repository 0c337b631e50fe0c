pub mod diversity;
pub mod variance;

pub use diversity::DiversityObjective;
pub use variance::VarianceObjective;

use crate::membership::MembershipIndex;
use crate::point::PointStore;

/// Shared contract between the variance and diversity objective caches,
/// letting [`crate::optimizer::run_pass`] drive either variant with the
/// same loop.
///
/// `swap_and_rescore` both performs the membership swap and brings the
/// cached per-cluster contributions up to date for it, in one step. There
/// is deliberately no separate "compute delta" vs. "commit" method, because
/// calling it twice with the two elements' roles exchanged
/// (`swap_and_rescore(j, a, i, b)` right after `swap_and_rescore(i, a, j,
/// b)`) is exactly the undo: the membership swap is its own inverse, and
/// the incremental update formulas are algebraically symmetric under
/// exchanging which element is "leaving" which cluster.
pub trait Objective {
    /// `S = sum over clusters of the per-cluster contribution`.
    fn total(&self) -> f64;

    /// Swap `leaving_a` (currently a member of cluster `a`) with
    /// `leaving_b` (currently a member of cluster `b`, `a != b`), update
    /// the cached contributions of `a` and `b`, and return the new total.
    fn swap_and_rescore(
        &mut self,
        membership: &mut MembershipIndex,
        points: &PointStore,
        leaving_a: usize,
        a: usize,
        leaving_b: usize,
        b: usize,
    ) -> f64;
}
