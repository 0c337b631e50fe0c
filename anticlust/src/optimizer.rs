use crate::category::CategoryIndex;
use crate::membership::MembershipIndex;
use crate::objective::Objective;
use crate::point::PointStore;

/// Drives one complete pass of the exchange method over every element in
/// id order, generic over the objective variant so
/// [`crate::optimize_variance`] and [`crate::optimize_diversity`] share the
/// same loop.
///
/// Terminates after one pass. It is explicitly not iterated to
/// convergence; callers wanting further improvement invoke the entry point
/// again with this pass's output as the new input.
pub fn run_pass<O: Objective>(
    points: &PointStore,
    membership: &mut MembershipIndex,
    objective: &mut O,
    categories: &CategoryIndex,
) {
    let n = points.len();
    let mut current_s = objective.total();
    log::debug!("starting exchange pass over {n} elements, S={current_s}");

    for i in 0..n {
        let a = membership.cluster_of(i);
        let category = points.category_of(i);

        // Starts at zero: every objective value here is a sum of
        // non-negative terms (squared distances or distances), so zero is
        // a true lower bound, and a cluster with no admissible partner
        // simply never raises it above current_s, correctly producing
        // "leave i in place".
        let mut best_total = 0.0_f64;
        let mut best_partner: Option<usize> = None;

        for &j in categories.partners(category) {
            if j == i {
                continue;
            }
            let b = membership.cluster_of(j);
            if b == a {
                continue;
            }

            let tentative_s = objective.swap_and_rescore(membership, points, i, a, j, b);
            if tentative_s > best_total {
                best_total = tentative_s;
                best_partner = Some(j);
            }
            // Undo: swap back and rescore back to the pre-candidate
            // baseline. See the Objective trait's doc comment for why
            // calling swap_and_rescore a second time with the two
            // elements' roles exchanged is exactly this undo.
            objective.swap_and_rescore(membership, points, j, a, i, b);
        }

        if let Some(j) = best_partner {
            if best_total > current_s {
                let b = membership.cluster_of(j);
                current_s = objective.swap_and_rescore(membership, points, i, a, j, b);
                log::trace!("committed swap of {i} and {j}, S={current_s}");
            }
        }
    }

    log::debug!("finished exchange pass, S={current_s}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{DiversityObjective, VarianceObjective};
    use crate::objective::diversity::DistanceMatrix;

    #[test]
    fn single_cluster_performs_no_swaps() {
        // K=1: no admissible different-cluster partner exists.
        let n = 5;
        let clusters = vec![0usize; n];
        let features: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let points = PointStore::from_variance_input(&features, n, 1, &clusters, None).unwrap();
        let mut membership = MembershipIndex::new(1, &clusters).unwrap();
        let categories = CategoryIndex::new(n, None).unwrap();
        let frequencies = [n];
        let mut objective = VarianceObjective::init(&points, &membership, 1, 1, &frequencies).unwrap();
        let before = objective.total();
        run_pass(&points, &mut membership, &mut objective, &categories);
        assert_eq!(objective.total(), before);
        for id in 0..n {
            assert_eq!(membership.cluster_of(id), 0);
        }
    }

    #[test]
    fn identical_points_commit_nothing() {
        // All deltas are zero, so nothing strictly improves.
        let n = 8;
        let clusters = vec![0, 0, 1, 1, 2, 2, 3, 3];
        let features = vec![1.0; n * 2];
        let points = PointStore::from_variance_input(&features, n, 2, &clusters, None).unwrap();
        let mut membership = MembershipIndex::new(4, &clusters).unwrap();
        let categories = CategoryIndex::new(n, None).unwrap();
        let frequencies = [2, 2, 2, 2];
        let mut objective = VarianceObjective::init(&points, &membership, 4, 2, &frequencies).unwrap();
        run_pass(&points, &mut membership, &mut objective, &categories);
        assert_eq!(objective.total(), 0.0);
        for id in 0..n {
            assert_eq!(membership.cluster_of(id), clusters[id]);
        }
    }

    #[test]
    fn variance_on_a_line_interleaves_clusters() {
        let n = 6;
        let clusters = vec![0, 0, 0, 1, 1, 1];
        let features = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let points = PointStore::from_variance_input(&features, n, 1, &clusters, None).unwrap();
        let mut membership = MembershipIndex::new(2, &clusters).unwrap();
        let categories = CategoryIndex::new(n, None).unwrap();
        let frequencies = [3, 3];
        let mut objective = VarianceObjective::init(&points, &membership, 2, 1, &frequencies).unwrap();
        let before = objective.total();
        run_pass(&points, &mut membership, &mut objective, &categories);
        assert!(objective.total() >= before);
        assert!(objective.total() > before + 1e-9);
    }

    #[test]
    fn diversity_never_deteriorates() {
        let x = [0.0, 10.0, 11.0, 21.0];
        let n = x.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                data[j * n + i] = (x[i] - x[j]).abs();
            }
        }
        let clusters = [0usize, 0, 1, 1];
        let points = PointStore::from_diversity_input(n, &clusters, None).unwrap();
        let mut membership = MembershipIndex::new(2, &clusters).unwrap();
        let categories = CategoryIndex::new(n, None).unwrap();
        let distances = DistanceMatrix::new(&data, n);
        let mut objective = DiversityObjective::init(&membership, distances, 2).unwrap();
        let before = objective.total();
        run_pass(&points, &mut membership, &mut objective, &categories);
        assert!(objective.total() >= before - 1e-9);
        assert!((objective.total() - 22.0).abs() < 1e-9);
    }

    #[test]
    fn category_constraint_preserves_per_category_cluster_counts() {
        let n = 6;
        let clusters = [0usize, 0, 0, 1, 1, 1];
        let categories_vec = [0usize, 0, 1, 2, 1, 2];
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                data[j * n + i] = (x[i] - x[j]).abs();
            }
        }
        let points = PointStore::from_diversity_input(n, &clusters, Some(&categories_vec)).unwrap();
        let mut membership = MembershipIndex::new(2, &clusters).unwrap();
        let categories = CategoryIndex::new(n, Some(&categories_vec)).unwrap();
        let distances = DistanceMatrix::new(&data, n);
        let mut objective = DiversityObjective::init(&membership, distances, 2).unwrap();
        run_pass(&points, &mut membership, &mut objective, &categories);

        let mut counts = [[0usize; 2]; 3]; // counts[category][cluster]
        for id in 0..n {
            counts[categories_vec[id]][membership.cluster_of(id)] += 1;
        }
        for cat in 0..3 {
            assert_eq!(counts[cat][0], 1);
            assert_eq!(counts[cat][1], 1);
        }
    }
}
