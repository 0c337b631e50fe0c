/// Before/after report for one exchange pass over one instance, the
/// `anticlust-bench` analogue of `gaoya-bench`'s `MetricResult`.
#[derive(Debug)]
pub struct Summary {
    pub initial_objective: f64,
    pub final_objective: f64,
    pub swaps_committed: usize,
}

impl Summary {
    pub fn improvement(&self) -> f64 {
        self.final_objective - self.initial_objective
    }
}

/// Counts positions where `before` and `after` disagree, divided by two:
/// every committed swap changes the cluster id of exactly two elements,
/// so this recovers the commit count from the public before/after
/// assignments alone, without needing access to the optimizer's internals.
pub fn count_swaps(before: &[usize], after: &[usize]) -> usize {
    let changed = before.iter().zip(after.iter()).filter(|(a, b)| a != b).count();
    changed / 2
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
