use super::clock::TrialDuration;
use super::duration::BenchDuration;
use human_repr::{HumanCount, HumanDuration};

/// Decides when a workload has been sampled enough.
///
/// Both the time budget and the iteration floor have to be met, so a very fast
/// workload still runs `min_iterations` trials and a very slow one still runs
/// for the whole budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoppingCriterion {
    budget: TrialDuration,
    min_iterations: u64,
}

impl StoppingCriterion {
    pub fn new(budget: BenchDuration, min_iterations: u64) -> Self {
        Self {
            budget: TrialDuration::from(budget.get_duration()),
            min_iterations,
        }
    }

    pub fn is_satisfied(&self, elapsed: TrialDuration, iterations: u64) -> bool {
        self.budget_exhausted(elapsed) && self.iterations_reached(iterations)
    }

    pub fn budget_exhausted(&self, elapsed: TrialDuration) -> bool {
        elapsed >= self.budget
    }

    pub fn iterations_reached(&self, iterations: u64) -> bool {
        iterations >= self.min_iterations
    }

    pub fn budget(&self) -> TrialDuration {
        self.budget
    }

    pub fn min_iterations(&self) -> u64 {
        self.min_iterations
    }

    pub fn status(&self, elapsed: TrialDuration, iterations: u64) -> String {
        format!(
            "{}/{} iterations, {}/{}",
            iterations.human_count_bare(),
            self.min_iterations.human_count_bare(),
            elapsed.as_secs_f64().human_duration(),
            self.budget.as_secs_f64().human_duration(),
        )
    }
}
