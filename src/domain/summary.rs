// Completion statistics - fold a list of work items into one summary
use crate::domain::work_item::WorkItem;
use std::iter::Sum;
use std::ops::Add;

const PLAN_ESTIMATE_FIELD: &str = "PlanEstimate";
const TASK_ACTUAL_FIELD: &str = "TaskActualTotal";
const TASK_ESTIMATE_FIELD: &str = "TaskEstimateTotal";
const TASK_REMAINING_FIELD: &str = "TaskRemainingTotal";

/// Aggregated completion statistics for a set of work items.
///
/// `points` and `count` cover finished items only; `total_points` and
/// `total_count` cover every item; the task hour fields accumulate over every
/// item regardless of status. All fields are non-negative, and
/// `count <= total_count`, `points <= total_points`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub points: f64,
    pub count: u64,
    pub total_points: f64,
    pub total_count: u64,
    pub task_actuals: f64,
    pub task_estimates: f64,
    pub task_todo: f64,
}

/// Fold work items into a [`Summary`].
///
/// An item counts toward `points`/`count` when its value at `status_field`
/// exactly matches one of `done_statuses`. Malformed or missing numeric
/// fields contribute zero; an empty input yields the all-zero summary.
pub fn summarize(items: &[WorkItem], status_field: &str, done_statuses: &[String]) -> Summary {
    items.iter().fold(Summary::default(), |acc, item| {
        let points = item.numeric_field(PLAN_ESTIMATE_FIELD);
        let done = item.has_status(status_field, done_statuses);

        Summary {
            points: acc.points + if done { points } else { 0.0 },
            count: acc.count + u64::from(done),
            total_points: acc.total_points + points,
            total_count: acc.total_count + 1,
            task_actuals: acc.task_actuals + item.numeric_field(TASK_ACTUAL_FIELD),
            task_estimates: acc.task_estimates + item.numeric_field(TASK_ESTIMATE_FIELD),
            task_todo: acc.task_todo + item.numeric_field(TASK_REMAINING_FIELD),
        }
    })
}

impl Add for Summary {
    type Output = Summary;

    fn add(self, rhs: Summary) -> Summary {
        Summary {
            points: self.points + rhs.points,
            count: self.count + rhs.count,
            total_points: self.total_points + rhs.total_points,
            total_count: self.total_count + rhs.total_count,
            task_actuals: self.task_actuals + rhs.task_actuals,
            task_estimates: self.task_estimates + rhs.task_estimates,
            task_todo: self.task_todo + rhs.task_todo,
        }
    }
}

impl Sum for Summary {
    fn sum<I: Iterator<Item = Summary>>(iter: I) -> Summary {
        iter.fold(Summary::default(), Add::add)
    }
}
