// Dashboard domain model
use crate::domain::release::Release;
use crate::domain::summary::Summary;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub release: Release,
    pub meters: Vec<MeterData>,
    pub tasks: TaskTotals,
}

impl Dashboard {
    pub fn new(release: Release, meters: Vec<MeterData>, tasks: TaskTotals) -> Self {
        Self {
            release,
            meters,
            tasks,
        }
    }
}

/// One progress ring: how much of `total` is finished.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterData {
    pub id: String,
    pub label: String,
    pub part: f64,
    pub total: f64,
    pub percent: u32,
}

impl MeterData {
    pub fn new(id: &str, label: &str, part: f64, total: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            part,
            total,
            percent: percent_done(part, total),
        }
    }
}

/// Task hour rollup across every item, finished or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskTotals {
    pub actuals: f64,
    pub estimates: f64,
    pub todo: f64,
}

impl From<&Summary> for TaskTotals {
    fn from(summary: &Summary) -> Self {
        Self {
            actuals: summary.task_actuals,
            estimates: summary.task_estimates,
            todo: summary.task_todo,
        }
    }
}

/// Whole percent finished, rounded down. Zero `part` short-circuits so an
/// empty meter never divides zero by zero.
pub fn percent_done(part: f64, total: f64) -> u32 {
    if part == 0.0 {
        0
    } else {
        ((part / total) * 100.0).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_done_floors() {
        assert_eq!(percent_done(35.0, 40.0), 87);
        assert_eq!(percent_done(3.0, 5.0), 60);
        assert_eq!(percent_done(40.0, 40.0), 100);
    }

    #[test]
    fn test_percent_done_of_nothing_is_zero() {
        assert_eq!(percent_done(0.0, 40.0), 0);
        assert_eq!(percent_done(0.0, 0.0), 0);
    }

    #[test]
    fn test_meter_carries_its_percent() {
        let meter = MeterData::new("points", "Points", 3.0, 5.0);
        assert_eq!(meter.percent, 60);
    }

    #[test]
    fn test_task_totals_from_summary() {
        let summary = Summary {
            task_actuals: 2.0,
            task_estimates: 6.0,
            task_todo: 3.5,
            ..Summary::default()
        };
        assert_eq!(
            TaskTotals::from(&summary),
            TaskTotals {
                actuals: 2.0,
                estimates: 6.0,
                todo: 3.5
            }
        );
    }
}
