// Release domain model
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Release {
    pub object_id: u64,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Release {
    pub fn new(
        object_id: u64,
        name: String,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            object_id,
            name,
            start_date,
            end_date,
        }
    }

    /// Formatted timebox, e.g. "01/01/2026 - 03/31/2026". Empty when either
    /// date is missing.
    pub fn date_range(&self) -> String {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => format!(
                "{} - {}",
                start.format("%m/%d/%Y"),
                end.format("%m/%d/%Y")
            ),
            _ => String::new(),
        }
    }
}
