//! Vaccine schedule for the dashboard: which pending doses are overdue,
//! due soon, or upcoming.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::models::records::Vaccine;
use shared::VaccineDueStatus;

/// Default look-ahead for the "due soon" state
pub const DEFAULT_DUE_SOON_DAYS: i64 = 14;

/// A pending vaccine with its due date resolved against today
#[derive(Debug, Clone, PartialEq)]
pub struct VaccineDue {
    pub vaccine: Vaccine,
    pub due_date: NaiveDate,
    /// Negative when overdue
    pub days_until_due: i64,
    pub status: VaccineDueStatus,
}

#[derive(Clone)]
pub struct VaccineService {
    due_soon_days: i64,
}

impl VaccineService {
    pub fn new(due_soon_days: i64) -> Self {
        Self { due_soon_days }
    }

    /// Pending vaccines that have a due date, earliest first.
    /// Pending vaccines without a due date are left out.
    pub fn pending_schedule(&self, vaccines: &[Vaccine], today: NaiveDate) -> Vec<VaccineDue> {
        let mut schedule: Vec<VaccineDue> = vaccines
            .iter()
            .filter(|v| !v.is_completed())
            .filter_map(|v| {
                let due_date = v.due_date?;
                let days_until_due = (due_date - today).num_days();
                Some(VaccineDue {
                    vaccine: v.clone(),
                    due_date,
                    days_until_due,
                    status: self.due_status(days_until_due),
                })
            })
            .collect();

        schedule.sort_by_key(|due| due.due_date);

        debug!("{} pending vaccines scheduled", schedule.len());
        schedule
    }

    /// (completed, total) vaccine counts
    pub fn completion_counts(&self, vaccines: &[Vaccine]) -> (usize, usize) {
        let completed = vaccines.iter().filter(|v| v.is_completed()).count();
        (completed, vaccines.len())
    }

    fn due_status(&self, days_until_due: i64) -> VaccineDueStatus {
        if days_until_due < 0 {
            VaccineDueStatus::Overdue
        } else if days_until_due <= self.due_soon_days {
            VaccineDueStatus::DueSoon
        } else {
            VaccineDueStatus::Upcoming
        }
    }
}
