//! Age calculations for the baby profile.
//!
//! Two different age units are used across the app: a month/day display
//! string for headers and whole weeks as the canonical unit for milestone
//! timing. Both are derived here from the date of birth and a reference day.

use chrono::{Datelike, Local, Months, NaiveDate};
use tracing::warn;

/// Days counted as one month when showing the "N months D days" remainder
const DAYS_PER_DISPLAY_MONTH: u32 = 30;

/// Elapsed age between a date of birth and a reference day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeBreakdown {
    /// Whole calendar months elapsed
    pub months: u32,
    /// Total days elapsed
    pub days: u32,
    /// Whole weeks elapsed
    pub weeks: u32,
    pub display: String,
}

#[derive(Clone, Default)]
pub struct AgeService;

impl AgeService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the baby's age on `today`.
    ///
    /// A date of birth after `today` is treated as age zero.
    pub fn compute_age(&self, dob: NaiveDate, today: NaiveDate) -> AgeBreakdown {
        if dob > today {
            warn!("Date of birth {} is after {}, treating age as zero", dob, today);
        }

        let months = self.elapsed_months(dob, today);
        let days = self.elapsed_days(dob, today);

        AgeBreakdown {
            months,
            days,
            weeks: days / 7,
            display: self.format_age(months, days),
        }
    }

    /// Age as of the local calendar day
    pub fn age_today(&self, dob: NaiveDate) -> AgeBreakdown {
        self.compute_age(dob, Local::now().date_naive())
    }

    /// Whole weeks elapsed, the unit used for milestone timing
    pub fn compute_age_weeks(&self, dob: NaiveDate, today: NaiveDate) -> u32 {
        self.elapsed_days(dob, today) / 7
    }

    /// Format an age for display:
    /// under a month "N day(s)", under a year "M month(s) D days", else "Yy Mm"
    pub fn format_age(&self, months: u32, days: u32) -> String {
        if months < 1 {
            let unit = if days == 1 { "day" } else { "days" };
            format!("{} {}", days, unit)
        } else if months < 12 {
            let unit = if months == 1 { "month" } else { "months" };
            let remainder = days.saturating_sub(months * DAYS_PER_DISPLAY_MONTH);
            format!("{} {} {} days", months, unit, remainder)
        } else {
            format!("{}y {}m", months / 12, months % 12)
        }
    }

    fn elapsed_days(&self, dob: NaiveDate, today: NaiveDate) -> u32 {
        let days = (today - dob).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    /// Whole calendar months from `dob` to `today`.
    /// Adding months clamps to the end of shorter months, so Jan 31 + 1 month is Feb 28/29.
    fn elapsed_months(&self, dob: NaiveDate, today: NaiveDate) -> u32 {
        if today <= dob {
            return 0;
        }

        let mut months =
            (today.year() - dob.year()) * 12 + today.month() as i32 - dob.month() as i32;
        while months > 0 {
            match dob.checked_add_months(Months::new(months as u32)) {
                Some(anniversary) if anniversary <= today => break,
                _ => months -= 1,
            }
        }

        months.max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_under_one_month_shows_days() {
        let service = AgeService::new();
        let today = date("2024-06-30");

        let age = service.compute_age(date("2024-06-01"), today);
        assert_eq!(age.months, 0);
        assert_eq!(age.days, 29);
        assert_eq!(age.display, "29 days");
    }

    #[test]
    fn test_single_day_is_singular() {
        let service = AgeService::new();

        assert_eq!(service.compute_age(date("2024-06-29"), date("2024-06-30")).display, "1 day");
        assert_eq!(service.compute_age(date("2024-06-30"), date("2024-06-30")).display, "0 days");
    }

    #[test]
    fn test_one_month_boundary() {
        let service = AgeService::new();
        let today = date("2024-06-30");

        // 31 days back lands on May 30, exactly one calendar month
        let age = service.compute_age(date("2024-05-30"), today);
        assert_eq!(age.months, 1);
        assert_eq!(age.days, 31);
        assert_eq!(age.display, "1 month 1 days");
    }

    #[test]
    fn test_months_use_thirty_day_remainder() {
        let service = AgeService::new();

        // Jan 10 -> Apr 20: 3 whole months, 101 days, remainder 101 - 90
        let age = service.compute_age(date("2024-01-10"), date("2024-04-20"));
        assert_eq!(age.months, 3);
        assert_eq!(age.days, 101);
        assert_eq!(age.display, "3 months 11 days");
    }

    #[test]
    fn test_remainder_is_floored_at_zero() {
        let service = AgeService::new();

        // Feb is short: Jan 1 -> Mar 1 is 2 months but only 59 days
        let age = service.compute_age(date("2023-01-01"), date("2023-03-01"));
        assert_eq!(age.months, 2);
        assert_eq!(age.days, 59);
        assert_eq!(age.display, "2 months 0 days");
    }

    #[test]
    fn test_year_rollover() {
        let service = AgeService::new();

        let age = service.compute_age(date("2023-05-30"), date("2024-06-30"));
        assert_eq!(age.months, 13);
        assert_eq!(age.display, "1y 1m");

        let age = service.compute_age(date("2022-06-30"), date("2024-06-30"));
        assert_eq!(age.display, "2y 0m");
    }

    #[test]
    fn test_end_of_month_birthdays() {
        let service = AgeService::new();

        assert_eq!(service.elapsed_months(date("2024-01-31"), date("2024-02-28")), 0);
        assert_eq!(service.elapsed_months(date("2024-01-31"), date("2024-02-29")), 1);
        assert_eq!(service.elapsed_months(date("2024-01-15"), date("2024-02-14")), 0);
        assert_eq!(service.elapsed_months(date("2024-01-15"), date("2024-02-15")), 1);
    }

    #[test]
    fn test_short_february_counts_a_calendar_month() {
        let service = AgeService::new();

        // Jan 31 + 1 month clamps to Feb 28, so 29 days already make a month
        let age = service.compute_age(date("2023-01-31"), date("2023-03-01"));

        assert_eq!(age.days, 29);
        assert_eq!(age.months, 1);
        assert_eq!(age.display, "1 month 0 days");
    }

    #[test]
    fn test_age_weeks() {
        let service = AgeService::new();
        let dob = date("2024-01-01");

        assert_eq!(service.compute_age_weeks(dob, date("2024-01-07")), 0);
        assert_eq!(service.compute_age_weeks(dob, date("2024-01-08")), 1);
        assert_eq!(service.compute_age_weeks(dob, date("2024-03-25")), 12);
        assert_eq!(service.compute_age(dob, date("2024-03-25")).weeks, 12);
    }

    #[test]
    fn test_future_dob_is_age_zero() {
        let service = AgeService::new();

        let age = service.compute_age(date("2024-07-10"), date("2024-06-30"));
        assert_eq!(age.months, 0);
        assert_eq!(age.days, 0);
        assert_eq!(age.weeks, 0);
        assert_eq!(age.display, "0 days");
        assert_eq!(service.compute_age_weeks(date("2024-07-10"), date("2024-06-30")), 0);
    }
}
