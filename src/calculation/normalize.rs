//! Punch normalization.
//!
//! Turns raw per-day punch text into ordered `HH:MM` tokens, builds dated
//! [`PunchDay`] records for a report period, and groups them per employee.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use tracing::{debug, warn};

use crate::config::ReportPeriod;
use crate::models::{PunchDay, RawPunchRow};

static PUNCH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2}").expect("valid punch token regex"));

/// All punch days of one employee, sorted by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePunches {
    /// The employee name.
    pub employee: String,
    /// The employee's days in ascending date order.
    pub days: Vec<PunchDay>,
}

/// Extracts the punch tokens from raw cell text, in order of appearance.
///
/// Anything that is not a `H:MM` or `HH:MM` token is ignored. Tokens are
/// not validated as times of day here.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::extract_punch_tokens;
///
/// let tokens = extract_punch_tokens("07:58\n12:01 (late) 13:00\n17:2");
/// assert_eq!(tokens, vec!["07:58", "12:01", "13:00"]);
/// ```
pub fn extract_punch_tokens(raw: &str) -> Vec<String> {
    PUNCH_TOKEN
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parses a punch token as a time of day.
///
/// Returns `None` for tokens such as `25:10` or `9:75`.
pub fn parse_punch(token: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(token, "%H:%M").ok()
}

fn is_blank(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
}

/// Builds dated punch days from raw rows of one report period.
///
/// Rows are skipped when their day is not a date in the period, when the
/// text is blank, or when no token could be extracted. The result is sorted
/// by date; rows of the same date keep their input order.
pub fn normalize_rows(rows: &[RawPunchRow], period: ReportPeriod) -> Vec<PunchDay> {
    let mut days = Vec::with_capacity(rows.len());

    for row in rows {
        if is_blank(&row.raw_text) {
            continue;
        }

        let Some(date) = period.date(row.day) else {
            warn!(
                employee = %row.employee,
                year = period.year,
                month = period.month,
                day = row.day,
                "Skipping punch row with a day outside the period"
            );
            continue;
        };

        let punches = extract_punch_tokens(&row.raw_text);
        if punches.is_empty() {
            debug!(employee = %row.employee, %date, "No punch tokens in row");
            continue;
        }

        days.push(PunchDay {
            employee: row.employee.trim().to_string(),
            date,
            punches,
            raw_text: row.raw_text.clone(),
        });
    }

    days.sort_by_key(|day| day.date);
    days
}

/// Groups punch days per employee.
///
/// Employees appear in the order they are first seen. Each employee's days
/// are sorted by date.
pub fn group_by_employee(days: Vec<PunchDay>) -> Vec<EmployeePunches> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<EmployeePunches> = Vec::new();

    for day in days {
        let slot = match index.get(&day.employee) {
            Some(&slot) => slot,
            None => {
                index.insert(day.employee.clone(), groups.len());
                groups.push(EmployeePunches {
                    employee: day.employee.clone(),
                    days: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[slot].days.push(day);
    }

    for group in &mut groups {
        group.days.sort_by_key(|day| day.date);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn row(employee: &str, day: u32, raw_text: &str) -> RawPunchRow {
        RawPunchRow {
            employee: employee.to_string(),
            day,
            raw_text: raw_text.to_string(),
        }
    }

    const JULY_2025: ReportPeriod = ReportPeriod {
        year: 2025,
        month: 7,
    };

    // ==========================================================================
    // PN-001: tokens extracted through noise
    // ==========================================================================
    #[test]
    fn test_pn_001_tokens_extracted_through_noise() {
        let tokens = extract_punch_tokens("IN 8:02 / OUT 17:15 *edited*");
        assert_eq!(tokens, vec!["8:02", "17:15"]);
    }

    // ==========================================================================
    // PN-002: newline separated cell keeps order
    // ==========================================================================
    #[test]
    fn test_pn_002_newline_cell_keeps_order() {
        let tokens = extract_punch_tokens("22:10\n07:00\n07:05");
        assert_eq!(tokens, vec!["22:10", "07:00", "07:05"]);
    }

    // ==========================================================================
    // PN-003: out-of-range token survives extraction, fails parsing
    // ==========================================================================
    #[test]
    fn test_pn_003_out_of_range_token() {
        let tokens = extract_punch_tokens("25:10 08:00");
        assert_eq!(tokens, vec!["25:10", "08:00"]);
        assert_eq!(parse_punch("25:10"), None);
        assert_eq!(parse_punch("08:00"), NaiveTime::from_hms_opt(8, 0, 0));
    }

    #[test]
    fn test_parse_single_digit_hour() {
        assert_eq!(parse_punch("7:55"), NaiveTime::from_hms_opt(7, 55, 0));
        assert_eq!(parse_punch("9:75"), None);
    }

    // ==========================================================================
    // PN-004: blank, nan and tokenless rows are dropped
    // ==========================================================================
    #[test]
    fn test_pn_004_empty_rows_dropped() {
        let rows = vec![
            row("Huda", 1, ""),
            row("Huda", 2, "nan"),
            row("Huda", 3, "NaN "),
            row("Huda", 4, "absent"),
            row("Huda", 5, "08:00 16:00"),
        ];
        let days = normalize_rows(&rows, JULY_2025);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, make_date("2025-07-05"));
        assert_eq!(days[0].raw_text, "08:00 16:00");
    }

    // ==========================================================================
    // PN-005: days outside the period are skipped
    // ==========================================================================
    #[test]
    fn test_pn_005_invalid_day_skipped() {
        let rows = vec![
            row("Huda", 31, "08:00 16:00"),
            row("Huda", 0, "08:00 16:00"),
        ];
        let june = ReportPeriod {
            year: 2025,
            month: 6,
        };
        assert!(normalize_rows(&rows, june).is_empty());
        assert_eq!(normalize_rows(&rows[..1], JULY_2025).len(), 1);
    }

    #[test]
    fn test_rows_sorted_by_date() {
        let rows = vec![
            row("Huda", 9, "08:00 16:00"),
            row("Huda", 2, "08:00 16:00"),
            row("Sami", 5, "09:00 17:00"),
        ];
        let days = normalize_rows(&rows, JULY_2025);
        let dates: Vec<u32> = days.iter().map(|d| chrono::Datelike::day(&d.date)).collect();
        assert_eq!(dates, vec![2, 5, 9]);
    }

    #[test]
    fn test_employee_name_is_trimmed() {
        let days = normalize_rows(&[row("  Huda ", 1, "08:00")], JULY_2025);
        assert_eq!(days[0].employee, "Huda");
    }

    // ==========================================================================
    // PN-006: grouping keeps first-seen order and sorts each employee
    // ==========================================================================
    #[test]
    fn test_pn_006_grouping_order() {
        let days = vec![
            PunchDay::new("Sami", make_date("2025-07-03"), ["09:00", "17:00"]),
            PunchDay::new("Huda", make_date("2025-07-02"), ["08:00", "16:00"]),
            PunchDay::new("Sami", make_date("2025-07-01"), ["09:00", "17:00"]),
        ];
        let groups = group_by_employee(days);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].employee, "Sami");
        assert_eq!(groups[0].days[0].date, make_date("2025-07-01"));
        assert_eq!(groups[0].days[1].date, make_date("2025-07-03"));
        assert_eq!(groups[1].employee, "Huda");
    }

    #[test]
    fn test_grouping_empty_input() {
        assert!(group_by_employee(Vec::new()).is_empty());
    }
}
