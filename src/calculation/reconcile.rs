//! Punch reconciliation.
//!
//! Pairs one employee's punches into work sessions and reports the punches
//! that could not be paired. Punches are not labelled as check-in or
//! check-out by the time clock, so pairing is positional within a day, with
//! two rules for shifts that cross midnight:
//!
//! - the first punch of the first recorded day, if at or before 04:30, is the
//!   checkout of a shift that started before the data begins;
//! - a day left with a single unpaired punch borrows the next recorded day's
//!   first punch as its checkout when that punch is at or before 04:30.
//!
//! A malformed token is never paired and never reported as an anomaly, but it
//! still counts as an unpaired punch of its day.
//!
//! The days are held in a working set where each punch carries a state, so a
//! punch consumed by cross-day pairing is never seen again when its own day
//! is processed.

use chrono::{NaiveTime, Timelike};
use tracing::{debug, warn};

use crate::models::{Anomaly, MalformedPunch, PunchDay, WorkSession};

use super::normalize::parse_punch;

/// Latest hour of an early-morning punch treated as a previous shift's checkout.
pub const EARLY_CHECKOUT_HOUR: u32 = 4;
/// Latest minute within [`EARLY_CHECKOUT_HOUR`]; 04:30 itself is early.
pub const EARLY_CHECKOUT_MINUTE: u32 = 30;

/// Returns true when a punch at `time` is the checkout of an overnight shift.
///
/// ```
/// use attendance_engine::calculation::is_early_checkout;
/// use chrono::NaiveTime;
///
/// assert!(is_early_checkout(NaiveTime::from_hms_opt(4, 30, 0).unwrap()));
/// assert!(!is_early_checkout(NaiveTime::from_hms_opt(4, 31, 0).unwrap()));
/// ```
pub fn is_early_checkout(time: NaiveTime) -> bool {
    (time.hour(), time.minute()) <= (EARLY_CHECKOUT_HOUR, EARLY_CHECKOUT_MINUTE)
}

/// The outcome of reconciling one employee's punches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Sessions in the order they were formed. May contain duplicates when
    /// the input repeats a day.
    pub sessions: Vec<WorkSession>,
    /// Punches that could not be paired.
    pub anomalies: Vec<Anomaly>,
    /// Tokens dropped because they are not valid times of day.
    pub malformed: Vec<MalformedPunch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PunchState {
    Open,
    Consumed,
    Reported,
    Malformed,
}

/// One day of the working set: parsed times alongside each punch's state.
struct WorkingDay<'a> {
    day: &'a PunchDay,
    times: Vec<Option<NaiveTime>>,
    states: Vec<PunchState>,
}

impl<'a> WorkingDay<'a> {
    fn new(day: &'a PunchDay) -> Self {
        let times: Vec<Option<NaiveTime>> = day.punches.iter().map(|p| parse_punch(p)).collect();
        let states = vec![PunchState::Open; times.len()];
        Self { day, times, states }
    }

    fn open_indices(&self) -> Vec<usize> {
        (0..self.states.len())
            .filter(|&i| self.states[i] == PunchState::Open)
            .collect()
    }

    fn first_open(&self) -> Option<usize> {
        self.states.iter().position(|&s| s == PunchState::Open)
    }
}

/// Reconciles one employee's punch days into sessions and anomalies.
///
/// Days are processed in ascending date order regardless of input order. An
/// empty slice yields an empty reconciliation.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::reconcile_punches;
/// use attendance_engine::models::PunchDay;
/// use chrono::NaiveDate;
///
/// let d1 = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let d2 = NaiveDate::from_ymd_opt(2025, 7, 2).unwrap();
/// let days = vec![
///     PunchDay::new("Nour", d1, ["08:00", "12:00", "22:00"]),
///     PunchDay::new("Nour", d2, ["00:10", "09:00", "17:00"]),
/// ];
///
/// let result = reconcile_punches(&days);
/// assert_eq!(result.sessions.len(), 3);
/// assert_eq!(result.sessions[1].duration_minutes, 130); // 22:00 -> 00:10
/// assert!(result.anomalies.is_empty());
/// ```
pub fn reconcile_punches(days: &[PunchDay]) -> Reconciliation {
    let mut ordered: Vec<&PunchDay> = days.iter().collect();
    ordered.sort_by_key(|day| day.date);

    let mut working: Vec<WorkingDay<'_>> = ordered.into_iter().map(WorkingDay::new).collect();
    let mut result = Reconciliation::default();

    correct_leading_day(&mut working, &mut result);

    for index in 0..working.len() {
        pair_day(&mut working, index, &mut result);
    }

    result
}

/// Step 1: an early first punch in the data is a checkout of an unseen shift.
fn correct_leading_day(working: &mut [WorkingDay<'_>], result: &mut Reconciliation) {
    let Some(first) = working.first_mut() else {
        return;
    };
    let Some(idx) = first.first_open() else {
        return;
    };
    let Some(time) = first.times[idx] else {
        return;
    };

    if is_early_checkout(time) {
        let punch = &first.day.punches[idx];
        debug!(
            employee = %first.day.employee,
            date = %first.day.date,
            punch = %punch,
            "Leading punch treated as checkout of a prior shift"
        );
        result
            .anomalies
            .push(Anomaly::prior_shift_checkout(first.day.date, punch.clone()));
        first.states[idx] = PunchState::Reported;
    }
}

/// Step 2: pair a day's open punches and resolve its leftovers.
fn pair_day(working: &mut [WorkingDay<'_>], index: usize, result: &mut Reconciliation) {
    let Some((current, rest)) = working[index..].split_first_mut() else {
        return;
    };
    let date = current.day.date;

    let open = current.open_indices();
    let pair_limit = open.len() - open.len() % 2;

    for pair in open[..pair_limit].chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);
        // a pair holding a malformed token stays open and falls through to the leftovers
        if let (Some(start), Some(end)) = (current.times[a], current.times[b]) {
            let session = WorkSession::same_day(date, start, end);
            debug!(
                employee = %current.day.employee,
                %date,
                start = %start.format("%H:%M"),
                end = %end.format("%H:%M"),
                minutes = session.duration_minutes,
                "Paired session"
            );
            result.sessions.push(session);
            current.states[a] = PunchState::Consumed;
            current.states[b] = PunchState::Consumed;
        }
    }

    match current.open_indices().as_slice() {
        [] => {}
        &[idx] => match current.times[idx] {
            Some(start) => {
                let next = rest.first_mut();
                match next.and_then(|next| early_checkout_of(next).map(|(i, end)| (next, i, end))) {
                    Some((next, next_idx, end)) => {
                        let session = WorkSession::across_midnight(date, start, end);
                        debug!(
                            employee = %current.day.employee,
                            %date,
                            next_date = %next.day.date,
                            start = %start.format("%H:%M"),
                            end = %end.format("%H:%M"),
                            minutes = session.duration_minutes,
                            "Paired session across midnight"
                        );
                        result.sessions.push(session);
                        current.states[idx] = PunchState::Consumed;
                        next.states[next_idx] = PunchState::Consumed;
                    }
                    None => report_missing_checkout(current, idx, result),
                }
            }
            None => drop_malformed(current, idx, result),
        },
        many => {
            for &idx in many {
                if current.times[idx].is_some() {
                    report_missing_checkout(current, idx, result);
                } else {
                    drop_malformed(current, idx, result);
                }
            }
        }
    }
}

/// The next day's first open punch, if it is an early-morning checkout.
fn early_checkout_of(next: &WorkingDay<'_>) -> Option<(usize, NaiveTime)> {
    let idx = next.first_open()?;
    let time = next.times[idx]?;
    is_early_checkout(time).then_some((idx, time))
}

fn report_missing_checkout(day: &mut WorkingDay<'_>, idx: usize, result: &mut Reconciliation) {
    let punch = &day.day.punches[idx];
    debug!(
        employee = %day.day.employee,
        date = %day.day.date,
        punch = %punch,
        "Check-in has no matching checkout"
    );
    result
        .anomalies
        .push(Anomaly::missing_checkout(day.day.date, punch.clone()));
    day.states[idx] = PunchState::Reported;
}

fn drop_malformed(day: &mut WorkingDay<'_>, idx: usize, result: &mut Reconciliation) {
    let token = &day.day.punches[idx];
    warn!(
        employee = %day.day.employee,
        date = %day.day.date,
        token = %token,
        "Dropping malformed punch token"
    );
    result.malformed.push(MalformedPunch {
        date: day.day.date,
        token: token.clone(),
    });
    day.states[idx] = PunchState::Malformed;
}
