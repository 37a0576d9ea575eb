//! Session pay calculation.
//!
//! Each session is paid against a base for its day:
//! - Saturday: 7 base hours credited at 9 hours of the hourly rate
//! - Any other day: 9 base hours at 9 hours of the hourly rate
//!
//! Hours above the base are paid at the plain hourly rate. Hours at or below
//! the base are prorated against the base pay, so a partial Saturday hour is
//! worth more than a partial weekday hour.

use chrono::Weekday;
use rust_decimal::Decimal;

use crate::config::PayRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, SessionPayLine, WorkSession};

use super::day_detection::{DayType, get_day_type};

/// The result of pricing a session, including the pay line and audit step.
#[derive(Debug, Clone)]
pub struct SessionPayResult {
    /// The priced session.
    pub pay_line: SessionPayLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the pay for one session, rounded to cents.
///
/// The calculator does not validate its inputs; negative rates or durations
/// must be rejected by the caller (see [`validate_hourly_rate`] and
/// [`validate_duration`]). Returns [`EngineError::PayOverflow`] when the
/// amount does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_session_pay;
/// use attendance_engine::config::PayRules;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let rules = PayRules::default();
/// let rate = Decimal::new(10, 0);
///
/// // 7 Saturday hours are paid as 9
/// assert_eq!(calculate_session_pay(Weekday::Sat, Decimal::new(7, 0), rate, &rules).unwrap(), Decimal::new(9000, 2));
/// // one extra Saturday hour at the plain rate
/// assert_eq!(calculate_session_pay(Weekday::Sat, Decimal::new(8, 0), rate, &rules).unwrap(), Decimal::new(10000, 2));
/// // half a Saturday is half the base pay
/// assert_eq!(calculate_session_pay(Weekday::Sat, Decimal::new(35, 1), rate, &rules).unwrap(), Decimal::new(4500, 2));
/// // a rate near the Decimal limit is an error, not a panic
/// assert!(calculate_session_pay(Weekday::Sat, Decimal::new(8, 0), Decimal::MAX, &rules).is_err());
/// ```
pub fn calculate_session_pay(
    weekday: Weekday,
    duration_hours: Decimal,
    hourly_rate: Decimal,
    rules: &PayRules,
) -> EngineResult<Decimal> {
    if duration_hours.is_zero() || hourly_rate.is_zero() {
        return Ok(to_cents(Decimal::ZERO));
    }

    let base_hours = rules.base_hours(DayType::from_weekday(weekday));
    let pay = rules.base_pay(hourly_rate).and_then(|base_pay| {
        if duration_hours > base_hours {
            (duration_hours - base_hours)
                .checked_mul(hourly_rate)
                .and_then(|extra| base_pay.checked_add(extra))
        } else {
            // same as (duration / base_hours) * base_pay
            duration_hours
                .checked_mul(base_pay)
                .and_then(|scaled| scaled.checked_div(base_hours))
        }
    });

    pay.map(to_cents).ok_or(EngineError::PayOverflow {
        hours: duration_hours,
        rate: hourly_rate,
    })
}

/// Prices a reconciled session and records how the amount was reached.
pub fn price_session(
    session: &WorkSession,
    hourly_rate: Decimal,
    rules: &PayRules,
    step_number: u32,
) -> EngineResult<SessionPayResult> {
    let hours = session.duration_hours;
    let day_type = get_day_type(session.date);
    let base_hours = rules.base_hours(day_type);
    let amount = calculate_session_pay(session.day_of_week(), hours, hourly_rate, rules)?;
    let base_pay = rules.base_pay(hourly_rate).ok_or(EngineError::PayOverflow {
        hours,
        rate: hourly_rate,
    })?;

    let (rule_id, rule_name, reasoning) = if hours > base_hours {
        (
            "base_plus_extra_hours",
            "Base Pay Plus Extra Hours",
            format!(
                "{} base: ${} + ({} - {}) hours × ${} = ${}",
                day_type,
                base_pay.normalize(),
                hours.normalize(),
                base_hours.normalize(),
                hourly_rate.normalize(),
                amount
            ),
        )
    } else {
        (
            "prorated_base_pay",
            "Prorated Base Pay",
            format!(
                "{} base: {} / {} hours × ${} = ${}",
                day_type,
                hours.normalize(),
                base_hours.normalize(),
                base_pay.normalize(),
                amount
            ),
        )
    };

    let pay_line = SessionPayLine {
        date: session.date,
        start: session.start,
        end: session.end,
        day_type,
        hours,
        base_hours,
        hourly_rate,
        amount,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "date": session.date.to_string(),
            "hours": hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "day_type": day_type.to_string()
        }),
        output: serde_json::json!({
            "base_hours": base_hours.normalize().to_string(),
            "base_pay": base_pay.normalize().to_string(),
            "amount": amount.to_string()
        }),
        reasoning,
    };

    Ok(SessionPayResult {
        pay_line,
        audit_step,
    })
}

/// Rejects a negative hourly rate.
pub fn validate_hourly_rate(subject: &str, rate: Decimal) -> EngineResult<Decimal> {
    if rate < Decimal::ZERO {
        return Err(EngineError::InvalidRate {
            subject: subject.to_string(),
            rate,
        });
    }
    Ok(rate)
}

/// Rejects a negative duration.
pub fn validate_duration(hours: Decimal) -> EngineResult<Decimal> {
    if hours < Decimal::ZERO {
        return Err(EngineError::InvalidDuration { hours });
    }
    Ok(hours)
}

/// Rounds to cents and always shows two decimal places.
fn to_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    rounded
}
