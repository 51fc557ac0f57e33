//! Next-occurrence resolution for recurring tasks.
//!
//! [`next_date`] is pure: `now` is always supplied by the caller and the same
//! inputs always give the same output or the same error.

use chrono::{Days, NaiveDate};

use crate::date::{format_compact, in_compact_range, CalendarDay};
use crate::error::RuleError;
use crate::rule::RepeatRule;

/// Compute the next date a task anchored at `anchor` recurs on, relative to `now`.
///
/// `anchor` is a compact `YYYYMMDD` string and `rule` a non-empty recurrence
/// rule. The result is strictly after `now`, except for the day rule when the
/// anchor already is `now`.
pub fn next_date(now: NaiveDate, anchor: &str, rule: &str) -> Result<String, RuleError> {
    let anchor_day = CalendarDay::parse(anchor)?;
    let rule = RepeatRule::parse(rule)?;

    let next = match rule {
        RepeatRule::EveryDays(days) => {
            // Special case for day rules only: a task due today stays due today
            // rather than jumping `days` ahead.
            if anchor == format_compact(now) {
                return Ok(anchor.to_string());
            }

            let start = anchor_day
                .to_date()
                .ok_or_else(|| RuleError::InvalidDateFormat(anchor.to_string()))?;
            advance_days(now, start, days)?
        }
        RepeatRule::Yearly => advance_years(now, anchor_day)?,
    };

    if !in_compact_range(next) {
        return Err(RuleError::DateOutOfRange);
    }

    Ok(format_compact(next))
}

/// Step `start` forward by `days` (at least once) until it is after `now`.
fn advance_days(now: NaiveDate, start: NaiveDate, days: u32) -> Result<NaiveDate, RuleError> {
    let days = u64::from(days);

    // Closed form of the stepping loop; `days >= 1` so it always advances.
    let steps = if start < now {
        (now - start).num_days().unsigned_abs() / days + 1
    } else {
        1
    };

    start
        .checked_add_days(Days::new(steps * days))
        .ok_or(RuleError::DateOutOfRange)
}

/// Step the anchor forward a year at a time (at least once) until it is after `now`.
///
/// The anchor keeps its month/day on every step. Only the final candidate is
/// corrected when it names February 29 of a non-leap year.
fn advance_years(now: NaiveDate, anchor: CalendarDay) -> Result<NaiveDate, RuleError> {
    let today = CalendarDay::from_date(now);

    // No candidate before `now`'s year can be after `now`.
    let mut candidate = anchor.with_year((anchor.year + 1).max(today.year));
    if candidate <= today {
        candidate = candidate.with_year(candidate.year + 1);
    }

    candidate.to_date().ok_or(RuleError::DateOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_compact;

    fn date(text: &str) -> NaiveDate {
        parse_compact(text).unwrap()
    }

    fn next(now: &str, anchor: &str, rule: &str) -> Result<String, RuleError> {
        next_date(date(now), anchor, rule)
    }

    // --- day rule ---

    #[test]
    fn day_rule_anchor_today_is_unchanged() {
        assert_eq!(next("20240126", "20240126", "d 1").unwrap(), "20240126");
        assert_eq!(next("20240126", "20240126", "d 30").unwrap(), "20240126");
    }

    #[test]
    fn day_rule_steps_past_now() {
        assert_eq!(next("20240126", "20240113", "d 7").unwrap(), "20240127");
    }

    #[test]
    fn day_rule_lands_exactly_on_now_then_moves_on() {
        // 20240119 + 7 = 20240126, which is not after now
        assert_eq!(next("20240126", "20240119", "d 7").unwrap(), "20240202");
    }

    #[test]
    fn day_rule_future_anchor_still_advances_once() {
        assert_eq!(next("20240126", "20240201", "d 7").unwrap(), "20240208");
    }

    #[test]
    fn day_rule_crosses_year_and_leap_day() {
        assert_eq!(next("20240228", "20231231", "d 60").unwrap(), "20240229");
        assert_eq!(next("20241231", "20241220", "d 20").unwrap(), "20250109");
    }

    #[test]
    fn day_rule_far_past_anchor() {
        assert_eq!(next("20240126", "00010101", "d 400").unwrap(), {
            let start = date("00010101");
            let steps = (date("20240126") - start).num_days() / 400 + 1;
            format_compact(start + Days::new((steps * 400) as u64))
        });
    }

    #[test]
    fn day_rule_result_is_after_now_for_every_interval() {
        let now = date("20240126");
        for anchor in ["20200101", "20240125", "20240127", "20230615"] {
            for days in 1..=400 {
                let result = next_date(now, anchor, &format!("d {days}")).unwrap();
                assert!(date(&result) > now, "{anchor} d {days} -> {result}");
            }
        }
    }

    #[test]
    fn day_rule_floating_leap_day_normalizes() {
        assert_eq!(next("20230301", "20230229", "d 1").unwrap(), "20230302");
    }

    #[test]
    fn day_rule_bounds() {
        assert_eq!(next("20240126", "20240101", "d 400").unwrap(), "20250204");
        assert!(matches!(next("20240126", "20240101", "d 401"), Err(RuleError::InvalidDayCount(_))));
        assert!(matches!(next("20240126", "20240101", "d 0"), Err(RuleError::InvalidDayCount(_))));
    }

    // --- year rule ---

    #[test]
    fn year_rule_next_year_after_now() {
        assert_eq!(next("20240228", "20230301", "y").unwrap(), "20240301");
    }

    #[test]
    fn year_rule_floating_leap_day_lands_on_leap_year() {
        assert_eq!(next("20240101", "20230229", "y").unwrap(), "20240229");
    }

    #[test]
    fn year_rule_feb_28_needs_no_correction() {
        assert_eq!(next("20240101", "20230228", "y").unwrap(), "20240228");
    }

    #[test]
    fn year_rule_leap_day_into_non_leap_year_becomes_march_first() {
        assert_eq!(next("20240301", "20240229", "y").unwrap(), "20250301");
    }

    #[test]
    fn year_rule_leap_day_does_not_drift() {
        assert_eq!(next("20280101", "20000229", "y").unwrap(), "20280229");
    }

    #[test]
    fn year_rule_leap_day_across_century_year() {
        // 2100 is not a leap year, 2104 is.
        assert_eq!(next("21000101", "20960229", "y").unwrap(), "21000301");
        assert_eq!(next("21040101", "20960229", "y").unwrap(), "21040229");
    }

    #[test]
    fn year_rule_anchor_today_advances() {
        assert_eq!(next("20240126", "20240126", "y").unwrap(), "20250126");
    }

    #[test]
    fn year_rule_future_anchor_advances_once() {
        assert_eq!(next("20240101", "20250601", "y").unwrap(), "20260601");
    }

    #[test]
    fn year_rule_keeps_month_and_day() {
        let now = date("20240126");
        for anchor in ["19991231", "20240126", "20240127", "20100715", "20400101"] {
            let result = next_date(now, anchor, "y").unwrap();
            assert!(date(&result) > now);
            assert_eq!(&result[4..], &anchor[4..]);
        }
    }

    #[test]
    fn year_rule_past_last_compact_year() {
        assert_eq!(next("99991231", "99990101", "y"), Err(RuleError::DateOutOfRange));
    }

    // --- errors ---

    #[test]
    fn bad_anchor_date() {
        assert!(matches!(next("20240126", "2024-01-26", "d 1"), Err(RuleError::InvalidDateFormat(_))));
        assert!(matches!(next("20240126", "", "y"), Err(RuleError::InvalidDateFormat(_))));
        assert!(matches!(next("20240126", "20240230", "y"), Err(RuleError::InvalidDateFormat(_))));
    }

    #[test]
    fn empty_rule_is_required() {
        assert_eq!(next("20240126", "20240126", ""), Err(RuleError::RuleRequired));
    }

    #[test]
    fn malformed_rules() {
        assert!(matches!(next("20240126", "20240101", "d"), Err(RuleError::InvalidRuleFormat(_))));
        assert!(matches!(next("20240126", "20240101", "y 5"), Err(RuleError::InvalidRuleFormat(_))));
        assert!(matches!(next("20240126", "20240101", "w 1"), Err(RuleError::UnsupportedRule(_))));
        assert!(matches!(next("20240126", "20240101", "k 34"), Err(RuleError::UnsupportedRule(_))));
    }

    #[test]
    fn anchor_checked_before_rule() {
        assert!(matches!(next("20240126", "bad", ""), Err(RuleError::InvalidDateFormat(_))));
    }
}
