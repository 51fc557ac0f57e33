//! Recurrence rules.
//!
//! A rule is stored on a task as a short string:
//! - `""` — no recurrence
//! - `"y"` — every year on the same month/day
//! - `"d <n>"` — every `n` days, `n` in `1..=400`
//!
//! Two independent checks exist. [`validate_rule`] is the storage-time gate
//! and accepts any positive day count. [`RepeatRule::parse`] is the grammar
//! used by the resolver and additionally enforces the 400-day cap, so a rule
//! such as `"d 500"` can be stored but cannot be resolved.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MAX_DAY_INTERVAL;
use crate::error::RuleError;

static DAY_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^d 0*[1-9][0-9]*$").expect("valid day rule regex"));
static YEAR_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^y$").expect("valid year rule regex"));

/// Check that a rule string is acceptable for storage on a task.
///
/// The empty rule is valid. The day count is only required to be positive.
pub fn validate_rule(rule: &str) -> Result<(), RuleError> {
    if rule.is_empty() || DAY_RULE_RE.is_match(rule) || YEAR_RULE_RE.is_match(rule) {
        return Ok(());
    }

    Err(RuleError::InvalidRule(rule.to_string()))
}

/// A parsed, non-empty recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatRule {
    /// `d <n>`
    EveryDays(u32),
    /// `y`
    Yearly,
}

impl RepeatRule {
    /// Parse a rule with the resolver's grammar.
    ///
    /// The rule is split on single spaces into a verb and an optional operand.
    pub fn parse(rule: &str) -> Result<Self, RuleError> {
        if rule.is_empty() {
            return Err(RuleError::RuleRequired);
        }

        let parts: Vec<&str> = rule.split(' ').collect();

        match parts[0] {
            "d" => {
                let [_, count] = parts[..] else {
                    return Err(RuleError::InvalidRuleFormat(rule.to_string()));
                };

                let days = count
                    .parse::<u32>()
                    .ok()
                    .filter(|days| (1..=MAX_DAY_INTERVAL).contains(days))
                    .ok_or_else(|| RuleError::InvalidDayCount(count.to_string()))?;

                Ok(RepeatRule::EveryDays(days))
            }
            "y" => {
                if parts.len() != 1 {
                    return Err(RuleError::InvalidRuleFormat(rule.to_string()));
                }
                Ok(RepeatRule::Yearly)
            }
            "" => Err(RuleError::InvalidRuleFormat(rule.to_string())),
            verb => Err(RuleError::UnsupportedRule(verb.to_string())),
        }
    }
}
