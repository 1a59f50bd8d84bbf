//! Four-pillar validation
//!
//! Validation never raises an error: a well-formed selection that violates a
//! calendar rule comes back as a [`ValidationReport`] carrying one
//! [`RuleViolation`] per broken rule, so a host can show the report and let
//! the user correct the selection.

use crate::cycle::{expected_hour_stem, expected_month_stem};
use crate::pairing::is_polarity_matched;
use crate::pillars::{FourPillars, PillarPosition};

/// The rule a violation was raised under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Exactly one of stem/branch selected at a position
    Incomplete,
    /// Stem and branch polarities differ within one pillar
    PolarityPairing,
    /// Month stem does not follow the year stem
    MonthCycle,
    /// Hour stem does not follow the day stem
    HourCycle,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::Incomplete => write!(f, "incomplete"),
            RuleKind::PolarityPairing => write!(f, "polarity-pairing"),
            RuleKind::MonthCycle => write!(f, "month-cycle"),
            RuleKind::HourCycle => write!(f, "hour-cycle"),
        }
    }
}

/// A single broken rule at a single position
#[derive(Debug, Clone, PartialEq)]
pub struct RuleViolation {
    pub position: PillarPosition,
    pub rule: RuleKind,
    pub message: String,
}

/// Validation results for one four-pillar selection
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub violations: Vec<RuleViolation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Offending positions, deduplicated, in first-reported order
    pub fn positions(&self) -> Vec<PillarPosition> {
        let mut positions = Vec::new();
        for violation in &self.violations {
            if !positions.contains(&violation.position) {
                positions.push(violation.position);
            }
        }
        positions
    }

    pub fn count_of(&self, rule: RuleKind) -> usize {
        self.violations.iter().filter(|v| v.rule == rule).count()
    }

    /// One human-readable multi-line message covering every violation.
    ///
    /// Falls back to naming the offending positions when no violation
    /// carries its own description.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return "four pillars are consistent".to_string();
        }

        let details: Vec<&str> = self
            .violations
            .iter()
            .map(|violation| violation.message.as_str())
            .filter(|message| !message.is_empty())
            .collect();

        if details.is_empty() {
            let positions: Vec<String> = self
                .positions()
                .iter()
                .map(|position| position.to_string())
                .collect();
            return format!(
                "selection violates the sexagenary rules; check the {} pillar(s)",
                positions.join(", ")
            );
        }

        let mut summary = String::from("selection violates the sexagenary rules:\n");
        summary.push_str(&details.join("\n"));
        summary
    }

    fn push(&mut self, position: PillarPosition, rule: RuleKind, message: String) {
        self.violations.push(RuleViolation {
            position,
            rule,
            message,
        });
    }
}

/// Validate a four-pillar selection against the traditional rules.
///
/// Checks run in order: completeness, per-pillar polarity pairing, month
/// stem against year stem, hour stem against day stem. An incomplete pillar
/// aborts the rule checks for the whole set, since they are meaningless on a
/// half-made selection. Within the rule phase every failure is collected;
/// nothing short-circuits.
///
/// Empty pillars are not violations: an absent claim cannot break a rule.
/// The cycle checks only run when both the anchor pillar (year, day) and the
/// dependent pillar (month, hour) are complete.
pub fn validate(pillars: &FourPillars) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (position, pillar) in pillars.iter() {
        if pillar.is_partial() {
            let missing = if pillar.stem.is_some() { "branch" } else { "stem" };
            report.push(
                position,
                RuleKind::Incomplete,
                format!("{position} pillar is incomplete: no {missing} selected"),
            );
        }
    }
    if !report.is_valid() {
        return report;
    }

    for (position, pillar) in pillars.iter() {
        if let (Some(stem), Some(branch)) = (pillar.stem, pillar.branch) {
            if !is_polarity_matched(stem, branch) {
                report.push(
                    position,
                    RuleKind::PolarityPairing,
                    format!(
                        "{position} pillar {stem}{branch}: a {} stem cannot pair a {} branch",
                        stem.polarity(),
                        branch.polarity()
                    ),
                );
            }
        }
    }

    // After the completeness gate every pillar is either empty or complete,
    // so a present anchor stem implies a complete anchor pillar.
    if let (Some(year_stem), Some((month_stem, month_branch))) = (
        pillars.year.stem,
        pillars.month.stem.zip(pillars.month.branch),
    ) {
        let expected = expected_month_stem(year_stem, month_branch);
        if month_stem != expected {
            report.push(
                PillarPosition::Month,
                RuleKind::MonthCycle,
                format!(
                    "month pillar {month_stem}{month_branch} does not follow year stem \
                     {year_stem}; expected {expected}{month_branch}"
                ),
            );
        }
    }

    if let (Some(day_stem), Some((hour_stem, hour_branch))) =
        (pillars.day.stem, pillars.hour.stem.zip(pillars.hour.branch))
    {
        let expected = expected_hour_stem(day_stem, hour_branch);
        if hour_stem != expected {
            report.push(
                PillarPosition::Hour,
                RuleKind::HourCycle,
                format!(
                    "hour pillar {hour_stem}{hour_branch} does not follow day stem \
                     {day_stem}; expected {expected}{hour_branch}"
                ),
            );
        }
    }

    report
}
