use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result of parsing one resume: detected skills plus total experience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub skills: Vec<String>,
    pub total_experience_years: f64,
}

/// An employment span extracted from text. Invariant: `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns `None` when the range would be inverted.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (end >= start).then_some(Self { start, end })
    }

    pub fn days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }
}

/// One job requirement matched against a candidate's skill set.
/// `matched` is `None` when the corpus offered nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    pub requirement: String,
    pub matched: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<SkillMatch>,
}

impl MatchReport {
    pub fn matched_count(&self) -> usize {
        self.matches.iter().filter(|m| m.matched.is_some()).count()
    }
}
