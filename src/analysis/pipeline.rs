use chrono::NaiveDate;

use crate::dates::{total_years, DateRangeExtractor};
use crate::detect::SkillDetector;
use crate::error::Result;
use crate::models::ResumeProfile;
use crate::text::normalize;
use crate::vocabulary::SkillVocabulary;

/// Orchestrates the extraction pipeline: normalize once, then run skill
/// detection and date-range extraction over the same normalized text.
///
/// The two sub-pipelines are independent and share no mutable state; they
/// run in sequence here because both are cheap CPU passes.
pub struct ResumeParser {
    detector: SkillDetector,
    dates: DateRangeExtractor,
}

impl ResumeParser {
    /// Parser over the built-in vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(SkillVocabulary::with_default())
    }

    /// A non-empty seed replaces the built-in vocabulary entirely.
    pub fn with_vocabulary(vocabulary: SkillVocabulary) -> Self {
        Self {
            detector: SkillDetector::new(vocabulary),
            dates: DateRangeExtractor::new(),
        }
    }

    /// Pins "today" for open-ended ranges; production code uses the
    /// current date, tests a fixed one.
    pub fn with_today(vocabulary: SkillVocabulary, today: NaiveDate) -> Self {
        Self {
            detector: SkillDetector::new(vocabulary),
            dates: DateRangeExtractor::with_today(today),
        }
    }

    pub fn parse(&self, raw_text: &str) -> Result<ResumeProfile> {
        let text = normalize(raw_text);

        let skills = self.detector.detect(&text)?;
        tracing::info!("Detected {} skills", skills.len());

        let ranges = self.dates.extract(&text);
        tracing::info!("Extracted {} date ranges", ranges.len());
        let total_experience_years = total_years(ranges);

        Ok(ResumeProfile {
            skills,
            total_experience_years,
        })
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ResumeParser {
        ResumeParser::with_today(
            SkillVocabulary::with_default(),
            NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
        )
    }

    #[test]
    fn end_to_end_skills_and_overlapping_experience() {
        let text = "Skills: Python, Docker, Salesforce. \
                    Experience: Jan 2018 – Dec 2019, Feb 2019 to Present.";
        let profile = parser().parse(text).unwrap();

        assert!(profile.skills.contains(&"Python".to_string()));
        assert!(profile.skills.contains(&"Docker".to_string()));
        // "salesforce" is in the built-in vocabulary; the surface form
        // comes back as written in the text.
        assert!(profile.skills.contains(&"Salesforce".to_string()));

        // The ranges overlap in 2019 and merge into one span from Jan 2018
        // through the pinned evaluation date.
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let days = today.signed_duration_since(start).num_days() as f64;
        let expected = (days / 365.25 * 10.0).round() / 10.0;
        assert_eq!(profile.total_experience_years, expected);
    }

    #[test]
    fn messy_whitespace_is_normalized_before_extraction() {
        let profile = parser()
            .parse("Skills:\u{00A0}python,\t\tkafka  and redis")
            .unwrap();
        assert_eq!(profile.skills, vec!["kafka", "python", "redis"]);
        assert_eq!(profile.total_experience_years, 0.0);
    }

    #[test]
    fn custom_vocabulary_replaces_default() {
        let p = ResumeParser::with_vocabulary(SkillVocabulary::from_seed(["cobol"]));
        let profile = p.parse("COBOL and python").unwrap();
        assert_eq!(profile.skills, vec!["COBOL"]);
    }

    #[test]
    fn empty_text_yields_empty_profile() {
        let profile = parser().parse("").unwrap();
        assert!(profile.skills.is_empty());
        assert_eq!(profile.total_experience_years, 0.0);
    }
}
