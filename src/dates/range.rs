use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dates::parse::parse_fragment;
use crate::models::DateRange;

/// One date-shaped fragment: month name (full or abbreviated, optional day
/// and year), numeric `mm/yyyy` or `mm/dd/yyyy`, a bare 4-digit year, or an
/// open-ended token. Anchoring both sides of a range to this shape keeps
/// the non-greedy capture from swallowing surrounding prose.
const DATE_TOKEN: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?(?:\s+\d{1,2},?)?(?:\s+\d{2,4})?|\d{1,2}[/.]\d{2,4}(?:[/.]\d{2,4})?|\d{4}|present|current|now";

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b((?:{t}))\s*(?:-|–|—|\bto\b)\s*((?:{t}))\b",
        t = DATE_TOKEN
    ))
    .unwrap()
});

/// Finds "A – B" / "A to B" spans and parses both sides into calendar
/// dates. Unparseable or inverted pairs are dropped silently; redundant or
/// nested candidates are left for the interval merge to absorb.
///
/// Fragment parsing is memoized per distinct fragment string. "Today" is
/// fixed at construction so open-ended ranges are stable within one run.
pub struct DateRangeExtractor {
    today: NaiveDate,
    cache: Mutex<HashMap<String, Option<NaiveDate>>>,
}

impl DateRangeExtractor {
    pub fn new() -> Self {
        Self::with_today(Utc::now().date_naive())
    }

    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            today,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn extract(&self, text: &str) -> Vec<DateRange> {
        let mut ranges = Vec::new();

        for caps in RANGE_RE.captures_iter(text) {
            let (Some(left), Some(right)) = (caps.get(1), caps.get(2)) else {
                continue;
            };

            let start = self.parse_cached(left.as_str());
            let end = self.parse_cached(right.as_str());

            match (start, end) {
                (Some(start), Some(end)) => match DateRange::new(start, end) {
                    Some(range) => ranges.push(range),
                    None => {
                        tracing::debug!(
                            left = left.as_str(),
                            right = right.as_str(),
                            "dropping inverted date range"
                        );
                    }
                },
                _ => {
                    tracing::debug!(
                        left = left.as_str(),
                        right = right.as_str(),
                        "dropping unparseable date range"
                    );
                }
            }
        }

        ranges
    }

    fn parse_cached(&self, fragment: &str) -> Option<NaiveDate> {
        if let Ok(cache) = self.cache.lock() {
            if let Some(hit) = cache.get(fragment) {
                return *hit;
            }
        }

        let parsed = parse_fragment(fragment, self.today);

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(fragment.to_string(), parsed);
        }

        parsed
    }
}

impl Default for DateRangeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
