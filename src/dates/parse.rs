//! Permissive calendar-date parsing for range fragments.
//!
//! Fragments are whatever the range regex captured ("Jan 2018", "03/2021",
//! "Present"). Fields absent from a fragment default to the 1900-01-01
//! epoch, matching how partial dates like a bare year are conventionally
//! anchored. Anything unrecognizable parses to `None` and the caller drops
//! the candidate range.

use chrono::NaiveDate;

/// Words meaning employment continues through today.
const OPEN_ENDED: [&str; 3] = ["present", "current", "now"];

const MONTHS: [(&str, u32); 12] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

/// Parses one date fragment. Open-ended tokens resolve to `today`; a parse
/// failure returns `None`, never an error.
pub fn parse_fragment(fragment: &str, today: NaiveDate) -> Option<NaiveDate> {
    let frag = fragment.trim().trim_end_matches(['.', ',']).trim();
    if frag.is_empty() {
        return None;
    }

    if OPEN_ENDED.contains(&frag.to_lowercase().as_str()) {
        return Some(today);
    }

    parse_numeric(frag).or_else(|| parse_tokens(frag))
}

/// `mm/yyyy`, `mm.yyyy` and `mm/dd/yyyy` numeric forms.
fn parse_numeric(frag: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = frag.split(['/', '.']).collect();
    if parts.len() < 2 || !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    match parts[..] {
        [m, y] => {
            let month: u32 = m.parse().ok()?;
            NaiveDate::from_ymd_opt(year_from_digits(y)?, month, 1)
        }
        [m, d, y] => {
            let month: u32 = m.parse().ok()?;
            let day: u32 = d.parse().ok()?;
            NaiveDate::from_ymd_opt(year_from_digits(y)?, month, day)
        }
        _ => None,
    }
}

fn year_from_digits(y: &str) -> Option<i32> {
    let n: i32 = y.parse().ok()?;
    match y.len() {
        4 => Some(n),
        2 => Some(if n < 32 { 2000 + n } else { 1900 + n }),
        _ => None,
    }
}

/// Word-by-word scan: month names, 4-digit years, 2-digit years >= 32
/// (anchored to 19xx), day numbers <= 31. Any unrecognized word makes the
/// whole fragment unparseable.
fn parse_tokens(frag: &str) -> Option<NaiveDate> {
    let (mut year, mut month, mut day) = (1900i32, 1u32, 1u32);
    let (mut seen_year, mut seen_month, mut seen_day) = (false, false, false);

    for token in frag.split([' ', '\t', ',']) {
        let token = token.trim().trim_end_matches('.');
        if token.is_empty() {
            continue;
        }

        if let Some(m) = month_from_name(token) {
            month = m;
            seen_month = true;
        } else if token.chars().all(|c| c.is_ascii_digit()) {
            let n: u32 = token.parse().ok()?;
            if token.len() == 4 {
                year = n as i32;
                seen_year = true;
            } else if (32..=99).contains(&n) {
                year = 1900 + n as i32;
                seen_year = true;
            } else if (1..=31).contains(&n) && !seen_day {
                day = n;
                seen_day = true;
            } else {
                return None;
            }
        } else {
            return None;
        }
    }

    if !(seen_year || seen_month || seen_day) {
        return None;
    }

    // from_ymd_opt rejects impossible combinations like Feb 30.
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Full names and 3+ letter prefixes, optionally dotted ("Sept.").
fn month_from_name(token: &str) -> Option<u32> {
    let t = token.to_lowercase();
    if t.len() < 3 || !t.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    MONTHS
        .iter()
        .find(|(name, _)| name.starts_with(&t))
        .map(|(_, m)| *m)
}
