//! Interval-union over extracted date ranges.

use crate::models::DateRange;

/// Merges overlapping and touching ranges into maximal contiguous spans.
///
/// Output is pairwise non-overlapping and sorted ascending by start. The
/// boundary is inclusive: a job ending the day another starts counts as
/// continuous employment.
pub fn merge(mut ranges: Vec<DateRange>) -> Vec<DateRange> {
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<DateRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                if range.end > last.end {
                    last.end = range.end;
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Total experience in years: merged day-spans divided by 365.25, rounded
/// to one decimal. Empty input yields 0.0.
pub fn total_years(ranges: Vec<DateRange>) -> f64 {
    let days: i64 = merge(ranges).iter().map(|r| r.days()).sum();
    (days as f64 / 365.25 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn r(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn empty_input_yields_zero() {
        assert_eq!(total_years(Vec::new()), 0.0);
        assert!(merge(Vec::new()).is_empty());
    }

    #[test]
    fn overlapping_ranges_collapse() {
        let merged = merge(vec![
            r((2018, 1, 1), (2019, 12, 1)),
            r((2019, 2, 1), (2020, 6, 1)),
        ]);
        assert_eq!(merged, vec![r((2018, 1, 1), (2020, 6, 1))]);
    }

    #[test]
    fn touching_ranges_count_as_continuous() {
        let merged = merge(vec![
            r((2018, 1, 1), (2019, 1, 1)),
            r((2019, 1, 1), (2020, 1, 1)),
        ]);
        assert_eq!(merged, vec![r((2018, 1, 1), (2020, 1, 1))]);
    }

    #[test]
    fn disjoint_ranges_stay_separate() {
        let merged = merge(vec![
            r((2020, 6, 1), (2021, 1, 1)),
            r((2018, 1, 1), (2019, 1, 1)),
        ]);
        assert_eq!(
            merged,
            vec![r((2018, 1, 1), (2019, 1, 1)), r((2020, 6, 1), (2021, 1, 1))]
        );
    }

    #[test]
    fn nested_ranges_are_absorbed() {
        let merged = merge(vec![
            r((2018, 1, 1), (2022, 1, 1)),
            r((2019, 1, 1), (2020, 1, 1)),
        ]);
        assert_eq!(merged, vec![r((2018, 1, 1), (2022, 1, 1))]);
    }

    #[test]
    fn merging_is_idempotent() {
        let input = vec![
            r((2018, 1, 1), (2019, 6, 1)),
            r((2019, 1, 1), (2020, 1, 1)),
            r((2021, 1, 1), (2021, 6, 1)),
        ];
        let once = merge(input);
        let twice = merge(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn merging_is_order_independent() {
        let a = vec![
            r((2018, 1, 1), (2019, 6, 1)),
            r((2019, 1, 1), (2020, 1, 1)),
            r((2021, 1, 1), (2021, 6, 1)),
        ];
        let mut b = a.clone();
        b.reverse();
        let c = vec![a[1], a[2], a[0]];

        let expected = total_years(a.clone());
        assert_eq!(total_years(b), expected);
        assert_eq!(total_years(c), expected);
        assert_eq!(expected, 2.4);
    }

    #[test]
    fn one_year_rounds_to_one_decimal() {
        // 365 days / 365.25 = 0.99931... -> 1.0
        assert_eq!(total_years(vec![r((2019, 1, 1), (2020, 1, 1))]), 1.0);
    }
}
