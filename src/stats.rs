use serde::Serialize;

use crate::submission::SubmissionRecord;

/// Rounds to 2 decimals, halves away from zero.
///
/// Works on the shortest decimal form of `x`, so `1.005` rounds to `1.01`
/// even though the nearest `f64` sits just below it.
pub fn round_2dp(x: f64) -> f64 {
    if !x.is_finite() || x.abs() >= 1e15 {
        return (x * 100.0).round() / 100.0;
    }
    let digits = x.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((&digits, ""));
    let Ok(whole) = int_part.parse::<i64>() else {
        return (x * 100.0).round() / 100.0;
    };

    let frac = frac_part.as_bytes();
    let digit = |i: usize| frac.get(i).map_or(0, |b| i64::from(b - b'0'));
    let mut cents = whole * 100 + digit(0) * 10 + digit(1);
    if digit(2) >= 5 {
        cents += 1;
    }
    (cents as f64 / 100.0).copysign(x)
}

/// Summary of a mark sample. Every field is `None` when there was nothing to
/// summarize.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkSummary {
    pub count: usize,
    pub average: Option<f64>,
    pub median: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl MarkSummary {
    pub const NO_DATA: MarkSummary = MarkSummary {
        count: 0,
        average: None,
        median: None,
        min: None,
        max: None,
    };

    pub fn is_no_data(&self) -> bool {
        self.count == 0
    }

    /// Summarizes the marks that are set; unmarked submissions are skipped.
    pub fn from_submissions(records: &[SubmissionRecord]) -> MarkSummary {
        let marks: Vec<f64> = records.iter().filter_map(|r| r.mark).collect();
        summarize(&marks)
    }
}

pub fn summarize(marks: &[f64]) -> MarkSummary {
    if marks.is_empty() {
        return MarkSummary::NO_DATA;
    }

    let mut sorted = marks.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    // Sum in sorted order so the mean does not depend on input order.
    let total: f64 = sorted.iter().sum();
    let n = sorted.len();
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[(n / 2) - 1] + sorted[n / 2]) / 2.0
    };

    MarkSummary {
        count: n,
        average: Some(round_2dp(total / n as f64)),
        median: Some(round_2dp(median)),
        min: Some(round_2dp(sorted[0])),
        max: Some(round_2dp(sorted[n - 1])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::SubmissionStatus;

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_2dp(0.0), 0.0);
        assert_eq!(round_2dp(66.666), 66.67);
        assert_eq!(round_2dp(12.125), 12.13);
        assert_eq!(round_2dp(-12.125), -12.13);
        assert_eq!(round_2dp(40.0), 40.0);
    }

    #[test]
    fn decimal_halves_round_up() {
        assert_eq!(round_2dp(1.005), 1.01);
        assert_eq!(round_2dp(-1.005), -1.01);
        assert_eq!(round_2dp(2.675), 2.68);
        assert_eq!(round_2dp(1.004), 1.0);
        assert_eq!(round_2dp(99.995), 100.0);
        assert_eq!(round_2dp(0.0001), 0.0);
    }

    #[test]
    fn median_between_close_marks_rounds_up() {
        let s = summarize(&[1.0, 1.01]);
        assert_eq!(s.median, Some(1.01));
        assert_eq!(s.average, Some(1.01));
    }

    #[test]
    fn empty_sample_is_no_data() {
        let s = summarize(&[]);
        assert!(s.is_no_data());
        assert_eq!(s, MarkSummary::NO_DATA);
        assert_eq!(s.average, None);
        assert_eq!(s.max, None);
    }

    #[test]
    fn single_mark_fills_every_field() {
        let s = summarize(&[57.456]);
        assert_eq!(s.count, 1);
        assert_eq!(s.average, Some(57.46));
        assert_eq!(s.median, Some(57.46));
        assert_eq!(s.min, Some(57.46));
        assert_eq!(s.max, Some(57.46));
    }

    #[test]
    fn even_and_odd_medians() {
        let s = summarize(&[90.0, 60.0, 80.0, 70.0]);
        assert_eq!(s.average, Some(75.0));
        assert_eq!(s.median, Some(75.0));
        assert_eq!(s.min, Some(60.0));
        assert_eq!(s.max, Some(90.0));

        let s = summarize(&[3.0, 1.0, 2.0]);
        assert_eq!(s.median, Some(2.0));
        assert_eq!(s.average, Some(2.0));
    }

    #[test]
    fn input_is_not_mutated() {
        let marks = vec![9.0, 1.0, 5.0];
        let _ = summarize(&marks);
        assert_eq!(marks, vec![9.0, 1.0, 5.0]);
    }

    #[test]
    fn from_submissions_skips_unset_marks() {
        let rec = |mark: Option<f64>| SubmissionRecord {
            student_number: "1".to_string(),
            mark,
            status: SubmissionStatus::Marked,
            ..SubmissionRecord::default()
        };
        let s = MarkSummary::from_submissions(&[rec(Some(50.0)), rec(None), rec(Some(70.0))]);
        assert_eq!(s.count, 2);
        assert_eq!(s.average, Some(60.0));

        let s = MarkSummary::from_submissions(&[rec(None)]);
        assert!(s.is_no_data());
    }
}
