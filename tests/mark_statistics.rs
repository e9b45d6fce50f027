use scriptmarkd::{round_2dp, summarize, MarkSummary};

#[test]
fn four_marks_summary() {
    let s = summarize(&[60.0, 70.0, 80.0, 90.0]);
    assert_eq!(s.count, 4);
    assert_eq!(s.average, Some(75.0));
    assert_eq!(s.median, Some(75.0));
    assert_eq!(s.min, Some(60.0));
    assert_eq!(s.max, Some(90.0));
}

#[test]
fn no_marks_is_no_data() {
    let s = summarize(&[]);
    assert_eq!(s, MarkSummary::NO_DATA);
    assert!(s.is_no_data());
}

#[test]
fn single_mark_is_every_statistic() {
    for x in [0.0, 49.5, 66.666, 100.0] {
        let s = summarize(&[x]);
        let r = Some(round_2dp(x));
        assert_eq!((s.average, s.median, s.min, s.max), (r, r, r, r));
    }
}

#[test]
fn order_does_not_matter() {
    let marks = vec![55.5, 12.25, 99.0, 70.0, 70.0, 33.3, 81.75];
    let base = summarize(&marks);

    let mut reversed = marks.clone();
    reversed.reverse();
    assert_eq!(summarize(&reversed), base);

    let rotated: Vec<f64> = marks[3..].iter().chain(marks[..3].iter()).copied().collect();
    assert_eq!(summarize(&rotated), base);

    assert_eq!(marks, vec![55.5, 12.25, 99.0, 70.0, 70.0, 33.3, 81.75]);
}

#[test]
fn fractional_marks_are_rounded() {
    let s = summarize(&[10.0, 20.0, 20.5]);
    assert_eq!(s.average, Some(16.83));
    assert_eq!(s.median, Some(20.0));
    assert_eq!(s.max, Some(20.5));
}

#[test]
fn halves_in_decimal_marks_round_up() {
    assert_eq!(round_2dp(1.005), 1.01);
    assert_eq!(round_2dp(72.345), 72.35);
    assert_eq!(summarize(&[1.0, 1.01]).median, Some(1.01));
}
