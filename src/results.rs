use serde::Serialize;

use crate::submission::{SubmissionRecord, SubmissionStatus};

pub const RESULTS_CSV_HEADER: &str = "StudentNumber,StudentName,StudentSurname,SubmissionMark";

fn csv_quote(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn format_mark(mark: Option<f64>) -> String {
    match mark {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Results sheet sent to moderators and offered as a download.
pub fn results_csv(records: &[SubmissionRecord]) -> String {
    let mut out = String::from(RESULTS_CSV_HEADER);
    out.push('\n');
    let rows: Vec<String> = records
        .iter()
        .map(|r| {
            format!(
                "{},{},{},{}",
                csv_quote(&r.student_number),
                csv_quote(&r.student_name),
                csv_quote(&r.student_surname),
                format_mark(r.mark)
            )
        })
        .collect();
    out.push_str(&rows.join("\n"));
    out
}

pub fn search_submissions<'a>(
    records: &'a [SubmissionRecord],
    term: &str,
) -> Vec<&'a SubmissionRecord> {
    let needle = term.trim().to_lowercase();
    records
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.student_number.to_lowercase().contains(&needle)
                || r.student_surname.to_lowercase().contains(&needle)
                || r.student_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Marked submissions with a stored id; only these have an annotated script
/// to send.
pub fn publishable(records: &[SubmissionRecord]) -> Vec<&SubmissionRecord> {
    records
        .iter()
        .filter(|r| r.status == SubmissionStatus::Marked && r.submission_id.is_some())
        .collect()
}

pub fn student_email(student_number: &str, domain: &str) -> String {
    format!("s{}@{}", student_number, domain)
}

pub fn moderator_subject(module_code: &str, assessment_name: &str) -> String {
    format!("{} {} Results", module_code, assessment_name)
}

pub fn student_subject(assessment_name: &str) -> String {
    format!("{} Results", assessment_name)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    #[serde(rename = "submissionID")]
    pub submission_id: i64,
    pub student_number: String,
    pub email: String,
}

/// Who receives which script when results are published.
pub fn publish_recipients(records: &[SubmissionRecord], domain: &str) -> Vec<Recipient> {
    publishable(records)
        .into_iter()
        .filter_map(|r| {
            r.submission_id.map(|submission_id| Recipient {
                submission_id,
                student_number: r.student_number.clone(),
                email: student_email(&r.student_number, domain),
            })
        })
        .collect()
}
