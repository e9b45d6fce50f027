use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    #[serde(rename = "assessmentID")]
    pub assessment_id: i64,
    pub module_code: String,
    pub assessment_name: String,
    #[serde(default)]
    pub num_marked: u32,
    #[serde(default)]
    pub total_submissions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    Started,
    Half,
    Complete,
}

impl ProgressBand {
    /// Colour used by the dashboard ring.
    pub fn colour(self) -> &'static str {
        match self {
            ProgressBand::Complete => "green",
            ProgressBand::Half => "red",
            ProgressBand::Started => "orange",
        }
    }
}

fn ratio(num_marked: u32, total: u32) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(f64::from(num_marked) / f64::from(total) * 100.0)
    }
}

pub fn progress_percentage(num_marked: u32, total: u32) -> u32 {
    ratio(num_marked, total)
        .map(|p| p.round() as u32)
        .unwrap_or(0)
}

pub fn progress_band(num_marked: u32, total: u32) -> ProgressBand {
    match ratio(num_marked, total) {
        Some(p) if p >= 100.0 => ProgressBand::Complete,
        Some(p) if p >= 50.0 => ProgressBand::Half,
        _ => ProgressBand::Started,
    }
}

pub fn search_assessments<'a>(
    assessments: &'a [AssessmentSummary],
    term: &str,
) -> Vec<&'a AssessmentSummary> {
    let needle = term.trim().to_lowercase();
    assessments
        .iter()
        .filter(|a| {
            needle.is_empty()
                || a.assessment_name.to_lowercase().contains(&needle)
                || a.module_code.to_lowercase().contains(&needle)
        })
        .collect()
}
