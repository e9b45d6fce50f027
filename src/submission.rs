use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Unmarked,
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    Marked,
}

/// A student's submission as known to the backend.
///
/// `submission_id` is unassigned until the backend has stored a new record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    #[serde(rename = "submissionID", default)]
    pub submission_id: Option<i64>,
    pub student_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub student_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub student_surname: String,
    #[serde(rename = "submissionMark", alias = "mark", default)]
    pub mark: Option<f64>,
    #[serde(rename = "submissionStatus", alias = "status", default)]
    pub status: SubmissionStatus,
    #[serde(
        rename = "submissionFolderName",
        alias = "folderName",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub folder_name: String,
}

/// The backend sends `null` for names it never captured.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
