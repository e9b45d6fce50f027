use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::archive::ArchiveEntry;
use crate::error::MalformedIdentityError;
use crate::identity::{parse_identity, NamingConvention, StudentIdentity};
use crate::submission::{SubmissionRecord, SubmissionStatus};

const PDF_SUFFIX: &str = ".pdf";

#[derive(Debug, Clone, PartialEq)]
pub enum BatchAction {
    Create {
        identity: StudentIdentity,
        folder_name: String,
        file_name: String,
        pdf_bytes: Vec<u8>,
    },
    Update {
        submission_id: i64,
        identity: StudentIdentity,
        folder_name: String,
        file_name: String,
        pdf_bytes: Vec<u8>,
    },
}

impl BatchAction {
    pub fn kind(&self) -> &'static str {
        match self {
            BatchAction::Create { .. } => "create",
            BatchAction::Update { .. } => "update",
        }
    }

    pub fn identity(&self) -> &StudentIdentity {
        match self {
            BatchAction::Create { identity, .. } | BatchAction::Update { identity, .. } => identity,
        }
    }

    pub fn folder_name(&self) -> &str {
        match self {
            BatchAction::Create { folder_name, .. } | BatchAction::Update { folder_name, .. } => {
                folder_name
            }
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            BatchAction::Create { file_name, .. } | BatchAction::Update { file_name, .. } => {
                file_name
            }
        }
    }

    pub fn pdf_bytes(&self) -> &[u8] {
        match self {
            BatchAction::Create { pdf_bytes, .. } | BatchAction::Update { pdf_bytes, .. } => {
                pdf_bytes
            }
        }
    }

    pub fn submission_id(&self) -> Option<i64> {
        match self {
            BatchAction::Create { .. } => None,
            BatchAction::Update { submission_id, .. } => Some(*submission_id),
        }
    }

    /// The record to store for this action. Both creates and updates carry a
    /// fresh script, so the record is unmarked.
    pub fn to_submission_record(&self) -> SubmissionRecord {
        let identity = self.identity();
        SubmissionRecord {
            submission_id: self.submission_id(),
            student_number: identity.student_number.clone(),
            student_name: identity.first_name.clone(),
            student_surname: identity.last_name.clone(),
            mark: None,
            status: SubmissionStatus::Unmarked,
            folder_name: self.folder_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub entry: ArchiveEntry,
    pub error: MalformedIdentityError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchPlan {
    pub actions: Vec<BatchAction>,
    pub failures: Vec<BatchFailure>,
}

impl BatchPlan {
    pub fn create_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| matches!(a, BatchAction::Create { .. }))
            .count()
    }

    pub fn update_count(&self) -> usize {
        self.actions.len() - self.create_count()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Splits `folder/.../file.pdf` into its folder and file names. Anything that
/// is not a PDF inside a folder is not a submission.
fn submission_path(path: &str) -> Option<(&str, &str)> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 {
        return None;
    }
    let file_name = segments[segments.len() - 1];
    if !file_name.ends_with(PDF_SUFFIX) {
        return None;
    }
    Some((segments[0], file_name))
}

/// Turns archive entries into create/update actions against the submissions
/// already stored for the assessment. Entries whose names cannot be parsed
/// are collected in `failures` and do not stop the rest of the batch.
pub fn plan_batch<I>(
    entries: I,
    convention: NamingConvention,
    existing: &[SubmissionRecord],
) -> BatchPlan
where
    I: IntoIterator<Item = ArchiveEntry>,
{
    let mut by_number: HashMap<&str, i64> = HashMap::new();
    for rec in existing {
        if let Some(id) = rec.submission_id {
            by_number.entry(rec.student_number.as_str()).or_insert(id);
        }
    }

    let mut plan = BatchPlan::default();
    for entry in entries {
        let Some((folder_name, file_name)) = submission_path(&entry.path) else {
            debug!(path = %entry.path, "skipping non-submission archive entry");
            continue;
        };
        let folder_name = folder_name.to_string();
        let file_name = file_name.to_string();

        let identity = match parse_identity(convention, &folder_name, &file_name) {
            Ok(v) => v,
            Err(error) => {
                warn!(path = %entry.path, %error, "could not read student identity");
                plan.failures.push(BatchFailure { entry, error });
                continue;
            }
        };

        let pdf_bytes = entry.bytes;
        let action = match by_number.get(identity.student_number.as_str()) {
            Some(&submission_id) => BatchAction::Update {
                submission_id,
                identity,
                folder_name,
                file_name,
                pdf_bytes,
            },
            None => BatchAction::Create {
                identity,
                folder_name,
                file_name,
                pdf_bytes,
            },
        };
        plan.actions.push(action);
    }

    info!(
        convention = %convention,
        creates = plan.create_count(),
        updates = plan.update_count(),
        failures = plan.failures.len(),
        "planned submission batch"
    );
    plan
}
