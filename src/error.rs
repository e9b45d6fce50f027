use serde::Serialize;
use thiserror::Error;

/// Which part of a folder or file name was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    MissingSeparator,
    MissingStudentNumber,
    MissingName,
    MissingSurname,
    FolderSegments,
    FileSegments,
}

impl MalformedReason {
    pub fn describe(self) -> &'static str {
        match self {
            MalformedReason::MissingSeparator => "no '-' separator",
            MalformedReason::MissingStudentNumber => "student number is empty",
            MalformedReason::MissingName => "name block is empty",
            MalformedReason::MissingSurname => "name block has a single token",
            MalformedReason::FolderSegments => "folder name needs <first>-<last>",
            MalformedReason::FileSegments => "file name needs <anything>-<studentNumber>.pdf",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed identity {raw:?}: {}", .reason.describe())]
pub struct MalformedIdentityError {
    pub raw: String,
    pub reason: MalformedReason,
}

impl MalformedIdentityError {
    pub fn new(raw: impl Into<String>, reason: MalformedReason) -> Self {
        Self {
            raw: raw.into(),
            reason,
        }
    }
}
