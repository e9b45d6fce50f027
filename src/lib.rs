//! Submission ingest and marks statistics for the assessment marking
//! front-end, plus the JSON-lines sidecar that exposes them.

pub mod archive;
pub mod batch;
pub mod config;
pub mod error;
pub mod identity;
pub mod ipc;
pub mod logging;
pub mod progress;
pub mod results;
pub mod stats;
pub mod submission;

pub use archive::{read_archive_bytes, read_archive_file, ArchiveEntry};
pub use batch::{plan_batch, BatchAction, BatchFailure, BatchPlan};
pub use error::{MalformedIdentityError, MalformedReason};
pub use identity::{parse_identity, parse_moodle, parse_test_drive, NamingConvention, StudentIdentity};
pub use stats::{round_2dp, summarize, MarkSummary};
pub use submission::{SubmissionRecord, SubmissionStatus};
