use crate::archive::{read_archive_file, ArchiveEntry};
use crate::batch::{plan_batch, BatchAction, BatchPlan};
use crate::ipc::error::{malformed_details, respond, HandlerErr};
use crate::ipc::helpers::{list, opt_path, req_convention, req_path};
use crate::ipc::types::{AppState, Request};
use crate::submission::SubmissionRecord;
use anyhow::Context;
use serde_json::json;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::info;

fn load_archive(zip_path: &Path) -> Result<Vec<ArchiveEntry>, HandlerErr> {
    read_archive_file(zip_path).map_err(|e| HandlerErr {
        code: "archive_failed",
        message: format!("failed to read archive {}", zip_path.to_string_lossy()),
        details: Some(json!({ "cause": format!("{e:#}") })),
    })
}

/// Output file name for an extracted script. Only the index and the
/// alphanumeric part of the student number make it to disk.
fn script_file_name(idx: usize, student_number: &str) -> String {
    let safe: String = student_number
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!("{:03}-{}.pdf", idx + 1, safe)
}

fn write_script(out_dir: &Path, idx: usize, action: &BatchAction) -> anyhow::Result<PathBuf> {
    let path = out_dir.join(script_file_name(idx, &action.identity().student_number));
    std::fs::write(&path, action.pdf_bytes())
        .with_context(|| format!("failed to write {}", path.to_string_lossy()))?;
    Ok(path)
}

fn action_json(action: &BatchAction, pdf_path: Option<&Path>) -> serde_json::Value {
    json!({
        "kind": action.kind(),
        "submissionID": action.submission_id(),
        "identity": action.identity(),
        "folderName": action.folder_name(),
        "fileName": action.file_name(),
        "pdfSize": action.pdf_bytes().len(),
        "pdfSha256": format!("{:x}", Sha256::digest(action.pdf_bytes())),
        "pdfPath": pdf_path.map(|p| p.to_string_lossy().to_string()),
        "record": action.to_submission_record(),
    })
}

fn plan_json(plan: &BatchPlan, out_dir: Option<&Path>) -> Result<serde_json::Value, HandlerErr> {
    let mut actions = Vec::with_capacity(plan.actions.len());
    for (idx, action) in plan.actions.iter().enumerate() {
        let pdf_path = match out_dir {
            Some(dir) => Some(
                write_script(dir, idx, action)
                    .map_err(|e| HandlerErr::io("failed to extract submission", e))?,
            ),
            None => None,
        };
        actions.push(action_json(action, pdf_path.as_deref()));
    }

    let failures: Vec<serde_json::Value> = plan
        .failures
        .iter()
        .map(|f| {
            json!({
                "path": f.entry.path,
                "code": "malformed_identity",
                "message": f.error.to_string(),
                "details": malformed_details(&f.error),
            })
        })
        .collect();

    Ok(json!({
        "actions": actions,
        "failures": failures,
        "createCount": plan.create_count(),
        "updateCount": plan.update_count(),
    }))
}

fn archive_list(req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let zip_path = req_path(&req.params, "zipPath")?;
    let entries = load_archive(&zip_path)?;
    let listed: Vec<serde_json::Value> = entries
        .iter()
        .map(|e| json!({ "path": e.path, "size": e.bytes.len() }))
        .collect();
    Ok(json!({ "entries": listed }))
}

fn batch_plan(req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let zip_path = req_path(&req.params, "zipPath")?;
    let convention = req_convention(&req.params)?;
    let existing: Vec<SubmissionRecord> = list(&req.params, "existing")?;
    let out_dir = opt_path(&req.params, "outDir");

    if let Some(dir) = out_dir.as_deref() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.to_string_lossy()))
            .map_err(|e| HandlerErr::io("failed to prepare output directory", e))?;
    }

    let entries = load_archive(&zip_path)?;
    let plan = plan_batch(entries, convention, &existing);
    if let Some(dir) = out_dir.as_deref() {
        info!(
            dir = %dir.to_string_lossy(),
            scripts = plan.actions.len(),
            "extracting submission scripts"
        );
    }
    plan_json(&plan, out_dir.as_deref())
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "archive.list" => Some(respond(&req.id, archive_list(req))),
        "batch.plan" => Some(respond(&req.id, batch_plan(req))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_names_strip_path_characters() {
        assert_eq!(script_file_name(0, "1234567"), "001-1234567.pdf");
        assert_eq!(script_file_name(11, "../x/9"), "012-x9.pdf");
    }
}
