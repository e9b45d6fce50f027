use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::helpers::{list, opt_path, opt_str, req_str};
use crate::ipc::types::{AppState, Request};
use crate::results::{
    moderator_subject, publish_recipients, results_csv, search_submissions, student_subject,
};
use crate::stats::MarkSummary;
use crate::submission::SubmissionRecord;
use anyhow::Context;
use serde_json::json;

fn results_export_csv(req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let submissions: Vec<SubmissionRecord> = list(&req.params, "submissions")?;
    let csv = results_csv(&submissions);

    let Some(out_path) = opt_path(&req.params, "outPath") else {
        return Ok(json!({ "csv": csv, "rows": submissions.len() }));
    };
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.to_string_lossy()))
            .map_err(|e| HandlerErr::io("failed to write results", e))?;
    }
    std::fs::write(&out_path, csv.as_bytes())
        .with_context(|| format!("failed to write {}", out_path.to_string_lossy()))
        .map_err(|e| HandlerErr::io("failed to write results", e))?;
    Ok(json!({
        "path": out_path.to_string_lossy(),
        "rows": submissions.len(),
    }))
}

fn results_search(req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let submissions: Vec<SubmissionRecord> = list(&req.params, "submissions")?;
    let term = opt_str(&req.params, "term").unwrap_or("");
    let found = search_submissions(&submissions, term);
    Ok(json!({ "submissions": found }))
}

fn results_publish_plan(
    state: &AppState,
    req: &Request,
) -> Result<serde_json::Value, HandlerErr> {
    let submissions: Vec<SubmissionRecord> = list(&req.params, "submissions")?;
    let module_code = req_str(&req.params, "moduleCode")?;
    let assessment_name = req_str(&req.params, "assessmentName")?;

    let recipients = publish_recipients(&submissions, &state.config.email_domain);
    let skipped = submissions.len() - recipients.len();
    Ok(json!({
        "studentSubject": student_subject(assessment_name),
        "recipients": recipients,
        "skipped": skipped,
        "moderatorSubject": moderator_subject(module_code, assessment_name),
        "moderatorCsv": results_csv(&submissions),
        "summary": MarkSummary::from_submissions(&submissions),
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "results.csv" => Some(respond(&req.id, results_export_csv(req))),
        "results.search" => Some(respond(&req.id, results_search(req))),
        "results.publishPlan" => Some(respond(&req.id, results_publish_plan(state, req))),
        _ => None,
    }
}
