use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::helpers::list;
use crate::ipc::types::{AppState, Request};
use crate::stats::{summarize, MarkSummary};
use crate::submission::SubmissionRecord;
use serde_json::json;

/// Accepts either a bare `marks` list or the `submissions` of an assessment.
fn marks_summarize(req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let summary = if req.params.get("marks").is_some() {
        let marks: Vec<f64> = list(&req.params, "marks")?;
        summarize(&marks)
    } else if req.params.get("submissions").is_some() {
        let submissions: Vec<SubmissionRecord> = list(&req.params, "submissions")?;
        MarkSummary::from_submissions(&submissions)
    } else {
        return Err(HandlerErr::bad_params(
            "missing params.marks or params.submissions",
        ));
    };
    Ok(json!(summary))
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "marks.summarize" => Some(respond(&req.id, marks_summarize(req))),
        _ => None,
    }
}
