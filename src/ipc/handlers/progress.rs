use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::helpers::{list, opt_str, req_u32};
use crate::ipc::types::{AppState, Request};
use crate::progress::{progress_band, progress_percentage, search_assessments, AssessmentSummary};
use serde_json::json;

fn progress_json(num_marked: u32, total: u32) -> serde_json::Value {
    let band = progress_band(num_marked, total);
    json!({
        "percentage": progress_percentage(num_marked, total),
        "band": band,
        "colour": band.colour(),
    })
}

fn progress_get(req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let num_marked = req_u32(&req.params, "numMarked")?;
    let total = req_u32(&req.params, "totalSubmissions")?;
    if num_marked > total {
        return Err(HandlerErr::bad_params(
            "numMarked cannot exceed totalSubmissions",
        ));
    }
    Ok(progress_json(num_marked, total))
}

fn assessments_search(req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let assessments: Vec<AssessmentSummary> = list(&req.params, "assessments")?;
    let term = opt_str(&req.params, "term").unwrap_or("");
    let found: Vec<serde_json::Value> = search_assessments(&assessments, term)
        .into_iter()
        .map(|a| {
            json!({
                "assessment": a,
                "progress": progress_json(a.num_marked, a.total_submissions),
            })
        })
        .collect();
    Ok(json!({ "assessments": found }))
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "progress.get" => Some(respond(&req.id, progress_get(req))),
        "assessments.search" => Some(respond(&req.id, assessments_search(req))),
        _ => None,
    }
}
