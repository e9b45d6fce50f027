use crate::identity::parse_identity;
use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::helpers::{opt_str, req_convention, req_str};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn identity_parse(req: &Request) -> Result<serde_json::Value, HandlerErr> {
    let convention = req_convention(&req.params)?;
    let folder_name = req_str(&req.params, "folderName")?;
    let file_name = opt_str(&req.params, "fileName").unwrap_or("");

    let identity = parse_identity(convention, folder_name, file_name)?;
    Ok(json!(identity))
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "identity.parse" => Some(respond(&req.id, identity_parse(req))),
        _ => None,
    }
}
