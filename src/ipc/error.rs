use serde_json::json;

use crate::error::MalformedIdentityError;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl HandlerErr {
    pub fn bad_params(message: impl Into<String>) -> Self {
        Self {
            code: "bad_params",
            message: message.into(),
            details: None,
        }
    }

    pub fn io(message: impl Into<String>, e: anyhow::Error) -> Self {
        Self {
            code: "io_failed",
            message: message.into(),
            details: Some(json!({ "cause": format!("{e:#}") })),
        }
    }

    pub fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, self.details)
    }
}

impl From<MalformedIdentityError> for HandlerErr {
    fn from(e: MalformedIdentityError) -> Self {
        Self {
            code: "malformed_identity",
            message: e.to_string(),
            details: Some(malformed_details(&e)),
        }
    }
}

pub fn malformed_details(e: &MalformedIdentityError) -> serde_json::Value {
    json!({
        "raw": e.raw,
        "reason": e.reason,
    })
}

/// Folds a handler result into a response line.
pub fn respond(id: &str, res: Result<serde_json::Value, HandlerErr>) -> serde_json::Value {
    match res {
        Ok(v) => ok(id, v),
        Err(e) => e.response(id),
    }
}
