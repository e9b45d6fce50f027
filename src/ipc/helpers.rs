use serde::de::DeserializeOwned;
use std::path::PathBuf;

use crate::identity::NamingConvention;
use crate::ipc::error::HandlerErr;

pub fn opt_str<'a>(params: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

pub fn req_str<'a>(params: &'a serde_json::Value, key: &str) -> Result<&'a str, HandlerErr> {
    opt_str(params, key).ok_or_else(|| HandlerErr::bad_params(format!("missing params.{key}")))
}

pub fn req_path(params: &serde_json::Value, key: &str) -> Result<PathBuf, HandlerErr> {
    req_str(params, key).map(PathBuf::from)
}

pub fn opt_path(params: &serde_json::Value, key: &str) -> Option<PathBuf> {
    opt_str(params, key)
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

pub fn req_convention(params: &serde_json::Value) -> Result<NamingConvention, HandlerErr> {
    req_str(params, "convention")?
        .parse::<NamingConvention>()
        .map_err(HandlerErr::bad_params)
}

pub fn req_u32(params: &serde_json::Value, key: &str) -> Result<u32, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| {
            HandlerErr::bad_params(format!("params.{key} must be a non-negative integer"))
        })
}

/// Deserializes `params[key]` as a list. A missing key is an empty list.
pub fn list<T: DeserializeOwned>(
    params: &serde_json::Value,
    key: &str,
) -> Result<Vec<T>, HandlerErr> {
    match params.get(key) {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| HandlerErr::bad_params(format!("invalid params.{key}: {e}"))),
    }
}
