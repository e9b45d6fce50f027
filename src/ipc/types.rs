use serde::Deserialize;

use crate::config::AppConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub config: AppConfig,
    pub handled: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config, handled: 0 }
    }
}
