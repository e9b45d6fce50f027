//! Runtime settings, read once at startup from `.env` and the environment.

use std::env;

pub const DEFAULT_EMAIL_DOMAIN: &str = "mandela.ac.za";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `EnvFilter` directive, e.g. `scriptmarkd=debug`.
    pub log_level: String,
    pub log_json: bool,
    /// Domain of student addresses: `s<studentNumber>@<domain>`.
    pub email_domain: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "scriptmarkd=info".to_string(),
            log_json: false,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            log_level: env::var("SCRIPTMARKD_LOG").unwrap_or(defaults.log_level),
            log_json: env::var("SCRIPTMARKD_LOG_JSON")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.log_json),
            email_domain: env::var("SCRIPTMARKD_EMAIL_DOMAIN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.email_domain),
        }
    }
}
