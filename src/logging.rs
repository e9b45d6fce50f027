use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Logs go to stderr; stdout belongs to the IPC protocol.
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(AppConfig::default().log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let res = if config.log_json {
        builder.json().try_init()
    } else {
        builder.with_target(true).try_init()
    };
    if let Err(e) = res {
        eprintln!("logging already initialised: {e}");
    }
}
