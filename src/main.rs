use scriptmarkd::config::AppConfig;
use scriptmarkd::{ipc, logging};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

fn main() {
    let config = AppConfig::from_env();
    logging::init(&config);
    info!(version = env!("CARGO_PKG_VERSION"), "scriptmarkd ready");

    let mut state = ipc::AppState::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // No id to answer to.
                warn!(error = %e, "bad request line");
                let resp = ipc::err("", "bad_json", e.to_string(), None);
                let _ = writeln!(stdout, "{}", resp);
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }

    info!(handled = state.handled, "scriptmarkd exiting");
}
