use std::io::{self, BufRead, Write};

use tracing::error;
use tracing_subscriber::EnvFilter;

use translate_core::config::CoreConfig;
use translate_core::protocol;

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cfg = match CoreConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            init_tracing("info");
            error!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    init_tracing(&cfg.log_filter);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => continue,
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = std::panic::catch_unwind(|| protocol::handle(&line, &cfg));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                error!("handler panicked on input line");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }
}
