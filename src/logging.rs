use std::env;

use env_logger::{Builder, Target};

const LOG_ENV: &str = "GALLERY_LOG";

fn filter_from_env() -> String {
    for var in [LOG_ENV, "RUST_LOG"] {
        if let Ok(v) = env::var(var) {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    "warn".to_string()
}

/// Route `log` output to stderr; stdout is reserved for command reports.
pub fn init() {
    let filter = filter_from_env();
    let _ = Builder::new()
        .parse_filters(&filter)
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
