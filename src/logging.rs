//! Tracing/logging initialization
//!
//! Logs go to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process
///
/// `RUST_LOG` wins when set; otherwise `fallback` is used (for example the
/// configured `log_filter`). Safe to call multiple times (subsequent calls are
/// no-ops).
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Filter to use for a `-v` count on the command line
pub fn verbosity_filter(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "moneytrack=info".to_string(),
        2 => "moneytrack=debug".to_string(),
        _ => "moneytrack=trace".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init("warn");
        init("not a valid [filter");
    }

    #[test]
    fn test_verbosity_filter() {
        assert_eq!(verbosity_filter(0, "error"), "error");
        assert_eq!(verbosity_filter(1, "error"), "moneytrack=info");
        assert_eq!(verbosity_filter(5, "error"), "moneytrack=trace");
    }
}
