use tracing_subscriber::EnvFilter;

const FALLBACK_LEVEL: &str = "warn";

/// Installs a stderr subscriber. Stdout stays reserved for the result line.
pub fn init(log_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(log_level))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}
