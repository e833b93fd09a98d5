/// Configures the global tracing subscriber once for the whole process.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (from
/// `EARLY_BIRD_LOG`) is used, falling back to `info` if it does not parse.
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=early_bird::session=debug,info cargo run
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
