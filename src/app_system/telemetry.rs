use super::LogFormat;

/// Installs the global subscriber.
///
/// Verbosity comes from `RUST_LOG` and falls back to `info`:
///
/// ```bash
/// RUST_LOG=debug storefront
/// RUST_LOG=storefront::repository=debug,tower_http=info storefront
/// ```
pub fn setup_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime());

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
