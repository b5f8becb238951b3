//! Logging setup for the simulation binary.

/// Installs a stderr subscriber at INFO, overridable through `RUST_LOG`.
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
