use tracing_subscriber::EnvFilter;

/// Installs the `tracing` subscriber used by every tutorial binary.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .try_init();
}

#[test]
fn init_logging_twice() {
    init_logging();
    init_logging();
    assert!(tracing::dispatcher::has_been_set());
    tracing::info!("logging installed");
}
