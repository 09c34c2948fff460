use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Table output
/// goes to stdout, so logs never mix into piped results.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
