use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `-v`.
pub fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "strata_flex=debug,info",
        _ => "strata_flex=trace,debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
