use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr log subscriber.
///
/// `GRIDSEARCH_LOG` (or `RUST_LOG`) takes precedence over the flags. Records
/// emitted through the `log` facade by the library crates are forwarded to
/// the subscriber.
pub fn init_logging(
    verbose: bool,
    log_level: Option<&str>,
    ansi: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_env("GRIDSEARCH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(ansi),
        )
        .try_init()?;

    Ok(())
}
