use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when no `-v` is given; otherwise `-v` selects `debug`
/// and `-vv` selects `trace` for the typeforge crates.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("warn,typeforge_lib=debug,typeforge_cli=debug"),
        _ => EnvFilter::new("warn,typeforge_lib=trace,typeforge_cli=trace"),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
