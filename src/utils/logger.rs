use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is unset; `-v` lifts this crate to debug.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "gopkgcp=debug,info"
    } else {
        "gopkgcp=info"
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // stdout carries the summary lines, diagnostics go to stderr
    let stderr_is_terminal = std::io::stderr().is_terminal();
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(stderr_is_terminal)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
