//! Logging setup for the binary
//!
//! Log lines go to stderr so `--json` output on stdout stays parseable.
//! `RUST_LOG` takes precedence over `-v`.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "rulegen=info",
        1 => "rulegen=debug",
        _ => "rulegen=trace",
    }
}

/// Initialize the tracing subscriber
pub fn init(verbose: u8, json: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let registry = Registry::default().with(env_filter);

    if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .try_init()?;
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "rulegen starting");
    Ok(())
}
