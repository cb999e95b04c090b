//! Tracing configuration for Spot
//!
//! Installs a `tracing-subscriber` registry with an env filter and a
//! stdout fmt layer. Hosts that already own a global subscriber skip this and
//! Spot's spans flow into theirs.

use std::io;

use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives
///
/// ## Behavior / 行为
/// - **Development**: debug for everything
/// - **Production**: info for everything
/// - HTTP client internals stay at warn in both
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        "rustls=warn".to_string(),
        if is_dev { "spot_infra=debug" } else { "spot_infra=info" }.to_string(),
    ]
}

/// Initialize the global tracing subscriber
///
/// - **Environment filter**: respects `RUST_LOG`, otherwise the defaults
///   from [`build_filter_directives`]
/// - **Format**: `2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message`
///
/// Call once, before [`Spot::new`](crate::Spot::new).
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(build_filter_directives(is_development()).join(","))
    });

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stdout));

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}
