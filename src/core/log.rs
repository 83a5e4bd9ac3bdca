use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Level for this crate's own events.
fn crate_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// `RUST_LOG` when set, otherwise the crate level applied to every target.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(crate_level(verbose).into()))
}

/// Installs the global subscriber.
pub fn init_logging(verbose: bool) {
    let crate_filter = Targets::new().with_target(env!("CARGO_CRATE_NAME"), crate_level(verbose));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_target(verbose))
        .with(crate_filter)
        .with(env_filter(verbose))
        .init();
}
