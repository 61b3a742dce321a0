use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "taskboard=info,tower_http=info";

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// Every command needs it: with `RUST_LOG` or `TASKBOARD_DEBUG` set, the
/// `msg_*!` macros report through `tracing`, including the final error of a
/// failed command. Calling it more than once is harmless; later calls leave
/// the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
