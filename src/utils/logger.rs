use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGER_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG` and falls back to `info`. Safe to call
/// more than once; only the first call installs the subscriber.
pub fn setup_logger() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
