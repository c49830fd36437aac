use anyhow::anyhow;
use tracing_subscriber::filter::LevelFilter;

/// Installs the global subscriber. Log lines go to stderr so command output on
/// stdout stays clean.
pub fn init(level: impl Into<LevelFilter>) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level.into())
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
