use super::SyncApp;
use cmdreg_common::config::SyncConfig;
use cmdreg_common::error::CmdResult;
use cmdreg_core::LazyRegistry;
use tracing_subscriber::EnvFilter;

pub(super) fn run_sync() -> CmdResult<()> {
    let config = SyncConfig::from_lookup(|var| std::env::var(var).ok())?;
    init_logging(&config);

    let lazy = LazyRegistry::new();
    let app = SyncApp::new(config, &lazy)?;
    tracing::info!("{}", app.startup_summary());
    for entry in app.flagged_entries() {
        tracing::warn!(
            command = entry.name(),
            primary_id = ?entry.primary_id(),
            secondary_op = ?entry.secondary_op(),
            "command routes through the catch-all identifier"
        );
    }

    for path in app.supported_paths() {
        println!("{path}");
    }
    Ok(())
}

fn init_logging(config: &SyncConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
