//! Process composition root for `cmdreg-sync`.

mod bootstrap;

use cmdreg_common::config::SyncConfig;
use cmdreg_common::error::CmdResult;
use cmdreg_core::{CommandEntry, LazyRegistry, SharedRegistry};

/// Composition container handed to the sync tool.
///
/// The registry is built once here and shared with every consumer by handle.
#[derive(Debug, Clone)]
pub struct SyncApp {
    /// Tool configuration.
    pub config: SyncConfig,
    /// Built command registry.
    pub registry: SharedRegistry,
}

impl SyncApp {
    /// Builds the app, running the one registry build through `lazy`.
    ///
    /// # Errors
    ///
    /// Returns the registry table error when the supported-command table is malformed.
    pub fn new(config: SyncConfig, lazy: &LazyRegistry) -> CmdResult<Self> {
        let registry = lazy.get_or_build()?;
        Ok(Self { config, registry })
    }

    /// Human-readable startup summary.
    #[must_use]
    pub fn startup_summary(&self) -> String {
        let containers = self
            .registry
            .all_commands()
            .filter(|entry| entry.is_container())
            .count();
        format!(
            "cmdreg-sync bootstrap: commands={}, containers={}, include_subcommands={}, log_level={}",
            self.registry.len(),
            containers,
            self.config.include_subcommands,
            self.config.log_level,
        )
    }

    /// Paths exported to the downstream sync step.
    #[must_use]
    pub fn supported_paths(&self) -> Vec<String> {
        self.registry.command_paths(self.config.include_subcommands)
    }

    /// Entries whose routing goes through the catch-all identifier.
    pub fn flagged_entries(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.registry.wildcard_entries()
    }
}

/// Starts the tool process.
///
/// # Errors
///
/// Returns configuration or registry build errors.
pub fn run() -> CmdResult<()> {
    bootstrap::run_sync()
}

#[cfg(test)]
mod tests {
    use super::SyncApp;
    use cmdreg_common::config::SyncConfig;
    use cmdreg_common::error::RegistryError;
    use cmdreg_common::ids::CommandId;
    use cmdreg_core::{CommandEntry, LazyRegistry};
    use googletest::prelude::*;
    use rstest::rstest;

    fn supported_app(include_subcommands: bool) -> SyncApp {
        let config = SyncConfig {
            include_subcommands,
            ..SyncConfig::default()
        };
        SyncApp::new(config, &LazyRegistry::new()).expect("supported table must build")
    }

    #[rstest]
    fn startup_summary_reports_registry_shape() {
        let app = supported_app(true);
        let summary = app.startup_summary();
        assert_that!(summary.contains("containers=6"), eq(true));
        assert_that!(
            summary.contains(&format!("commands={}", app.registry.len())),
            eq(true)
        );
    }

    #[rstest]
    #[case(true, true)]
    #[case(false, false)]
    fn supported_paths_follow_subcommand_setting(#[case] include: bool, #[case] expected: bool) {
        let app = supported_app(include);
        let paths = app.supported_paths();
        assert_that!(paths.iter().any(|path| path == "ACL|WHOAMI"), eq(expected));
        assert_that!(paths.iter().any(|path| path == "GET"), eq(true));
    }

    #[rstest]
    fn coscan_is_flagged() {
        let app = supported_app(false);
        let flagged: Vec<&str> = app.flagged_entries().map(CommandEntry::name).collect();
        assert_that!(&flagged, eq(&vec!["COSCAN"]));
    }

    fn broken_table() -> Vec<CommandEntry> {
        vec![
            CommandEntry::simple("GET", CommandId::Get),
            CommandEntry::simple("GET", CommandId::Get),
        ]
    }

    #[rstest]
    fn broken_table_aborts_startup() {
        let result = SyncApp::new(SyncConfig::default(), &LazyRegistry::from_source(broken_table));
        assert_that!(
            &result.err(),
            eq(&Some(RegistryError::DuplicateCommandName("GET".to_owned())))
        );
    }
}
