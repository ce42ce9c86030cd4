//! Tool configuration shared by bootstrap code.

use crate::error::{CmdResult, RegistryError};

/// Environment variable toggling subcommand paths in the exported command list.
pub const INCLUDE_SUBCOMMANDS_VAR: &str = "CMDREG_INCLUDE_SUBCOMMANDS";

/// Environment variable holding the fallback log level.
pub const LOG_LEVEL_VAR: &str = "CMDREG_LOG_LEVEL";

/// Bootstrap configuration used by `cmdreg-sync` during process startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Whether `CONTAINER|SUB` paths are exported next to top-level names.
    pub include_subcommands: bool,
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            include_subcommands: true,
            log_level: "info".to_owned(),
        }
    }
}

impl SyncConfig {
    /// Builds config from a variable lookup, keeping defaults for missing variables.
    ///
    /// The binary passes an environment lookup; tests pass a closure over fixed values.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidConfig` when a boolean variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> CmdResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(INCLUDE_SUBCOMMANDS_VAR) {
            config.include_subcommands = parse_flag(INCLUDE_SUBCOMMANDS_VAR, &raw)?;
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            let level = level.trim();
            if !level.is_empty() {
                config.log_level = level.to_ascii_lowercase();
            }
        }
        Ok(config)
    }
}

fn parse_flag(var: &str, raw: &str) -> CmdResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(RegistryError::InvalidConfig(format!(
            "{var} expects a boolean, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{INCLUDE_SUBCOMMANDS_VAR, LOG_LEVEL_VAR, SyncConfig};
    use crate::error::RegistryError;
    use googletest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn missing_variables_keep_defaults() {
        let config = SyncConfig::from_lookup(|_| None).expect("empty lookup is valid");
        assert_that!(&config, eq(&SyncConfig::default()));
    }

    #[rstest]
    #[case("false", false)]
    #[case("0", false)]
    #[case("No", false)]
    #[case("TRUE", true)]
    #[case(" yes ", true)]
    fn subcommand_flag_accepts_common_spellings(#[case] raw: &str, #[case] expected: bool) {
        let config = SyncConfig::from_lookup(|var| {
            (var == INCLUDE_SUBCOMMANDS_VAR).then(|| raw.to_owned())
        })
        .expect("flag spelling should parse");
        assert_that!(config.include_subcommands, eq(expected));
    }

    #[rstest]
    #[case("maybe")]
    #[case("on")]
    #[case("off")]
    #[case("")]
    fn unparsable_flag_is_rejected(#[case] raw: &str) {
        let result = SyncConfig::from_lookup(|var| {
            (var == INCLUDE_SUBCOMMANDS_VAR).then(|| raw.to_owned())
        });
        assert_that!(
            matches!(result, Err(RegistryError::InvalidConfig(_))),
            eq(true)
        );
    }

    #[rstest]
    fn log_level_is_lowercased_and_blank_is_ignored() {
        let config =
            SyncConfig::from_lookup(|var| (var == LOG_LEVEL_VAR).then(|| "DEBUG".to_owned()))
                .expect("level should parse");
        assert_that!(config.log_level.as_str(), eq("debug"));

        let config =
            SyncConfig::from_lookup(|var| (var == LOG_LEVEL_VAR).then(|| "  ".to_owned()))
                .expect("blank level should fall back");
        assert_that!(config.log_level.as_str(), eq("info"));
    }
}
