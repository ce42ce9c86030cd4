//! Shared error model for cross-crate APIs.

use thiserror::Error;

/// Result type used by registry construction and configuration loading.
pub type CmdResult<T> = Result<T, RegistryError>;

/// Failures that abort registry construction or tool startup.
///
/// Lookups never produce these: an unknown command is a normal `None`. Every table variant
/// points at a programming error in the supported-command table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two table entries share one canonical name.
    #[error("duplicate command name: {0}")]
    DuplicateCommandName(String),

    /// A table entry has an empty name.
    #[error("command name must not be empty")]
    EmptyCommandName,

    /// A table entry name contains the subcommand separator.
    #[error("command name '{0}' must not contain '|'")]
    SeparatorInCommandName(String),

    /// A container lists a subcommand path that is not `<CONTAINER>|<SUBNAME>`.
    #[error("malformed subcommand '{subcommand}' for container '{container}'")]
    MalformedSubcommand {
        /// Container command name.
        container: String,
        /// Offending subcommand path.
        subcommand: String,
    },

    /// Configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
