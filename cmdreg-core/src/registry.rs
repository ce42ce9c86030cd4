//! Command registry: name index over the supported-command table.
//!
//! The registry is built once from a literal table and is read-only afterwards. Collaborators
//! receive it explicitly, either by reference, through a cloned `SharedRegistry` handle, or
//! through a `LazyRegistry` cell they own.

use std::borrow::Cow;
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

use cmdreg_common::error::{CmdResult, RegistryError};

use crate::containers::CommandIndex;
use crate::entry::{CommandEntry, Dispatch, split_path, subcommand_path};

#[path = "registry/supported.rs"]
mod supported;

/// Read-only index from canonical command name to its table entry.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    entries: CommandIndex,
    /// Entry names in ascending order, for deterministic enumeration.
    ordered_names: Vec<String>,
}

impl CommandRegistry {
    /// Builds the registry from the supported-command table.
    ///
    /// # Errors
    ///
    /// Returns the first table error found. See [`CommandRegistry::from_entries`].
    pub fn with_supported_commands() -> CmdResult<Self> {
        Self::from_entries(supported::supported_commands())
    }

    /// Builds a registry from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateCommandName` when two entries share a name, and the
    /// entry validation errors for empty names or malformed subcommand paths. No partial
    /// registry is returned.
    pub fn from_entries<I>(entries: I) -> CmdResult<Self>
    where
        I: IntoIterator<Item = CommandEntry>,
    {
        let entries = entries.into_iter();
        let mut index = CommandIndex::with_capacity(entries.size_hint().0);
        for entry in entries {
            entry
                .validate()
                .inspect_err(|err| tracing::error!(%err, "rejecting command table"))?;
            if index.contains_key(entry.name()) {
                let err = RegistryError::DuplicateCommandName(entry.name().to_owned());
                tracing::error!(%err, "rejecting command table");
                return Err(err);
            }
            index.insert(entry.name().to_owned(), entry);
        }

        let mut ordered_names: Vec<String> = index.keys().cloned().collect();
        ordered_names.sort_unstable();
        tracing::debug!(commands = ordered_names.len(), "command registry built");
        Ok(Self {
            entries: index,
            ordered_names,
        })
    }

    /// Looks up one top-level command. Subcommand paths are not searched.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.get(normalize(name).as_ref())
    }

    /// Returns true when `container` is a known container listing `container|sub`.
    ///
    /// Unknown and non-container names answer false.
    #[must_use]
    pub fn is_subcommand(&self, container: &str, sub: &str) -> bool {
        let Some(subcommands) = self.lookup(container).and_then(CommandEntry::sub_commands)
        else {
            return false;
        };
        subcommands.contains(subcommand_path(container, sub).as_str())
    }

    /// Resolves either a top-level name or a `CONTAINER|SUB` path.
    #[must_use]
    pub fn contains_path(&self, path: &str) -> bool {
        match split_path(path) {
            Some((container, sub)) => self.is_subcommand(container, sub),
            None => self.lookup(path).is_some(),
        }
    }

    /// Iterates over all entries in ascending name order.
    ///
    /// Every call starts a fresh iteration over the same entries.
    pub fn all_commands(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.ordered_names
            .iter()
            .filter_map(|name| self.entries.get(name.as_str()))
    }

    /// Returns sorted top-level names, optionally followed by every subcommand path.
    #[must_use]
    pub fn command_paths(&self, include_subcommands: bool) -> Vec<String> {
        let mut paths = self.ordered_names.clone();
        if include_subcommands {
            paths.extend(
                self.all_commands()
                    .filter_map(CommandEntry::sub_commands)
                    .flat_map(|subcommands| subcommands.iter().cloned()),
            );
            paths.sort_unstable();
        }
        paths
    }

    /// Entries routed through the catch-all identifier.
    pub fn wildcard_entries(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.all_commands()
            .filter(|entry| matches!(entry.dispatch(), Dispatch::Wildcard(_)))
    }

    /// Number of top-level commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered_names.len()
    }

    /// Returns true when no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered_names.is_empty()
    }
}

fn normalize(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|byte| byte.is_ascii_lowercase()) {
        Cow::Owned(name.to_ascii_uppercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Cheap-to-clone handle to one built registry.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<CommandRegistry>,
}

impl SharedRegistry {
    /// Wraps an already built registry.
    #[must_use]
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            inner: Arc::new(registry),
        }
    }

    /// Builds a shared handle over the supported-command table.
    ///
    /// # Errors
    ///
    /// Returns the table error from [`CommandRegistry::with_supported_commands`].
    pub fn supported() -> CmdResult<Self> {
        CommandRegistry::with_supported_commands().map(Self::new)
    }

    /// Returns true when both handles point at the same registry instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for SharedRegistry {
    type Target = CommandRegistry;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Table source used by [`LazyRegistry`].
pub type TableSource = fn() -> Vec<CommandEntry>;

/// Build-once cell owned by whoever hands the registry to its collaborators.
///
/// Concurrent first callers block until the single build finishes. All of them observe the
/// same registry, or the same build error. Reads after that go straight to the built value.
#[derive(Debug)]
pub struct LazyRegistry {
    source: TableSource,
    cell: OnceLock<CmdResult<SharedRegistry>>,
}

impl Default for LazyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LazyRegistry {
    /// Creates an unbuilt cell over the supported-command table.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_source(supported::supported_commands)
    }

    /// Creates an unbuilt cell over a custom table source.
    #[must_use]
    pub const fn from_source(source: TableSource) -> Self {
        Self {
            source,
            cell: OnceLock::new(),
        }
    }

    /// Returns the built registry, building it on first access.
    ///
    /// # Errors
    ///
    /// Returns the table error of the single build attempt. The error is cached, so later
    /// calls report the same failure without rebuilding.
    pub fn get_or_build(&self) -> CmdResult<SharedRegistry> {
        self.cell
            .get_or_init(|| {
                let entries = (self.source)();
                CommandRegistry::from_entries(entries).map(SharedRegistry::new)
            })
            .clone()
    }

    /// Returns true once the build has run.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }
}
