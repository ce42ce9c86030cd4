//! Command table entry model.

use cmdreg_common::error::{CmdResult, RegistryError};
use cmdreg_common::ids::{
    CommandId, HashOperation, ListOperation, SetOperation, SortedSetOperation,
};

use crate::containers::PathSet;

/// Separator between a container name and its subcommand name.
pub const SUBCOMMAND_SEPARATOR: char = '|';

/// One operation inside a multiplexed command family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyOperation {
    /// Hash family member.
    Hash(HashOperation),
    /// List family member.
    List(ListOperation),
    /// Set family member.
    Set(SetOperation),
    /// Sorted-set family member.
    SortedSet(SortedSetOperation),
}

impl FamilyOperation {
    /// Returns the shared dispatch identifier of the family.
    #[must_use]
    pub const fn family(self) -> CommandId {
        match self {
            Self::Hash(_) => CommandId::HashObject,
            Self::List(_) => CommandId::ListObject,
            Self::Set(_) => CommandId::SetObject,
            Self::SortedSet(_) => CommandId::SortedSetObject,
        }
    }

    /// Returns the operation code within the family.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Hash(op) => op.code(),
            Self::List(op) => op.code(),
            Self::Set(op) => op.code(),
            Self::SortedSet(op) => op.code(),
        }
    }
}

/// How a command name is routed to its implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Command maps 1:1 to its identifier.
    Simple(CommandId),
    /// Command is one operation of a shared family identifier.
    Multiplexed(FamilyOperation),
    /// Command is a namespace for `<NAME>|<SUB>` subcommand paths.
    Container {
        /// Dispatch identifier of the container itself.
        id: CommandId,
        /// Fully qualified uppercase subcommand paths.
        subcommands: PathSet,
    },
    /// Command routes through `CommandId::All` and names its target by identifier byte.
    ///
    /// The operation byte is a `CommandId`, not a family operation code. `COSCAN` is the only
    /// such entry.
    Wildcard(CommandId),
}

/// One top-level command known to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    name: String,
    dispatch: Dispatch,
}

impl CommandEntry {
    /// Builds an entry for a command with its own dispatch identifier.
    #[must_use]
    pub fn simple(name: &str, id: CommandId) -> Self {
        Self::new(name, Dispatch::Simple(id))
    }

    /// Builds an entry for one member of a multiplexed family.
    #[must_use]
    pub fn multiplexed(name: &str, operation: FamilyOperation) -> Self {
        Self::new(name, Dispatch::Multiplexed(operation))
    }

    /// Builds a container entry from its fully qualified subcommand paths.
    #[must_use]
    pub fn container<'a>(
        name: &str,
        id: CommandId,
        subcommands: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let subcommands = subcommands
            .into_iter()
            .map(str::to_ascii_uppercase)
            .collect();
        Self::new(name, Dispatch::Container { id, subcommands })
    }

    /// Builds an entry routed through the catch-all identifier.
    #[must_use]
    pub fn wildcard(name: &str, target: CommandId) -> Self {
        Self::new(name, Dispatch::Wildcard(target))
    }

    fn new(name: &str, dispatch: Dispatch) -> Self {
        Self {
            name: name.to_ascii_uppercase(),
            dispatch,
        }
    }

    /// Canonical uppercase command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Routing shape of this command.
    #[must_use]
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Primary dispatch identifier.
    #[must_use]
    pub fn primary_id(&self) -> CommandId {
        match &self.dispatch {
            Dispatch::Simple(id) | Dispatch::Container { id, .. } => *id,
            Dispatch::Multiplexed(operation) => operation.family(),
            Dispatch::Wildcard(_) => CommandId::All,
        }
    }

    /// Secondary operation code, present only for multiplexed and wildcard entries.
    #[must_use]
    pub fn secondary_op(&self) -> Option<u8> {
        match &self.dispatch {
            Dispatch::Multiplexed(operation) => Some(operation.code()),
            Dispatch::Wildcard(target) => Some(target.code()),
            Dispatch::Simple(_) | Dispatch::Container { .. } => None,
        }
    }

    /// Subcommand paths, present only for container entries.
    #[must_use]
    pub fn sub_commands(&self) -> Option<&PathSet> {
        match &self.dispatch {
            Dispatch::Container { subcommands, .. } => Some(subcommands),
            _ => None,
        }
    }

    /// Returns true when this entry is a subcommand container.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self.dispatch, Dispatch::Container { .. })
    }

    /// Checks the name and subcommand-path invariants.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::EmptyCommandName` for an empty name,
    /// `RegistryError::SeparatorInCommandName` for a name containing `|`, and
    /// `RegistryError::MalformedSubcommand` for a path that is not exactly `<NAME>|<SUB>`.
    pub fn validate(&self) -> CmdResult<()> {
        if self.name.is_empty() {
            return Err(RegistryError::EmptyCommandName);
        }
        if self.name.contains(SUBCOMMAND_SEPARATOR) {
            return Err(RegistryError::SeparatorInCommandName(self.name.clone()));
        }
        let Some(subcommands) = self.sub_commands() else {
            return Ok(());
        };
        for path in subcommands {
            let well_formed = split_path(path).is_some_and(|(container, sub)| {
                container == self.name && !sub.is_empty() && !sub.contains(SUBCOMMAND_SEPARATOR)
            });
            if !well_formed {
                return Err(RegistryError::MalformedSubcommand {
                    container: self.name.clone(),
                    subcommand: path.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Splits `CONTAINER|SUB` into its two parts.
#[must_use]
pub fn split_path(path: &str) -> Option<(&str, &str)> {
    path.split_once(SUBCOMMAND_SEPARATOR)
}

/// Joins a container name and subcommand name into an uppercase path.
#[must_use]
pub fn subcommand_path(container: &str, sub: &str) -> String {
    let mut path = String::with_capacity(container.len() + sub.len() + 1);
    path.push_str(container);
    path.push(SUBCOMMAND_SEPARATOR);
    path.push_str(sub);
    path.make_ascii_uppercase();
    path
}
