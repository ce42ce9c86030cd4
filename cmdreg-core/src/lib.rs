//! Command registry core: the catalog of command names this server recognizes and how each one
//! routes to its internal dispatch identifier.
//!
//! The registry answers "is this command (or subcommand) known, and what does it map to". Wire
//! parsing, execution, and report formatting live with the collaborators that consume it.

pub mod containers;
pub mod entry;
pub mod reference;
pub mod registry;

pub use entry::{CommandEntry, Dispatch, FamilyOperation, SUBCOMMAND_SEPARATOR};
pub use reference::ReferenceDiff;
pub use registry::{CommandRegistry, LazyRegistry, SharedRegistry, TableSource};
