//! Comparison between the registry and a reference command list.
//!
//! The reference list comes from an external command spec (loaded elsewhere). This module only
//! computes which paths differ; presenting the result is left to the caller.

use std::collections::BTreeSet;

use crate::registry::CommandRegistry;

/// Name-level differences between the registry and a reference command list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDiff {
    /// Reference paths the registry does not know, sorted.
    pub unsupported: Vec<String>,
    /// Registry paths missing from the reference, sorted.
    pub unknown_to_reference: Vec<String>,
}

impl ReferenceDiff {
    /// Compares registry paths with reference names.
    ///
    /// Reference names are trimmed and uppercased; blank names are skipped. With
    /// `include_subcommands` unset, `CONTAINER|SUB` reference names are ignored as well.
    #[must_use]
    pub fn compute<I, S>(
        registry: &CommandRegistry,
        reference_names: I,
        include_subcommands: bool,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reference: BTreeSet<String> = reference_names
            .into_iter()
            .map(|name| name.as_ref().trim().to_ascii_uppercase())
            .filter(|name| !name.is_empty())
            .filter(|name| include_subcommands || !name.contains(crate::SUBCOMMAND_SEPARATOR))
            .collect();

        let unsupported = reference
            .iter()
            .filter(|name| !registry.contains_path(name))
            .cloned()
            .collect();
        let unknown_to_reference = registry
            .command_paths(include_subcommands)
            .into_iter()
            .filter(|path| !reference.contains(path))
            .collect();

        let diff = Self {
            unsupported,
            unknown_to_reference,
        };
        tracing::debug!(
            reference = reference.len(),
            unsupported = diff.unsupported.len(),
            unknown_to_reference = diff.unknown_to_reference.len(),
            "compared registry with reference"
        );
        diff
    }

    /// Returns true when both sides list the same paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unsupported.is_empty() && self.unknown_to_reference.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ReferenceDiff;
    use crate::entry::CommandEntry;
    use crate::registry::CommandRegistry;
    use cmdreg_common::ids::CommandId;
    use googletest::prelude::*;
    use rstest::rstest;

    fn small_registry() -> CommandRegistry {
        CommandRegistry::from_entries([
            CommandEntry::simple("GET", CommandId::Get),
            CommandEntry::simple("SET", CommandId::Set),
            CommandEntry::container("CONFIG", CommandId::Config, ["CONFIG|GET", "CONFIG|SET"]),
        ])
        .expect("small table is valid")
    }

    #[rstest]
    fn matching_reference_yields_empty_diff() {
        let diff = ReferenceDiff::compute(
            &small_registry(),
            ["get", "SET", "CONFIG", "CONFIG|GET", "config|set"],
            true,
        );
        assert_that!(diff.is_empty(), eq(true));
    }

    #[rstest]
    fn diff_reports_both_directions_sorted() {
        let diff = ReferenceDiff::compute(
            &small_registry(),
            ["GET", "CONFIG", "CONFIG|GET", "CONFIG|RESETSTAT", "WAIT", "COPY"],
            true,
        );
        assert_that!(
            &diff.unsupported,
            eq(&vec![
                "CONFIG|RESETSTAT".to_owned(),
                "COPY".to_owned(),
                "WAIT".to_owned(),
            ])
        );
        assert_that!(
            &diff.unknown_to_reference,
            eq(&vec!["CONFIG|SET".to_owned(), "SET".to_owned()])
        );
    }

    #[rstest]
    fn subcommands_are_ignored_when_disabled() {
        let diff = ReferenceDiff::compute(
            &small_registry(),
            ["GET", "SET", "CONFIG", "CONFIG|RESETSTAT", " "],
            false,
        );
        assert_that!(diff.is_empty(), eq(true));
    }

    #[rstest]
    fn supported_registry_against_empty_reference_lists_everything() {
        let registry =
            CommandRegistry::with_supported_commands().expect("supported table must build");
        let diff = ReferenceDiff::compute(&registry, Vec::<String>::new(), false);
        assert_that!(diff.unsupported.is_empty(), eq(true));
        assert_that!(diff.unknown_to_reference.len(), eq(registry.len()));
    }
}
