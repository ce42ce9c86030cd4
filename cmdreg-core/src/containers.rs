//! Hash containers behind the registry index and container subcommand sets.

use hashbrown::{HashMap, HashSet};

use crate::entry::CommandEntry;

/// Canonical name to table entry.
pub type CommandIndex = HashMap<String, CommandEntry>;

/// Fully qualified `CONTAINER|SUB` paths of one container.
pub type PathSet = HashSet<String>;

#[cfg(test)]
mod tests {
    use super::{CommandIndex, PathSet};
    use crate::entry::CommandEntry;
    use cmdreg_common::ids::CommandId;
    use googletest::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn index_and_paths_answer_borrowed_lookups() {
        let mut index = CommandIndex::new();
        index.insert("GET".to_owned(), CommandEntry::simple("GET", CommandId::Get));
        let paths: PathSet = ["ACL|CAT".to_owned()].into_iter().collect();

        assert_that!(index.get("GET").map(CommandEntry::name), eq(Some("GET")));
        assert_that!(paths.contains("ACL|CAT"), eq(true));
        assert_that!(paths.contains("ACL|LIST"), eq(false));
    }
}
