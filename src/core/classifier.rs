//! Name-based filtering policy for extraction.
//!
//! Both predicates look only at the final path component and are total over
//! arbitrary strings.

const SKIPPED_DIR_SUFFIXES: [&str; 4] = ["testdata", "vendor", ".git", "_test"];

const KEPT_FILE_NAMES: [&str; 4] = ["go.mod", "go.sum", "LICENSE", "README.md"];

const SOURCE_EXTENSION: &str = ".go";

const TEST_SOURCE_SUFFIX: &str = "_test.go";

pub const GO_MOD: &str = "go.mod";

pub const GO_SUM: &str = "go.sum";

/// A directory is skipped when its name ends with one of the blocked names,
/// so `foo_test` is skipped but `protest` is not.
pub fn should_skip_directory(name: &str) -> bool {
    SKIPPED_DIR_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
}

/// Non-test Go sources plus the module/licence files a standalone module needs.
pub fn should_copy_file(name: &str) -> bool {
    if name.ends_with(SOURCE_EXTENSION) {
        return !name.ends_with(TEST_SOURCE_SUFFIX);
    }
    KEPT_FILE_NAMES.contains(&name)
}

/// Files whose content may reference the module path and is rewritten.
pub fn is_rewritable(name: &str) -> bool {
    name.ends_with(SOURCE_EXTENSION) || name == GO_MOD
}
