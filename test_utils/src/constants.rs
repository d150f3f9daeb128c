pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

/// Number of ranked entries checked when a fixture has no `TOP:` line.
pub const DEFAULT_FIXTURE_TOP_N: i64 = 10;
