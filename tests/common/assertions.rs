//! Custom assertion macros for CLI tests.
//!
//! These macros print both streams on failure to aid debugging.

/// Assert that stdout contains the given text.
///
/// # Example
/// ```ignore
/// assert_stdout_contains!(result, "✅ production: OK");
/// ```
#[macro_export]
macro_rules! assert_stdout_contains {
    ($result:expr, $needle:expr) => {
        assert!(
            $result.stdout.contains($needle),
            "Expected stdout to contain {:?}.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that stderr contains the given text.
#[macro_export]
macro_rules! assert_stderr_contains {
    ($result:expr, $needle:expr) => {
        assert!(
            $result.stderr.contains($needle),
            "Expected stderr to contain {:?}.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that stderr does not contain the given text.
#[macro_export]
macro_rules! assert_stderr_lacks {
    ($result:expr, $needle:expr) => {
        assert!(
            !$result.stderr.contains($needle),
            "Expected stderr NOT to contain {:?}.\nstderr:\n{}",
            $needle,
            $result.stderr
        );
    };
}
