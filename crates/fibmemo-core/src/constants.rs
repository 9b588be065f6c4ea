//! Constants shared by the calculator and the entry point.

/// Index computed by the entry point when none is given.
pub const DEFAULT_INDEX: i64 = 16;

/// Deepest index evaluated with native recursion.
///
/// Above this, `Evaluation::Recursive` hands the request to the explicit
/// worklist so that large indices cannot exhaust the thread stack. The
/// value is conservative enough for the 2 MiB stacks of spawned threads.
pub const MAX_RECURSION_DEPTH: u64 = 1024;

/// Exit codes for the `fibmemo` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Requested index is not a valid sequence position.
    pub const ERROR_INVALID_ARGUMENT: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
