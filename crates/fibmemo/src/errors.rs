//! Error handling and exit codes.

use fibmemo_core::exit_codes;
use fibmemo_core::FibError;

/// Exit code for an error returned by `app::run`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::InvalidArgument(_)) => exit_codes::ERROR_INVALID_ARGUMENT,
        Some(FibError::Config(_)) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}
