//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ControllerError;

/// Map domain errors to the line printed on standard error.
pub fn map_error(e: &ControllerError) -> String {
    format!("Error: {}", e)
}

/// Process exit status for a failed invocation.
pub fn exit_code(e: &ControllerError) -> i32 {
    e.exit_code()
}
