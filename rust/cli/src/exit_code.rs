//! Exit code constants for the CLI application.

use crate::error::CliError;

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Input closed mid-session (same code a shell reports for Ctrl+C).
pub const INTERRUPTED: i32 = 130;

pub fn for_result(result: &Result<(), CliError>) -> i32 {
    match result {
        Ok(()) => SUCCESS,
        Err(CliError::Interrupted(_)) => INTERRUPTED,
        Err(_) => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_outcomes() {
        assert_eq!(for_result(&Ok(())), SUCCESS);
        assert_eq!(
            for_result(&Err(CliError::Interrupted("stdin closed".into()))),
            INTERRUPTED
        );
        assert_eq!(for_result(&Err(CliError::InvalidInput("x".into()))), ERROR);
    }
}
