//! Terminal output helpers shared by the subcommands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prompt shown when the user seat is to act.
pub fn prompt_action(out: &mut dyn Write, to_call: u32) -> std::io::Result<()> {
    if to_call > 0 {
        write!(out, "Your action ({} to call) [fold/call/bet N/allin/show/hide/q]: ", to_call)?;
    } else {
        write!(out, "Your action [check/bet N/allin/show/hide/q]: ")?;
    }
    out.flush()
}
