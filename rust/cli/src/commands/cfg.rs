//! `felt cfg`: prints the resolved configuration as JSON, each value with the layer that
//! set it.
//!
//! ```json
//! {
//!   "players": { "value": 2, "source": "default" },
//!   "seed": { "value": 42, "source": "env" },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        },
        "ai_delay_ms": {
            "value": config.ai_delay_ms,
            "source": sources.ai_delay_ms,
        },
        "rotate_button": {
            "value": config.rotate_button,
            "source": sources.rotate_button,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
