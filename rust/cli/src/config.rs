//! Layered session configuration.
//!
//! Values resolve in order: built-in defaults, the TOML file named by `FELT_CONFIG`, then
//! the `FELT_*` environment variables. Command-line flags are applied last by the
//! subcommands themselves. Each value remembers which layer set it.

use serde::{Deserialize, Serialize};
use std::fs;

use felt_engine::game::{MAX_PLAYERS, MIN_PLAYERS};

pub const CONFIG_ENV: &str = "FELT_CONFIG";
pub const SEED_ENV: &str = "FELT_SEED";
pub const PLAYERS_ENV: &str = "FELT_PLAYERS";
pub const AI_ENV: &str = "FELT_AI";
pub const AI_DELAY_ENV: &str = "FELT_AI_DELAY_MS";
pub const ROTATE_ENV: &str = "FELT_ROTATE_BUTTON";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub seed: Option<u64>,
    pub ai: String,
    /// Pause before each automated action during `play`.
    pub ai_delay_ms: u64,
    pub rotate_button: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            seed: None,
            ai: "random".into(),
            ai_delay_ms: 800,
            rotate_button: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
    pub ai_delay_ms: ValueSource,
    pub rotate_button: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
            ai_delay_ms: ValueSource::Default,
            rotate_button: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(|key| std::env::var(key).ok())
}

/// Resolution against an arbitrary variable lookup. Empty values count as unset.
pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<ConfigResolved, ConfigError> {
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.ai_delay_ms {
            cfg.ai_delay_ms = v;
            sources.ai_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.rotate_button {
            cfg.rotate_button = v;
            sources.rotate_button = ValueSource::File;
        }
    }

    if let Some(seed) = var(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", SEED_ENV, seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(players) = var(PLAYERS_ENV) {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", PLAYERS_ENV, players)))?;
        sources.players = ValueSource::Env;
    }
    if let Some(ai) = var(AI_ENV) {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Some(delay) = var(AI_DELAY_ENV) {
        cfg.ai_delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: '{}'", AI_DELAY_ENV, delay)))?;
        sources.ai_delay_ms = ValueSource::Env;
    }
    if let Some(rotate) = var(ROTATE_ENV) {
        cfg.rotate_button = parse_bool(&rotate)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid {}: '{}'", ROTATE_ENV, rotate)))?;
        sources.rotate_button = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    ai_delay_ms: Option<u64>,
    #[serde(default)]
    rotate_button: Option<bool>,
}

/// Also run by the subcommands after command-line overrides.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {}, got {}",
            MIN_PLAYERS, MAX_PLAYERS, cfg.players
        )));
    }
    if felt_ai::create_ai(&cfg.ai, None).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of {})",
            cfg.ai,
            felt_ai::AI_NAMES.join(", ")
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let resolved = resolve(lookup(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.players, ValueSource::Default);
        assert_eq!(resolved.config.ai_delay_ms, 800);
    }

    #[test]
    fn env_overrides_file() {
        let file = config_file("players = 4\nai = \"baseline\"\nseed = 9\n");
        let path = file.path().to_string_lossy().into_owned();
        let resolved = resolve(lookup(&[
            (CONFIG_ENV, path.as_str()),
            (SEED_ENV, "42"),
            (ROTATE_ENV, "yes"),
        ]))
        .unwrap();

        assert_eq!(resolved.config.players, 4);
        assert_eq!(resolved.sources.players, ValueSource::File);
        assert_eq!(resolved.config.ai, "baseline");
        assert_eq!(resolved.config.seed, Some(42));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert!(resolved.config.rotate_button);
        assert_eq!(resolved.sources.rotate_button, ValueSource::Env);
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let resolved = resolve(lookup(&[(SEED_ENV, ""), (PLAYERS_ENV, "")])).unwrap();
        assert_eq!(resolved.config.seed, None);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = resolve(lookup(&[(PLAYERS_ENV, "9")])).unwrap_err();
        assert!(err.to_string().contains("players must be between 2 and 6"));

        let err = resolve(lookup(&[(AI_ENV, "shark")])).unwrap_err();
        assert!(err.to_string().contains("unknown ai 'shark'"));

        assert!(matches!(
            resolve(lookup(&[(SEED_ENV, "abc")])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn broken_file_is_a_parse_error() {
        let file = config_file("players = \"many\"\n");
        let path = file.path().to_string_lossy().into_owned();
        assert!(matches!(
            resolve(lookup(&[(CONFIG_ENV, path.as_str())])),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            resolve(lookup(&[(CONFIG_ENV, "/definitely/not/here.toml")])),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    #[serial]
    fn reads_the_process_environment() {
        unsafe { std::env::set_var(AI_DELAY_ENV, "0") };
        let resolved = load_with_sources();
        unsafe { std::env::remove_var(AI_DELAY_ENV) };

        let resolved = resolved.unwrap();
        assert_eq!(resolved.config.ai_delay_ms, 0);
        assert_eq!(resolved.sources.ai_delay_ms, ValueSource::Env);
    }
}
