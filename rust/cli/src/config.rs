//! Layered configuration: built-in defaults, then a TOML file named by
//! `HEADSUP_CONFIG`, then `HEADSUP_*` environment variables. Each value
//! remembers which layer set it.

use std::fs;

use headsup_engine::engine::{TableConfig, TieRule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub min_bet: u32,
    pub tie_rule: TieRule,
    pub seed: Option<u64>,
    pub player_name: String,
    pub ai: String,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            starting_stack: table.starting_stack,
            min_bet: table.min_bet,
            tie_rule: table.tie_rule,
            seed: None,
            player_name: "Player".into(),
            ai: "random".into(),
        }
    }
}

impl Config {
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            starting_stack: self.starting_stack,
            min_bet: self.min_bet,
            tie_rule: self.tie_rule,
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
    pub starting_stack: ValueSource,
    pub min_bet: ValueSource,
    pub tie_rule: ValueSource,
    pub seed: ValueSource,
    pub player_name: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            min_bet: ValueSource::Default,
            tie_rule: ValueSource::Default,
            seed: ValueSource::Default,
            player_name: ValueSource::Default,
            ai: ValueSource::Default,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolves configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    resolve(&|key: &str| std::env::var(key).ok())
}

/// Resolves configuration through `lookup`, which stands in for the
/// environment. Empty values count as unset.
pub fn resolve(lookup: &dyn Fn(&str) -> Option<String>) -> Result<ConfigResolved, ConfigError> {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = var("HEADSUP_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.min_bet {
            cfg.min_bet = v;
            sources.min_bet = ValueSource::File;
        }
        if let Some(v) = f.tie_rule {
            cfg.tie_rule = parse_tie_rule(&v)?;
            sources.tie_rule = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.player_name {
            cfg.player_name = v;
            sources.player_name = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(seed) = var("HEADSUP_SEED") {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(stack) = var("HEADSUP_STARTING_STACK") {
        cfg.starting_stack = stack
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting stack '{}'", stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(min_bet) = var("HEADSUP_MIN_BET") {
        cfg.min_bet = min_bet
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid minimum bet '{}'", min_bet)))?;
        sources.min_bet = ValueSource::Env;
    }
    if let Some(rule) = var("HEADSUP_TIE_RULE") {
        cfg.tie_rule = parse_tie_rule(&rule)?;
        sources.tie_rule = ValueSource::Env;
    }
    if let Some(name) = var("HEADSUP_PLAYER_NAME") {
        cfg.player_name = name.trim().to_string();
        sources.player_name = ValueSource::Env;
    }
    if let Some(ai) = var("HEADSUP_AI") {
        cfg.ai = ai.trim().to_string();
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    min_bet: Option<u32>,
    #[serde(default)]
    tie_rule: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    ai: Option<String>,
}

fn parse_tie_rule(s: &str) -> Result<TieRule, ConfigError> {
    TieRule::from_name(s).ok_or_else(|| {
        ConfigError::Invalid(format!(
            "Invalid tie rule '{}' (expected split or random_awardee)",
            s
        ))
    })
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if cfg.min_bet == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_bet must be >0".into(),
        ));
    }
    if cfg.min_bet > cfg.starting_stack {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_bet must not exceed starting_stack".into(),
        ));
    }
    if cfg.player_name.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player_name must not be empty".into(),
        ));
    }
    if let Err(e) = headsup_ai::create_ai(&cfg.ai) {
        return Err(ConfigError::Invalid(format!("Invalid configuration: {}", e)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn resolve_with(vars: &[(&str, &str)]) -> Result<ConfigResolved, ConfigError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        resolve(&move |key: &str| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_any_source() {
        let resolved = resolve_with(&[]).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.config.starting_stack, 1_000);
        assert_eq!(resolved.config.min_bet, 10);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let resolved = resolve_with(&[
            ("HEADSUP_SEED", "42"),
            ("HEADSUP_STARTING_STACK", "500"),
            ("HEADSUP_TIE_RULE", "random"),
            ("HEADSUP_AI", "passive"),
            ("HEADSUP_PLAYER_NAME", ""),
        ])
        .unwrap();
        assert_eq!(resolved.config.seed, Some(42));
        assert_eq!(resolved.config.starting_stack, 500);
        assert_eq!(resolved.config.tie_rule, TieRule::RandomAwardee);
        assert_eq!(resolved.config.ai, "passive");
        assert_eq!(resolved.sources.starting_stack, ValueSource::Env);
        assert_eq!(resolved.sources.player_name, ValueSource::Default);
    }

    #[test]
    fn test_file_then_env_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_stack = 2000\nmin_bet = 20\nplayer_name = \"Ana\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let resolved = resolve_with(&[("HEADSUP_CONFIG", path.as_str()), ("HEADSUP_MIN_BET", "50")]).unwrap();
        assert_eq!(resolved.config.starting_stack, 2_000);
        assert_eq!(resolved.sources.starting_stack, ValueSource::File);
        assert_eq!(resolved.config.min_bet, 50);
        assert_eq!(resolved.sources.min_bet, ValueSource::Env);
        assert_eq!(resolved.config.player_name, "Ana");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            resolve_with(&[("HEADSUP_SEED", "abc")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve_with(&[("HEADSUP_MIN_BET", "0")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve_with(&[("HEADSUP_STARTING_STACK", "5")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve_with(&[("HEADSUP_TIE_RULE", "coin")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            resolve_with(&[("HEADSUP_AI", "oracle")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        assert!(matches!(
            resolve_with(&[("HEADSUP_CONFIG", "/nonexistent/headsup.toml")]),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_config_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_stack = \"lots\"").unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert!(matches!(
            resolve_with(&[("HEADSUP_CONFIG", path.as_str())]),
            Err(ConfigError::Parse(_))
        ));
    }
}
