//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.portfolio/config.toml`. If missing on first run, a
//! commented-out default is generated so visitors can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::commands::Variant;
use super::console::GameSettings;
use super::profile::{Profile, prompt_for};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    /// Extra commands, or replacements for built-in ones
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub variant: Option<Variant>,
    pub skip_cover: Option<bool>,
    pub typing_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    pub tick_ms: Option<u64>,
    pub muted: Option<bool>,
    pub volume: Option<f32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub prompt_user: Option<String>,
    pub card_title: Option<String>,
    pub card_detail: Option<String>,
    pub card_back: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_MS: u64 = 90;
/// Master gain while unmuted.
pub const DEFAULT_VOLUME: f32 = 0.06;
/// Ticks faster than this make the game unplayable.
pub const MIN_TICK_MS: u64 = 20;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub variant: Variant,
    pub skip_cover: bool,
    pub typing_delay: Duration,
    pub tick: Duration,
    pub muted: bool,
    pub volume: f32,
    pub seed: Option<u64>,
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub prompt_user: Option<String>,
    pub card_title: Option<String>,
    pub card_detail: Option<String>,
    pub card_back: Option<String>,
    pub commands: BTreeMap<String, String>,
}

impl ResolvedConfig {
    /// The variant's profile with config overrides applied.
    pub fn profile(&self) -> Profile {
        let mut profile = Profile::for_variant(self.variant);
        profile.typing_delay = self.typing_delay;
        if let Some(name) = &self.name {
            profile.name = name.clone();
            profile.card.name = name.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            profile.subtitle = subtitle.clone();
        }
        if let Some(user) = &self.prompt_user {
            profile.prompt = prompt_for(user);
        }
        if let Some(title) = &self.card_title {
            profile.card.title = title.clone();
        }
        if let Some(detail) = &self.card_detail {
            profile.card.detail = Some(detail.clone());
        }
        if let Some(back) = &self.card_back {
            profile.card.back = Some(back.clone());
        }
        for (name, response) in &self.commands {
            profile.commands.insert(name, response);
        }
        profile
    }

    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            tick: self.tick,
            start_muted: self.muted,
            seed: self.seed,
        }
    }
}

/// Values given on the command line. `false` means "flag not passed".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub variant: Option<Variant>,
    pub skip_cover: bool,
    pub mute: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.portfolio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".portfolio").join("config.toml"))
}

/// Load config from `path`, or from `~/.portfolio/config.toml` when `None`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `PortfolioConfig::default()`. An explicit path that is missing is
/// an error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<PortfolioConfig, ConfigError> {
    if let Some(path) = path {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PortfolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PortfolioConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<PortfolioConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PortfolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# Portfolio Terminal Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# variant = "arcade"          # "classic" or "arcade"
# skip_cover = false
# typing_delay_ms = 0         # classic default: 20

# [game]
# tick_ms = 90
# muted = false
# volume = 0.06
# seed = 42                   # fixed food placement

# [profile]
# name = "Vaibhav Patel"
# subtitle = "Networking and Cyber Security Student"
# prompt_user = "vaibhav"
# card_title = "Networking & Cyber Security Student"
# card_detail = "Student No.: 100889689"
# card_back = "Back of Card"

# [commands]
# hobbies = "Climbing, CTFs and too much coffee.\n"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PortfolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an explicit environment lookup.
pub fn resolve_with_env(
    config: &PortfolioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Variant: CLI → env → config → default
    let variant = cli
        .variant
        .or_else(|| {
            let raw = env("PORTFOLIO_VARIANT")?;
            let parsed = Variant::parse(&raw);
            if parsed.is_none() {
                warn!("Ignoring unknown PORTFOLIO_VARIANT {:?}", raw);
            }
            parsed
        })
        .or(config.general.variant)
        .unwrap_or_default();

    // Typing delay: env → config → variant default
    let typing_delay_ms = env("PORTFOLIO_TYPING_DELAY_MS")
        .and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(e) => {
                warn!("Ignoring PORTFOLIO_TYPING_DELAY_MS {:?}: {}", raw, e);
                None
            }
        })
        .or(config.general.typing_delay_ms)
        .unwrap_or_else(|| variant.default_typing_delay_ms());

    let tick_ms = config
        .game
        .tick_ms
        .unwrap_or(DEFAULT_TICK_MS)
        .max(MIN_TICK_MS);

    let volume = config
        .game
        .volume
        .filter(|v| v.is_finite())
        .unwrap_or(DEFAULT_VOLUME)
        .clamp(0.0, 1.0);

    let profile = &config.profile;
    ResolvedConfig {
        variant,
        skip_cover: cli.skip_cover || config.general.skip_cover.unwrap_or(false),
        typing_delay: Duration::from_millis(typing_delay_ms),
        tick: Duration::from_millis(tick_ms),
        muted: cli.mute || config.game.muted.unwrap_or(false),
        volume,
        seed: config.game.seed,
        name: profile.name.clone(),
        subtitle: profile.subtitle.clone(),
        prompt_user: profile.prompt_user.clone(),
        card_title: profile.card_title.clone(),
        card_detail: profile.card_detail.clone(),
        card_back: profile.card_back.clone(),
        commands: config.commands.clone(),
    }
}
