//! Game configuration loaded from JSON
//!
//! Every field has a default, so a config file only needs to name the values it
//! changes. The defaults reproduce the classic tuning: 1200x500 playfield,
//! 150px jump, obstacles every 150 frames at 7px/frame.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the bundled config, relative to the working directory
pub const BUNDLED_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    pub width: u32,
    pub height: u32,
    /// Y of the ground line's top edge
    pub ground_line_y: i32,
    pub ground_thickness: u32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        PlayfieldConfig {
            width: 1200,
            height: 500,
            ground_line_y: 420,
            ground_thickness: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub x: i32,
    /// Resting Y of the character's top edge
    pub ground_y: i32,
    pub size: u32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        CharacterConfig {
            x: 100,
            ground_y: 360,
            size: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    pub height: i32,
    /// Pixels gained per tick while ascending
    pub ascent_step: i32,
    /// Pixels lost per tick while descending
    pub gravity: i32,
    pub tick_ms: u64,
}

impl Default for JumpConfig {
    fn default() -> Self {
        JumpConfig {
            height: 150,
            ascent_step: 15,
            gravity: 4,
            tick_ms: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    /// Pixels moved left per rendered frame
    pub speed: i32,
    /// Frames between spawns
    pub spawn_interval: u32,
    pub width: u32,
    pub height: u32,
    /// Multiplier applied to width/height for drawing and collision
    pub scale: u32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        ObstacleConfig {
            speed: 7,
            spawn_interval: 150,
            width: 25,
            height: 40,
            scale: 2,
        }
    }
}

/// Key bindings, by SDL key name (see `SDL_GetKeyName`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub start: String,
    pub jump: String,
    pub quit: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        ControlsConfig {
            start: "Return".to_string(),
            jump: "Space".to_string(),
            quit: "Escape".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub vsync: bool,
    pub sprite_path: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            vsync: true,
            sprite_path: "assets/sprites/dino.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield: PlayfieldConfig,
    pub character: CharacterConfig,
    pub jump: JumpConfig,
    pub obstacles: ObstacleConfig,
    pub controls: ControlsConfig,
    pub display: DisplayConfig,
}

/// Errors that can occur while loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Config file couldn't be read
    Io(std::io::Error),

    /// Config file isn't valid JSON for `GameConfig`
    Parse(serde_json::Error),

    /// Values parse but can't drive a game
    Invalid(String),

    /// A control binding names a key SDL doesn't know
    UnknownKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
            ConfigError::UnknownKey(name) => write!(f, "Unknown key name: {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Per-user config location, e.g. `~/.config/dino-runner/config.json`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dino-runner").join("config.json"))
    }

    /// Resolves the active config.
    ///
    /// An explicit path must exist and parse. The implicit locations (user
    /// config dir, then the bundled file) fall back to defaults on any problem.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::info!("Loading config from {}", path.display());
            return Self::load_from_file(path);
        }

        let candidates = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(BUNDLED_CONFIG_PATH)));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Ignoring config at {}: {}", path.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(GameConfig::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.playfield.width == 0 || self.playfield.height == 0 {
            return invalid("playfield must have a non-zero size");
        }
        if self.jump.ascent_step <= 0 || self.jump.gravity <= 0 {
            return invalid("jump ascent_step and gravity must be positive");
        }
        if self.jump.tick_ms == 0 {
            return invalid("jump tick_ms must be positive");
        }
        if self.jump.height <= 0 || self.jump.height > self.character.ground_y {
            return invalid("jump height must be positive and stay inside the playfield");
        }
        if self.obstacles.speed <= 0 {
            return invalid("obstacle speed must be positive");
        }
        if self.obstacles.spawn_interval == 0 {
            return invalid("obstacle spawn_interval must be positive");
        }
        if self.obstacles.scale == 0 || self.obstacles.width == 0 || self.obstacles.height == 0 {
            return invalid("obstacle width, height and scale must be positive");
        }
        if self.character.size == 0 {
            return invalid("character size must be positive");
        }
        Ok(())
    }
}
