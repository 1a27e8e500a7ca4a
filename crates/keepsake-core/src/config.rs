//! Runtime configuration: the particle animation settings shared with the
//! toggle panel, carousel timing, and where to find the content pack.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::content::ContentPack;
use crate::error::ConfigError;
use crate::particles::Layer;
use crate::Viewport;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "KEEPSAKE_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "keepsake.toml";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub hearts_enabled: bool,
    pub petals_enabled: bool,
    pub sparkles_enabled: bool,
    pub density: f32,
    pub speed: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            hearts_enabled: true,
            petals_enabled: true,
            sparkles_enabled: true,
            density: 0.5,
            speed: 1.0,
        }
    }
}

impl AnimationConfig {
    pub fn layer_enabled(&self, layer: Layer) -> bool {
        match layer {
            Layer::Hearts => self.hearts_enabled,
            Layer::Petals => self.petals_enabled,
            Layer::Sparkles => self.sparkles_enabled,
        }
    }

    pub(crate) fn set_layer_enabled(&mut self, layer: Layer, enabled: bool) {
        match layer {
            Layer::Hearts => self.hearts_enabled = enabled,
            Layer::Petals => self.petals_enabled = enabled,
            Layer::Sparkles => self.sparkles_enabled = enabled,
        }
    }

    /// Clamps density into `[0, 1]` and rejects values the generator cannot use.
    pub fn validated(self) -> Result<Self, ConfigError> {
        Ok(Self {
            density: clamp_density(self.density)?,
            speed: check_speed(self.speed)?,
            ..self
        })
    }
}

pub(crate) fn clamp_density(density: f32) -> Result<f32, ConfigError> {
    if density.is_nan() {
        return Err(ConfigError::InvalidDensity(density));
    }
    let clamped = density.clamp(0.0, 1.0);
    if clamped != density {
        warn!("density {density} outside [0, 1], clamped to {clamped}");
    }
    Ok(clamped)
}

pub(crate) fn check_speed(speed: f32) -> Result<f32, ConfigError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(ConfigError::InvalidSpeed(speed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            interval_ms: 5000,
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub animation: AnimationConfig,
    pub carousel: CarouselConfig,
    /// Size assumed until the host reports the real surface.
    pub viewport: Viewport,
    /// Optional JSON or TOML content pack; relative paths resolve against
    /// the config file's directory.
    pub content: Option<PathBuf>,
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validated()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let (Some(content), Some(dir)) = (config.content.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = dir.join(&*content);
            }
        }
        Ok(config)
    }

    /// Resolves the config from `KEEPSAKE_CONFIG`, then `./keepsake.toml`,
    /// then the built-in defaults.
    pub fn discover() -> Result<(Self, ConfigSource), ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let path = match explicit {
            Some(path) => Some(path),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.is_file().then_some(local)
            }
        };
        match path {
            Some(path) => {
                let config = Self::load(&path)?;
                info!("loaded config from {}", path.display());
                Ok((config, ConfigSource::File(path)))
            }
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        Ok(Self {
            animation: self.animation.validated()?,
            carousel: self.carousel.validated()?,
            viewport: Viewport::new(self.viewport.width, self.viewport.height)?,
            content: self.content,
        })
    }

    pub fn content_pack(&self) -> Result<ContentPack, ConfigError> {
        match &self.content {
            Some(path) => ContentPack::load(path),
            None => Ok(ContentPack::default()),
        }
    }
}
