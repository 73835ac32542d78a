//! Render settings loaded from a JSON file.
//!
//! Every field is optional in the file; missing fields take the defaults
//! of the reference render (1000x1000, 1 radian field of view, depth 4).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Largest accepted recursion depth.
pub const MAX_DEPTH_LIMIT: u32 = 64;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Horizontal field of view in radians
    pub fov: f32,

    /// Deepest recursion level that still shades a hit
    pub max_depth: u32,

    /// Color returned for misses and past the depth limit
    pub background: [f32; 3],

    /// Output path; the extension selects the encoder
    pub output: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            fov: 1.0,
            max_depth: 4,
            background: [0.2, 0.7, 0.8],
            output: PathBuf::from("render.ppm"),
        }
    }
}

impl RenderSettings {
    /// Load and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&text)?;
        log::info!("Loaded render settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json(text: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the renderer cannot use.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::Invalid(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        if self.width.checked_mul(self.height).is_none() {
            return Err(SettingsError::Invalid(format!(
                "resolution {}x{} has too many pixels",
                self.width, self.height
            )));
        }

        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(SettingsError::Invalid(format!(
                "max_depth must be at most {}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            )));
        }

        if !(self.fov > 0.0 && self.fov < std::f32::consts::PI) {
            return Err(SettingsError::Invalid(format!(
                "fov must be in (0, pi) radians, got {}",
                self.fov
            )));
        }

        Ok(())
    }
}
