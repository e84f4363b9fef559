use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    mapping::DEFAULT_TARGET_SCALE,
    scene::{CameraKind, SceneSettings, SpeechService},
    theme::{get_theme, Theme},
    timing::{get_timing, TimingPreset, DEFAULT_PACE},
    Result, StudioError,
};

pub const DEFAULT_THEME: &str = "dark_swiss";

/// Top-level project configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub theme: String,
    pub pace: String,
    pub target_scale: f64,
    /// Scene overrides. A background color given here wins over the theme's.
    pub scene: SceneOverrides,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            pace: DEFAULT_PACE.to_string(),
            target_scale: DEFAULT_TARGET_SCALE,
            scene: SceneOverrides::default(),
        }
    }
}

/// Scene settings as written in the config file; unset fields fall back to
/// the theme or the scene defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOverrides {
    pub background_color: Option<String>,
    pub speech_service: Option<SpeechService>,
    pub camera: Option<CameraKind>,
    pub auto_fade_out: Option<bool>,
}

impl StudioConfig {
    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.display(),
            theme = %config.theme,
            pace = %config.pace,
            "loaded config"
        );
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Looks up the configured presets and merges scene settings.
    pub fn resolve(&self) -> Result<ResolvedStudio> {
        if !(self.target_scale.is_finite() && self.target_scale > 0.0) {
            return Err(StudioError::InvalidArgument(format!(
                "target_scale must be positive, got {}",
                self.target_scale
            )));
        }

        let theme = get_theme(&self.theme)?;
        let timing = get_timing(&self.pace)?;

        let mut scene = SceneSettings::themed(&theme);
        if let Some(background) = &self.scene.background_color {
            scene.background_color = background.clone();
        }
        if let Some(service) = self.scene.speech_service {
            scene.speech_service = service;
        }
        if let Some(camera) = self.scene.camera {
            scene.camera = camera;
        }
        if let Some(fade) = self.scene.auto_fade_out {
            scene.auto_fade_out = fade;
        }

        Ok(ResolvedStudio {
            theme_name: self.theme.clone(),
            theme,
            pace: self.pace.clone(),
            timing,
            target_scale: self.target_scale,
            scene,
        })
    }
}

/// Configuration with every preset looked up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStudio {
    pub theme_name: String,
    pub theme: Theme,
    pub pace: String,
    pub timing: TimingPreset,
    pub target_scale: f64,
    pub scene: SceneSettings,
}
