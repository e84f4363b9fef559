use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{theme::Theme, Result, StudioError};

pub const DEFAULT_BACKGROUND: &str = "#1a1a2e";
/// Run time of the closing fade-out, in seconds.
pub const FADE_OUT_RUN_TIME: f64 = 1.0;

/// Text-to-speech backend that narrates a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SpeechService {
    #[default]
    Gtts,
    ElevenLabs,
    Azure,
    /// Records the author's own voice instead of synthesizing one.
    Recorder,
}

impl SpeechService {
    pub const ALL: [SpeechService; 4] = [
        SpeechService::Gtts,
        SpeechService::ElevenLabs,
        SpeechService::Azure,
        SpeechService::Recorder,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SpeechService::Gtts => "gtts",
            SpeechService::ElevenLabs => "elevenlabs",
            SpeechService::Azure => "azure",
            SpeechService::Recorder => "recorder",
        }
    }
}

impl fmt::Display for SpeechService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpeechService {
    type Err = StudioError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        SpeechService::ALL
            .into_iter()
            .find(|service| service.name() == lowered)
            .ok_or_else(|| StudioError::UnknownSpeechService {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for SpeechService {
    type Error = StudioError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SpeechService> for String {
    fn from(value: SpeechService) -> Self {
        value.name().to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraKind {
    #[default]
    Static,
    /// Camera that can zoom and pan during the scene.
    Moving,
}

/// Per-scene boilerplate that would otherwise be repeated in every scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub background_color: String,
    pub speech_service: SpeechService,
    pub camera: CameraKind,
    /// Fade out everything still on screen once the scene body finishes.
    pub auto_fade_out: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND.to_string(),
            speech_service: SpeechService::default(),
            camera: CameraKind::default(),
            auto_fade_out: true,
        }
    }
}

impl SceneSettings {
    /// Default settings with the background taken from `theme`.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            background_color: theme.bg.clone(),
            ..Self::default()
        }
    }

    pub fn teardown<S: AsRef<str>>(&self, on_screen: &[S]) -> TeardownPlan {
        if !self.auto_fade_out || on_screen.is_empty() {
            return TeardownPlan::default();
        }
        TeardownPlan {
            fade_out: on_screen.iter().map(|id| id.as_ref().to_string()).collect(),
            run_time: FADE_OUT_RUN_TIME,
        }
    }
}

/// Animations to play when a scene ends. All fades run together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeardownPlan {
    pub fade_out: Vec<String>,
    pub run_time: f64,
}

impl TeardownPlan {
    pub fn is_empty(&self) -> bool {
        self.fade_out.is_empty()
    }
}

/// A running scene: its settings plus the ids of everything on screen.
#[derive(Debug, Clone)]
pub struct SceneInstance {
    pub settings: SceneSettings,
    on_screen: Vec<String>,
}

impl SceneInstance {
    pub fn new(settings: SceneSettings) -> Self {
        tracing::debug!(
            background = %settings.background_color,
            speech = %settings.speech_service,
            camera = ?settings.camera,
            "scene set up"
        );
        Self {
            settings,
            on_screen: Vec::new(),
        }
    }

    pub fn add(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.on_screen.contains(&id) {
            self.on_screen.push(id);
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.on_screen.len();
        self.on_screen.retain(|existing| existing != id);
        self.on_screen.len() != before
    }

    pub fn on_screen(&self) -> &[String] {
        &self.on_screen
    }

    /// Ends the scene, returning the closing animations. The scene is empty
    /// afterwards whether or not anything was faded.
    pub fn tear_down(&mut self) -> TeardownPlan {
        let plan = self.settings.teardown(&self.on_screen);
        tracing::debug!(faded = plan.fade_out.len(), "scene torn down");
        self.on_screen.clear();
        plan
    }
}
