use std::fmt;

/// Result alias that carries the custom [`StudioError`] type.
pub type Result<T> = std::result::Result<T, StudioError>;

/// Which registry a failed preset lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Theme,
    Timing,
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetKind::Theme => f.write_str("theme"),
            PresetKind::Timing => f.write_str("timing preset"),
        }
    }
}

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// A theme or timing preset name that is not registered.
    #[error("Unknown {kind} `{name}`. Available: {}", .available.join(", "))]
    UnknownPreset {
        kind: PresetKind,
        name: String,
        /// Registered names, sorted.
        available: Vec<&'static str>,
    },
    /// Coordinate scaling was asked to work on zero points.
    #[error("cannot scale an empty point set")]
    EmptyInput,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unknown speech service `{name}`. Supported: gtts, elevenlabs, azure, recorder")]
    UnknownSpeechService { name: String },
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StudioError {
    pub(crate) fn unknown_preset(
        kind: PresetKind,
        name: &str,
        available: Vec<&'static str>,
    ) -> Self {
        tracing::warn!(%kind, name, "unknown preset requested");
        Self::UnknownPreset {
            kind,
            name: name.to_string(),
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_preset_lists_available_names() {
        let err = StudioError::unknown_preset(PresetKind::Theme, "neon", vec!["light", "nord"]);
        let text = err.to_string();
        assert!(text.contains("Unknown theme `neon`"));
        assert!(text.ends_with("Available: light, nord"));
    }

    #[test]
    fn io_and_json_failures_convert_with_question_mark() {
        fn read(path: &std::path::Path) -> Result<serde_json::Value> {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read(&dir.path().join("absent")), Err(StudioError::Io(_))));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ nope").unwrap();
        let err = read(&bad).unwrap_err();
        assert!(matches!(err, StudioError::Json(_)));
        assert!(err.to_string().starts_with("malformed JSON"));
    }

    #[test]
    fn timing_kind_reads_naturally() {
        let err = StudioError::unknown_preset(PresetKind::Timing, "ludicrous", vec!["fast"]);
        assert!(err.to_string().starts_with("Unknown timing preset"));
    }
}
