//! Pacing presets for narration and animation.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::PresetKind, Result, StudioError};

/// Pace used when none is requested.
pub const DEFAULT_PACE: &str = "normal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationRole {
    Fast,
    Normal,
    Slow,
    PauseShort,
    PauseMedium,
    PauseLong,
}

impl DurationRole {
    pub const ALL: [DurationRole; 6] = [
        DurationRole::Fast,
        DurationRole::Normal,
        DurationRole::Slow,
        DurationRole::PauseShort,
        DurationRole::PauseMedium,
        DurationRole::PauseLong,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            DurationRole::Fast => "fast",
            DurationRole::Normal => "normal",
            DurationRole::Slow => "slow",
            DurationRole::PauseShort => "pause_short",
            DurationRole::PauseMedium => "pause_medium",
            DurationRole::PauseLong => "pause_long",
        }
    }
}

impl fmt::Display for DurationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DurationRole {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self> {
        DurationRole::ALL
            .into_iter()
            .find(|role| role.key() == s)
            .ok_or_else(|| StudioError::InvalidArgument(format!("unknown duration role `{s}`")))
    }
}

/// Durations in seconds. Animation run times (`fast`, `normal`, `slow`) are
/// expected to increase in that order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingPreset {
    pub fast: f64,
    pub normal: f64,
    pub slow: f64,
    pub pause_short: f64,
    pub pause_medium: f64,
    pub pause_long: f64,
}

impl TimingPreset {
    pub fn get(&self, role: DurationRole) -> f64 {
        match role {
            DurationRole::Fast => self.fast,
            DurationRole::Normal => self.normal,
            DurationRole::Slow => self.slow,
            DurationRole::PauseShort => self.pause_short,
            DurationRole::PauseMedium => self.pause_medium,
            DurationRole::PauseLong => self.pause_long,
        }
    }

    pub fn to_map(&self) -> BTreeMap<String, f64> {
        DurationRole::ALL
            .into_iter()
            .map(|role| (role.key().to_string(), self.get(role)))
            .collect()
    }
}

static TIMING_PRESETS: &[(&str, TimingPreset)] = &[
    (
        "relaxed",
        TimingPreset {
            fast: 0.6,
            normal: 1.2,
            slow: 2.5,
            pause_short: 0.8,
            pause_medium: 1.5,
            pause_long: 3.0,
        },
    ),
    (
        "normal",
        TimingPreset {
            fast: 0.4,
            normal: 0.8,
            slow: 1.8,
            pause_short: 0.5,
            pause_medium: 1.0,
            pause_long: 2.0,
        },
    ),
    (
        "fast",
        TimingPreset {
            fast: 0.25,
            normal: 0.5,
            slow: 1.0,
            pause_short: 0.3,
            pause_medium: 0.6,
            pause_long: 1.0,
        },
    ),
];

/// Registered pace names in sorted order.
pub fn timing_names() -> Vec<&'static str> {
    let mut names: Vec<_> = TIMING_PRESETS.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names
}

/// Looks up a timing preset by exact name.
pub fn get_timing(name: &str) -> Result<TimingPreset> {
    match TIMING_PRESETS.iter().find(|(candidate, _)| *candidate == name) {
        Some((_, preset)) => {
            tracing::debug!(name, "loaded timing preset");
            Ok(*preset)
        }
        None => Err(StudioError::unknown_preset(
            PresetKind::Timing,
            name,
            timing_names(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_has_six_increasing_roles() {
        for name in timing_names() {
            let preset = get_timing(name).unwrap();
            assert_eq!(preset.to_map().len(), 6);
            assert!(preset.fast < preset.normal && preset.normal < preset.slow, "{name}");
            assert!(DurationRole::ALL.iter().all(|role| preset.get(*role) > 0.0));
        }
    }

    #[test]
    fn relaxed_is_slower_than_fast() {
        let relaxed = get_timing("relaxed").unwrap();
        let fast = get_timing("fast").unwrap();
        assert!(relaxed.normal > fast.normal);
    }

    #[test]
    fn default_pace_is_registered() {
        assert_eq!(get_timing(DEFAULT_PACE).unwrap().normal, 0.8);
    }

    #[test]
    fn copies_do_not_leak_mutations() {
        let mut mine = get_timing("normal").unwrap();
        mine.slow = 99.0;
        assert_eq!(get_timing("normal").unwrap().slow, 1.8);
    }

    #[test]
    fn unknown_pace_is_rejected() {
        let err = get_timing("ludicrous").unwrap_err();
        assert!(matches!(
            err,
            StudioError::UnknownPreset { kind: PresetKind::Timing, .. }
        ));
        assert!(err.to_string().contains("Available: fast, normal, relaxed"));
    }

    #[test]
    fn map_uses_original_keys() {
        let map = get_timing("fast").unwrap().to_map();
        assert_eq!(map["pause_short"], 0.3);
        assert_eq!("pause_long".parse::<DurationRole>().unwrap(), DurationRole::PauseLong);
    }
}
