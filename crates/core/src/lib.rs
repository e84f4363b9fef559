//! Core library for Manim Studio.
//!
//! Boilerplate removal for educational animation videos: named color themes
//! and timing presets, a normalizer that maps raw data into scene
//! coordinates, layout helpers for titles, equation stacks, legends and
//! labeled arrows, and the per-scene settings (background, narration backend,
//! closing fade-out) every narrated scene repeats. Nothing here renders; the
//! output is plain data for an animation backend to consume.

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod mapping;
pub mod scene;
pub mod template;
pub mod theme;
pub mod timing;

pub use config::{ResolvedStudio, SceneOverrides, StudioConfig};
pub use error::{PresetKind, Result, StudioError};
pub use geometry::{BoundingBox, Point3};
pub use layout::{
    equation_stack, labeled_arrow, make_legend, make_title, ArrowOptions, Element, ElementKind,
    Group, LegendOptions, Node, Placement, StackOptions, TitleOptions,
};
pub use mapping::{make_normalizer, Normalizer, Point2, DEFAULT_TARGET_SCALE};
pub use scene::{CameraKind, SceneInstance, SceneSettings, SpeechService, TeardownPlan};
pub use template::{NamedGroup, SceneTemplate};
pub use theme::{get_theme, theme_names, ColorRole, Theme};
pub use timing::{get_timing, timing_names, DurationRole, TimingPreset};
