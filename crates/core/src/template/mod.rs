use serde::Serialize;

use crate::{
    config::ResolvedStudio,
    geometry::ORIGIN,
    layout::{equation_stack, make_title, Element, Group, StackOptions, TitleOptions},
    scene::{SceneInstance, SceneSettings, TeardownPlan},
    timing::TimingPreset,
};

/// A laid-out element with the id a scene refers to it by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedGroup {
    pub id: String,
    pub group: Group,
}

/// Starting point for a new narrated scene: a themed title, the key
/// equations stacked in the middle, and the closing fade-out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneTemplate {
    pub settings: SceneSettings,
    pub timing: TimingPreset,
    pub elements: Vec<NamedGroup>,
    pub teardown: TeardownPlan,
}

const EQUATION_FONT_SIZE: f64 = 48.0;
const EQUATION_OUTER_BUFF: f64 = 1.0;

impl SceneTemplate {
    pub fn generate(studio: &ResolvedStudio, title: &str, equations: &[String]) -> Self {
        let theme = &studio.theme;
        let mut scene = SceneInstance::new(studio.scene.clone());
        let mut elements = Vec::new();

        let heading = make_title(
            title,
            TitleOptions {
                color: theme.text.clone(),
                ..Default::default()
            },
        );
        scene.add("title");
        elements.push(NamedGroup {
            id: "title".to_string(),
            group: heading,
        });

        if !equations.is_empty() {
            // Alternate accent and primary so neighbouring lines stay distinct.
            let typeset = equations.iter().enumerate().map(|(i, tex)| {
                let color = if i % 2 == 0 { &theme.accent } else { &theme.primary };
                Element::math(tex.as_str(), color.as_str(), EQUATION_FONT_SIZE)
            });
            let stack = equation_stack(
                typeset,
                StackOptions {
                    position: ORIGIN,
                    outer_buff: EQUATION_OUTER_BUFF,
                    ..Default::default()
                },
            );
            scene.add("equations");
            elements.push(NamedGroup {
                id: "equations".to_string(),
                group: stack,
            });
        }

        tracing::debug!(title, equations = equations.len(), "generated scene template");
        Self {
            settings: studio.scene.clone(),
            timing: studio.timing,
            elements,
            teardown: scene.tear_down(),
        }
    }
}
