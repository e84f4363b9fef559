use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use manim_studio_core::{
    get_theme, get_timing, theme_names, Normalizer, Point2, Point3, SceneTemplate, StudioConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> manim_studio_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Themes => list_themes(),
        Commands::Theme { name } => print_theme(&name),
        Commands::Timing { pace } => {
            let pace = match pace {
                Some(pace) => pace,
                None => load_config(config_path)?.pace,
            };
            print_timing(&pace)
        }
        Commands::Scale {
            input,
            target_scale,
        } => {
            let target_scale = match target_scale {
                Some(scale) => scale,
                None => load_config(config_path)?.target_scale,
            };
            run_scale(&input, target_scale)
        }
        Commands::Scene => print_scene(&load_config(config_path)?),
        Commands::Template { title, equations } => {
            print_template(&load_config(config_path)?, &title, &equations)
        }
    }
}

/// Reads the project config, or falls back to defaults when none was given.
/// Only commands that use the config call this.
fn load_config(path: Option<&Path>) -> manim_studio_core::Result<StudioConfig> {
    match path {
        Some(path) => StudioConfig::load(path),
        None => Ok(StudioConfig::default()),
    }
}

fn list_themes() -> manim_studio_core::Result<()> {
    for name in theme_names() {
        println!("{name}");
    }
    Ok(())
}

fn print_theme(name: &str) -> manim_studio_core::Result<()> {
    tracing::info!(name, "printing theme");
    let theme = get_theme(name)?;
    println!("{}", serde_json::to_string_pretty(&theme)?);
    Ok(())
}

fn print_timing(pace: &str) -> manim_studio_core::Result<()> {
    tracing::info!(pace, "printing timing preset");
    let timing = get_timing(pace)?;
    println!("{}", serde_json::to_string_pretty(&timing)?);
    Ok(())
}

fn run_scale(input: &Path, target_scale: f64) -> manim_studio_core::Result<()> {
    tracing::info!(?input, target_scale, "scaling point sets");
    let raw = std::fs::read_to_string(input)?;
    let point_sets: Vec<Vec<Point2>> = serde_json::from_str(&raw)?;

    let normalizer = Normalizer::fit(point_sets.as_slice(), target_scale)?;
    let mapped: Vec<Vec<Point3>> = point_sets
        .iter()
        .map(|set| normalizer.apply_all(set))
        .collect();
    println!("{}", serde_json::to_string_pretty(&mapped)?);
    Ok(())
}

fn print_scene(config: &StudioConfig) -> manim_studio_core::Result<()> {
    tracing::info!(theme = %config.theme, pace = %config.pace, "resolving project config");
    let resolved = config.resolve()?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

fn print_template(
    config: &StudioConfig,
    title: &str,
    equations: &[String],
) -> manim_studio_core::Result<()> {
    tracing::info!(title, equations = equations.len(), "generating scene template");
    let resolved = config.resolve()?;
    let template = SceneTemplate::generate(&resolved, title, equations);
    println!("{}", serde_json::to_string_pretty(&template)?);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(
    name = "manim-studio",
    author,
    version,
    about = "Presets and scaling helpers for narrated animation scenes",
    long_about = None
)]
struct Cli {
    /// Project config file (JSON).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered color themes.
    Themes,
    /// Print a color theme as JSON.
    Theme {
        /// Theme name, e.g. `dark_swiss`.
        name: String,
    },
    /// Print a timing preset as JSON.
    Timing {
        /// One of `relaxed`, `normal`, `fast`. Defaults to the config's pace.
        pace: Option<String>,
    },
    /// Map data point sets into scene coordinates.
    Scale {
        /// JSON file holding an array of point sets: `[[[x, y], ...], ...]`.
        input: PathBuf,
        /// Half-width of the scaled data in scene units.
        #[arg(short, long)]
        target_scale: Option<f64>,
    },
    /// Print the resolved project configuration.
    Scene,
    /// Lay out a starter scene: themed title, equation stack, closing fade.
    Template {
        /// Title shown at the top of the scene.
        #[arg(short, long, default_value = "Your Topic Here")]
        title: String,
        /// LaTeX source of an equation; repeat for more.
        #[arg(short, long = "equation")]
        equations: Vec<String>,
    },
}
