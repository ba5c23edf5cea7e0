//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::classify::ClassifierConfig;
use crate::core::Result;
use crate::engine::EngineConfig;
use crate::physics::Approximation;
use crate::setup::SetupOptions;

#[derive(Parser, Debug)]
#[command(name = "scenerig")]
#[command(about = "Load a scene into the simulation viewer with colliders and rigid bodies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the scene file
    pub scene_path: PathBuf,

    /// Collision approximation for meshes no collider rule matches (short form: -ca)
    #[arg(long = "coarse-approximation", value_enum, default_value_t = Approximation::ConvexHull)]
    pub coarse_approximation: Approximation,

    /// Hide ceiling and exterior walls (default: true)
    #[arg(long, default_value_t = true)]
    pub hide_walls: bool,

    /// Resolve the scene path relative to this directory
    #[arg(short, long)]
    pub base_path: Option<PathBuf>,

    /// JSON file overriding the classification rules
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Write the prepared scene here after the viewer closes
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Stop the viewer after this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Disable ANSI colors in console output
    #[arg(long)]
    pub no_color: bool,
}

/// Rewrite the two-letter `-ca` option into its long form.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-ca" {
                "--coarse-approximation".to_string()
            } else if let Some(value) = arg.strip_prefix("-ca=") {
                format!("--coarse-approximation={}", value)
            } else {
                arg
            }
        })
        .collect()
}

impl Cli {
    /// Parse the process arguments.
    pub fn from_env() -> Self {
        Cli::parse_from(normalize_args(std::env::args()))
    }

    /// Scene path, joined onto `--base-path` when given (leading `/` stripped).
    pub fn resolve_scene_path(&self) -> PathBuf {
        match &self.base_path {
            Some(base) => {
                let relative = self.scene_path.strip_prefix("/").unwrap_or(&self.scene_path);
                base.join(relative)
            }
            None => self.scene_path.clone(),
        }
    }

    /// Classification rules from `--rules`, or the built-in defaults.
    pub fn classifier_config(&self) -> Result<ClassifierConfig> {
        match &self.rules {
            Some(path) => ClassifierConfig::from_path(path),
            None => Ok(ClassifierConfig::default()),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_frames: self.frames,
            ..Default::default()
        }
    }

    pub fn setup_options(&self, classifier: ClassifierConfig) -> SetupOptions {
        SetupOptions {
            coarse: self.coarse_approximation,
            hide_enclosure: self.hide_walls,
            classifier,
            ..SetupOptions::new(self.resolve_scene_path())
        }
    }
}
