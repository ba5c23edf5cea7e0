//! One-shot scene setup pipeline
//!
//! new stage → load → default root → stats → snapshot → modify → snapshot →
//! verify → scale fixup. A failed load is logged and setup carries on with
//! whatever the stage holds; only engine errors outside the load abort setup.

use std::path::PathBuf;

use crate::classify::{modify_environment, ClassifierConfig};
use crate::core::Result;
use crate::engine::SceneEngine;
use crate::physics::Approximation;
use crate::scene::{NodePath, SceneStage, SceneStats, StatsKeywords};
use crate::verify::{verify_positions_unchanged, TransformSnapshot};

/// Path the scene file is loaded onto.
pub const ENVIRONMENT_ROOT: &str = "/Environment";

/// Inputs to [`setup_scene`]
#[derive(Clone, Debug)]
pub struct SetupOptions {
    /// Scene file to import
    pub scene_path: PathBuf,
    /// Where the imported scene lands; also made the default root
    pub root: NodePath,
    /// Approximation for meshes no collider rule matches
    pub coarse: Approximation,
    /// Hide ceiling and exterior walls
    pub hide_enclosure: bool,
    pub classifier: ClassifierConfig,
    pub stats_keywords: StatsKeywords,
}

impl SetupOptions {
    pub fn new(scene_path: impl Into<PathBuf>) -> Self {
        Self {
            scene_path: scene_path.into(),
            root: NodePath::new(ENVIRONMENT_ROOT).unwrap_or_else(|_| NodePath::root()),
            coarse: Approximation::default(),
            hide_enclosure: true,
            classifier: ClassifierConfig::default(),
            stats_keywords: StatsKeywords::default(),
        }
    }
}

/// What setup achieved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetupReport {
    /// The scene file imported without error
    pub loaded: bool,
    /// The root was designated as the default root
    pub default_root_set: bool,
    /// Transforms recorded before mutation
    pub captured: usize,
    /// No recorded transform changed during mutation
    pub positions_preserved: bool,
    pub stats: SceneStats,
}

/// Load the scene and prepare it for simulation.
pub fn setup_scene<E: SceneEngine>(engine: &mut E, options: &SetupOptions) -> Result<SetupReport> {
    let mut report = SetupReport::default();

    log::info!("=== Starting Environment Setup ===");
    log::info!("File: {}", options.scene_path.display());
    log::info!("Coarse approximation: {}", options.coarse);
    log::info!("Hide walls: {}", options.hide_enclosure);

    log::info!("Creating new stage...");
    engine.new_stage()?;

    log::info!("Loading environment: {}", options.scene_path.display());
    match engine.load(&options.scene_path, &options.root, true) {
        Ok(_) => {
            report.loaded = true;
            crate::success!("Environment successfully loaded to: {}", options.root);
        }
        Err(e) => log::error!("Loading failed: {}", e),
    }

    log::info!("Setting {} as default root...", options.root);
    report.default_root_set = engine.set_default_root(&options.root);
    if report.default_root_set {
        log::info!("Default root set to: {}", options.root);
    } else {
        log::warn!(
            "Warning: node at path '{}' is not valid. Cannot set as default root.",
            options.root
        );
    }

    // Let the engine settle the import
    engine.update();

    let root = engine.stage().node_at(&options.root);
    if let Some(root) = root {
        report.stats = SceneStats::collect(engine.stage(), root, &options.stats_keywords);
        log::info!(
            "Scene contents: {} nodes, {} meshes, {} furniture, {} decorative",
            report.stats.total, report.stats.meshes, report.stats.furniture, report.stats.decorative
        );
    }

    log::info!("Capturing initial object positions...");
    let before = TransformSnapshot::capture_path(engine.stage(), &options.root);
    report.captured = before.len();
    log::info!("Captured {} object transforms", before.len());

    log::info!("Setting up environment...");
    match root {
        Some(root) => modify_environment(
            engine.stage_mut(),
            root,
            options.coarse,
            options.hide_enclosure,
            &options.classifier,
        ),
        None => log::warn!("Nothing to set up: {} does not exist", options.root),
    }

    log::info!("Verifying object positions...");
    let after = TransformSnapshot::capture_path(engine.stage(), &options.root);
    report.positions_preserved = verify_positions_unchanged(&before, &after);

    log::info!("Environment setup complete.");

    log::info!("Resolving scaling issues...");
    engine.resolve_scale_issues();
    log::info!("Scaling issues resolved");

    crate::success!("=== Environment Setup Complete! ===");
    Ok(report)
}
