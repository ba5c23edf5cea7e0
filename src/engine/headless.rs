//! Windowless engine backed by the in-memory scene graph

use std::path::Path;
use std::time::Duration;

use glam::DVec3;

use crate::core::{Error, Result};
use crate::scene::node::attr;
use crate::scene::{AttrValue, NodePath, SceneDocument, SceneGraph, SceneNodeId, SceneStage};

use super::SceneEngine;

/// Configuration for the headless engine
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Wall-clock time each frame takes
    pub frame_time: Duration,
    /// Stop running after this many frames; run until closed when `None`
    pub max_frames: Option<u64>,
    /// Stage linear units, in meters
    pub meters_per_unit: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_time: Duration::from_millis(16), // ~60 Hz
            max_frames: None,
            meters_per_unit: 1.0,
        }
    }
}

/// A file imported onto the stage, awaiting unit reconciliation.
#[derive(Clone, Debug)]
struct Import {
    root: NodePath,
    meters_per_unit: f64,
}

pub struct HeadlessEngine {
    config: EngineConfig,
    stage: SceneGraph,
    imports: Vec<Import>,
    frames: u64,
    running: bool,
}

impl HeadlessEngine {
    pub fn new(config: EngineConfig) -> Self {
        log::debug!("Starting headless engine: {:?}", config);
        Self {
            config,
            stage: SceneGraph::new(),
            imports: Vec::new(),
            frames: 0,
            running: true,
        }
    }

    /// Frames pumped so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl SceneEngine for HeadlessEngine {
    type Stage = SceneGraph;

    fn new_stage(&mut self) -> Result<()> {
        self.stage = SceneGraph::new();
        self.imports.clear();
        Ok(())
    }

    fn stage(&self) -> &SceneGraph {
        &self.stage
    }

    fn stage_mut(&mut self) -> &mut SceneGraph {
        &mut self.stage
    }

    fn load(&mut self, path: &Path, target: &NodePath, replace_existing: bool) -> Result<SceneNodeId> {
        let doc = SceneDocument::from_path(path)
            .map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;

        if replace_existing {
            if let Some(existing) = self.stage.node_at(target) {
                self.stage.remove(existing);
                self.imports.retain(|i| !i.root.has_prefix(target));
            }
        }

        let root = doc
            .graft(&mut self.stage, target)
            .map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;
        self.imports.push(Import {
            root: target.clone(),
            meters_per_unit: doc.meters_per_unit,
        });
        Ok(root)
    }

    fn resolve_scale_issues(&mut self) {
        let stage_units = self.config.meters_per_unit;
        for import in &mut self.imports {
            let ratio = import.meters_per_unit / stage_units;
            if (ratio - 1.0).abs() < 1e-12 {
                continue;
            }
            let Some(id) = self.stage.node_at(&import.root) else {
                log::warn!("Imported root {} no longer exists, cannot fix its scale", import.root);
                continue;
            };

            let scale = self
                .stage
                .attribute(id, attr::SCALE)
                .and_then(AttrValue::as_double3)
                .unwrap_or(DVec3::ONE);
            self.stage.set_attribute(id, attr::SCALE, AttrValue::Double3(scale * ratio));
            log::info!(
                "Rescaled {} by {} ({} m/unit -> {} m/unit)",
                import.root, ratio, import.meters_per_unit, stage_units
            );
            import.meters_per_unit = stage_units;
        }
    }

    fn update(&mut self) {
        if !self.running {
            return;
        }
        self.frames += 1;
        if self.config.max_frames.is_some_and(|max| self.frames >= max) {
            self.running = false;
        }
        if !self.config.frame_time.is_zero() {
            std::thread::sleep(self.config.frame_time);
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn export(&self, path: &Path) -> Result<()> {
        let root = self
            .stage
            .default_root()
            .ok_or_else(|| Error::Scene("no default root to export".to_string()))?;
        let doc = SceneDocument::capture(&self.stage, root, self.config.meters_per_unit)
            .ok_or_else(|| Error::Scene("default root vanished during export".to_string()))?;
        doc.write_to(path)
    }

    fn close(&mut self) {
        self.running = false;
        log::debug!("Headless engine closed after {} frames", self.frames);
    }
}
