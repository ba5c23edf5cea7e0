//! The simulation engine seam
//!
//! Scene setup talks to the engine only through [`SceneEngine`]: the engine owns
//! the scene graph for the life of the process, imports scene files, and pumps
//! its own frame loop.

pub mod headless;

use std::path::Path;

use crate::core::Result;
use crate::scene::{NodePath, SceneNodeId, SceneStage};

pub use headless::{EngineConfig, HeadlessEngine};

pub trait SceneEngine {
    type Stage: SceneStage;

    /// Replace the current scene with an empty one.
    fn new_stage(&mut self) -> Result<()>;

    fn stage(&self) -> &Self::Stage;

    fn stage_mut(&mut self) -> &mut Self::Stage;

    /// Import a scene file so its root lands at `target`.
    ///
    /// With `replace_existing`, anything already at `target` is removed first.
    fn load(&mut self, path: &Path, target: &NodePath, replace_existing: bool) -> Result<SceneNodeId>;

    /// Designate `path` as the scene's entry node. Returns false if it does not exist.
    fn set_default_root(&mut self, path: &NodePath) -> bool {
        self.stage_mut().set_default_root(path)
    }

    /// Reconcile unit and scale mismatches between imported content and the stage.
    fn resolve_scale_issues(&mut self);

    /// Pump one frame.
    fn update(&mut self);

    /// False once the viewer has been closed.
    fn is_running(&self) -> bool;

    /// Save the scene under the default root to `path`.
    fn export(&self, path: &Path) -> Result<()>;

    /// Shut the engine down.
    fn close(&mut self);
}
