//! Single-pass scene mutation: visibility fixes, colliders, and rigid bodies.
//!
//! The pass only adds or updates capability markers and visibility. It never
//! touches transform attributes and never adds or removes nodes.

use crate::physics::{add_colliders, add_rigid_body, Approximation};
use crate::scene::{hide_nodes, SceneNodeId, SceneStage};

use super::rules::ClassifierConfig;

/// Hide light blockers (and optionally the enclosure), then give every mesh
/// under `root` a collider and, for furniture, rigid-body dynamics.
///
/// Safe to run repeatedly: a second pass adds no markers and changes no visibility.
pub fn modify_environment<S: SceneStage + ?Sized>(
    stage: &mut S,
    root: SceneNodeId,
    coarse: Approximation,
    hide_enclosure: bool,
    config: &ClassifierConfig,
) {
    log::info!("Fixing ceiling lights...");
    let hidden = hide_nodes(stage, &config.light_blocker_markers, root, config.light_blocker_kind);
    log::debug!("Hid {} light-blocking nodes", hidden);

    if hide_enclosure {
        log::info!("Hiding ceiling and exterior walls...");
        let hidden = hide_nodes(stage, &config.enclosure_markers, root, None);
        log::debug!("Hid {} enclosure nodes", hidden);
    }

    let mut meshes = 0usize;
    let mut precise = 0usize;
    let mut rigid = 0usize;

    for id in stage.subtree(root) {
        if !stage.kind_of(id).is_some_and(|k| k.is_mesh()) {
            continue;
        }
        let Some(name) = stage.name_of(id).map(str::to_owned) else {
            continue;
        };
        meshes += 1;

        let approximation = match config.collider_rule(&name) {
            Some(rule) => {
                log::info!("Adding {} collider to {}", rule.approximation, name);
                precise += 1;
                rule.approximation
            }
            None => coarse,
        };
        add_colliders(stage, id, approximation);

        if config.is_rigid_body(&name) {
            log::info!("Adding rigid body dynamics to {}", name);
            if approximation == Approximation::TriangleMesh {
                log::warn!("{} is a rigid body with a triangle mesh collider; it will not simulate as dynamic", name);
            }
            if add_rigid_body(stage, id, &config.rigid_body) {
                rigid += 1;
            }
        }
    }

    log::info!(
        "Processed {} meshes: {} by collider rule, {} new rigid bodies",
        meshes, precise, rigid
    );
}
