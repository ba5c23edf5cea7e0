//! Attaching collision and rigid-body capabilities to scene nodes
//!
//! Every function here checks for an existing marker before applying one, so
//! running them repeatedly over the same nodes never stacks duplicates.
//! Attribute values are overwritten in place.

use serde::{Deserialize, Serialize};

use crate::scene::node::{attr, AttrValue, SceneNodeId};
use crate::scene::SceneStage;

use super::{Approximation, Capability};

/// Attribute name for the optional angular damping override.
pub const ANGULAR_DAMPING: &str = "physxRigidBody:angularDamping";

/// Tuning applied alongside rigid-body dynamics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigidBodyOptions {
    /// Exclude the body from gravity.
    pub disable_gravity: bool,
    /// Angular damping override; engine default when absent.
    pub angular_damping: Option<f64>,
}

/// Add collision to every geometric primitive under (and including) `root`.
///
/// Gprims get a collision marker with collision enabled. Meshes additionally get
/// either the triangle-mesh marker (for [`Approximation::TriangleMesh`]) or a
/// mesh-collision marker carrying the approximation token.
pub fn add_colliders<S: SceneStage + ?Sized>(stage: &mut S, root: SceneNodeId, approximation: Approximation) {
    for id in stage.subtree(root) {
        let Some(kind) = stage.kind_of(id) else {
            continue;
        };

        if kind.is_gprim() {
            stage.apply_capability(id, Capability::Collision);
            stage.set_attribute(id, attr::COLLISION_ENABLED, AttrValue::Bool(true));
        }

        if kind.is_mesh() {
            if approximation == Approximation::TriangleMesh {
                stage.apply_capability(id, Capability::TriangleMeshCollision);
            } else {
                stage.apply_capability(id, Capability::MeshCollision);
                stage.set_attribute(id, attr::APPROXIMATION, AttrValue::token(approximation.as_str()));
            }
        }
    }
}

/// Attach rigid-body dynamics to a node that already collides.
///
/// Returns true if the rigid-body marker was newly attached. Nodes without a
/// collision marker are skipped with a warning.
pub fn add_rigid_body<S: SceneStage + ?Sized>(stage: &mut S, id: SceneNodeId, options: &RigidBodyOptions) -> bool {
    if !stage.has_capability(id, Capability::Collision) {
        log::warn!(
            "Node '{}' has no collision capability, skipping rigid body dynamics",
            stage.path_of(id).map(|p| p.as_str()).unwrap_or("<unknown>")
        );
        return false;
    }

    let attached = stage.apply_capability(id, Capability::RigidBody);
    stage.set_attribute(id, attr::RIGID_BODY_ENABLED, AttrValue::Bool(true));

    stage.apply_capability(id, Capability::PhysxRigidBody);
    stage.set_attribute(id, attr::DISABLE_GRAVITY, AttrValue::Bool(options.disable_gravity));
    if let Some(damping) = options.angular_damping {
        stage.set_attribute(id, ANGULAR_DAMPING, AttrValue::Double(damping));
    }

    attached
}
