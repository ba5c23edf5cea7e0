//! Capability markers (applied physics schemas)

use std::fmt;

/// An orthogonal physics behavior a node can acquire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Generic collision participation, any geometric primitive.
    Collision,
    /// Mesh collision with an approximation token.
    MeshCollision,
    /// Engine-specific exact triangle-mesh collision.
    TriangleMeshCollision,
    /// Rigid-body dynamics.
    RigidBody,
    /// Engine-specific rigid-body tuning (gravity, damping).
    PhysxRigidBody,
}

impl Capability {
    /// Applied schema name.
    pub fn schema_name(self) -> &'static str {
        match self {
            Capability::Collision => "PhysicsCollisionAPI",
            Capability::MeshCollision => "PhysicsMeshCollisionAPI",
            Capability::TriangleMeshCollision => "PhysxTriangleMeshCollisionAPI",
            Capability::RigidBody => "PhysicsRigidBodyAPI",
            Capability::PhysxRigidBody => "PhysxRigidBodyAPI",
        }
    }

    /// Inverse of [`Capability::schema_name`].
    pub fn from_schema_name(name: &str) -> Option<Self> {
        [
            Capability::Collision,
            Capability::MeshCollision,
            Capability::TriangleMeshCollision,
            Capability::RigidBody,
            Capability::PhysxRigidBody,
        ]
        .into_iter()
        .find(|c| c.schema_name() == name)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_name())
    }
}
