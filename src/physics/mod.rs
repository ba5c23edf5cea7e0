//! Physics capabilities that can be attached to scene nodes

pub mod approximation;
pub mod capability;
pub mod colliders;

pub use approximation::Approximation;
pub use capability::Capability;
pub use colliders::{add_colliders, add_rigid_body, RigidBodyOptions};
