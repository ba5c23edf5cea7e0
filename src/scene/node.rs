//! Scene graph node types
//!
//! Core types for the CPU-side scene graph: node IDs, kinds, attribute values, and nodes.

use std::collections::BTreeMap;
use std::fmt;

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::physics::Capability;

use super::path::NodePath;

/// Attribute names understood by the scene tools.
pub mod attr {
    pub const TRANSLATE: &str = "xformOp:translate";
    pub const ROTATE_XYZ: &str = "xformOp:rotateXYZ";
    pub const SCALE: &str = "xformOp:scale";
    pub const ORIENT: &str = "xformOp:orient";
    pub const VISIBILITY: &str = "visibility";
    pub const COLLISION_ENABLED: &str = "physics:collisionEnabled";
    pub const APPROXIMATION: &str = "physics:approximation";
    pub const RIGID_BODY_ENABLED: &str = "physics:rigidBodyEnabled";
    pub const DISABLE_GRAVITY: &str = "physxRigidBody:disableGravity";
}

/// Values of the `visibility` attribute.
pub mod visibility {
    pub const INHERITED: &str = "inherited";
    pub const INVISIBLE: &str = "invisible";
}

/// Unique identifier for a scene graph node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneNodeId(pub u64);

/// What kind of prim a node is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Transform-only grouping node.
    #[default]
    Xform,
    /// Untransformable namespace node.
    Scope,
    Mesh,
    Cube,
    Sphere,
    Cylinder,
    Capsule,
    Cone,
    Plane,
    Light,
    Camera,
    Material,
}

impl NodeKind {
    /// Geometric primitives: meshes and analytic shapes.
    pub fn is_gprim(self) -> bool {
        matches!(
            self,
            NodeKind::Mesh
                | NodeKind::Cube
                | NodeKind::Sphere
                | NodeKind::Cylinder
                | NodeKind::Capsule
                | NodeKind::Cone
                | NodeKind::Plane
        )
    }

    pub fn is_mesh(self) -> bool {
        self == NodeKind::Mesh
    }

    /// Schema type name, as shown in logs and used by kind filters.
    pub fn type_name(self) -> &'static str {
        match self {
            NodeKind::Xform => "Xform",
            NodeKind::Scope => "Scope",
            NodeKind::Mesh => "Mesh",
            NodeKind::Cube => "Cube",
            NodeKind::Sphere => "Sphere",
            NodeKind::Cylinder => "Cylinder",
            NodeKind::Capsule => "Capsule",
            NodeKind::Cone => "Cone",
            NodeKind::Plane => "Plane",
            NodeKind::Light => "Light",
            NodeKind::Camera => "Camera",
            NodeKind::Material => "Material",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A typed attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Token(String),
    Bool(bool),
    Double(f64),
    Double3(DVec3),
    Quat(DQuat),
}

impl AttrValue {
    pub fn token(value: &str) -> Self {
        AttrValue::Token(value.to_string())
    }

    pub fn as_token(&self) -> Option<&str> {
        match self {
            AttrValue::Token(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_double3(&self) -> Option<DVec3> {
        match self {
            AttrValue::Double3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_quat(&self) -> Option<DQuat> {
        match self {
            AttrValue::Quat(q) => Some(*q),
            _ => None,
        }
    }

    /// Compare numeric values component-wise within `tolerance`.
    ///
    /// Non-numeric values, and values of different types, fall back to exact equality.
    pub fn approx_eq(&self, other: &AttrValue, tolerance: f64) -> bool {
        let close = |a: &[f64], b: &[f64]| a.iter().zip(b).all(|(x, y)| (x - y).abs() < tolerance);
        match (self, other) {
            (AttrValue::Double(a), AttrValue::Double(b)) => close(&[*a], &[*b]),
            (AttrValue::Double3(a), AttrValue::Double3(b)) => close(&a.to_array(), &b.to_array()),
            (AttrValue::Quat(a), AttrValue::Quat(b)) => close(&a.to_array(), &b.to_array()),
            _ => self == other,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Token(t) => f.write_str(t),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Double(d) => write!(f, "{}", d),
            AttrValue::Double3(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            AttrValue::Quat(q) => write!(f, "({}, {}, {}, {})", q.w, q.x, q.y, q.z),
        }
    }
}

/// A node in the scene graph.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub id: SceneNodeId,
    pub path: NodePath,
    pub kind: NodeKind,
    pub attributes: BTreeMap<String, AttrValue>,
    /// Applied capability markers, in application order, never duplicated.
    pub capabilities: Vec<Capability>,
    pub parent: Option<SceneNodeId>,
    pub children: Vec<SceneNodeId>,
}

impl SceneNode {
    /// Create a new node with no attributes, capabilities, or children.
    pub fn new(id: SceneNodeId, path: NodePath, kind: NodeKind) -> Self {
        Self {
            id,
            path,
            kind,
            attributes: BTreeMap::new(),
            capabilities: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.path.name()
    }

    /// True unless the node's own `visibility` is `invisible`.
    pub fn is_visible(&self) -> bool {
        self.attributes
            .get(attr::VISIBILITY)
            .and_then(AttrValue::as_token)
            != Some(visibility::INVISIBLE)
    }
}
