//! JSON scene description consumed by the headless engine.
//!
//! ```json
//! {
//!   "meters_per_unit": 0.01,
//!   "root": {
//!     "name": "World",
//!     "kind": "xform",
//!     "children": [
//!       { "name": "Chair_03", "kind": "mesh", "translate": [1.0, 0.0, 2.5] }
//!     ]
//!   }
//! }
//! ```
//!
//! `orient` is written as `[w, x, y, z]`.

use std::collections::BTreeMap;
use std::path::Path;

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::physics::Capability;

use super::graph::SceneGraph;
use super::node::{attr, AttrValue, NodeKind, SceneNodeId};
use super::path::NodePath;
use super::stage::SceneStage;

fn default_meters_per_unit() -> f64 {
    1.0
}

/// A whole scene file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default = "default_meters_per_unit")]
    pub meters_per_unit: f64,
    pub root: NodeDocument,
}

/// Scalar attribute values carried outside the transform fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarDocument {
    Bool(bool),
    Double(f64),
    Token(String),
}

/// One node and its descendants.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeDocument {
    pub name: String,
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orient: Option<[f64; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// Applied capability schema names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
    /// Remaining scalar attributes (physics settings).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, ScalarDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDocument>,
}

impl SceneDocument {
    /// Read and parse a scene file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the document as pretty-printed JSON.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Graft the document root onto `target`, with its children below.
    ///
    /// The document root takes the target's name. Fails if `target` is occupied
    /// or its parent is missing; on failure nothing is left behind.
    pub fn graft(&self, graph: &mut SceneGraph, target: &NodePath) -> Result<SceneNodeId> {
        if graph.node_at(target).is_some() {
            return Err(Error::Scene(format!("'{}' is already occupied", target)));
        }
        let result = graft_node(graph, &self.root, target);
        if result.is_err() {
            if let Some(partial) = graph.node_at(target) {
                graph.remove(partial);
            }
        }
        result
    }

    /// Snapshot the subtree at `root` as a document.
    pub fn capture(graph: &SceneGraph, root: SceneNodeId, meters_per_unit: f64) -> Option<Self> {
        Some(Self {
            meters_per_unit,
            root: capture_node(graph, root)?,
        })
    }
}

fn graft_node(graph: &mut SceneGraph, doc: &NodeDocument, path: &NodePath) -> Result<SceneNodeId> {
    if graph.node_at(path).is_some() {
        return Err(Error::Scene(format!("duplicate node path '{}'", path)));
    }
    let id = graph.define(path, doc.kind)?;

    let vectors = [
        (attr::TRANSLATE, doc.translate),
        (attr::ROTATE_XYZ, doc.rotate),
        (attr::SCALE, doc.scale),
    ];
    for (name, value) in vectors {
        if let Some(v) = value {
            graph.set_attribute(id, name, AttrValue::Double3(DVec3::from_array(v)));
        }
    }
    if let Some([w, x, y, z]) = doc.orient {
        graph.set_attribute(id, attr::ORIENT, AttrValue::Quat(DQuat::from_xyzw(x, y, z, w)));
    }
    if let Some(vis) = &doc.visibility {
        graph.set_attribute(id, attr::VISIBILITY, AttrValue::token(vis));
    }
    for (name, value) in &doc.attributes {
        let value = match value {
            ScalarDocument::Bool(b) => AttrValue::Bool(*b),
            ScalarDocument::Double(d) => AttrValue::Double(*d),
            ScalarDocument::Token(t) => AttrValue::Token(t.clone()),
        };
        graph.set_attribute(id, name, value);
    }
    for schema in &doc.capabilities {
        let capability = Capability::from_schema_name(schema)
            .ok_or_else(|| Error::Scene(format!("unknown capability '{}' on '{}'", schema, path)))?;
        graph.apply_capability(id, capability);
    }

    for child in &doc.children {
        let child_path = path.child(&child.name)?;
        graft_node(graph, child, &child_path)?;
    }
    Ok(id)
}

fn capture_node(graph: &SceneGraph, id: SceneNodeId) -> Option<NodeDocument> {
    let node = graph.get(id)?;
    let mut doc = NodeDocument {
        name: node.name().to_string(),
        kind: node.kind,
        capabilities: node.capabilities.iter().map(|c| c.schema_name().to_string()).collect(),
        ..Default::default()
    };

    for (name, value) in &node.attributes {
        match (name.as_str(), value) {
            (attr::TRANSLATE, AttrValue::Double3(v)) => doc.translate = Some(v.to_array()),
            (attr::ROTATE_XYZ, AttrValue::Double3(v)) => doc.rotate = Some(v.to_array()),
            (attr::SCALE, AttrValue::Double3(v)) => doc.scale = Some(v.to_array()),
            (attr::ORIENT, AttrValue::Quat(q)) => doc.orient = Some([q.w, q.x, q.y, q.z]),
            (attr::VISIBILITY, AttrValue::Token(t)) => doc.visibility = Some(t.clone()),
            (_, AttrValue::Bool(b)) => {
                doc.attributes.insert(name.clone(), ScalarDocument::Bool(*b));
            }
            (_, AttrValue::Double(d)) => {
                doc.attributes.insert(name.clone(), ScalarDocument::Double(*d));
            }
            (_, AttrValue::Token(t)) => {
                doc.attributes.insert(name.clone(), ScalarDocument::Token(t.clone()));
            }
            _ => log::debug!("Not exporting attribute '{}' on '{}'", name, node.path),
        }
    }

    doc.children = node
        .children
        .iter()
        .filter_map(|&child| capture_node(graph, child))
        .collect();
    Some(doc)
}
