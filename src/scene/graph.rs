//! Scene graph — in-memory hierarchy of prims.
//!
//! Nodes live in an arena keyed by [`SceneNodeId`] with a path index alongside.
//! The pseudo-root `/` always exists and cannot be removed.

use std::collections::HashMap;

use crate::core::{Error, Result};
use crate::physics::Capability;

use super::node::{AttrValue, NodeKind, SceneNode, SceneNodeId};
use super::path::NodePath;
use super::stage::SceneStage;

/// In-memory scene graph.
pub struct SceneGraph {
    nodes: HashMap<SceneNodeId, SceneNode>,
    paths: HashMap<NodePath, SceneNodeId>,
    root: SceneNodeId,
    default_root: Option<SceneNodeId>,
    next_id: u64,
}

impl SceneGraph {
    /// Create an empty scene graph holding only the pseudo-root.
    pub fn new() -> Self {
        let root_id = SceneNodeId(0);
        let root_node = SceneNode::new(root_id, NodePath::root(), NodeKind::Scope);

        let mut nodes = HashMap::new();
        nodes.insert(root_id, root_node);
        let mut paths = HashMap::new();
        paths.insert(NodePath::root(), root_id);

        Self {
            nodes,
            paths,
            root: root_id,
            default_root: None,
            next_id: 1,
        }
    }

    /// Get the pseudo-root node ID.
    pub fn pseudo_root(&self) -> SceneNodeId {
        self.root
    }

    /// Allocate a fresh node ID.
    fn alloc_id(&mut self) -> SceneNodeId {
        let id = SceneNodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Define a node at `path`. The parent must already exist.
    ///
    /// Defining an existing path keeps the node and only updates its kind.
    pub fn define(&mut self, path: &NodePath, kind: NodeKind) -> Result<SceneNodeId> {
        if let Some(&id) = self.paths.get(path) {
            if let Some(node) = self.nodes.get_mut(&id) {
                node.kind = kind;
            }
            return Ok(id);
        }

        let parent_path = path
            .parent()
            .ok_or_else(|| Error::Scene("cannot redefine the pseudo-root".to_string()))?;
        let parent = *self
            .paths
            .get(&parent_path)
            .ok_or_else(|| Error::Scene(format!("parent of '{}' does not exist", path)))?;

        let id = self.alloc_id();
        let mut node = SceneNode::new(id, path.clone(), kind);
        node.parent = Some(parent);
        self.nodes.insert(id, node);
        self.paths.insert(path.clone(), id);

        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(id);
        }

        Ok(id)
    }

    /// Remove a node and its entire subtree. Cannot remove the pseudo-root.
    pub fn remove(&mut self, id: SceneNodeId) {
        if id == self.root {
            return;
        }

        let to_remove = self.subtree(id);

        // Detach from parent
        if let Some(parent_id) = self.nodes.get(&id).and_then(|n| n.parent) {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.children.retain(|c| *c != id);
            }
        }

        for nid in to_remove {
            if let Some(node) = self.nodes.remove(&nid) {
                self.paths.remove(&node.path);
            }
            if self.default_root == Some(nid) {
                self.default_root = None;
            }
        }
    }

    /// Get an immutable reference to a node.
    pub fn get(&self, id: SceneNodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    /// Get a mutable reference to a node.
    pub fn get_mut(&mut self, id: SceneNodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Look up a node by its path string.
    pub fn get_by_path(&self, path: &str) -> Option<&SceneNode> {
        let path = NodePath::new(path).ok()?;
        self.paths.get(&path).and_then(|id| self.nodes.get(id))
    }

    /// Capability markers applied to a node.
    pub fn capabilities(&self, id: SceneNodeId) -> &[Capability] {
        self.nodes
            .get(&id)
            .map(|n| n.capabilities.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of nodes in the graph, including the pseudo-root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneStage for SceneGraph {
    fn node_at(&self, path: &NodePath) -> Option<SceneNodeId> {
        self.paths.get(path).copied()
    }

    fn path_of(&self, id: SceneNodeId) -> Option<&NodePath> {
        self.nodes.get(&id).map(|n| &n.path)
    }

    fn kind_of(&self, id: SceneNodeId) -> Option<NodeKind> {
        self.nodes.get(&id).map(|n| n.kind)
    }

    fn children(&self, id: SceneNodeId) -> Vec<SceneNodeId> {
        self.nodes
            .get(&id)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, id: SceneNodeId, name: &str) -> Option<&AttrValue> {
        self.nodes.get(&id).and_then(|n| n.attributes.get(name))
    }

    fn set_attribute(&mut self, id: SceneNodeId, name: &str, value: AttrValue) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.attributes.insert(name.to_string(), value);
        }
    }

    fn has_capability(&self, id: SceneNodeId, capability: Capability) -> bool {
        self.capabilities(id).contains(&capability)
    }

    fn apply_capability(&mut self, id: SceneNodeId, capability: Capability) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) if !node.capabilities.contains(&capability) => {
                node.capabilities.push(capability);
                true
            }
            _ => false,
        }
    }

    fn default_root(&self) -> Option<SceneNodeId> {
        self.default_root
    }

    fn set_default_root(&mut self, path: &NodePath) -> bool {
        match self.paths.get(path) {
            Some(&id) if id != self.root => {
                self.default_root = Some(id);
                true
            }
            _ => false,
        }
    }
}
