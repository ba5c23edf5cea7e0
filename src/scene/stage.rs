//! Capability interface over a scene graph owned by an engine.
//!
//! The scene tools never copy or serialize the graph they operate on; they
//! only walk children, read and write attributes, and query or apply
//! capability markers through this trait.

use std::collections::HashSet;

use crate::physics::Capability;

use super::node::{AttrValue, NodeKind, SceneNodeId};
use super::path::NodePath;

pub trait SceneStage {
    /// Look up the node at `path`.
    fn node_at(&self, path: &NodePath) -> Option<SceneNodeId>;

    fn path_of(&self, id: SceneNodeId) -> Option<&NodePath>;

    fn kind_of(&self, id: SceneNodeId) -> Option<NodeKind>;

    /// Direct children of `id`, in authored order.
    fn children(&self, id: SceneNodeId) -> Vec<SceneNodeId>;

    fn attribute(&self, id: SceneNodeId, name: &str) -> Option<&AttrValue>;

    /// Create or overwrite an attribute. Unknown nodes are ignored.
    fn set_attribute(&mut self, id: SceneNodeId, name: &str, value: AttrValue);

    fn has_capability(&self, id: SceneNodeId, capability: Capability) -> bool;

    /// Apply a capability marker. Returns true if it was not already present.
    fn apply_capability(&mut self, id: SceneNodeId, capability: Capability) -> bool;

    /// The designated entry node, if any.
    fn default_root(&self) -> Option<SceneNodeId>;

    /// Designate the node at `path` as the entry node. Returns false if no such node exists.
    fn set_default_root(&mut self, path: &NodePath) -> bool;

    fn name_of(&self, id: SceneNodeId) -> Option<&str> {
        self.path_of(id).map(NodePath::name)
    }

    fn has_attribute(&self, id: SceneNodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Pre-order walk of `root` and everything below it.
    ///
    /// Each node is yielded once even if it is reachable through more than one parent.
    fn subtree(&self, root: SceneNodeId) -> Vec<SceneNodeId> {
        let mut out = Vec::new();
        if self.path_of(root).is_none() {
            return out;
        }
        let mut visited = HashSet::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            out.push(id);
            let children = self.children(id);
            stack.extend(children.into_iter().rev());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Stage whose children lists may alias nodes, including back-edges.
    struct AliasingStage {
        nodes: HashMap<SceneNodeId, (NodePath, Vec<SceneNodeId>)>,
    }

    impl AliasingStage {
        fn new(edges: &[(u64, &str, Vec<u64>)]) -> Self {
            let nodes = edges
                .iter()
                .map(|(id, path, children)| {
                    let children = children.iter().map(|c| SceneNodeId(*c)).collect();
                    (SceneNodeId(*id), (NodePath::new(*path).unwrap(), children))
                })
                .collect();
            Self { nodes }
        }
    }

    impl SceneStage for AliasingStage {
        fn node_at(&self, path: &NodePath) -> Option<SceneNodeId> {
            self.nodes.iter().find(|(_, (p, _))| p == path).map(|(id, _)| *id)
        }
        fn path_of(&self, id: SceneNodeId) -> Option<&NodePath> {
            self.nodes.get(&id).map(|(p, _)| p)
        }
        fn kind_of(&self, _id: SceneNodeId) -> Option<NodeKind> {
            Some(NodeKind::Xform)
        }
        fn children(&self, id: SceneNodeId) -> Vec<SceneNodeId> {
            self.nodes.get(&id).map(|(_, c)| c.clone()).unwrap_or_default()
        }
        fn attribute(&self, _id: SceneNodeId, _name: &str) -> Option<&AttrValue> {
            None
        }
        fn set_attribute(&mut self, _id: SceneNodeId, _name: &str, _value: AttrValue) {}
        fn has_capability(&self, _id: SceneNodeId, _capability: Capability) -> bool {
            false
        }
        fn apply_capability(&mut self, _id: SceneNodeId, _capability: Capability) -> bool {
            false
        }
        fn default_root(&self) -> Option<SceneNodeId> {
            None
        }
        fn set_default_root(&mut self, _path: &NodePath) -> bool {
            false
        }
    }

    #[test]
    fn test_subtree_survives_cycles() {
        // 1 -> 2 -> 3 -> 1 (back-edge), and 1 -> 3 (alias)
        let stage = AliasingStage::new(&[
            (1, "/A", vec![2, 3]),
            (2, "/A/B", vec![3]),
            (3, "/A/B/C", vec![1]),
        ]);
        let walk = stage.subtree(SceneNodeId(1));
        assert_eq!(walk, vec![SceneNodeId(1), SceneNodeId(2), SceneNodeId(3)]);
    }

    #[test]
    fn test_name_of() {
        let stage = AliasingStage::new(&[(1, "/Environment/Chair_03", vec![])]);
        assert_eq!(stage.name_of(SceneNodeId(1)), Some("Chair_03"));
        assert_eq!(stage.name_of(SceneNodeId(2)), None);
    }
}
