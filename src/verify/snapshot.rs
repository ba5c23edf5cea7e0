//! Capturing node transforms

use std::collections::BTreeMap;

use crate::scene::node::attr;
use crate::scene::{AttrValue, NodePath, SceneNodeId, SceneStage};

/// Transform attributes of one node at capture time.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformRecord {
    pub translate: AttrValue,
    pub rotation: Option<AttrValue>,
    pub scale: Option<AttrValue>,
    pub orient: Option<AttrValue>,
}

impl TransformRecord {
    /// Field-wise comparison; numeric fields within `tolerance`, others exact.
    pub fn approx_eq(&self, other: &TransformRecord, tolerance: f64) -> bool {
        let opt_eq = |a: &Option<AttrValue>, b: &Option<AttrValue>| match (a, b) {
            (Some(a), Some(b)) => a.approx_eq(b, tolerance),
            (None, None) => true,
            _ => false,
        };
        self.translate.approx_eq(&other.translate, tolerance)
            && opt_eq(&self.rotation, &other.rotation)
            && opt_eq(&self.scale, &other.scale)
            && opt_eq(&self.orient, &other.orient)
    }
}

/// Immutable map from node path to its transform record.
///
/// Only nodes with a translate attribute are recorded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformSnapshot {
    records: BTreeMap<NodePath, TransformRecord>,
}

impl TransformSnapshot {
    /// Record every node under (and including) `root` that has a translate attribute.
    pub fn capture<S: SceneStage + ?Sized>(stage: &S, root: SceneNodeId) -> Self {
        let mut records = BTreeMap::new();
        for id in stage.subtree(root) {
            let Some(translate) = stage.attribute(id, attr::TRANSLATE) else {
                continue;
            };
            let Some(path) = stage.path_of(id) else {
                continue;
            };
            let record = TransformRecord {
                translate: translate.clone(),
                rotation: stage.attribute(id, attr::ROTATE_XYZ).cloned(),
                scale: stage.attribute(id, attr::SCALE).cloned(),
                orient: stage.attribute(id, attr::ORIENT).cloned(),
            };
            records.insert(path.clone(), record);
        }
        Self { records }
    }

    /// Capture the subtree at `root_path`; empty if the path does not exist.
    pub fn capture_path<S: SceneStage + ?Sized>(stage: &S, root_path: &NodePath) -> Self {
        match stage.node_at(root_path) {
            Some(root) => Self::capture(stage, root),
            None => Self::default(),
        }
    }

    pub fn get(&self, path: &NodePath) -> Option<&TransformRecord> {
        self.records.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodePath, &TransformRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
