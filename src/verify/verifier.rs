//! Comparing before/after snapshots

use super::snapshot::TransformSnapshot;
use crate::scene::NodePath;

pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Outcome of a before/after comparison.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Verification {
    /// Paths present in both snapshots.
    pub checked: usize,
    /// Paths whose transform changed.
    pub moved: Vec<NodePath>,
}

impl Verification {
    /// Compare every path recorded in `before` against `after`.
    ///
    /// Paths missing from `after` are skipped rather than reported, so a node
    /// removed during mutation goes unnoticed.
    pub fn compare(before: &TransformSnapshot, after: &TransformSnapshot, tolerance: f64) -> Self {
        let mut result = Verification::default();
        for (path, before_record) in before.iter() {
            let Some(after_record) = after.get(path) else {
                continue;
            };
            result.checked += 1;
            if !before_record.approx_eq(after_record, tolerance) {
                result.moved.push(path.clone());
            }
        }
        result
    }

    pub fn preserved(&self) -> bool {
        self.moved.is_empty()
    }
}

/// Compare snapshots, log a warning per moved node and a summary line.
///
/// Returns true iff nothing moved.
pub fn verify_positions_unchanged(before: &TransformSnapshot, after: &TransformSnapshot) -> bool {
    let result = Verification::compare(before, after, DEFAULT_TOLERANCE);
    for path in &result.moved {
        log::warn!("Position changed for: {}", path);
    }
    if result.preserved() {
        crate::success!("Position verification: All {} object positions preserved", result.checked);
    } else {
        log::warn!(
            "Position verification: {}/{} objects moved",
            result.moved.len(),
            result.checked
        );
    }
    result.preserved()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::node::attr;
    use crate::scene::{AttrValue, NodeKind, SceneGraph, SceneNodeId, SceneStage};
    use glam::DVec3;

    fn placed(graph: &mut SceneGraph, path: &str, at: DVec3) -> SceneNodeId {
        let id = graph.define(&NodePath::new(path).unwrap(), NodeKind::Mesh).unwrap();
        graph.set_attribute(id, attr::TRANSLATE, AttrValue::Double3(at));
        id
    }

    fn scene() -> (SceneGraph, SceneNodeId) {
        let mut graph = SceneGraph::new();
        let env = graph.define(&NodePath::new("/Environment").unwrap(), NodeKind::Xform).unwrap();
        placed(&mut graph, "/Environment/a", DVec3::new(1.0, 0.0, 0.0));
        placed(&mut graph, "/Environment/b", DVec3::new(0.0, 2.0, 0.0));
        (graph, env)
    }

    #[test]
    fn test_unchanged_scene_passes() {
        let (graph, env) = scene();
        let before = TransformSnapshot::capture(&graph, env);
        let after = TransformSnapshot::capture(&graph, env);

        let result = Verification::compare(&before, &after, DEFAULT_TOLERANCE);
        assert_eq!(result.checked, 2);
        assert!(result.preserved());
        assert!(verify_positions_unchanged(&before, &after));
    }

    #[test]
    fn test_jitter_within_tolerance_passes() {
        let (mut graph, env) = scene();
        let before = TransformSnapshot::capture(&graph, env);
        let a = graph.node_at(&NodePath::new("/Environment/a").unwrap()).unwrap();
        graph.set_attribute(a, attr::TRANSLATE, AttrValue::Double3(DVec3::new(1.0 + 1e-9, 0.0, 0.0)));
        let after = TransformSnapshot::capture(&graph, env);

        assert!(verify_positions_unchanged(&before, &after));
    }

    #[test]
    fn test_moved_node_reported() {
        let (mut graph, env) = scene();
        let before = TransformSnapshot::capture(&graph, env);
        let b = graph.node_at(&NodePath::new("/Environment/b").unwrap()).unwrap();
        graph.set_attribute(b, attr::TRANSLATE, AttrValue::Double3(DVec3::new(0.0, 2.5, 0.0)));
        let after = TransformSnapshot::capture(&graph, env);

        let result = Verification::compare(&before, &after, DEFAULT_TOLERANCE);
        assert_eq!(result.checked, 2);
        assert_eq!(result.moved, vec![NodePath::new("/Environment/b").unwrap()]);
        assert!(!verify_positions_unchanged(&before, &after));
    }

    #[test]
    fn test_rotation_change_reported() {
        let (mut graph, env) = scene();
        let before = TransformSnapshot::capture(&graph, env);
        let a = graph.node_at(&NodePath::new("/Environment/a").unwrap()).unwrap();
        graph.set_attribute(a, attr::ROTATE_XYZ, AttrValue::Double3(DVec3::new(0.0, 0.0, 90.0)));
        let after = TransformSnapshot::capture(&graph, env);

        assert!(!Verification::compare(&before, &after, DEFAULT_TOLERANCE).preserved());
    }

    #[test]
    fn test_removed_and_added_nodes_ignored() {
        let (mut graph, env) = scene();
        let before = TransformSnapshot::capture(&graph, env);

        let a = graph.node_at(&NodePath::new("/Environment/a").unwrap()).unwrap();
        graph.remove(a);
        placed(&mut graph, "/Environment/c", DVec3::ZERO);
        let after = TransformSnapshot::capture(&graph, env);

        let result = Verification::compare(&before, &after, DEFAULT_TOLERANCE);
        assert_eq!(result.checked, 1);
        assert!(result.preserved());
    }
}
