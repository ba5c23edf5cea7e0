//! Name-pattern queries: finding and hiding nodes by marker substrings.

use super::node::{attr, visibility, AttrValue, NodeKind, SceneNodeId};
use super::stage::SceneStage;

/// True if `name` contains any of `markers` (case-sensitive substring match).
pub fn name_matches<M: AsRef<str>>(name: &str, markers: &[M]) -> bool {
    markers.iter().any(|m| name.contains(m.as_ref()))
}

/// Nodes under (and including) `root` whose name contains any marker,
/// optionally restricted to one node kind. Returned in pre-order.
pub fn find_nodes<S, M>(stage: &S, markers: &[M], root: SceneNodeId, kind_filter: Option<NodeKind>) -> Vec<SceneNodeId>
where
    S: SceneStage + ?Sized,
    M: AsRef<str>,
{
    stage
        .subtree(root)
        .into_iter()
        .filter(|&id| kind_filter.is_none() || stage.kind_of(id) == kind_filter)
        .filter(|&id| stage.name_of(id).is_some_and(|name| name_matches(name, markers)))
        .collect()
}

/// Set a node's visibility to invisible. Returns true if it changed.
pub fn hide<S: SceneStage + ?Sized>(stage: &mut S, id: SceneNodeId) -> bool {
    let already_hidden = stage
        .attribute(id, attr::VISIBILITY)
        .and_then(AttrValue::as_token)
        == Some(visibility::INVISIBLE);
    if already_hidden {
        return false;
    }
    stage.set_attribute(id, attr::VISIBILITY, AttrValue::token(visibility::INVISIBLE));
    true
}

/// Hide every node [`find_nodes`] selects. Returns how many nodes changed.
///
/// Nodes are never removed from the graph.
pub fn hide_nodes<S, M>(stage: &mut S, markers: &[M], root: SceneNodeId, kind_filter: Option<NodeKind>) -> usize
where
    S: SceneStage + ?Sized,
    M: AsRef<str>,
{
    let matches = find_nodes(stage, markers, root, kind_filter);
    matches.into_iter().filter(|&id| hide(stage, id)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{NodePath, SceneGraph};

    fn sample() -> (SceneGraph, SceneNodeId) {
        let mut graph = SceneGraph::new();
        let env = graph.define(&NodePath::new("/Environment").unwrap(), NodeKind::Xform).unwrap();
        for (path, kind) in [
            ("/Environment/001_SPLIT_GLA_light", NodeKind::Xform),
            ("/Environment/001_SPLIT_GLA_light/bulb", NodeKind::Mesh),
            ("/Environment/north_exterior", NodeKind::Mesh),
            ("/Environment/room_ceiling", NodeKind::Mesh),
            ("/Environment/Chair_03", NodeKind::Mesh),
        ] {
            graph.define(&NodePath::new(path).unwrap(), kind).unwrap();
        }
        (graph, env)
    }

    #[test]
    fn test_name_matches_is_case_sensitive() {
        assert!(name_matches("Chair_03", &["Chair"]));
        assert!(!name_matches("chair_03", &["Chair"]));
        assert!(!name_matches("Chair_03", &[] as &[&str]));
    }

    #[test]
    fn test_find_nodes_with_kind_filter() {
        let (graph, env) = sample();

        let any_kind = find_nodes(&graph, &["001_SPLIT_GLA"], env, None);
        assert_eq!(any_kind.len(), 1);

        let xforms = find_nodes(&graph, &["001_SPLIT_GLA"], env, Some(NodeKind::Xform));
        assert_eq!(xforms.len(), 1);
        assert_eq!(graph.name_of(xforms[0]), Some("001_SPLIT_GLA_light"));

        let meshes = find_nodes(&graph, &["001_SPLIT_GLA"], env, Some(NodeKind::Mesh));
        assert!(meshes.is_empty());
    }

    #[test]
    fn test_find_nodes_matches_name_not_path() {
        let (graph, env) = sample();
        // "bulb" lives under a matching parent but its own name does not match
        let found = find_nodes(&graph, &["001_SPLIT_GLA"], env, None);
        assert!(found.iter().all(|&id| graph.name_of(id) != Some("bulb")));
    }

    #[test]
    fn test_hide_nodes_counts_changes() {
        let (mut graph, env) = sample();

        assert_eq!(hide_nodes(&mut graph, &["_exterior", "_ceiling"], env, None), 2);
        // Second pass changes nothing
        assert_eq!(hide_nodes(&mut graph, &["_exterior", "_ceiling"], env, None), 0);

        let exterior = graph.get_by_path("/Environment/north_exterior").unwrap();
        assert!(!exterior.is_visible());
        assert!(graph.get_by_path("/Environment/Chair_03").unwrap().is_visible());
        assert_eq!(graph.node_count(), 7);
    }
}
