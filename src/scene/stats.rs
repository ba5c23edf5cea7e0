//! Content statistics for a loaded scene

use super::node::SceneNodeId;
use super::stage::SceneStage;

/// Keywords used to bucket nodes when summarizing a scene.
#[derive(Clone, Debug)]
pub struct StatsKeywords {
    pub furniture: Vec<String>,
    pub decorative: Vec<String>,
}

impl Default for StatsKeywords {
    fn default() -> Self {
        Self {
            furniture: vec!["furniture".to_string()],
            decorative: ["scatter", "plant", "book", "decor"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Node counts for a subtree. Keyword matching is case-insensitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub total: usize,
    pub meshes: usize,
    pub furniture: usize,
    pub decorative: usize,
}

impl SceneStats {
    pub fn collect<S: SceneStage + ?Sized>(stage: &S, root: SceneNodeId, keywords: &StatsKeywords) -> Self {
        let mut stats = SceneStats::default();
        for id in stage.subtree(root) {
            stats.total += 1;
            if stage.kind_of(id).is_some_and(|k| k.is_mesh()) {
                stats.meshes += 1;
            }
            let name = stage.name_of(id).unwrap_or_default().to_lowercase();
            let any = |words: &[String]| words.iter().any(|w| name.contains(&w.to_lowercase()));
            if any(&keywords.furniture) {
                stats.furniture += 1;
            }
            if any(&keywords.decorative) {
                stats.decorative += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::node::NodeKind;
    use crate::scene::{NodePath, SceneGraph};

    #[test]
    fn test_collect_counts() {
        let mut graph = SceneGraph::new();
        let env = graph.define(&NodePath::new("/Environment").unwrap(), NodeKind::Xform).unwrap();
        for (path, kind) in [
            ("/Environment/FurnitureSet", NodeKind::Xform),
            ("/Environment/FurnitureSet/Chair", NodeKind::Mesh),
            ("/Environment/PottedPlant_2", NodeKind::Mesh),
            ("/Environment/BookStack", NodeKind::Mesh),
            ("/Environment/scatter_pebbles", NodeKind::Xform),
        ] {
            graph.define(&NodePath::new(path).unwrap(), kind).unwrap();
        }

        let stats = SceneStats::collect(&graph, env, &StatsKeywords::default());
        assert_eq!(
            stats,
            SceneStats {
                total: 6,
                meshes: 3,
                furniture: 1,
                decorative: 3,
            }
        );
    }
}
