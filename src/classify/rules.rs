//! Classification rule sets
//!
//! Rules are plain configuration: the defaults reproduce the built-in marker
//! lists, and a JSON file can replace any of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::physics::{Approximation, RigidBodyOptions};
use crate::scene::query::name_matches;
use crate::scene::NodeKind;

/// Assigns `approximation` to meshes whose name contains any of `markers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColliderRule {
    pub markers: Vec<String>,
    pub approximation: Approximation,
}

impl ColliderRule {
    pub fn new(markers: &[&str], approximation: Approximation) -> Self {
        Self {
            markers: markers.iter().map(|m| m.to_string()).collect(),
            approximation,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        name_matches(name, &self.markers)
    }
}

/// Marker lists and options driving [`modify_environment`](super::modify_environment).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Nodes blocking ceiling lights; always hidden.
    pub light_blocker_markers: Vec<String>,
    /// Kind restriction for light blockers (`None` = any kind).
    pub light_blocker_kind: Option<NodeKind>,
    /// Ceiling and exterior walls; hidden when enclosure hiding is on.
    pub enclosure_markers: Vec<String>,
    /// Evaluated in order, first match wins; unmatched meshes use the coarse approximation.
    pub collider_rules: Vec<ColliderRule>,
    /// Movable furniture that receives rigid-body dynamics.
    pub rigid_body_markers: Vec<String>,
    pub rigid_body: RigidBodyOptions,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            light_blocker_markers: vec!["001_SPLIT_GLA".to_string()],
            light_blocker_kind: Some(NodeKind::Xform),
            enclosure_markers: vec!["_exterior".to_string(), "_ceiling".to_string()],
            collider_rules: vec![ColliderRule::new(
                &["skirt", "_wall", "_floor"],
                Approximation::TriangleMesh,
            )],
            rigid_body_markers: vec!["Table".to_string(), "Chair".to_string(), "Rug".to_string()],
            rigid_body: RigidBodyOptions::default(),
        }
    }
}

impl ClassifierConfig {
    /// Load rules from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty markers, which would match every node.
    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("light_blocker_markers", &self.light_blocker_markers),
            ("enclosure_markers", &self.enclosure_markers),
            ("rigid_body_markers", &self.rigid_body_markers),
        ];
        for (field, markers) in lists {
            if markers.iter().any(String::is_empty) {
                return Err(Error::Config(format!("{} contains an empty marker", field)));
            }
        }
        for (i, rule) in self.collider_rules.iter().enumerate() {
            if rule.markers.is_empty() || rule.markers.iter().any(String::is_empty) {
                return Err(Error::Config(format!("collider_rules[{}] has an empty marker", i)));
            }
        }
        Ok(())
    }

    /// First matching collider rule for `name`, if any.
    pub fn collider_rule(&self, name: &str) -> Option<&ColliderRule> {
        self.collider_rules.iter().find(|rule| rule.matches(name))
    }

    /// Approximation for a mesh named `name`, falling back to `coarse`.
    pub fn resolve_approximation(&self, name: &str, coarse: Approximation) -> Approximation {
        self.collider_rule(name)
            .map(|rule| rule.approximation)
            .unwrap_or(coarse)
    }

    pub fn is_rigid_body(&self, name: &str) -> bool {
        name_matches(name, &self.rigid_body_markers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fine_markers_override_coarse() {
        let config = ClassifierConfig::default();
        for coarse in Approximation::ALL {
            assert_eq!(
                config.resolve_approximation("rug_floor_01", coarse),
                Approximation::TriangleMesh
            );
            assert_eq!(
                config.resolve_approximation("baseboard_skirt", coarse),
                Approximation::TriangleMesh
            );
        }
    }

    #[test]
    fn test_unmatched_uses_coarse_exactly() {
        let config = ClassifierConfig::default();
        for coarse in Approximation::ALL {
            assert_eq!(config.resolve_approximation("Chair_03", coarse), coarse);
        }
        // Markers are case-sensitive
        assert_eq!(
            config.resolve_approximation("room_FLOOR", Approximation::BoundingCube),
            Approximation::BoundingCube
        );
    }

    #[test]
    fn test_first_rule_wins() {
        let config = ClassifierConfig {
            collider_rules: vec![
                ColliderRule::new(&["TableDining"], Approximation::BoundingCube),
                ColliderRule::new(&["Table"], Approximation::ConvexDecomposition),
            ],
            ..Default::default()
        };
        assert_eq!(
            config.resolve_approximation("TableDining_01", Approximation::ConvexHull),
            Approximation::BoundingCube
        );
        assert_eq!(
            config.resolve_approximation("TableSide_01", Approximation::ConvexHull),
            Approximation::ConvexDecomposition
        );
    }

    #[test]
    fn test_rigid_body_markers() {
        let config = ClassifierConfig::default();
        assert!(config.is_rigid_body("Chair_03"));
        assert!(config.is_rigid_body("TableDining_01"));
        assert!(config.is_rigid_body("RugFactory_2"));
        assert!(!config.is_rigid_body("rug_floor_01"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("rules.json");
        std::fs::write(
            &file,
            r#"{ "rigid_body_markers": ["Sofa"], "rigid_body": { "disable_gravity": true } }"#,
        )
        .unwrap();

        let config = ClassifierConfig::from_path(&file).unwrap();
        assert_eq!(config.rigid_body_markers, vec!["Sofa".to_string()]);
        assert!(config.rigid_body.disable_gravity);
        assert_eq!(config.collider_rules, ClassifierConfig::default().collider_rules);
        assert_eq!(config.light_blocker_kind, Some(NodeKind::Xform));
    }

    #[test]
    fn test_empty_marker_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("rules.json");
        std::fs::write(&file, r#"{ "enclosure_markers": [""] }"#).unwrap();
        assert!(matches!(ClassifierConfig::from_path(&file), Err(Error::Config(_))));

        let config = ClassifierConfig {
            collider_rules: vec![ColliderRule::new(&[], Approximation::None)],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
