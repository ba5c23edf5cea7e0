//! Hierarchical node paths (`/Environment/Chair_03`)

use std::fmt;
use std::str::FromStr;

use crate::core::{Error, Result};

/// Absolute, slash-separated path identifying a node in a scene graph.
///
/// The absolute root `/` is the pseudo-root and has no name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(String);

impl NodePath {
    /// The pseudo-root path `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Parse and validate an absolute path.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path == "/" {
            return Ok(Self::root());
        }
        if !path.starts_with('/') || path.ends_with('/') {
            return Err(Error::InvalidPath(path));
        }
        if path[1..].split('/').any(|segment| segment.is_empty()) {
            return Err(Error::InvalidPath(path));
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Last path segment; empty for the pseudo-root.
    pub fn name(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Parent path, or `None` for the pseudo-root.
    pub fn parent(&self) -> Option<NodePath> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) => Some(Self::root()),
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => None,
        }
    }

    /// Path of a direct child named `name`.
    pub fn child(&self, name: &str) -> Result<NodePath> {
        if name.is_empty() || name.contains('/') {
            return Err(Error::InvalidPath(format!("{}/{}", self.0, name)));
        }
        if self.is_root() {
            Ok(Self(format!("/{}", name)))
        } else {
            Ok(Self(format!("{}/{}", self.0, name)))
        }
    }

    /// True if `self` equals `ancestor` or lies below it.
    pub fn has_prefix(&self, ancestor: &NodePath) -> bool {
        if ancestor.is_root() || self == ancestor {
            return true;
        }
        self.0.starts_with(&ancestor.0) && self.0[ancestor.0.len()..].starts_with('/')
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NodePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let path = NodePath::new("/Environment/Chair_03").unwrap();
        assert_eq!(path.name(), "Chair_03");
        assert_eq!(path.parent().unwrap().as_str(), "/Environment");
        assert_eq!(path.parent().unwrap().parent().unwrap(), NodePath::root());
        assert!(NodePath::root().parent().is_none());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(NodePath::new("").is_err());
        assert!(NodePath::new("Environment").is_err());
        assert!(NodePath::new("/Environment/").is_err());
        assert!(NodePath::new("/Environment//Chair").is_err());
    }

    #[test]
    fn test_child() {
        let env = NodePath::root().child("Environment").unwrap();
        assert_eq!(env.as_str(), "/Environment");
        assert_eq!(env.child("rug_floor_01").unwrap().as_str(), "/Environment/rug_floor_01");
        assert!(env.child("a/b").is_err());
        assert!(env.child("").is_err());
    }

    #[test]
    fn test_has_prefix() {
        let env: NodePath = "/Environment".parse().unwrap();
        let chair: NodePath = "/Environment/Chair_03".parse().unwrap();
        let other: NodePath = "/EnvironmentB/Chair".parse().unwrap();

        assert!(chair.has_prefix(&env));
        assert!(env.has_prefix(&env));
        assert!(!other.has_prefix(&env));
        assert!(chair.has_prefix(&NodePath::root()));
    }
}
