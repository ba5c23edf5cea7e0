//! Collision approximation strategies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// Geometric proxy the physics engine uses in place of the exact mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Approximation {
    #[value(name = "none")]
    None,
    #[value(name = "convexDecomposition")]
    ConvexDecomposition,
    #[default]
    #[value(name = "convexHull")]
    ConvexHull,
    #[value(name = "boundingSphere")]
    BoundingSphere,
    #[value(name = "boundingCube")]
    BoundingCube,
    #[value(name = "meshSimplification")]
    MeshSimplification,
    /// Exact triangle mesh; only valid for static colliders.
    #[value(name = "triangleMesh")]
    TriangleMesh,
}

impl Approximation {
    pub const ALL: [Approximation; 7] = [
        Approximation::None,
        Approximation::ConvexDecomposition,
        Approximation::ConvexHull,
        Approximation::BoundingSphere,
        Approximation::BoundingCube,
        Approximation::MeshSimplification,
        Approximation::TriangleMesh,
    ];

    /// Token stored in the `physics:approximation` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Approximation::None => "none",
            Approximation::ConvexDecomposition => "convexDecomposition",
            Approximation::ConvexHull => "convexHull",
            Approximation::BoundingSphere => "boundingSphere",
            Approximation::BoundingCube => "boundingCube",
            Approximation::MeshSimplification => "meshSimplification",
            Approximation::TriangleMesh => "triangleMesh",
        }
    }
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Approximation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Approximation::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| Error::Config(format!("unknown collision approximation '{}'", s)))
    }
}
