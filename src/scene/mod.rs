//! Scene graph model and the capability interface the scene tools operate through

pub mod format;
pub mod graph;
pub mod node;
pub mod path;
pub mod query;
pub mod stage;
pub mod stats;

pub use format::{NodeDocument, SceneDocument};
pub use graph::SceneGraph;
pub use node::{AttrValue, NodeKind, SceneNode, SceneNodeId};
pub use path::NodePath;
pub use query::{find_nodes, hide_nodes};
pub use stage::SceneStage;
pub use stats::{SceneStats, StatsKeywords};
