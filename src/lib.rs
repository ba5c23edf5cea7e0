//! Scenerig - prepares authored 3D scenes for physics simulation
//!
//! Loads a scene through a [`SceneEngine`](engine::SceneEngine), hides light
//! blockers and enclosure walls, attaches colliders and rigid bodies by node
//! name, and checks that no node moved in the process.

pub mod core;
pub mod scene;
pub mod physics;
pub mod classify;
pub mod verify;
pub mod engine;
pub mod setup;
pub mod viewer;
pub mod cli;
pub mod app;
