//! Core type aliases and re-exports

pub use glam::{DQuat, DVec3};

/// Standard Result type for scenerig
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
