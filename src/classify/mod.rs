//! Name-pattern classification of scene nodes into physics treatments

pub mod mutator;
pub mod rules;

pub use mutator::modify_environment;
pub use rules::{ClassifierConfig, ColliderRule};
