//! Transform snapshots and pose-regression checks

pub mod snapshot;
pub mod verifier;

pub use snapshot::{TransformRecord, TransformSnapshot};
pub use verifier::{verify_positions_unchanged, Verification, DEFAULT_TOLERANCE};
