//! Keeps the engine's frame loop alive until the viewer closes

use std::time::{Duration, Instant};

use crate::core::time::ReminderTimer;
use crate::engine::SceneEngine;

/// Printed to the operator every reminder interval.
pub const REMINDERS: [&str; 2] = [
    "=== PLEASE COLLECT AND SAVE THE CURRENT SCENE BEFORE CLOSING THE WINDOW! ===",
    "=== PLEASE SELECT FLAT COLLECTION AND GROUP BY MDL ===",
];

#[derive(Clone, Debug)]
pub struct ViewerOptions {
    pub reminder_interval: Duration,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            reminder_interval: Duration::from_secs(2),
        }
    }
}

/// Pump frames until the engine stops running. Returns the number of frames pumped.
///
/// Does not close the engine.
pub fn run_viewer<E: SceneEngine>(engine: &mut E, options: &ViewerOptions) -> u64 {
    let mut timer = ReminderTimer::new(options.reminder_interval);
    let mut frames = 0u64;

    while engine.is_running() {
        if timer.due(Instant::now()) {
            for reminder in REMINDERS {
                crate::success!("{}", reminder);
            }
        }
        engine.update();
        frames += 1;
    }

    log::info!("=== EXIT PROGRAM ===");
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineConfig, HeadlessEngine};

    #[test]
    fn test_runs_until_engine_stops() {
        let mut engine = HeadlessEngine::new(EngineConfig {
            frame_time: Duration::ZERO,
            max_frames: Some(25),
            ..Default::default()
        });

        let frames = run_viewer(&mut engine, &ViewerOptions::default());

        assert_eq!(frames, 25);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_closed_engine_pumps_nothing() {
        let mut engine = HeadlessEngine::new(EngineConfig {
            frame_time: Duration::ZERO,
            ..Default::default()
        });
        engine.close();

        assert_eq!(run_viewer(&mut engine, &ViewerOptions::default()), 0);
    }
}
