//! Process-level flow: validate inputs, set up, run the viewer, shut down.

use crate::cli::Cli;
use crate::engine::SceneEngine;
use crate::setup::setup_scene;
use crate::viewer::{run_viewer, ViewerOptions};

/// Run the tool and return the process exit code.
///
/// The engine is only created once the scene path and rules have been validated.
pub fn run<E, F>(cli: &Cli, make_engine: F) -> i32
where
    E: SceneEngine,
    F: FnOnce(&Cli) -> E,
{
    let scene_path = cli.resolve_scene_path();
    log::info!("Using file path: {}", scene_path.display());

    if !scene_path.exists() {
        log::error!("File not found: {}", scene_path.display());
        log::error!("Please check the path and try again.");
        return 1;
    }

    let classifier = match cli.classifier_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Error occurred: {}", e);
            log::error!("Please check your arguments and try again.");
            return 1;
        }
    };

    let mut engine = make_engine(cli);
    let options = cli.setup_options(classifier);
    if let Err(e) = setup_scene(&mut engine, &options) {
        log::error!("Error occurred: {}", e);
        log::error!("Please check your arguments and try again.");
        engine.close();
        return 1;
    }

    run_viewer(&mut engine, &ViewerOptions::default());

    let mut code = 0;
    if let Some(path) = &cli.export {
        match engine.export(path) {
            Ok(()) => crate::success!("Scene exported to {}", path.display()),
            Err(e) => {
                log::error!("Export failed: {}", e);
                code = 1;
            }
        }
    }

    engine.close();
    code
}
