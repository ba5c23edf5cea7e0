use scenerig::cli::Cli;
use scenerig::engine::HeadlessEngine;

fn main() {
    let cli = Cli::from_env();
    scenerig::core::logging::init(!cli.no_color);

    let code = scenerig::app::run(&cli, |cli| HeadlessEngine::new(cli.engine_config()));
    std::process::exit(code);
}
