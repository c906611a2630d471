use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use subnet_calc::config::HarnessConfig;
use subnet_calc::harness;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = HarnessConfig::from_env(std::env::args().skip(1))?;

    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!(
            "#{}# logging disabled, could not load {}: {e}",
            "NOTE".on_red(),
            config.log_config
        );
    }
    log::info!("#Start main()");

    let summary = harness::run(&config, &mut std::io::stdout().lock())?;
    log::info!("#End main() {summary:?}");

    Ok(if summary.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
