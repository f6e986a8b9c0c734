use ipv4_subnet_calc::cli::Invocation;
use ipv4_subnet_calc::config::Settings;
use ipv4_subnet_calc::logging::init_logging;
use ipv4_subnet_calc::run;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let invocation = Invocation::parse_args();
    let settings = Settings::from_env()?;
    init_logging(&settings.log_config)?;
    log::info!("#Start main()");

    run(&invocation, &settings)
}
