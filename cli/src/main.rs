use clap::Parser;
use colored::Colorize as _;
use warden_cli::{
    args::{Args, Commands},
    cli::{config::BotConfig, error::CliError, orchestrator::run},
};
use warden_client_sdk::utils::logger::init_logger;
use warden_interfaces::utils::random::default_rng;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = match BotConfig::load(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e.to_string().red());
            std::process::exit(1);
        }
    };
    init_logger(config.log_style);

    if let Err(e) = main_process(args.command.unwrap_or_default(), &config).await {
        println!("{}", e.to_string().red());
        std::process::exit(1);
    }
    Ok(())
}

async fn main_process(command: Commands, config: &BotConfig) -> Result<(), CliError> {
    match command {
        Commands::Run => {
            // task failures are logged inside the run and never change the exit code
            run(config, &mut default_rng()).await?;
        }
        Commands::Address => {
            println!("{}", config.credential.address());
        }
    }
    Ok(())
}
