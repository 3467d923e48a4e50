//! Backend smoke-test CLI
//!
//! Drives the end-to-end scenario suite against the account manager
//! backend and signals the overall outcome through the process exit code.

use backend_smoke::commands::Commands;
use backend_smoke::{common, suite};
use clap::Parser;

#[derive(Parser)]
#[command(name = "backend-smoke", about = "End-to-end smoke tests for the account manager API")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    let code = match run(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    };
    std::process::exit(code);
}

async fn run(command: Commands) -> common::Result<i32> {
    match command {
        Commands::Run {
            base_url,
            timeout,
            config,
        } => {
            let mut config = common::Config::load(config.as_deref())?;
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }
            if let Some(timeout) = timeout {
                config.timeout_secs = timeout;
            }

            let suite = suite::Suite::new(&config)?;
            let outcome = suite.run().await;
            Ok(outcome.exit_code())
        }

        Commands::Scenarios => {
            for name in suite::scenarios::SCENARIO_NAMES {
                println!("{name}");
            }
            Ok(0)
        }
    }
}
