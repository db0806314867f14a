use anyhow::Result;
use clap::Parser;
use schemalint::cli::commands::check::{CheckCommand, CheckCommandHandler};
use schemalint::cli::commands::init::{InitCommand, InitCommandHandler};
use schemalint::cli::commands::{CommandOutput, EXIT_FATAL};
use schemalint::cli::{Cli, Commands};
use schemalint::logging::init_logging;
use std::env;
use std::process;

fn main() {
    // CLIをパースして実行
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("Error: {:#}", e);
        process::exit(EXIT_FATAL);
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: Failed to create Tokio runtime: {}", e);
            process::exit(EXIT_FATAL);
        }
    };

    match runtime.block_on(run_command(cli)) {
        Ok(output) => {
            if !output.text.is_empty() {
                println!("{}", output.text);
            }
            process::exit(output.exit_code);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(EXIT_FATAL);
        }
    }
}

/// コマンドを実行する
async fn run_command(cli: Cli) -> Result<CommandOutput> {
    let project_path = env::current_dir()?;

    match cli.command {
        Commands::Check {
            env,
            output,
            schema,
            format,
        } => {
            let handler = CheckCommandHandler::new();
            let command = CheckCommand {
                project_path,
                config_path: cli.config,
                env,
                output,
                schema,
                format,
            };
            handler.execute(&command).await
        }

        Commands::Init { force } => {
            let handler = InitCommandHandler::new();
            let command = InitCommand {
                project_path,
                config_path: cli.config,
                force,
            };
            handler.execute(&command)
        }
    }
}
