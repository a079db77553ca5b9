// portfolio-term: the levkany.com terminal
//
// This is the main entry point: it loads the configuration, builds the
// interpreter and either runs the given inputs or starts the REPL.

use anyhow::{Context, Result};
use clap::Parser;
use portfolio_term::cli::args::Cli;
use portfolio_term::cli::render::{apply_response, show, styled, ScreenUpdate, TerminalLog};
use portfolio_term::cli::{Interpreter, Repl};
use portfolio_term::config::{build_interpreter, Config, EffectsMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // .env may carry PORTFOLIO_TERM_CONFIG, so load it before parsing flags
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let mode = if cli.dry_run {
        EffectsMode::DryRun
    } else {
        EffectsMode::System
    };
    let interpreter =
        build_interpreter(&config, mode).context("Failed to build the interpreter")?;
    info!(?mode, "interpreter ready");

    if cli.exec.is_empty() {
        let mut repl = Repl::new(interpreter)?;
        repl.run()?;
    } else {
        run_inputs(&interpreter, &cli.exec, cli.json)?;
    }

    Ok(())
}

/// Process each `--exec` input in order and print the result
fn run_inputs(interpreter: &Interpreter, inputs: &[String], json: bool) -> Result<()> {
    let mut log = TerminalLog::new();
    let mut stdout = std::io::stdout();

    for input in inputs {
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let response = interpreter.process(input);
        if json {
            println!("{}", serde_json::to_string(&response)?);
            continue;
        }

        let echo = styled(log.push_command(input));
        show(&mut stdout, &ScreenUpdate::Print(vec![echo]))?;
        let update = apply_response(&mut log, &response);
        show(&mut stdout, &update)?;
    }

    Ok(())
}
