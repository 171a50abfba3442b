// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Switchboard - routes user utterances to specialized agents.
//!
//! This is the binary entry point for the Switchboard router.

use clap::{Parser, Subcommand};

mod decide;
mod shell;

/// Switchboard - routes user utterances to specialized agents.
#[derive(Parser, Debug)]
#[command(name = "switchboard", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route a single utterance and print the decision as JSON.
    Decide {
        /// The utterance to route.
        utterance: String,

        /// Raw classifier scores as JSON, e.g. '{"conversation":0.9,"executor":0.05,"research":0.05}'.
        /// When omitted, the built-in keyword classifier scores the utterance.
        #[arg(long)]
        scores: Option<String>,

        /// Conversation identifier; a fresh one is generated when omitted.
        #[arg(long)]
        conversation: Option<String>,
    },
    /// Launch an interactive routing session.
    Shell,
    /// Print the resolved configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match switchboard_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            switchboard_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let outcome = match cli.command {
        Some(Commands::Decide {
            utterance,
            scores,
            conversation,
        }) => decide::run_decide(&config, &utterance, scores.as_deref(), conversation).await,
        Some(Commands::Shell) | None => shell::run_shell(&config).await,
        Some(Commands::Config) => print_config(&config),
    };

    if let Err(err) = outcome {
        eprintln!("switchboard: {err}");
        std::process::exit(1);
    }
}

fn print_config(
    config: &switchboard_config::SwitchboardConfig,
) -> Result<(), switchboard_core::SwitchboardError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| switchboard_core::SwitchboardError::Internal(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured log level
/// applies to this crate's targets with `warn` for everything else.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "switchboard={log_level},switchboard_router={log_level},switchboard_state={log_level},switchboard_classifier={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
