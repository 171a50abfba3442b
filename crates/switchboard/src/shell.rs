// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchboard shell` command implementation.
//!
//! Launches an interactive REPL with colored prompt and readline
//! history. Each line is one conversational turn through the full
//! pipeline: consume any pending clarification hint, classify with the
//! keyword classifier, decide, record the outcome. The conversation id
//! lives for the whole shell session, so clarification turns behave the
//! way they would against a real channel.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use switchboard_classifier::KeywordClassifier;
use switchboard_config::SwitchboardConfig;
use switchboard_core::{
    ClassifierAdapter, ConversationId, RoutingDecision, RoutingRequest, SwitchboardError,
};
use switchboard_router::DecisionEngine;
use switchboard_state::ClarificationTracker;
use tracing::debug;

/// Runs the `switchboard shell` interactive REPL.
pub async fn run_shell(config: &SwitchboardConfig) -> Result<(), SwitchboardError> {
    let engine = DecisionEngine::new(config.engine.clone());
    let tracker = ClarificationTracker::from_config(&config.clarification);
    let classifier = KeywordClassifier::new();

    let conversation = ConversationId::from(uuid::Uuid::new_v4().to_string());
    debug!(conversation = conversation.as_str(), "shell session started");

    // Set up readline editor.
    let mut rl = DefaultEditor::new()
        .map_err(|e| SwitchboardError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "switchboard shell".bold().green());
    println!("{}", "type an utterance to see its routing decision; ctrl-d exits".dimmed());

    let prompt = format!("{}> ", config.agent.name.green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match route_turn(&engine, &tracker, &classifier, &conversation, trimmed).await {
                    Ok(decision) => print_decision(&decision),
                    Err(e) => eprintln!("{}: {e}", "error".red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Drives one conversational turn through the routing pipeline.
async fn route_turn(
    engine: &DecisionEngine,
    tracker: &ClarificationTracker,
    classifier: &KeywordClassifier,
    conversation: &ConversationId,
    utterance: &str,
) -> Result<RoutingDecision, SwitchboardError> {
    let hint = tracker.hint(conversation);
    let scores = classifier.classify(utterance).await?;
    let request = RoutingRequest::new(conversation.clone(), utterance, scores);
    let decision = engine.decide_with_hint(&request, hint.as_deref())?;
    tracker.observe(conversation, utterance, &decision);
    Ok(decision)
}

/// Renders a decision as a compact colored summary line.
fn print_decision(decision: &RoutingDecision) {
    let target = match decision.used_fallback {
        true => decision.target.to_string().yellow(),
        false => decision.target.to_string().green(),
    };
    let mut line = format!(
        "-> {target} [{band}] ({rationale})",
        band = decision.band,
        rationale = decision.rationale,
    );
    if decision.multi_intent_detected {
        let candidates: Vec<String> = decision
            .candidates
            .iter()
            .map(ToString::to_string)
            .collect();
        line.push_str(&format!(" candidates: {}", candidates.join(", ")));
    }
    println!("{line}");
}
