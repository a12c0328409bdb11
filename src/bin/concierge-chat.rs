//! Interactive chat assistant for hotel booking analytics.
//!
//! This binary provides a REPL interface for asking questions about hotel
//! booking data via the Cohere chat API. The headline figures printed at
//! startup are fixed display values; all substantive answers come from the
//! remote service.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! concierge-chat
//!
//! # Override the persona preamble
//! concierge-chat --preamble "You are a terse analytics assistant"
//!
//! # Lower the sampling temperature
//! concierge-chat --temperature 0.2
//!
//! # Disable colors (useful for piping output)
//! concierge-chat --no-color
//! ```
//!
//! The API credential is read from the COHERE_API_KEY environment variable.
//! A missing credential is reported when the first question is submitted,
//! not at startup.
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear conversation history
//! - `/temperature <t>` - Change the sampling temperature
//! - `/preamble [text]` - Set or reset the persona preamble
//! - `/websearch on|off` - Toggle the web-search connector
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use concierge::Cohere;
use concierge::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, DEFAULT_PREAMBLE, DEFAULT_TEMPERATURE,
    HEADLINE_STATS, PlainTextRenderer, Renderer, help_text, parse_command,
};
use concierge::types::Connector;

/// Main entry point for the concierge-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("concierge-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    let client = Cohere::new(None)?;
    let mut session = ChatSession::new(client, config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    println!("Hotel Booking Analytics Assistant");
    for stat in HEADLINE_STATS {
        renderer.print_info(&format!("  {}: {} ({})", stat.label, stat.value, stat.delta));
    }
    println!("Type /help for commands, /quit to exit\n");

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("Conversation cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Temperature(value) => {
                            session.config_mut().temperature = value;
                            renderer.print_info(&format!("Temperature set to {value}"));
                        }
                        ChatCommand::ClearTemperature => {
                            session.config_mut().temperature = DEFAULT_TEMPERATURE;
                            renderer.print_info(&format!(
                                "Temperature reset to {DEFAULT_TEMPERATURE}"
                            ));
                        }
                        ChatCommand::Preamble(preamble) => match preamble {
                            Some(p) => {
                                renderer.print_info(&format!("Preamble set to: {}", p));
                                session.config_mut().preamble = p;
                            }
                            None => {
                                session.config_mut().preamble = DEFAULT_PREAMBLE.to_string();
                                renderer.print_info("Preamble reset to the default.");
                            }
                        },
                        ChatCommand::WebSearch(enabled) => {
                            session.config_mut().connectors = if enabled {
                                vec![Connector::web_search()]
                            } else {
                                Vec::new()
                            };
                            renderer.print_info(&format!(
                                "Web search {}",
                                if enabled { "enabled" } else { "disabled" }
                            ));
                        }
                        ChatCommand::Stats => {
                            let stats = session.stats();
                            renderer.print_info(&format!("Messages: {}", stats.message_count));
                            renderer.print_info(&format!("Turns: {}", stats.turn_count));
                            renderer.print_info(&format!("Failures: {}", stats.failure_count));
                            renderer.print_info(&format!("Temperature: {}", stats.temperature));
                            renderer.print_info(&format!(
                                "Web search: {}",
                                if stats.web_search { "on" } else { "off" }
                            ));
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message: one turn at a time, so loading is never
                // observable here; the store settles before we render.
                session.submit(line).await;
                let state = session.snapshot();
                if let Some(error) = &state.error {
                    renderer.print_error(error);
                } else if let Some(reply) = state.last_reply() {
                    renderer.print_reply(&format!("Assistant: {}", reply.content));
                }
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}
