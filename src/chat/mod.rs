//! Chat assistant module for conversations about hotel booking analytics.
//!
//! This module provides a REPL chat interface built on top of the concierge
//! client library. It supports:
//!
//! - A conversation store as the single source of truth for rendering
//! - Optimistic user-message appends with loading/error lifecycle tracking
//! - Slash commands for session control
//! - A configurable persona preamble and generation parameters
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core chat session management and API interaction
//! - [`commands`]: Slash command parsing and handling
//! - [`dashboard`]: The fixed header statistics

mod commands;
mod config;
mod dashboard;
mod session;

pub use crate::render::{PlainTextRenderer, Renderer};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig, DEFAULT_PREAMBLE, DEFAULT_TEMPERATURE};
pub use dashboard::{DashboardStat, HEADLINE_STATS};
pub use session::{ChatSession, CompletionClient, SessionStats, SubmitOutcome};
