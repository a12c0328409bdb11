//! Slash command parsing for the chat assistant.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the chat session without sending messages
//! to the API.

/// A parsed chat command.
///
/// These commands control the chat session and are not sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Clear the conversation history.
    Clear,

    /// Set the sampling temperature.
    Temperature(f32),

    /// Reset the sampling temperature to the default.
    ClearTemperature,

    /// Set or reset the persona preamble.
    /// `None` restores the default preamble.
    Preamble(Option<String>),

    /// Toggle the web-search connector.
    WebSearch(bool),

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Display session statistics (message count, turn count, etc.).
    Stats,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command,
/// or `None` if it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use concierge::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/temperature 0.3").is_some());
/// assert!(parse_command("How many bookings came in last month?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "clear" => ChatCommand::Clear,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        "stats" | "status" => ChatCommand::Stats,
        "preamble" => ChatCommand::Preamble(argument.map(|s| s.to_string())),
        "temperature" => match argument {
            Some(arg) if arg.eq_ignore_ascii_case("clear") => ChatCommand::ClearTemperature,
            Some(arg) => match parse_f32_in_range(arg, 0.0, 1.0) {
                Ok(value) => ChatCommand::Temperature(value),
                Err(err) => ChatCommand::Invalid(format!("/temperature {err}")),
            },
            None => ChatCommand::Invalid("/temperature requires a value".to_string()),
        },
        "websearch" => match argument.and_then(parse_on_off) {
            Some(value) => ChatCommand::WebSearch(value),
            None => ChatCommand::Invalid("/websearch expects 'on' or 'off'".to_string()),
        },
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

fn parse_on_off(argument: &str) -> Option<bool> {
    match argument.to_lowercase().as_str() {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn parse_f32_in_range(argument: &str, min: f32, max: f32) -> Result<f32, String> {
    match argument.parse::<f32>() {
        Ok(value) if value >= min && value <= max => Ok(value),
        Ok(_) => Err(format!("expects a value between {min} and {max}")),
        Err(_) => Err("expects a number".to_string()),
    }
}

/// Returns the help text listing all available commands.
pub fn help_text() -> String {
    [
        "/help              Show this help",
        "/clear             Clear conversation history",
        "/stats             Show session statistics",
        "/temperature <t>   Set sampling temperature (0.0-1.0, 'clear' resets)",
        "/preamble [text]   Set the persona preamble (no text restores the default)",
        "/websearch on|off  Toggle the web-search connector",
        "/quit              Exit",
    ]
    .join("\n")
}
