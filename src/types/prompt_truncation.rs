use serde::{Deserialize, Serialize};

/// How the provider should trim the prompt when it exceeds the context limit.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromptTruncation {
    /// The provider drops history entries as needed.
    #[default]
    Auto,

    /// Requests that exceed the context limit fail.
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format() {
        assert_eq!(
            serde_json::to_string(&PromptTruncation::Auto).unwrap(),
            "\"AUTO\""
        );
        assert_eq!(
            serde_json::to_string(&PromptTruncation::Off).unwrap(),
            "\"OFF\""
        );
    }
}
