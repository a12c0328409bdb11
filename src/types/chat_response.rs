use serde::{Deserialize, Serialize};

/// A chat completion response from the provider.
///
/// Only `text` is consumed on the success path; the other fields are kept
/// for logging. A missing or empty `text` is treated as a failed turn by
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The reply text, if the provider produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Provider-side identifier for the generation.
    #[serde(
        default,
        rename = "generationId",
        skip_serializing_if = "Option::is_none"
    )]
    pub generation_id: Option<String>,

    /// Why generation stopped, if reported.
    #[serde(
        default,
        rename = "finishReason",
        skip_serializing_if = "Option::is_none"
    )]
    pub finish_reason: Option<String>,
}

impl ChatResponse {
    /// Returns the reply text, treating an absent or empty payload as `None`.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}
