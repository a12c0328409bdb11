use serde::{Deserialize, Serialize};

/// Identifier of the provider's built-in web-search connector.
const WEB_SEARCH_CONNECTOR_ID: &str = "web-search";

/// A retrieval connector the provider may consult when generating a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    /// The connector identifier.
    pub id: String,
}

impl Connector {
    /// Create a connector with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The web-search augmentation connector.
    pub fn web_search() -> Self {
        Self::new(WEB_SEARCH_CONNECTOR_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn web_search_wire_format() {
        assert_eq!(
            to_value(Connector::web_search()).unwrap(),
            json!({"id": "web-search"})
        );
    }
}
