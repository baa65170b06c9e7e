use crate::request::AskMode;

/// One search hit returned by the server.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub tutorial_id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub score: Option<f64>,
}

/// Search section of a buffered response.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub items: Vec<SearchHit>,
    pub took_ms: u64,
}

/// Generated answer section of a buffered response.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<SearchHit>,
}

/// Fully-decoded buffered response body.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAndAskResponse {
    pub query: String,
    pub mode: AskMode,
    pub search: SearchResults,
    pub answer: Option<Answer>,
    pub rag_enabled: bool,
}

/// Terminal result of one search-and-ask invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum AskOutcome {
    /// Events were delivered through the callback; no buffered payload exists.
    Streamed,
    /// The server answered with a single buffered body.
    ///
    /// `data` is `None` when the body was not valid JSON.
    Buffered { data: Option<serde_json::Value> },
}

impl AskOutcome {
    /// Returns true when events were streamed to the callback.
    pub fn streamed(&self) -> bool {
        matches!(self, Self::Streamed)
    }

    /// Borrows the buffered payload, when one was decoded.
    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Buffered { data } => data.as_ref(),
            Self::Streamed => None,
        }
    }

    /// Decodes the buffered payload into the typed response shape.
    ///
    /// Returns `None` on the streamed path, when no payload was decoded, or
    /// when the payload does not match the shape.
    pub fn response(&self) -> Option<SearchAndAskResponse> {
        serde_json::from_value(self.data()?.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_buffered_payload_into_typed_response() {
        let data = serde_json::json!({
            "query": "q",
            "mode": "search",
            "search": {"items": [], "tookMs": 5},
            "answer": null,
            "ragEnabled": false
        });
        let outcome = AskOutcome::Buffered { data: Some(data) };
        let response = outcome.response().expect("typed response");
        assert_eq!(response.query, "q");
        assert_eq!(response.mode, AskMode::Search);
        assert!(response.answer.is_none());
        assert!(!response.rag_enabled);
        assert_eq!(response.search.took_ms, 5);
    }

    #[test]
    fn decodes_camel_case_hit_fields() {
        let data = serde_json::json!({
            "query": "q",
            "mode": "both",
            "search": {
                "items": [{
                    "tutorialId": 7,
                    "slug": "intro-to-slugs",
                    "title": "Intro",
                    "excerpt": "...",
                    "score": null
                }],
                "tookMs": 12
            },
            "answer": {"text": "short answer", "sources": []},
            "ragEnabled": true
        });
        let outcome = AskOutcome::Buffered { data: Some(data) };
        let response = outcome.response().expect("typed response");
        assert_eq!(response.search.items[0].tutorial_id, 7);
        assert_eq!(response.search.items[0].score, None);
        assert_eq!(response.answer.expect("answer").text, "short answer");
    }

    #[test]
    fn streamed_outcome_has_no_payload() {
        let outcome = AskOutcome::Streamed;
        assert!(outcome.streamed());
        assert!(outcome.data().is_none());
        assert!(outcome.response().is_none());
    }
}
