/// Search/answer mode selector for a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AskMode {
    /// Search results only.
    Search,
    /// Generated answer only.
    Qa,
    /// Search results plus a generated answer.
    Both,
}

/// JSON body of the search-and-ask request.
///
/// `stream` is always set by the client; the server falls back to a buffered
/// response when it cannot stream.
#[derive(Clone, Debug, serde::Serialize)]
pub(crate) struct AskPayload {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<AskMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    pub stream: bool,
}
