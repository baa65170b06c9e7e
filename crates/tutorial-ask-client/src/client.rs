use futures::TryStreamExt as _;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::config::AskClientConfig;
use crate::dispatch::{AbortToken, abort_channel, run_stream};
use crate::errors::ClientError;
use crate::events::StreamEvent;
use crate::request::{AskMode, AskPayload};
use crate::response::AskOutcome;

/// Client for the tutorials search-and-ask API.
pub struct AskClient {
    client: reqwest::Client,
    config: AskClientConfig,
}

impl AskClient {
    /// Creates a client from explicit configuration.
    ///
    /// The client carries a cookie store so the caller's session credentials
    /// ride along with every request.
    pub fn new(config: AskClientConfig) -> Result<Self, ClientError> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config(
                "ask client base_url must not be empty".into(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build ask client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Creates a client using `TUTORIAL_ASK_BASE_URL`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(AskClientConfig::from_env()?)
    }

    /// Starts building a search-and-ask query.
    pub fn ask(&self, query: impl Into<String>) -> AskBuilder<'_> {
        AskBuilder {
            client: self,
            query: query.into(),
            mode: None,
            limit: None,
            abort: None,
        }
    }
}

/// Builder for configuring and sending a single search-and-ask query.
///
/// This is the main user-facing API for picking the query mode and result
/// limit before either streaming events or collecting the answer text.
pub struct AskBuilder<'a> {
    client: &'a AskClient,
    query: String,
    mode: Option<AskMode>,
    limit: Option<u32>,
    abort: Option<AbortToken>,
}

impl AskBuilder<'_> {
    /// Selects the search/answer mode for the query.
    pub fn mode(mut self, mode: AskMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Caps the number of search results.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Attaches a cancellation token created with [`abort_channel`].
    ///
    /// [`abort_channel`]: crate::dispatch::abort_channel
    pub fn abort_token(mut self, token: AbortToken) -> Self {
        self.abort = Some(token);
        self
    }

    /// Sends the query, dispatching each decoded event to `on_event`.
    ///
    /// Returns [`AskOutcome::Streamed`] once the event stream closes (normal
    /// completion, terminal event, or cooperative cancellation), or
    /// [`AskOutcome::Buffered`] with the decoded body when the server
    /// answered without streaming.
    pub async fn stream<F>(self, mut on_event: F) -> Result<AskOutcome, ClientError>
    where
        F: FnMut(StreamEvent),
    {
        if self.query.trim().is_empty() {
            return Err(ClientError::Validation("query must not be empty".into()));
        }

        let request_id = uuid::Uuid::new_v4();
        let payload = AskPayload {
            query: self.query,
            mode: self.mode,
            limit: self.limit,
            stream: true,
        };
        debug!(
            request_id = %request_id,
            mode = ?payload.mode,
            limit = ?payload.limit,
            "sending search-and-ask query"
        );

        let mut abort = self.abort.unwrap_or_else(|| abort_channel().1);
        if abort.is_aborted() {
            debug!(request_id = %request_id, "query cancelled before the request was issued");
            return Ok(AskOutcome::Streamed);
        }

        let send = self
            .client
            .client
            .post(self.client.config.search_and_ask_url())
            .json(&payload)
            .send();
        let response = tokio::select! {
            biased;
            _ = abort.aborted() => {
                debug!(request_id = %request_id, "query cancelled while the request was in flight");
                return Ok(AskOutcome::Streamed);
            }
            result = send => result
                .map_err(|e| ClientError::transport(format!("search-and-ask request failed: {e}")))?,
        };

        let status = response.status();
        if status.is_success() && is_event_stream(&response) {
            let chunks = Box::pin(
                response
                    .bytes_stream()
                    .map_err(|e| ClientError::transport(format!("stream read failed: {e}"))),
            );
            let end = run_stream(chunks, abort, &mut on_event).await?;
            debug!(request_id = %request_id, reason = ?end, "event stream closed");
            return Ok(AskOutcome::Streamed);
        }

        debug!(request_id = %request_id, status = %status, "handling buffered response");
        buffered_outcome(status, response).await
    }

    /// Sends the query and returns the answer text.
    ///
    /// On the streaming path this concatenates `token` event texts; on the
    /// buffered path it falls back to the payload's `answer.text`. The
    /// returned string is empty when the server produced no answer.
    pub async fn collect_answer(self) -> Result<String, ClientError> {
        let mut answer = String::new();
        let outcome = self
            .stream(|event| {
                if event.kind() == Some("token")
                    && let Some(text) = event.text()
                {
                    answer.push_str(text);
                }
            })
            .await?;

        if answer.is_empty()
            && let Some(text) = outcome
                .data()
                .and_then(|data| data.get("answer"))
                .and_then(|answer| answer.get("text"))
                .and_then(|v| v.as_str())
        {
            answer.push_str(text);
        }
        Ok(answer)
    }
}

fn is_event_stream(response: &reqwest::Response) -> bool {
    is_event_stream_content_type(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
    )
}

fn is_event_stream_content_type(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        v.trim()
            .to_ascii_lowercase()
            .starts_with("text/event-stream")
    })
}

/// Decodes a non-streaming response into the buffered outcome.
///
/// An undecodable body is treated as a missing payload rather than an error;
/// a non-success status fails with the message the server put in the body.
async fn buffered_outcome(
    status: StatusCode,
    response: reqwest::Response,
) -> Result<AskOutcome, ClientError> {
    let data = response.json::<serde_json::Value>().await.ok();
    if !status.is_success() {
        let message = data
            .as_ref()
            .and_then(error_message)
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        return Err(ClientError::request_failed(Some(status.as_u16()), message));
    }
    Ok(AskOutcome::Buffered { data })
}

/// Pulls a human-readable message out of a conventional error payload.
fn error_message(payload: &serde_json::Value) -> Option<&str> {
    payload
        .get("error")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("message").and_then(|v| v.as_str()))
}
