//! Client for a tutorials knowledge-base search-and-ask API.
//!
//! The server answers `POST /tutorials/search-and-ask` either as a
//! server-sent-events stream of JSON events (`meta`, `token`, `error`,
//! `done`) or as one buffered JSON body. This crate issues the request,
//! incrementally decodes the event stream regardless of how the transport
//! chunks it, dispatches each decoded event to a consumer callback, and
//! falls back to the buffered shape when the server does not stream.
//!
//! # Builder-first usage
//!
//! ```no_run
//! use tutorial_ask_client::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ClientError> {
//! let client = AskClient::new(AskClientConfig::new("http://localhost:3000"))?;
//!
//! let outcome = client
//!     .ask("how do lifetimes work")
//!     .mode(AskMode::Both)
//!     .limit(5)
//!     .stream(|event| {
//!         if event.kind() == Some("token") {
//!             print!("{}", event.text().unwrap_or_default());
//!         }
//!     })
//!     .await?;
//!
//! if let Some(data) = outcome.data() {
//!     println!("{data}");
//! }
//! # Ok(())
//! # }
//! ```

/// Client entry point and query builder.
pub mod client;
/// Client configuration.
pub mod config;
/// Read loop and cancellation handles.
pub mod dispatch;
/// Public error types used by the client API.
pub mod errors;
/// Decoded stream events.
pub mod events;
/// Common imports for typical usage.
pub mod prelude;
/// Query modes and the request payload.
pub mod request;
/// Outcomes and typed buffered-response views.
pub mod response;
/// Incremental event-stream frame decoding.
mod sse;

pub use client::{AskBuilder, AskClient};
pub use config::AskClientConfig;
pub use dispatch::{AbortHandle, AbortToken, abort_channel};
pub use errors::ClientError;
pub use events::StreamEvent;
pub use request::AskMode;
pub use response::{Answer, AskOutcome, SearchAndAskResponse, SearchHit, SearchResults};
