//! Common imports for typical client usage.
//!
//! This module intentionally exports the most frequently used builder/runtime
//! types so examples and application code need fewer import lines.
pub use crate::{
    AbortHandle, AbortToken, AskBuilder, AskClient, AskClientConfig, AskMode, AskOutcome,
    ClientError, SearchAndAskResponse, StreamEvent, abort_channel,
};
