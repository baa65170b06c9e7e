use bytes::Bytes;
use futures::Stream;
use futures::StreamExt as _;
use tokio::sync::watch;

use crate::errors::ClientError;
use crate::events::StreamEvent;
use crate::sse::{SseFrameDecoder, extract_event};

/// Handle used to request cancellation of an in-flight query.
#[derive(Clone)]
pub struct AbortHandle {
    tx: watch::Sender<bool>,
}

impl AbortHandle {
    /// Requests cancellation.
    ///
    /// Cancellation is cooperative: the read loop stops before requesting the
    /// next chunk and an in-flight read is unblocked.
    pub fn abort(&self) {
        let _ = self.tx.send(true);
    }
}

/// Receiving side of an abort pair, threaded into the read loop.
pub struct AbortToken {
    rx: watch::Receiver<bool>,
}

impl AbortToken {
    pub(crate) fn is_aborted(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation is requested.
    ///
    /// Never resolves when the handle was dropped without aborting.
    pub(crate) async fn aborted(&mut self) {
        while self.rx.changed().await.is_ok() {
            if *self.rx.borrow() {
                return;
            }
        }
        std::future::pending::<()>().await
    }
}

/// Creates a connected abort handle/token pair.
pub fn abort_channel() -> (AbortHandle, AbortToken) {
    let (tx, rx) = watch::channel(false);
    (AbortHandle { tx }, AbortToken { rx })
}

/// Reason the read loop stopped consuming chunks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StreamEnd {
    /// Transport reported end-of-data.
    EndOfData,
    /// A `done` or `error` event was dispatched.
    TerminalEvent,
    /// Cancellation was requested.
    Cancelled,
}

/// Drives the chunk → frame → event pipeline until the stream ends.
///
/// Events are handed to `on_event` synchronously in emission order and the
/// loop never reads ahead of the callback. Every event produced by a chunk is
/// dispatched before the terminal check; once a terminal event, end-of-data,
/// or cancellation is observed, no further chunks are read.
pub(crate) async fn run_stream<S, F>(
    mut chunks: S,
    mut abort: AbortToken,
    on_event: &mut F,
) -> Result<StreamEnd, ClientError>
where
    S: Stream<Item = Result<Bytes, ClientError>> + Unpin,
    F: FnMut(StreamEvent),
{
    let mut decoder = SseFrameDecoder::default();
    loop {
        // Cancellation wins over a chunk that is already buffered.
        if abort.is_aborted() {
            return Ok(StreamEnd::Cancelled);
        }
        tokio::select! {
            biased;
            _ = abort.aborted() => return Ok(StreamEnd::Cancelled),
            next = chunks.next() => match next {
                Some(Ok(chunk)) => {
                    let mut terminal = false;
                    for frame in decoder.push_chunk(&chunk) {
                        if let Some(event) = extract_event(&frame) {
                            terminal |= event.is_terminal();
                            on_event(event);
                        }
                    }
                    if terminal {
                        return Ok(StreamEnd::TerminalEvent);
                    }
                }
                Some(Err(e)) => return Err(e),
                None => return Ok(StreamEnd::EndOfData),
            },
        }
    }
}
