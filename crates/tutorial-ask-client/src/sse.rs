use tracing::debug;

use crate::events::StreamEvent;

/// Field prefix of a data-bearing frame.
const DATA_PREFIX: &str = "data:";

/// Incremental decoder for a blank-line-delimited event-stream body.
///
/// Raw bytes accumulate with carriage returns stripped, so `\r\n\r\n` and
/// `\n\n` framings produce identical frame boundaries. Complete frames drain
/// on each push; everything after the last delimiter stays buffered for the
/// next chunk. `0x0A` never occurs inside a multi-byte UTF-8 sequence, so a
/// character split across chunks always sits in the retained remainder and is
/// decoded only once complete.
#[derive(Default)]
pub(crate) struct SseFrameDecoder {
    buf: Vec<u8>,
}

impl SseFrameDecoder {
    /// Appends a raw chunk and returns every frame completed by it.
    ///
    /// A stream that ends mid-frame never surfaces the partial tail: dropping
    /// the decoder discards whatever is still buffered.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend(chunk.iter().copied().filter(|b| *b != b'\r'));
        let mut frames = Vec::new();
        while let Some(idx) = find_frame_delimiter(&self.buf) {
            let frame_bytes = self.buf[..idx].to_vec();
            self.buf.drain(..idx + 2);
            frames.push(String::from_utf8_lossy(&frame_bytes).into_owned());
        }
        frames
    }
}

fn find_frame_delimiter(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|window| window == b"\n\n")
}

/// Parses one frame into zero-or-one decoded events.
///
/// Non-data frames, empty payloads, and payloads that fail JSON decoding are
/// all dropped without surfacing an error: one bad frame must not end an
/// otherwise-valid stream.
pub(crate) fn extract_event(frame: &str) -> Option<StreamEvent> {
    let rest = frame.trim().strip_prefix(DATA_PREFIX)?;
    let payload = rest.trim();
    if payload.is_empty() {
        return None;
    }
    match serde_json::from_str(payload) {
        Ok(value) => Some(StreamEvent::new(value)),
        Err(e) => {
            debug!(error = %e, "dropping undecodable stream frame");
            None
        }
    }
}
