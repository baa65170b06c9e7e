/// Event kinds that signal the producer has no more events to send.
const TERMINAL_KINDS: [&str; 2] = ["done", "error"];

/// One decoded event from the search-and-ask stream.
///
/// Events are delivered exactly as the server sent them; the accessors read
/// well-known fields opportunistically and unknown kinds pass through to the
/// consumer unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamEvent(serde_json::Value);

impl StreamEvent {
    pub(crate) fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    /// Returns the event's discriminating `event` field, when present.
    pub fn kind(&self) -> Option<&str> {
        self.0.get("event").and_then(|v| v.as_str())
    }

    /// Returns true for kinds that end the stream (`done` or `error`).
    pub fn is_terminal(&self) -> bool {
        self.kind()
            .is_some_and(|kind| TERMINAL_KINDS.iter().any(|t| kind.eq_ignore_ascii_case(t)))
    }

    /// Returns the `text` field carried by `token` events, when present.
    pub fn text(&self) -> Option<&str> {
        self.0.get("text").and_then(|v| v.as_str())
    }

    /// Returns the `message` field carried by `error` events, when present.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(|v| v.as_str())
    }

    /// Borrows the raw decoded payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the event and returns the raw decoded payload.
    pub fn into_payload(self) -> serde_json::Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_and_error_are_terminal_regardless_of_case() {
        for kind in ["done", "error", "DONE", "Error"] {
            let event = StreamEvent::new(serde_json::json!({"event": kind}));
            assert!(event.is_terminal(), "{kind} should be terminal");
        }
    }

    #[test]
    fn unknown_or_missing_kinds_are_not_terminal() {
        let token = StreamEvent::new(serde_json::json!({"event":"token","text":"a"}));
        let bare = StreamEvent::new(serde_json::json!({"text":"a"}));
        assert!(!token.is_terminal());
        assert!(!bare.is_terminal());
        assert_eq!(bare.kind(), None);
    }

    #[test]
    fn accessors_read_well_known_fields() {
        let event = StreamEvent::new(serde_json::json!({"event":"token","text":"hi"}));
        assert_eq!(event.kind(), Some("token"));
        assert_eq!(event.text(), Some("hi"));
        assert_eq!(event.message(), None);
    }
}
