//! Consumer-facing data access
//!
//! The latest payload of each kind, copied out of the inbox. When the node
//! link is compiled out the accessors degrade to a fixed empty-object
//! placeholder so consumers need no feature gates of their own.

use heapless::Vec;

use heliograph_core::inbox::MAX_PAYLOAD_LEN;

/// Payload copy handed to consumers
pub type JsonPayload = Vec<u8, MAX_PAYLOAD_LEN>;

/// Placeholder payload: an empty JSON object
pub const EMPTY_JSON: &[u8] = b"{}";

fn placeholder() -> JsonPayload {
    let mut json = JsonPayload::new();
    // Cannot fail: the literal is tiny compared to the payload capacity
    let _ = json.extend_from_slice(EMPTY_JSON);
    json
}

#[cfg(feature = "serial")]
mod live {
    use super::{placeholder, JsonPayload};
    use crate::channels::INBOX;
    use heliograph_core::inbox::MessageKind;

    async fn payload_of(kind: MessageKind) -> JsonPayload {
        let inbox = INBOX.lock().await;
        match inbox.peek(kind) {
            Some(payload) => {
                let mut json = JsonPayload::new();
                // Cannot fail: slot payloads never exceed the capacity
                let _ = json.extend_from_slice(payload);
                json
            }
            None => placeholder(),
        }
    }

    /// Latest unsolicited publication payload, `{}` when none is pending
    pub async fn publication_json() -> JsonPayload {
        payload_of(MessageKind::Publication).await
    }

    /// Latest response payload, `{}` when none is pending
    pub async fn response_json() -> JsonPayload {
        payload_of(MessageKind::Response).await
    }

    /// True while a publication awaits acknowledgement
    pub async fn publication_pending() -> bool {
        INBOX.lock().await.is_pending(MessageKind::Publication)
    }

    /// True while a response awaits acknowledgement
    pub async fn response_pending() -> bool {
        INBOX.lock().await.is_pending(MessageKind::Response)
    }

    /// Acknowledge the pending publication, reopening its slot
    pub async fn acknowledge_publication() {
        INBOX.lock().await.clear(MessageKind::Publication);
    }

    /// Acknowledge the pending response, reopening its slot
    pub async fn acknowledge_response() {
        INBOX.lock().await.clear(MessageKind::Response);
    }
}

#[cfg(feature = "serial")]
pub use live::*;

#[cfg(not(feature = "serial"))]
mod stub {
    use super::{placeholder, JsonPayload};

    /// Node link compiled out: fixed placeholder
    pub async fn publication_json() -> JsonPayload {
        placeholder()
    }

    /// Node link compiled out: fixed placeholder
    pub async fn response_json() -> JsonPayload {
        placeholder()
    }

    /// Node link compiled out: never pending
    pub async fn publication_pending() -> bool {
        false
    }

    /// Node link compiled out: never pending
    pub async fn response_pending() -> bool {
        false
    }

    /// Node link compiled out: nothing to acknowledge
    pub async fn acknowledge_publication() {}

    /// Node link compiled out: nothing to acknowledge
    pub async fn acknowledge_response() {}
}

#[cfg(not(feature = "serial"))]
pub use stub::*;
