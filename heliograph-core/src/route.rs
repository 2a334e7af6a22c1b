//! Routing of completed lines into the inbox
//!
//! The receive task hands every completed line here; recognized payloads
//! are copied into the matching slot, everything else falls through with
//! no effect.

use heapless::Vec;
use heliograph_protocol::{classify, LineKind, LINE_FEED};

use crate::inbox::{Inbox, MessageKind, MAX_PAYLOAD_LEN};

/// What happened to a completed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RouteOutcome {
    /// Payload copied into the kind's slot
    Delivered(MessageKind),
    /// Slot still pending; payload discarded and counted
    SlotBusy(MessageKind),
    /// Unrecognized line; no inbox interaction
    Ignored,
}

/// Classify a completed line and deliver its payload
///
/// Response payloads are re-terminated with a single `\n` before the copy
/// (the downstream parser is line oriented; publications carry no
/// terminator). Content is cut so the terminator survives truncation.
pub fn route_line(line: &[u8], inbox: &mut Inbox) -> RouteOutcome {
    match classify(line) {
        LineKind::Publication(payload) => deliver(inbox, MessageKind::Publication, payload),
        LineKind::Response(payload) => {
            let mut delivered: Vec<u8, MAX_PAYLOAD_LEN> = Vec::new();
            let take = payload.len().min(MAX_PAYLOAD_LEN - 1);
            // Cannot fail: content clamped to leave room for the terminator
            let _ = delivered.extend_from_slice(&payload[..take]);
            let _ = delivered.push(LINE_FEED);
            deliver(inbox, MessageKind::Response, &delivered)
        }
        LineKind::Unrecognized => RouteOutcome::Ignored,
    }
}

fn deliver(inbox: &mut Inbox, kind: MessageKind, payload: &[u8]) -> RouteOutcome {
    if inbox.publish(kind, payload) {
        RouteOutcome::Delivered(kind)
    } else {
        RouteOutcome::SlotBusy(kind)
    }
}
