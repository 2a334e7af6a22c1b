//! Single-pending delivery slots, one per message kind
//!
//! The inbox holds the most recent unconsumed payload of each kind. A slot
//! accepts a new payload only while idle: latest-if-idle, drop-if-busy.
//! Consumers poll with [`Inbox::peek`] and acknowledge with
//! [`Inbox::clear`]; nothing is overwritten between the two.

use heapless::Vec;

/// Maximum stored payload length per slot
pub const MAX_PAYLOAD_LEN: usize = 500;

/// The two application message kinds delivered over the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageKind {
    /// Data pushed unsolicited by the node
    Publication,
    /// Reply to a previously sent request
    Response,
}

/// One delivery slot: latest payload plus the pending flag gating overwrite
struct Slot {
    payload: Vec<u8, MAX_PAYLOAD_LEN>,
    pending: bool,
    dropped: u32,
}

impl Slot {
    const fn new() -> Self {
        Self {
            payload: Vec::new(),
            pending: false,
            dropped: 0,
        }
    }
}

/// Most recent payload of each kind, gated until consumed
pub struct Inbox {
    publication: Slot,
    response: Slot,
}

impl Inbox {
    /// Create an inbox with both slots idle
    pub const fn new() -> Self {
        Self {
            publication: Slot::new(),
            response: Slot::new(),
        }
    }

    fn slot(&self, kind: MessageKind) -> &Slot {
        match kind {
            MessageKind::Publication => &self.publication,
            MessageKind::Response => &self.response,
        }
    }

    fn slot_mut(&mut self, kind: MessageKind) -> &mut Slot {
        match kind {
            MessageKind::Publication => &mut self.publication,
            MessageKind::Response => &mut self.response,
        }
    }

    /// Deliver a payload into a slot
    ///
    /// While the slot is pending the existing payload is preserved, the new
    /// one is discarded and counted, and `false` is returned. Payloads
    /// longer than [`MAX_PAYLOAD_LEN`] are truncated on copy, prefix kept,
    /// without signalling.
    pub fn publish(&mut self, kind: MessageKind, payload: &[u8]) -> bool {
        let slot = self.slot_mut(kind);
        if slot.pending {
            slot.dropped = slot.dropped.saturating_add(1);
            return false;
        }

        let take = payload.len().min(MAX_PAYLOAD_LEN);
        slot.payload.clear();
        // Cannot fail: length already clamped to the slot capacity
        let _ = slot.payload.extend_from_slice(&payload[..take]);
        slot.pending = true;
        true
    }

    /// Stored payload of a kind, if one is pending
    ///
    /// Does not clear: repeated peeks return the same payload until the
    /// consumer acknowledges with [`Inbox::clear`].
    pub fn peek(&self, kind: MessageKind) -> Option<&[u8]> {
        let slot = self.slot(kind);
        if slot.pending {
            Some(&slot.payload)
        } else {
            None
        }
    }

    /// Acknowledge consumption, permitting the next delivery of the kind
    pub fn clear(&mut self, kind: MessageKind) {
        self.slot_mut(kind).pending = false;
    }

    /// True while a payload of the kind awaits consumption
    pub fn is_pending(&self, kind: MessageKind) -> bool {
        self.slot(kind).pending
    }

    /// Payloads of the kind discarded because the slot was busy
    pub fn dropped(&self, kind: MessageKind) -> u32 {
        self.slot(kind).dropped
    }
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new()
    }
}
