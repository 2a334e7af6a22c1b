//! Inter-task shared state
//!
//! Defines the statics shared between the serial tasks and consumers.
//! Uses embassy-sync primitives so the pending flag and payload of a slot
//! are only ever observed as one unit.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;

use heliograph_core::inbox::Inbox;
use heliograph_protocol::RequestLine;

/// Queue depth for outbound request lines
pub const REQUEST_QUEUE_SIZE: usize = 4;

/// Latest classified payload per message kind. Written by the RX task,
/// read and acknowledged by consumer tasks.
pub static INBOX: Mutex<CriticalSectionRawMutex, Inbox> = Mutex::new(Inbox::new());

/// Fully formed request lines awaiting transmission to the node
pub static REQUEST_CHANNEL: Channel<CriticalSectionRawMutex, RequestLine, REQUEST_QUEUE_SIZE> =
    Channel::new();
