//! Link configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Serial link parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkConfig {
    /// UART baud rate
    pub baudrate: u32,
    /// Per-byte read timeout in milliseconds; keeps the receive loop live,
    /// never aborts a line in progress
    pub rx_byte_timeout_ms: u16,
    /// Consumer poll interval in milliseconds
    pub poll_interval_ms: u16,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            baudrate: 115_200,
            rx_byte_timeout_ms: 20,
            poll_interval_ms: 250,
        }
    }
}
