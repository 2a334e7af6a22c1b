//! Node link transmit task
//!
//! Drains queued request lines to the UART. Callers supply fully formed
//! lines, terminator included; no framing is applied on send.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use heliograph_protocol::RequestLine;

use crate::channels::REQUEST_CHANNEL;

/// Why a request line was not queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RequestError {
    /// Line exceeds the request line limit
    TooLong,
    /// Transmit queue is full; the line was dropped
    QueueFull,
}

/// Queue a fully formed request line for transmission
///
/// Never blocks: when the queue is full the line is dropped and the caller
/// told.
pub fn send_request(line: &[u8]) -> Result<(), RequestError> {
    let line = RequestLine::from_slice(line).map_err(|_| RequestError::TooLong)?;
    REQUEST_CHANNEL
        .try_send(line)
        .map_err(|_| RequestError::QueueFull)
}

/// Node link TX task - writes queued request lines to the UART
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: BufferedUartTx) {
    info!("Serial TX task started");

    loop {
        let line = REQUEST_CHANNEL.receive().await;
        if let Err(e) = tx.write_all(&line).await {
            warn!("Failed to send request: {:?}", e);
        } else {
            trace!("request sent ({} bytes)", line.len());
        }
    }
}
