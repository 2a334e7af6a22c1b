//! Node link receive task
//!
//! Pulls bytes from the UART one at a time, frames them into lines and
//! routes classified payloads into the shared inbox.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{with_timeout, Duration};
use embedded_io_async::Read;

use heliograph_core::config::LinkConfig;
use heliograph_core::route::{route_line, RouteOutcome};
use heliograph_protocol::RxLineAccumulator;

use crate::channels::INBOX;

/// Node link RX task - frames the byte stream and fills the inbox
///
/// Runs for the lifetime of the process. The per-byte timeout only keeps
/// the loop live between bytes; a partially accumulated line survives any
/// number of timeouts.
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx, link: LinkConfig) {
    info!("Serial RX task started");

    let mut lines = RxLineAccumulator::new();
    let timeout = Duration::from_millis(link.rx_byte_timeout_ms as u64);

    loop {
        let Some(byte) = read_byte(&mut rx, timeout).await else {
            continue;
        };

        if let Some(line) = lines.feed(byte) {
            debug!("node line: {=[u8]:a}", line);

            let mut inbox = INBOX.lock().await;
            match route_line(line, &mut inbox) {
                RouteOutcome::Delivered(kind) => {
                    trace!("{:?} payload delivered", kind);
                }
                RouteOutcome::SlotBusy(kind) => {
                    warn!(
                        "{:?} slot busy, payload dropped ({} total)",
                        kind,
                        inbox.dropped(kind)
                    );
                }
                RouteOutcome::Ignored => {
                    trace!("unrecognized line ignored");
                }
            }
        }
    }
}

/// Pull one byte from the transport, bounded by the liveness timeout
///
/// Returns `None` on timeout or transport error with zero bytes consumed.
async fn read_byte(rx: &mut BufferedUartRx, timeout: Duration) -> Option<u8> {
    let mut buf = [0u8; 1];
    match with_timeout(timeout, rx.read(&mut buf)).await {
        Ok(Ok(n)) if n > 0 => Some(buf[0]),
        Ok(Ok(_)) => None,
        Ok(Err(e)) => {
            warn!("UART read error: {:?}", e);
            None
        }
        Err(_) => None, // timeout
    }
}
