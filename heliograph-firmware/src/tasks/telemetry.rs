//! Telemetry consumer task
//!
//! Demo consumer driving the poll-then-acknowledge read pattern: polls the
//! inbox on a fixed interval, periodically queues a data request to the
//! node, and hands payloads to the data-object layer (a logging stub
//! here - structured processing lives outside the link).

use defmt::*;
use embassy_time::{Duration, Ticker};

use heliograph_core::config::LinkConfig;

use crate::api;
use crate::tasks::send_request;

/// Request line polling the node's live data objects
const NODE_DATA_REQUEST: &[u8] = b"?output\n";

/// Poll ticks between data requests
const REQUEST_EVERY_TICKS: u32 = 8;

/// Telemetry task - consumes both message kinds and paces data requests
#[embassy_executor::task]
pub async fn telemetry_task(link: LinkConfig) {
    info!("Telemetry task started");

    let mut ticker = Ticker::every(Duration::from_millis(link.poll_interval_ms as u64));
    let mut ticks = 0u32;

    loop {
        ticker.next().await;

        if api::publication_pending().await {
            let json = api::publication_json().await;
            info!("publication: {=[u8]:a}", json.as_slice());
            api::acknowledge_publication().await;
        }

        if api::response_pending().await {
            let json = api::response_json().await;
            info!("response: {=[u8]:a}", json.as_slice());
            api::acknowledge_response().await;
        }

        ticks = ticks.wrapping_add(1);
        if ticks % REQUEST_EVERY_TICKS == 0 {
            if let Err(e) = send_request(NODE_DATA_REQUEST) {
                warn!("request not queued: {:?}", e);
            }
        }
    }
}
