//! Heliograph - Data Node Gateway Firmware
//!
//! Main firmware binary for RP2040-based gateway boards. The gateway sits
//! between a solar data node (charge controller) and the rest of the
//! system: it frames the node's line-delimited UART telemetry, holds the
//! latest publication and response payloads for consumers, and transmits
//! queued request lines.
//!
//! Named after the heliograph, the sun-powered signalling telegraph.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

#[cfg(feature = "serial")]
use embassy_rp::bind_interrupts;
#[cfg(feature = "serial")]
use embassy_rp::peripherals::UART0;
#[cfg(feature = "serial")]
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
#[cfg(feature = "serial")]
use static_cell::StaticCell;

use heliograph_core::config::LinkConfig;

pub mod api;
#[cfg(feature = "serial")]
mod channels;
#[cfg(feature = "serial")]
mod tasks;

#[cfg(feature = "serial")]
bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
#[cfg(feature = "serial")]
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
#[cfg(feature = "serial")]
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Heliograph firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let link = LinkConfig::default();

    #[cfg(feature = "serial")]
    {
        // Setup UART for node communication
        let mut uart_config = UartConfig::default();
        uart_config.baudrate = link.baudrate;

        let tx_buf = TX_BUF.init([0u8; 256]);
        let rx_buf = RX_BUF.init([0u8; 256]);

        let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
        let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
        let (tx, rx) = uart.split();

        info!("UART initialized for node link");

        // Spawn tasks
        spawner.spawn(tasks::serial_rx_task(rx, link)).unwrap();
        spawner.spawn(tasks::serial_tx_task(tx)).unwrap();
        spawner.spawn(tasks::telemetry_task(link)).unwrap();

        info!("All tasks spawned, firmware running");
    }

    #[cfg(not(feature = "serial"))]
    {
        let _ = (p, link, spawner);
        info!("Node link disabled at build time");
    }

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
