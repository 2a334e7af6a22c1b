//! Embassy async tasks
//!
//! Each task runs independently and communicates via the shared statics.

pub mod serial_rx;
pub mod serial_tx;
pub mod telemetry;

pub use serial_rx::serial_rx_task;
pub use serial_tx::{send_request, serial_tx_task, RequestError};
pub use telemetry::telemetry_task;
