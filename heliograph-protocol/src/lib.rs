//! Data Node Serial Link Protocol
//!
//! This crate defines the line-oriented text protocol spoken by the solar
//! data node over UART. The node pushes unsolicited *publication* lines and
//! answers queued request lines with *response* lines:
//!
//! ```text
//! # {"Bat_V":13.2,"Bat_A":1.5}     publication: prefix + payload
//! :85 Content. {"Bat_V":13.2}      response: status header + payload
//! ```
//!
//! Lines are terminated by `\n`, optionally preceded by `\r`; prefix bytes
//! are case-sensitive. Framing is handled byte-at-a-time by
//! [`line::LineAccumulator`], and completed lines are typed by
//! [`message::classify`]. What happens to a classified payload (delivery,
//! JSON parsing) is out of scope for this crate.

#![no_std]
#![deny(unsafe_code)]

pub mod line;
pub mod message;

pub use line::{LineAccumulator, RxLineAccumulator, LINE_FEED, RX_LINE_BUF_SIZE};
pub use message::{
    classify, LineKind, RequestLine, MAX_REQUEST_LINE_LEN, PUBLICATION_PREFIX,
    RESPONSE_HEADER_LEN, RESPONSE_MARKER,
};
