//! Byte-at-a-time line framing
//!
//! Turns the UART byte stream into discrete line events. The accumulator
//! never allocates and never fails: bytes past capacity are dropped until
//! the next terminator, and a terminator always completes a line.

/// Line terminator byte
pub const LINE_FEED: u8 = b'\n';

/// Optional byte preceding the terminator, stripped from line content
pub const CARRIAGE_RETURN: u8 = b'\r';

/// Receive buffer size, large enough for any expected line
pub const RX_LINE_BUF_SIZE: usize = 1024;

/// Accumulator sized for the node link receive path
pub type RxLineAccumulator = LineAccumulator<RX_LINE_BUF_SIZE>;

/// State machine collecting bytes into a bounded line buffer
///
/// Content length never exceeds `CAP - 1`; the last slot is reserved so a
/// terminator can complete a line even when the buffer is otherwise full.
#[derive(Debug, Clone)]
pub struct LineAccumulator<const CAP: usize> {
    buf: [u8; CAP],
    len: usize,
}

impl<const CAP: usize> LineAccumulator<CAP> {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            buf: [0; CAP],
            len: 0,
        }
    }

    /// Feed a single byte from the transport
    ///
    /// Returns `Some(line)` when the byte completes a line, borrowing the
    /// content until the next call. `\r\n` and `\n` both mark line end and
    /// yield identical content; a lone terminator yields an empty line.
    /// The length is reset before the content is handed out, so the next
    /// `feed` starts a fresh line regardless of what the caller does with
    /// this one.
    pub fn feed(&mut self, byte: u8) -> Option<&[u8]> {
        if byte == LINE_FEED {
            let mut end = self.len;
            if end > 0 && self.buf[end - 1] == CARRIAGE_RETURN {
                end -= 1;
            }
            self.len = 0;
            return Some(&self.buf[..end]);
        }

        // Fill up to all but one slot; excess bytes before the next
        // terminator are dropped rather than corrupting the line.
        if self.len < CAP - 1 {
            self.buf[self.len] = byte;
            self.len += 1;
        }
        None
    }

    /// Number of content bytes accumulated for the line in progress
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no line is in progress
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discard any partially accumulated line
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<const CAP: usize> Default for LineAccumulator<CAP> {
    fn default() -> Self {
        Self::new()
    }
}
