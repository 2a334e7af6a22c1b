//! Line classification for the node link
//!
//! A completed line is one of two application message kinds, decided by its
//! leading bytes, or unrecognized noise (boot chatter, echo, log output)
//! which is discarded without effect.

use heapless::Vec;

/// Leading bytes of a publication line
pub const PUBLICATION_PREFIX: [u8; 2] = *b"# ";

/// First byte of a response line
pub const RESPONSE_MARKER: u8 = b':';

/// Bytes from line start to the response payload: the marker plus a
/// fixed-width status header (code and description) that is discarded
pub const RESPONSE_HEADER_LEN: usize = 13;

/// Maximum length of an outbound request line, terminator included
pub const MAX_REQUEST_LINE_LEN: usize = 128;

/// A fully formed request line awaiting transmission
pub type RequestLine = Vec<u8, MAX_REQUEST_LINE_LEN>;

/// A completed line, typed by its leading bytes
///
/// Payloads borrow from the line they were classified from; delivery copies
/// them out before the line buffer is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineKind<'a> {
    /// Data pushed unsolicited by the node
    Publication(&'a [u8]),
    /// Reply to a previously sent request, payload follows the status header
    Response(&'a [u8]),
    /// Anything else; discarded with no further effect
    Unrecognized,
}

/// Classify a completed line by its leading bytes
///
/// Bounds are checked before slicing: lines shorter than the payload offset
/// of their kind are unrecognized, never a panic. A publication must carry
/// at least one payload byte; a response payload may be empty.
pub fn classify(line: &[u8]) -> LineKind<'_> {
    if line.len() > PUBLICATION_PREFIX.len() && line.starts_with(&PUBLICATION_PREFIX) {
        return LineKind::Publication(&line[PUBLICATION_PREFIX.len()..]);
    }

    if line.first() == Some(&RESPONSE_MARKER) && line.len() >= RESPONSE_HEADER_LEN {
        return LineKind::Response(&line[RESPONSE_HEADER_LEN..]);
    }

    LineKind::Unrecognized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_payload_after_prefix() {
        assert_eq!(classify(b"# hello"), LineKind::Publication(b"hello"));
    }

    #[test]
    fn test_publication_requires_payload() {
        // Prefix alone is not a publication
        assert_eq!(classify(b"# "), LineKind::Unrecognized);
    }

    #[test]
    fn test_publication_prefix_needs_space() {
        assert_eq!(classify(b"#x data"), LineKind::Unrecognized);
    }

    #[test]
    fn test_publication_prefix_must_lead() {
        assert_eq!(classify(b" # hello"), LineKind::Unrecognized);
    }

    #[test]
    fn test_response_payload_after_status_header() {
        let line = b":85 Content. {\"a\":1}";
        assert_eq!(classify(line), LineKind::Response(b"{\"a\":1}"));
    }

    #[test]
    fn test_response_header_only_is_empty_payload() {
        let line = b":85 Content. ";
        assert_eq!(line.len(), RESPONSE_HEADER_LEN);
        assert_eq!(classify(line), LineKind::Response(b""));
    }

    #[test]
    fn test_response_shorter_than_header_is_unrecognized() {
        assert_eq!(classify(b":85"), LineKind::Unrecognized);
        assert_eq!(classify(b":"), LineKind::Unrecognized);
    }

    #[test]
    fn test_empty_line_is_unrecognized() {
        assert_eq!(classify(b""), LineKind::Unrecognized);
    }

    #[test]
    fn test_plain_text_is_unrecognized() {
        assert_eq!(classify(b"boot: link up"), LineKind::Unrecognized);
    }
}
