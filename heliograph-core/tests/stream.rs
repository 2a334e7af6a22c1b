//! Host-side byte-stream tests for the full framing pipeline:
//! accumulator -> classifier -> inbox.

use heliograph_core::inbox::{Inbox, MessageKind};
use heliograph_core::route::{route_line, RouteOutcome};
use heliograph_protocol::LineAccumulator;
use proptest::prelude::*;

/// Line content without terminator bytes, short enough to never truncate
fn line_content() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        any::<u8>().prop_filter("terminator bytes excluded", |b| *b != b'\n' && *b != b'\r'),
        0..64,
    )
}

proptest! {
    /// Every terminator yields exactly one completed line, with the content
    /// that was fed between terminators.
    #[test]
    fn one_completed_line_per_terminator(
        contents in prop::collection::vec(line_content(), 1..8),
        crlf in any::<bool>(),
    ) {
        let mut acc = LineAccumulator::<256>::new();
        let mut completed: Vec<Vec<u8>> = Vec::new();

        for content in &contents {
            for &byte in content {
                prop_assert!(acc.feed(byte).is_none());
            }
            if crlf {
                prop_assert!(acc.feed(b'\r').is_none());
            }
            if let Some(line) = acc.feed(b'\n') {
                completed.push(line.to_vec());
            }
        }

        prop_assert_eq!(&completed, &contents);
    }

    /// CRLF and bare LF termination produce identical line content.
    #[test]
    fn crlf_and_lf_agree(content in line_content()) {
        let mut lf_acc = LineAccumulator::<256>::new();
        let mut crlf_acc = LineAccumulator::<256>::new();

        for &byte in &content {
            lf_acc.feed(byte);
            crlf_acc.feed(byte);
        }
        crlf_acc.feed(b'\r');

        let lf_line = lf_acc.feed(b'\n').map(|l| l.to_vec());
        let crlf_line = crlf_acc.feed(b'\n').map(|l| l.to_vec());
        prop_assert_eq!(lf_line, crlf_line);
    }

    /// Routing never panics on arbitrary completed lines and only ever
    /// touches the inbox for recognized prefixes.
    #[test]
    fn routing_arbitrary_lines_is_total(content in line_content()) {
        let mut inbox = Inbox::new();
        let outcome = route_line(&content, &mut inbox);
        if outcome == RouteOutcome::Ignored {
            prop_assert!(!inbox.is_pending(MessageKind::Publication));
            prop_assert!(!inbox.is_pending(MessageKind::Response));
        }
    }
}

#[test]
fn session_stream_fills_both_slots() {
    // A realistic chunk of link traffic: boot noise, one publication, one
    // response to an earlier request, then a publication that arrives while
    // the slot is still pending.
    let stream: &[u8] = b"boot: link up\r\n\
        # {\"Bat_V\":13.2,\"Bat_A\":1.5}\n\
        :85 Content. {\"Bat_V\":13.2}\r\n\
        # {\"Bat_V\":13.1,\"Bat_A\":1.4}\n";

    let mut acc = LineAccumulator::<256>::new();
    let mut inbox = Inbox::new();
    let mut outcomes = Vec::new();

    for &byte in stream {
        if let Some(line) = acc.feed(byte) {
            outcomes.push(route_line(line, &mut inbox));
        }
    }

    assert_eq!(
        outcomes,
        vec![
            RouteOutcome::Ignored,
            RouteOutcome::Delivered(MessageKind::Publication),
            RouteOutcome::Delivered(MessageKind::Response),
            RouteOutcome::SlotBusy(MessageKind::Publication),
        ]
    );

    // First publication preserved, drop counted, response re-terminated
    assert_eq!(
        inbox.peek(MessageKind::Publication),
        Some(&b"{\"Bat_V\":13.2,\"Bat_A\":1.5}"[..])
    );
    assert_eq!(
        inbox.peek(MessageKind::Response),
        Some(&b"{\"Bat_V\":13.2}\n"[..])
    );
    assert_eq!(inbox.dropped(MessageKind::Publication), 1);

    // Acknowledge and the next publication lands
    inbox.clear(MessageKind::Publication);
    assert_eq!(
        route_line(b"# {\"Bat_V\":13.0}", &mut inbox),
        RouteOutcome::Delivered(MessageKind::Publication)
    );
}
