#![expect(missing_docs)]

use core::fmt::Write;

use uescape::{EscapeOptions, MultiByteDecoder};

/// One line per input byte: the byte, the decoder state after it, and the text
/// it appended.
fn trace(bytes: &[u8]) -> String {
    let mut out = String::new();
    let mut log = String::new();
    let mut decoder = MultiByteDecoder::new(&mut out, EscapeOptions::default());
    for &b in bytes {
        let before = decoder.get_ref().len();
        decoder.step(b).expect("valid input");
        writeln!(
            log,
            "{b:02X} remaining={} pending={} +{}",
            decoder.remaining(),
            decoder.pending_low_surrogate(),
            &decoder.get_ref()[before..]
        )
        .unwrap();
    }
    decoder.finish().expect("complete input");
    log
}

#[test]
fn snapshot_mixed_trace() {
    insta::assert_snapshot!(trace("a\u{e7}\u{1F600}\u{3042}".as_bytes()), @r#"
    61 remaining=0 pending=false +a
    C3 remaining=1 pending=false +\u00
    A7 remaining=0 pending=false +E7
    F0 remaining=3 pending=false +\uD
    9F remaining=2 pending=true +83
    98 remaining=1 pending=false +D\uDE
    80 remaining=0 pending=false +00
    E3 remaining=2 pending=false +\u3
    81 remaining=1 pending=false +0
    82 remaining=0 pending=false +42
    "#);
}

#[test]
fn snapshot_plane_boundaries_trace() {
    insta::assert_snapshot!(trace("\u{10000}\u{10FFFF}".as_bytes()), @r#"
    F0 remaining=3 pending=false +\uD
    90 remaining=2 pending=true +80
    80 remaining=1 pending=false +0\uDC
    80 remaining=0 pending=false +00
    F4 remaining=3 pending=false +\uD
    8F remaining=2 pending=true +BF
    BF remaining=1 pending=false +F\uDF
    BF remaining=0 pending=false +FF
    "#);
}
