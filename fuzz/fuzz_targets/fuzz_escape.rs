#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use uescape::{EscapeOptions, MultiByteDecoder};

#[derive(Debug, Arbitrary)]
struct Input {
    flags: u8,
    split_seed: u64,
    data: Vec<u8>,
}

/// Split `data` into chunks of at least one byte, deliberately ignoring
/// character boundaries.
fn split_into_chunks(data: &[u8], split_seed: u64) -> Vec<&[u8]> {
    let mut chunks = Vec::new();
    let mut rest = data;
    let mut seed = split_seed;
    while !rest.is_empty() {
        let size = (seed as usize % rest.len()) + 1;
        let (chunk, tail) = rest.split_at(size);
        chunks.push(chunk);
        rest = tail;
        seed = seed.rotate_left(7) ^ 0x9E37_79B9_7F4A_7C15;
    }
    chunks
}

fn escape_chunked(chunks: &[&[u8]], options: EscapeOptions) -> Result<String, uescape::EscapeError> {
    let mut decoder = MultiByteDecoder::new(String::new(), options);
    for chunk in chunks {
        decoder.feed(chunk)?;
    }
    decoder.finish()
}

fn escape(input: Input) {
    let options = EscapeOptions {
        stop_at_nul: input.flags & 1 != 0,
        allow_truncated_input: input.flags & 2 != 0,
        panic_on_error: false,
    };

    let whole = uescape::escape_with(&input.data, options);
    let chunks = split_into_chunks(&input.data, input.split_seed);
    let chunked = escape_chunked(&chunks, options);
    assert_eq!(whole, chunked, "chunking changed the result");

    if let Ok(out) = &whole {
        assert!(out.is_ascii(), "non-ASCII output: {out:?}");
    }

    // Valid UTF-8 must survive a JSON round trip: serialize it, escape the
    // serialized literal, and parse it back.
    if let Ok(text) = core::str::from_utf8(&input.data) {
        let literal = serde_json::to_string(text).expect("strings always serialize");
        let escaped = uescape::escape(literal.as_bytes()).expect("valid UTF-8 escapes");
        let parsed: String = serde_json::from_str(&escaped).expect("escaped JSON parses");
        assert_eq!(parsed, text);
    }
}

fuzz_target!(|input: Input| escape(input));
