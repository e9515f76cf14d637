use super::*;

#[test]
fn ascii_chunks_pass_through() {
    let mut decoder = Utf8ChunkDecoder::default();
    assert_eq!(decoder.decode(b"Hel"), "Hel");
    assert_eq!(decoder.decode(b"lo"), "lo");
    assert_eq!(decoder.finish(), "");
}

#[test]
fn multibyte_char_split_across_chunks() {
    let bytes = "naïve ☕".as_bytes();
    // Split inside the 3-byte coffee cup.
    let (head, tail) = bytes.split_at(bytes.len() - 2);

    let mut decoder = Utf8ChunkDecoder::default();
    let mut text = decoder.decode(head);
    assert_eq!(text, "naïve ");
    text.push_str(&decoder.decode(tail));
    assert_eq!(text, "naïve ☕");
    assert_eq!(decoder.finish(), "");
}

#[test]
fn four_byte_char_fed_one_byte_at_a_time() {
    let mut decoder = Utf8ChunkDecoder::default();
    let mut text = String::new();
    for byte in "🦀".as_bytes() {
        text.push_str(&decoder.decode(std::slice::from_ref(byte)));
    }
    assert_eq!(text, "🦀");
}

#[test]
fn invalid_bytes_become_replacement_chars() {
    let mut decoder = Utf8ChunkDecoder::default();
    assert_eq!(decoder.decode(b"a\xFFb"), "a\u{FFFD}b");
}

#[test]
fn dangling_partial_sequence_flushes_as_replacement() {
    let mut decoder = Utf8ChunkDecoder::default();
    assert_eq!(decoder.decode(&[b'x', 0xE2, 0x98]), "x");
    assert_eq!(decoder.finish(), "\u{FFFD}");
    assert_eq!(decoder.finish(), "");
}

#[test]
fn empty_chunk_yields_nothing() {
    let mut decoder = Utf8ChunkDecoder::default();
    assert_eq!(decoder.decode(&[]), "");
}
