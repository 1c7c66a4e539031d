#![no_main]
use huffman::{decode, huffman_decoding, huffman_encoding, BitString};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<bool>)| {
    let (input, noise) = data;

    let (bits, root) = match huffman_encoding(&input) {
        Ok(encoded) => encoded,
        Err(_) => return,
    };
    let output = huffman_decoding(&bits, root.as_ref()).unwrap();
    assert_eq!(input, output);

    // Arbitrary bits against the same tree may fail, but must not panic.
    let noise = BitString::from(noise);
    let _ = decode(&noise, root.as_ref());
});
