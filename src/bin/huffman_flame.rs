use huffman::{HuffmanDecoder, HuffmanEncoder};

fn main() -> huffman::Result<()> {
    let input = (0..10000)
        .map(|i: u32| (i * 7 % 13 + i % 3) as u8)
        .collect::<Vec<_>>();

    let encoder = HuffmanEncoder::new(&input)?;
    let decoder = HuffmanDecoder::new(encoder.tree().cloned());

    for _ in 0..1000 {
        let bits = encoder.encode(&input)?;
        let output = decoder.decode(&bits)?;
        assert_eq!(output.len(), input.len());
    }
    Ok(())
}
