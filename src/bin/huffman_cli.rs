use std::io::{self, BufRead};

use clap::Parser;
use huffman::{build_code_table, count_frequencies, huffman_decoding, huffman_encoding, Node};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "huffman", version)]
#[command(about = "Huffman-encode a string and show every stage of the pipeline")]
struct Args {
    /// Text to encode (read one line from stdin when omitted)
    text: Option<String>,
    /// Log pipeline stages at debug level
    #[arg(short, long)]
    verbose: bool,
    /// Skip drawing the tree
    #[arg(long)]
    no_tree: bool,
}

fn init_logging(verbose: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("logging already initialised");
    }
}

fn read_line() -> io::Result<String> {
    eprint!("Enter a string: ");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Size of `text` as stored (UTF-8), for comparison with the encoding.
fn raw_bits(text: &str) -> usize {
    text.len() * 8
}

/// Right subtree above its parent, left subtree below. Leaf symbols are
/// printed as-is, so a space shows up as `( )`.
fn draw_tree(node: &Node<char>, prefix: &str, is_left: bool, out: &mut Vec<String>) {
    let (upper, lower) = if is_left {
        ("│   ", "    ")
    } else {
        ("    ", "│   ")
    };

    if let Some((_, right)) = node.children() {
        draw_tree(right, &format!("{prefix}{upper}"), false, out);
    }

    let branch = if is_left { "└── " } else { "┌── " };
    match node.symbol() {
        Some(symbol) => out.push(format!("{prefix}{branch}{} ({symbol})", node.frequency())),
        None => out.push(format!("{prefix}{branch}{}", node.frequency())),
    }

    if let Some((left, _)) = node.children() {
        draw_tree(left, &format!("{prefix}{lower}"), true, out);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let text = match args.text {
        Some(text) => text,
        None => read_line()?,
    };
    let symbols: Vec<char> = text.chars().collect();
    info!(chars = symbols.len(), "encoding input");

    let freq = count_frequencies(&symbols);
    println!("\nFrequency table:");
    println!("Character | Frequency");
    println!("--------------------");
    for (symbol, count) in freq.iter() {
        println!("{symbol:<9} | {count}");
    }

    let (bits, root) = huffman_encoding(&symbols)?;

    println!("\nHuffman codes:");
    for (symbol, code) in build_code_table(root.as_ref()).iter() {
        println!("{symbol}: {code}");
    }

    println!("\nEncoded text: {bits}");
    println!("\nTotal encoded text bit length: {}", bits.len());

    let decoded: String = huffman_decoding(&bits, root.as_ref())?.into_iter().collect();
    println!("\nDecoded text: {decoded}");

    if !args.no_tree {
        if let Some(root) = &root {
            let mut lines = Vec::new();
            draw_tree(root, "", true, &mut lines);
            println!("\nHuffman tree:");
            for line in lines {
                println!("{line}");
            }
        }
    }

    info!(bits = bits.len(), raw_bits = raw_bits(&text), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use huffman::{build_tree, count_frequencies};

    #[test]
    fn test_draw_tree() {
        let symbols: Vec<char> = "aab".chars().collect();
        let root = build_tree(&count_frequencies(&symbols)).unwrap();

        let mut lines = Vec::new();
        draw_tree(&root, "", true, &mut lines);
        assert_eq!(lines, vec!["│   ┌── 2 (a)", "└── 3", "    └── 1 (b)"]);
    }

    #[test]
    fn test_raw_bits_counts_utf8_bytes() {
        assert_eq!(raw_bits("ab"), 16);
        assert_eq!(raw_bits("é"), 16);
        assert_eq!(raw_bits("€"), 24);
    }
}
