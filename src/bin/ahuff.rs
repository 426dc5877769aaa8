//! File driver for the adaptive coder.
//!
//! The encoded form is the raw `'0'`/`'1'` bit text, stored verbatim;
//! that keeps the file self-describing with no length framing.

use std::env;
use std::fs;
use std::process;

use fgk::adaptive::{AdaptiveDecoder, AdaptiveEncoder};
use fgk::entropy;

fn main() -> fgk::error::Result<()> {
    let args: Vec<String> = env::args().collect();
    let (mode, input, output) = match args.as_slice() {
        [_, mode, input, output] if mode == "encode" || mode == "decode" => {
            (mode.as_str(), input, output)
        }
        _ => {
            eprintln!("usage: ahuff <encode|decode> <input> <output>");
            process::exit(2);
        }
    };

    if mode == "encode" {
        let data = fs::read(input)?;
        let bits = AdaptiveEncoder::new().encode(&data);
        println!("Entropy: {}", entropy::shannon(&data));
        println!(
            "Average length: {}",
            entropy::mean_code_length(data.len(), bits.len())
        );
        println!(
            "Compression ratio: {}",
            entropy::compression_ratio(data.len(), bits.len())
        );
        fs::write(output, bits)?;
    } else {
        let bits = fs::read_to_string(input)?;
        let data = AdaptiveDecoder::new().decode(bits.trim_end())?;
        fs::write(output, data)?;
    }
    Ok(())
}
