//! Converts Arabic text between encodings.
//!
//! ```text
//! transliterate --from buckwalter --to unicode "bisomi {ll~ahi"
//! echo "bisomi" | transliterate --to simple
//! ```

use anyhow::{Context, Result};
use arabic_encoding::{
    decoder, encoder, ArabicDecoder, ArabicEncoder, DecodeMode, EncodingOptions, EncodingScheme,
};
use arabic_text::ArabicTextBuilder;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "transliterate", about = "Convert Arabic text between encodings")]
struct Args {
    /// Encoding of the input: unicode or buckwalter.
    #[arg(long, default_value = "buckwalter")]
    from: EncodingScheme,

    /// Encoding of the output: unicode, buckwalter or simple.
    #[arg(long, default_value = "unicode")]
    to: EncodingScheme,

    /// Fail on input the source encoding does not define.
    #[arg(long)]
    strict: bool,

    /// Write Alif with Maddah as a single code point where possible.
    #[arg(long)]
    combine_maddah: bool,

    /// Text to convert. Lines are read from stdin when omitted.
    text: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mode = if args.strict {
        DecodeMode::Strict
    } else {
        DecodeMode::Lenient
    };
    let options = EncodingOptions::new().with_alif_maddah_combined(args.combine_maddah);

    let decoder = decoder(args.from, mode)?;
    let encoder = encoder(args.to, options);
    debug!(from = %args.from, to = %args.to, ?mode, "converting");

    let mut out = io::stdout().lock();
    let mut convert = |line: &str, number: usize| -> Result<()> {
        let mut builder = ArabicTextBuilder::with_capacity(line.len());
        decoder
            .decode_into(line, &mut builder)
            .with_context(|| format!("line {number}"))?;
        writeln!(out, "{}", encoder.encode(&builder.finish()))?;
        Ok(())
    };

    match args.text {
        Some(text) => convert(&text, 1)?,
        None => {
            for (index, line) in io::stdin().lock().lines().enumerate() {
                convert(&line?, index + 1)?;
            }
        }
    }
    Ok(())
}
