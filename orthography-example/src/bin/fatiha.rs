//! Prints the addressed tokens of the opening chapter.
//!
//! ```text
//! fatiha                         # every token of the chapter
//! fatiha --location 1:7          # the tokens of one verse
//! fatiha --location 1:7:9 --scheme simple
//! ```

use anyhow::Result;
use arabic_encoding::{Decode, Encode, EncodingScheme};
use arabic_text::ArabicText;
use clap::Parser;
use orthography::{Chapter, Document, Location, Token, Verse};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const NAME: &str = "{lofaAtiHap";

const VERSES: [&str; 7] = [
    "bisomi {ll~ahi {lr~aHoma`ni {lr~aHiymi",
    "{loHamodu lil~ahi rab~i {loEa`lamiyna",
    "{lr~aHoma`ni {lr~aHiymi",
    "ma`liki yawomi {ld~iyni",
    "<iy~aAka naEobudu wa<iy~aAka nasotaEiynu",
    "{hodinaA {lS~ira`Ta {lomusotaqiyma",
    "Sira`Ta {l~a*iyna >anoEamota Ealayohimo gayori {lomagoDuwbi Ealayohimo walaA {lD~aA^l~iyna",
];

#[derive(Parser)]
#[command(name = "fatiha", about = "Print the tokens of the opening chapter")]
struct Args {
    /// Encoding of the printed tokens: unicode, buckwalter or simple.
    #[arg(long, default_value = "buckwalter")]
    scheme: EncodingScheme,

    /// Chapter, verse or token to print, as `c`, `c:v` or `c:v:t`.
    #[arg(long)]
    location: Option<Location>,
}

fn load() -> Result<Document> {
    let verses = VERSES
        .iter()
        .enumerate()
        .map(|(index, text)| Verse::new(1, index + 1, ArabicText::from_buckwalter(text)))
        .collect::<orthography::Result<Vec<_>>>()?;
    let chapter = Chapter::new(1, ArabicText::from_buckwalter(NAME), None, verses)?;
    Ok(Document::new(vec![chapter])?)
}

fn print_token(out: &mut impl Write, token: &Token, scheme: EncodingScheme) -> io::Result<()> {
    writeln!(out, "{}\t{}", token.location(), token.to_encoding(scheme))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let document = load()?;
    debug!(tokens = document.token_count(), "loaded");

    let scheme = args.scheme;
    let mut out = io::stdout().lock();
    match args.location {
        None => {
            for token in document.tokens() {
                print_token(&mut out, &token, scheme)?;
            }
        }
        Some(location) if location.token_number() > 0 => {
            print_token(&mut out, &document.token_at(&location)?, scheme)?;
        }
        Some(location) if location.verse_number() > 0 => {
            for token in document.verse_at(&location)? {
                print_token(&mut out, &token, scheme)?;
            }
        }
        Some(location) => {
            let chapter = document.chapter_at(&location)?;
            writeln!(out, "{chapter}: {}", chapter.name().to_encoding(scheme))?;
            for token in chapter.verses().flat_map(Verse::tokens) {
                print_token(&mut out, &token, scheme)?;
            }
        }
    }
    Ok(())
}
