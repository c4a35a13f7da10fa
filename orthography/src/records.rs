//! Plain data a chapter is loaded from.
//!
//! Text fields hold Unicode. Decoding and validation happen when the records
//! are turned into [`Chapter`]s; a malformed record fails the whole build.

use crate::chapter::Chapter;
use crate::error::Result;
use crate::verse::Verse;
use arabic_encoding::{unicode_decoder, ArabicDecoder, DecodeMode};

/// A verse as read from a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRecord {
    pub number: usize,
    pub text: String,
}

/// A chapter as read from a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRecord {
    pub number: usize,
    pub name: String,
    pub bismillah: Option<String>,
    pub verses: Vec<VerseRecord>,
}

impl VerseRecord {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

impl Chapter {
    /// Builds a chapter from a record, decoding its text leniently.
    pub fn from_record(record: &ChapterRecord) -> Result<Self> {
        Self::from_record_with(record, DecodeMode::Lenient)
    }

    /// Builds a chapter from a record, decoding its text with `mode`.
    pub fn from_record_with(record: &ChapterRecord, mode: DecodeMode) -> Result<Self> {
        let decoder = unicode_decoder(mode);
        let name = decoder.decode(&record.name)?;
        let bismillah = record
            .bismillah
            .as_deref()
            .map(|text| decoder.decode(text))
            .transpose()?;
        let verses = record
            .verses
            .iter()
            .map(|verse| Verse::new(record.number, verse.number, decoder.decode(&verse.text)?))
            .collect::<Result<Vec<_>>>()?;
        Chapter::new(record.number, name, bismillah, verses)
    }
}
