use crate::chapter::Chapter;
use crate::error::{OrthographyError, Result};
use crate::location::{Location, CHAPTER_COUNT};
use crate::records::ChapterRecord;
use crate::token::Token;
use crate::verse::Verse;
use arabic_encoding::DecodeMode;
use std::sync::OnceLock;
use tracing::info;

/// The loaded text: chapters numbered from 1, with cached totals.
///
/// A document is an ordinary value. Callers build one from their source data
/// and pass it to whatever needs to look things up.
#[derive(Debug, Clone)]
pub struct Document {
    chapters: Vec<Chapter>,
    verse_count: OnceLock<usize>,
    token_count: OnceLock<usize>,
}

impl Document {
    pub const NAME: &'static str = "The Holy Quran";

    /// Creates a document from chapters numbered `1..=n` in order.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self> {
        for (index, chapter) in chapters.iter().enumerate() {
            if chapter.chapter_number() != index + 1 {
                return Err(OrthographyError::InvalidChapterNumber {
                    number: chapter.chapter_number(),
                });
            }
        }
        info!(chapters = chapters.len(), "document loaded");
        Ok(Self {
            chapters,
            verse_count: OnceLock::new(),
            token_count: OnceLock::new(),
        })
    }

    /// Builds a document from chapter records, decoding leniently.
    pub fn from_records<'a, I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a ChapterRecord>,
    {
        Self::from_records_with(records, DecodeMode::Lenient)
    }

    pub fn from_records_with<'a, I>(records: I, mode: DecodeMode) -> Result<Self>
    where
        I: IntoIterator<Item = &'a ChapterRecord>,
    {
        let chapters = records
            .into_iter()
            .map(|record| Chapter::from_record_with(record, mode))
            .collect::<Result<Vec<_>>>()?;
        Self::new(chapters)
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Number of chapters loaded, at most [`CHAPTER_COUNT`].
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn verse_count(&self) -> usize {
        *self
            .verse_count
            .get_or_init(|| self.chapters.iter().map(Chapter::verse_count).sum())
    }

    pub fn token_count(&self) -> usize {
        *self
            .token_count
            .get_or_init(|| self.chapters.iter().map(Chapter::token_count).sum())
    }

    /// Returns chapter `number`, counting from 1.
    pub fn chapter(&self, number: usize) -> Result<&Chapter> {
        if !(1..=CHAPTER_COUNT).contains(&number) {
            return Err(OrthographyError::InvalidChapterNumber { number });
        }
        self.chapters
            .get(number - 1)
            .ok_or(OrthographyError::InvalidChapterNumber { number })
    }

    pub fn chapter_at(&self, location: &Location) -> Result<&Chapter> {
        self.chapter(location.chapter_number())
    }

    pub fn verse(&self, chapter: usize, verse: usize) -> Result<&Verse> {
        self.chapter(chapter)?.verse(verse)
    }

    pub fn verse_at(&self, location: &Location) -> Result<&Verse> {
        self.verse(location.chapter_number(), location.verse_number())
    }

    pub fn token(&self, chapter: usize, verse: usize, token: usize) -> Result<Token> {
        self.verse(chapter, verse)?.token(token)
    }

    pub fn token_at(&self, location: &Location) -> Result<Token> {
        self.token(
            location.chapter_number(),
            location.verse_number(),
            location.token_number(),
        )
    }

    pub fn chapters(&self) -> std::slice::Iter<'_, Chapter> {
        self.chapters.iter()
    }

    /// Iterates over every verse in chapter order.
    pub fn verses(&self) -> impl Iterator<Item = &Verse> + '_ {
        self.chapters.iter().flat_map(Chapter::verses)
    }

    /// Iterates over every token in chapter and verse order.
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.verses().flat_map(Verse::tokens)
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.chapters == other.chapters
    }
}

impl Eq for Document {}
