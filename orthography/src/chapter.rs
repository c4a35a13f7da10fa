use crate::error::{OrthographyError, Result};
use crate::location::Location;
use crate::verse::Verse;
use arabic_text::ArabicText;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// A chapter with its numbered verses.
#[derive(Debug, Clone)]
pub struct Chapter {
    location: Location,
    name: ArabicText,
    bismillah: Option<ArabicText>,
    verses: Vec<Verse>,
    token_count: OnceLock<usize>,
}

impl Chapter {
    /// Creates a chapter from verses numbered `1..=n` in order.
    ///
    /// `bismillah` is the opening phrase read before the first verse, absent
    /// for chapters that do not have one.
    pub fn new(
        number: usize,
        name: ArabicText,
        bismillah: Option<ArabicText>,
        verses: Vec<Verse>,
    ) -> Result<Self> {
        let location = Location::chapter(number)?;
        for (index, verse) in verses.iter().enumerate() {
            if verse.chapter_number() != number {
                return Err(OrthographyError::InvalidChapterNumber {
                    number: verse.chapter_number(),
                });
            }
            if verse.verse_number() != index + 1 {
                return Err(OrthographyError::InvalidVerseNumber {
                    chapter: number,
                    verse: verse.verse_number(),
                });
            }
        }
        debug!(chapter = number, verses = verses.len(), "chapter created");
        Ok(Self {
            location,
            name,
            bismillah,
            verses,
            token_count: OnceLock::new(),
        })
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn chapter_number(&self) -> usize {
        self.location.chapter_number()
    }

    pub fn name(&self) -> &ArabicText {
        &self.name
    }

    pub fn bismillah(&self) -> Option<&ArabicText> {
        self.bismillah.as_ref()
    }

    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }

    /// Total number of tokens over all verses, computed on first use.
    pub fn token_count(&self) -> usize {
        *self
            .token_count
            .get_or_init(|| self.verses.iter().map(Verse::token_count).sum())
    }

    /// Returns verse `number`, counting from 1.
    pub fn verse(&self, number: usize) -> Result<&Verse> {
        number
            .checked_sub(1)
            .and_then(|index| self.verses.get(index))
            .ok_or(OrthographyError::InvalidVerseNumber {
                chapter: self.chapter_number(),
                verse: number,
            })
    }

    /// Returns the verse addressed by `location`, which must lie in this chapter.
    pub fn verse_at(&self, location: &Location) -> Result<&Verse> {
        if location.chapter_number() != self.chapter_number() {
            return Err(OrthographyError::InvalidChapterNumber {
                number: location.chapter_number(),
            });
        }
        self.verse(location.verse_number())
    }

    pub fn verses(&self) -> std::slice::Iter<'_, Verse> {
        self.verses.iter()
    }
}

impl PartialEq for Chapter {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
            && self.name == other.name
            && self.bismillah == other.bismillah
            && self.verses == other.verses
    }
}

impl Eq for Chapter {}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chapter {}", self.chapter_number())
    }
}

impl<'a> IntoIterator for &'a Chapter {
    type Item = &'a Verse;
    type IntoIter = std::slice::Iter<'a, Verse>;

    fn into_iter(self) -> Self::IntoIter {
        self.verses()
    }
}
