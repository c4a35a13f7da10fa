use crate::error::{OrthographyError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of chapters in the Quran.
pub const CHAPTER_COUNT: usize = 114;

/// Address of a chapter, verse or token.
///
/// The chapter number is checked on construction. A verse or token number of
/// zero means the location stops at the enclosing level; other values are only
/// checked when the location is used to look something up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "(usize, usize, usize)",
        into = "(usize, usize, usize)"
    )
)]
pub struct Location {
    chapter: usize,
    verse: usize,
    token: usize,
}

impl Location {
    /// Addresses a token.
    pub fn new(chapter: usize, verse: usize, token: usize) -> Result<Self> {
        if !(1..=CHAPTER_COUNT).contains(&chapter) {
            return Err(OrthographyError::InvalidChapterNumber { number: chapter });
        }
        Ok(Self {
            chapter,
            verse,
            token,
        })
    }

    /// Addresses a whole chapter.
    pub fn chapter(chapter: usize) -> Result<Self> {
        Self::new(chapter, 0, 0)
    }

    /// Addresses a whole verse.
    pub fn verse(chapter: usize, verse: usize) -> Result<Self> {
        Self::new(chapter, verse, 0)
    }

    pub fn chapter_number(&self) -> usize {
        self.chapter
    }

    pub fn verse_number(&self) -> usize {
        self.verse
    }

    pub fn token_number(&self) -> usize {
        self.token
    }

    /// Returns this location narrowed to the given token.
    pub fn with_token(self, token: usize) -> Self {
        Self { token, ..self }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{}", self.chapter, self.verse)?;
        if self.token > 0 {
            write!(f, ":{}", self.token)?;
        }
        write!(f, ")")
    }
}

impl FromStr for Location {
    type Err = OrthographyError;

    /// Parses `c`, `c:v` or `c:v:t`, optionally in parentheses.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || OrthographyError::InvalidLocation {
            text: s.to_string(),
        };

        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(invalid)?,
            None => trimmed,
        };

        let mut numbers = [0usize; 3];
        let mut count = 0;
        for part in inner.split(':') {
            let slot = numbers.get_mut(count).ok_or_else(invalid)?;
            *slot = part.trim().parse().map_err(|_| invalid())?;
            count += 1;
        }

        let [chapter, verse, token] = numbers;
        Self::new(chapter, verse, token)
    }
}

impl TryFrom<(usize, usize, usize)> for Location {
    type Error = OrthographyError;

    fn try_from((chapter, verse, token): (usize, usize, usize)) -> Result<Self> {
        Self::new(chapter, verse, token)
    }
}

impl From<Location> for (usize, usize, usize) {
    fn from(location: Location) -> Self {
        (location.chapter, location.verse, location.token)
    }
}
