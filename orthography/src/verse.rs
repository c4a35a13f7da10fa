use crate::error::{OrthographyError, Result};
use crate::location::Location;
use crate::token::Token;
use arabic_encoding::{ArabicEncoder, Encode};
use arabic_text::ArabicText;
use std::fmt;
use std::iter::FusedIterator;

/// A numbered verse of a chapter, split into tokens at whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    location: Location,
    text: ArabicText,
    /// Character index one past the end of each token's separator. The last
    /// entry is one past the end of the text, so token `n` ends one character
    /// before `token_ends[n - 1]`.
    token_ends: Box<[usize]>,
}

impl Verse {
    /// Creates a verse, indexing its tokens.
    pub fn new(chapter: usize, verse: usize, text: ArabicText) -> Result<Self> {
        let location = Location::verse(chapter, verse)?;
        let token_ends = token_ends(&text);
        Ok(Self {
            location,
            text,
            token_ends,
        })
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn chapter_number(&self) -> usize {
        self.location.chapter_number()
    }

    pub fn verse_number(&self) -> usize {
        self.location.verse_number()
    }

    pub fn text(&self) -> &ArabicText {
        &self.text
    }

    /// Number of tokens. An empty verse has a single empty token.
    pub fn token_count(&self) -> usize {
        self.token_ends.len()
    }

    /// Returns token `number`, counting from 1.
    pub fn token(&self, number: usize) -> Result<Token> {
        if !(1..=self.token_count()).contains(&number) {
            return Err(OrthographyError::InvalidTokenNumber {
                chapter: self.chapter_number(),
                verse: self.verse_number(),
                token: number,
            });
        }
        Ok(self.token_unchecked(number))
    }

    /// Returns the token addressed by `location`, which must lie in this verse.
    pub fn token_at(&self, location: &Location) -> Result<Token> {
        if location.chapter_number() != self.chapter_number()
            || location.verse_number() != self.verse_number()
        {
            return Err(OrthographyError::InvalidVerseNumber {
                chapter: location.chapter_number(),
                verse: location.verse_number(),
            });
        }
        self.token(location.token_number())
    }

    /// Iterates over the tokens in order.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            verse: self,
            next: 1,
            end: self.token_count() + 1,
        }
    }

    fn token_unchecked(&self, number: usize) -> Token {
        let start = match number {
            1 => 0,
            n => self.token_ends[n - 2],
        };
        let end = self.token_ends[number - 1] - 1;
        Token::new(
            self.location.with_token(number),
            self.text.substring(start, end),
        )
    }
}

fn token_ends(text: &ArabicText) -> Box<[usize]> {
    let separators = text.iter().filter(|c| c.is_whitespace()).count();
    let mut ends = Vec::with_capacity(separators + 1);
    ends.extend(
        text.iter()
            .enumerate()
            .filter(|(_, c)| c.is_whitespace())
            .map(|(index, _)| index + 1),
    );
    ends.push(text.len() + 1);
    ends.into_boxed_slice()
}

impl Encode for Verse {
    fn encode_with(&self, encoder: &dyn ArabicEncoder) -> String {
        self.text.encode_with(encoder)
    }
}

impl AsRef<ArabicText> for Verse {
    fn as_ref(&self) -> &ArabicText {
        &self.text
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.location, self.text.to_buckwalter())
    }
}

impl<'a> IntoIterator for &'a Verse {
    type Item = Token;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}

/// Iterator over the tokens of a [`Verse`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    verse: &'a Verse,
    next: usize,
    end: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.next == self.end {
            return None;
        }
        let token = self.verse.token_unchecked(self.next);
        self.next += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Tokens<'_> {
    fn next_back(&mut self) -> Option<Token> {
        if self.next == self.end {
            return None;
        }
        self.end -= 1;
        Some(self.verse.token_unchecked(self.end))
    }
}

impl ExactSizeIterator for Tokens<'_> {}

impl FusedIterator for Tokens<'_> {}
