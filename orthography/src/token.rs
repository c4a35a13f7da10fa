use crate::location::Location;
use arabic_encoding::{ArabicEncoder, Encode};
use arabic_text::ArabicText;
use std::fmt;

/// A whitespace delimited word of a verse.
///
/// The text shares the verse's buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    location: Location,
    text: ArabicText,
}

impl Token {
    pub(crate) fn new(location: Location, text: ArabicText) -> Self {
        Self { location, text }
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

    pub fn token_number(&self) -> usize {
        self.location.token_number()
    }

    pub fn text(&self) -> &ArabicText {
        &self.text
    }

    /// Number of characters in the token.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<ArabicText> for Token {
    fn as_ref(&self) -> &ArabicText {
        &self.text
    }
}

impl Encode for Token {
    fn encode_with(&self, encoder: &dyn ArabicEncoder) -> String {
        self.text.encode_with(encoder)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text.to_unicode())
    }
}
