use crate::byte_format::{self, CHARACTER_WIDTH, WHITESPACE};
use crate::character::ArabicCharacter;
use crate::text::ArabicText;
use crate::{CharacterType, DiacriticType};
use std::sync::Arc;

const INITIAL_CAPACITY: usize = 4;

/// Growable buffer used to assemble an [`ArabicText`].
///
/// Characters are appended one at a time; diacritics always attach to the most
/// recently appended character. [`finish`](Self::finish) hands the buffer over
/// to an immutable text.
#[derive(Debug, Clone)]
pub struct ArabicTextBuilder {
    buffer: Vec<u8>,
}

impl ArabicTextBuilder {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a builder with room for `characters` characters.
    pub fn with_capacity(characters: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(characters * CHARACTER_WIDTH),
        }
    }

    /// Number of characters appended so far.
    pub fn len(&self) -> usize {
        self.buffer.len() / CHARACTER_WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Appends a character with no diacritics. `None` appends whitespace.
    pub fn append(&mut self, character_type: Option<CharacterType>) {
        let value = character_type.map_or(WHITESPACE, CharacterType::ordinal);
        self.buffer.extend_from_slice(&[value, 0, 0]);
    }

    pub fn append_letter(&mut self, character_type: CharacterType) {
        self.append(Some(character_type));
    }

    pub fn append_whitespace(&mut self) {
        self.append(None);
    }

    /// Attaches a diacritic to the last character.
    ///
    /// # Panics
    ///
    /// Panics if no character has been appended yet.
    pub fn append_diacritic(&mut self, diacritic: DiacriticType) {
        assert!(
            !self.buffer.is_empty(),
            "diacritic {diacritic} appended before any character"
        );
        let offset = self.buffer.len() - CHARACTER_WIDTH;
        byte_format::set_diacritic(&mut self.buffer, offset, diacritic);
    }

    /// Appends a character followed by its diacritics.
    pub fn append_character(&mut self, character_type: CharacterType, diacritics: &[DiacriticType]) {
        self.append_letter(character_type);
        for &diacritic in diacritics {
            self.append_diacritic(diacritic);
        }
    }

    /// The most recently appended character.
    pub fn last_character(&self) -> Option<ArabicCharacter<'_>> {
        self.buffer
            .len()
            .checked_sub(CHARACTER_WIDTH)
            .map(|offset| ArabicCharacter::new(&self.buffer, offset))
    }

    /// Copies the characters appended so far into an exactly sized buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    /// Consumes the builder, returning the immutable text.
    pub fn finish(self) -> ArabicText {
        ArabicText::from_arc(Arc::from(self.buffer))
    }
}

impl Default for ArabicTextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<(CharacterType, Vec<DiacriticType>)> for ArabicTextBuilder {
    fn extend<I: IntoIterator<Item = (CharacterType, Vec<DiacriticType>)>>(&mut self, iter: I) {
        for (character_type, diacritics) in iter {
            self.append_character(character_type, &diacritics);
        }
    }
}
