use crate::byte_format::{self, CHARACTER_WIDTH};
use crate::character::ArabicCharacter;
use crate::error::TextError;
use crate::CharacterType;
use std::sync::Arc;

/// Immutable Arabic text referencing a shared character buffer.
///
/// The text keeps an `Arc<[u8]>` alive so that it can be freely cloned and
/// sliced without copying. The buffer is never written after construction,
/// which is what makes sharing it between a text and its substrings safe.
#[derive(Clone)]
pub struct ArabicText {
    buffer: Arc<[u8]>,
    /// Byte offset of the first character.
    offset: usize,
    /// Number of characters.
    len: usize,
}

impl ArabicText {
    /// Creates a text covering the whole of a shared buffer.
    ///
    /// The buffer must already be a valid sequence of slots.
    pub(crate) fn from_arc(buffer: Arc<[u8]>) -> Self {
        debug_assert_eq!(buffer.len() % CHARACTER_WIDTH, 0);
        let len = buffer.len() / CHARACTER_WIDTH;
        Self {
            buffer,
            offset: 0,
            len,
        }
    }

    /// Creates an empty text.
    pub fn empty() -> Self {
        Self::from_arc(Arc::from(Vec::new()))
    }

    /// Wraps a buffer in the binary layout, validating every type byte.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, TextError> {
        if bytes.len() % CHARACTER_WIDTH != 0 {
            return Err(TextError::InvalidLength {
                length: bytes.len(),
            });
        }
        for (index, slot) in bytes.chunks_exact(CHARACTER_WIDTH).enumerate() {
            if !byte_format::is_valid_type_byte(slot[0]) {
                return Err(TextError::InvalidCharacterType {
                    index,
                    value: slot[0],
                });
            }
        }
        Ok(Self::from_arc(Arc::from(bytes)))
    }

    /// Returns the number of characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the text has no characters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the character at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn character(&self, index: usize) -> ArabicCharacter<'_> {
        assert!(
            index < self.len,
            "character index {index} out of range for text of length {}",
            self.len
        );
        ArabicCharacter::new(&self.buffer, self.slot_offset(index))
    }

    /// Returns the character at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<ArabicCharacter<'_>> {
        (index < self.len).then(|| ArabicCharacter::new(&self.buffer, self.slot_offset(index)))
    }

    /// Returns the character type at `index`, or `None` for whitespace.
    pub fn character_type(&self, index: usize) -> Option<CharacterType> {
        self.character(index).character_type()
    }

    /// Returns true if the character at `index` is a whitespace separator.
    pub fn is_whitespace(&self, index: usize) -> bool {
        self.character(index).is_whitespace()
    }

    /// Iterates over the characters.
    pub fn iter(&self) -> Characters<'_> {
        Characters {
            bytes: self.as_bytes(),
        }
    }

    /// Returns the characters `start..end` as a new text sharing this buffer.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= self.len()`.
    pub fn substring(&self, start: usize, end: usize) -> ArabicText {
        assert!(
            start <= end && end <= self.len,
            "substring {start}..{end} out of range for text of length {}",
            self.len
        );
        Self {
            buffer: Arc::clone(&self.buffer),
            offset: self.slot_offset(start),
            len: end - start,
        }
    }

    /// Returns a copy of this text with every diacritic removed.
    pub fn remove_diacritics(&self) -> ArabicText {
        let mut buffer = vec![0u8; self.len * CHARACTER_WIDTH];
        for (target, source) in buffer
            .chunks_exact_mut(CHARACTER_WIDTH)
            .zip(self.as_bytes().chunks_exact(CHARACTER_WIDTH))
        {
            target[0] = source[0];
        }
        Self::from_arc(Arc::from(buffer))
    }

    /// Counts characters that are not Quranic symbols.
    pub fn letter_count(&self) -> usize {
        self.as_bytes()
            .chunks_exact(CHARACTER_WIDTH)
            .filter(|slot| byte_format::is_letter(slot, 0))
            .count()
    }

    /// Returns this text without its Quranic symbols.
    ///
    /// When there are no symbols the same buffer is shared rather than copied.
    pub fn remove_non_letters(&self) -> ArabicText {
        let letter_count = self.letter_count();
        if letter_count == self.len {
            return self.clone();
        }
        let mut buffer = Vec::with_capacity(letter_count * CHARACTER_WIDTH);
        for slot in self.as_bytes().chunks_exact(CHARACTER_WIDTH) {
            if byte_format::is_letter(slot, 0) {
                buffer.extend_from_slice(slot);
            }
        }
        Self::from_arc(Arc::from(buffer))
    }

    /// The slots of this text in the binary layout.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[self.offset..self.offset + self.len * CHARACTER_WIDTH]
    }

    /// Copies the slots into a new vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Returns true if both texts view the same backing buffer.
    pub fn shares_buffer(&self, other: &ArabicText) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }

    /// Byte offset of the first character within the backing buffer.
    pub fn byte_offset(&self) -> usize {
        self.offset
    }

    fn slot_offset(&self, index: usize) -> usize {
        self.offset + index * CHARACTER_WIDTH
    }
}

impl Default for ArabicText {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for ArabicText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for ArabicText {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ArabicText {}

impl std::hash::Hash for ArabicText {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl AsRef<ArabicText> for ArabicText {
    fn as_ref(&self) -> &ArabicText {
        self
    }
}

impl<'a> IntoIterator for &'a ArabicText {
    type Item = ArabicCharacter<'a>;
    type IntoIter = Characters<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the characters of an [`ArabicText`].
#[derive(Debug, Clone)]
pub struct Characters<'a> {
    bytes: &'a [u8],
}

impl<'a> Iterator for Characters<'a> {
    type Item = ArabicCharacter<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bytes.is_empty() {
            return None;
        }
        let (slot, rest) = self.bytes.split_at(CHARACTER_WIDTH);
        self.bytes = rest;
        Some(ArabicCharacter::new(slot, 0))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() / CHARACTER_WIDTH;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Characters<'_> {}

impl DoubleEndedIterator for Characters<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bytes.is_empty() {
            return None;
        }
        let (rest, slot) = self.bytes.split_at(self.bytes.len() - CHARACTER_WIDTH);
        self.bytes = rest;
        Some(ArabicCharacter::new(slot, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiacriticType;

    fn sample() -> ArabicText {
        ArabicText::from_bytes(vec![0, 0, 8, 22, 0, 0, 11, 65, 0, 23, 1, 0, 0, 0, 1, 28, 2, 0])
            .unwrap()
    }

    #[test]
    fn test_from_bytes() {
        let text = sample();
        assert_eq!(text.len(), 6);
        assert_eq!(text.character_type(0), Some(CharacterType::Alif));
        assert_eq!(text.character_type(5), Some(CharacterType::Hamza));
        assert!(text.character(4).has_diacritic(DiacriticType::Maddah));
    }

    #[test]
    fn test_from_bytes_rejects_partial_slot() {
        assert_eq!(
            ArabicText::from_bytes(vec![0, 0]),
            Err(TextError::InvalidLength { length: 2 })
        );
    }

    #[test]
    fn test_from_bytes_rejects_unknown_type() {
        assert_eq!(
            ArabicText::from_bytes(vec![0, 0, 0, 99, 0, 0]),
            Err(TextError::InvalidCharacterType { index: 1, value: 99 })
        );
    }

    #[test]
    fn test_substring_shares_buffer() {
        let text = sample();
        let sub = text.substring(2, 4);
        assert_eq!(sub.len(), 2);
        assert!(sub.shares_buffer(&text));
        assert_eq!(sub.byte_offset(), 6);
        assert_eq!(sub.character_type(0), Some(CharacterType::Seen));
        assert_eq!(sub.as_bytes(), &[11, 65, 0, 23, 1, 0]);
    }

    #[test]
    fn test_substring_of_substring() {
        let text = sample();
        let sub = text.substring(1, 5).substring(1, 3);
        assert_eq!(sub, text.substring(2, 4));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_substring_out_of_range() {
        sample().substring(3, 7);
    }

    #[test]
    fn test_get_out_of_range() {
        assert!(sample().get(6).is_none());
        assert!(sample().get(5).is_some());
    }

    #[test]
    fn test_iter_both_ends() {
        let text = sample();
        let types: Vec<_> = text.iter().rev().map(|c| c.character_type()).collect();
        assert_eq!(types[0], Some(CharacterType::Hamza));
        assert_eq!(types[5], Some(CharacterType::Alif));
        assert_eq!(text.iter().len(), 6);
    }

    #[test]
    fn test_equality_is_by_content() {
        let a = sample();
        let b = sample();
        assert!(!a.shares_buffer(&b));
        assert_eq!(a, b);
        assert_ne!(a, a.substring(0, 5));
    }

    #[test]
    fn test_empty() {
        let text = ArabicText::empty();
        assert!(text.is_empty());
        assert_eq!(text.letter_count(), 0);
        assert_eq!(text.iter().next(), None);
    }
}
