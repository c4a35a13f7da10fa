use crate::byte_format::{self, CHARACTER_WIDTH};
use crate::{CharacterType, DiacriticType};

/// A single letter, Quranic symbol or whitespace separator within an
/// [`ArabicText`](crate::ArabicText), together with its diacritics.
///
/// This is a zero-copy view of one slot in the text's buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArabicCharacter<'a> {
    slot: &'a [u8],
}

impl<'a> ArabicCharacter<'a> {
    pub(crate) fn new(buffer: &'a [u8], offset: usize) -> Self {
        Self {
            slot: &buffer[offset..offset + CHARACTER_WIDTH],
        }
    }

    /// The letter or symbol, or `None` for whitespace.
    #[inline]
    pub fn character_type(&self) -> Option<CharacterType> {
        byte_format::character_type(self.slot, 0)
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        byte_format::is_whitespace(self.slot, 0)
    }

    /// Returns true unless this is a Quranic symbol.
    #[inline]
    pub fn is_letter(&self) -> bool {
        byte_format::is_letter(self.slot, 0)
    }

    #[inline]
    pub fn has_diacritic(&self, diacritic: DiacriticType) -> bool {
        byte_format::has_diacritic(self.slot, 0, diacritic)
    }

    /// Returns true if `diacritic` is the only diacritic attached.
    #[inline]
    pub fn is_single_diacritic(&self, diacritic: DiacriticType) -> bool {
        byte_format::is_single_diacritic(self.slot, 0, diacritic)
    }

    #[inline]
    pub fn diacritic_count(&self) -> usize {
        byte_format::diacritic_count(self.slot, 0)
    }

    /// Attached diacritics in ordinal order.
    pub fn diacritics(&self) -> impl Iterator<Item = DiacriticType> + 'a {
        let slot = self.slot;
        DiacriticType::ALL
            .into_iter()
            .filter(move |d| byte_format::has_diacritic(slot, 0, *d))
    }

    /// The raw slot bytes.
    #[inline]
    pub fn slot(&self) -> [u8; CHARACTER_WIDTH] {
        [self.slot[0], self.slot[1], self.slot[2]]
    }
}

/// Same form as the diagnostic encoding: `Alif + Fatha + HamzaAbove`.
impl std::fmt::Debug for ArabicCharacter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(ty) = self.character_type() else {
            return f.write_str("<space>");
        };
        if ty == CharacterType::Alif && self.is_single_diacritic(DiacriticType::AlifKhanjareeya) {
            return write!(f, "{}", DiacriticType::AlifKhanjareeya);
        }
        write!(f, "{ty}")?;
        for d in self.diacritics() {
            write!(f, " + {d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_view() {
        let buffer = [0xFF, 0, 0, 11, 65, 0];
        let space = ArabicCharacter::new(&buffer, 0);
        assert!(space.is_whitespace());
        assert_eq!(space.character_type(), None);

        let seen = ArabicCharacter::new(&buffer, 3);
        assert_eq!(seen.character_type(), Some(CharacterType::Seen));
        assert!(seen.has_diacritic(DiacriticType::Fatha));
        assert!(seen.has_diacritic(DiacriticType::Shadda));
        assert_eq!(seen.diacritic_count(), 2);
        assert_eq!(
            seen.diacritics().collect::<Vec<_>>(),
            vec![DiacriticType::Fatha, DiacriticType::Shadda]
        );
        assert_eq!(seen.slot(), [11, 65, 0]);
    }

    #[test]
    fn test_debug_format() {
        let buffer = [0, 1, 2, 0xFF, 0, 0];
        assert_eq!(
            format!("{:?}", ArabicCharacter::new(&buffer, 0)),
            "Alif + Fatha + HamzaAbove"
        );
        assert_eq!(format!("{:?}", ArabicCharacter::new(&buffer, 3)), "<space>");

        let khanjareeya = [0, 0, 16];
        assert_eq!(
            format!("{:?}", ArabicCharacter::new(&khanjareeya, 0)),
            "AlifKhanjareeya"
        );
    }
}
