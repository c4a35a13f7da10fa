use crate::encoder::ArabicEncoder;
use arabic_text::{ArabicCharacter, CharacterType, DiacriticType};

/// Readable diagnostic form: each character is written as its letter name
/// followed by the names of its diacritics, joined by `" + "`, with `" | "`
/// between characters.
///
/// ```text
/// Alif + Fatha + HamzaAbove | Noon + Sukun | Ain + Fatha
/// ```
///
/// An Alif whose only diacritic is a khanjareeya is written as the single
/// name `AlifKhanjareeya`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleEncoder;

impl SimpleEncoder {
    pub const SEPARATOR: &'static str = " | ";
    pub const DIACRITIC_SEPARATOR: &'static str = " + ";
    pub const WHITESPACE: &'static str = "<space>";

    pub const fn new() -> Self {
        Self
    }
}

impl ArabicEncoder for SimpleEncoder {
    fn encode_character(&self, character: &ArabicCharacter<'_>, out: &mut String) {
        let Some(character_type) = character.character_type() else {
            out.push_str(Self::WHITESPACE);
            return;
        };

        if character_type == CharacterType::Alif
            && character.is_single_diacritic(DiacriticType::AlifKhanjareeya)
        {
            out.push_str(DiacriticType::AlifKhanjareeya.name());
            return;
        }

        out.push_str(character_type.name());
        for diacritic in character.diacritics() {
            out.push_str(Self::DIACRITIC_SEPARATOR);
            out.push_str(diacritic.name());
        }
    }

    fn write_separator(&self, out: &mut String) {
        out.push_str(Self::SEPARATOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::Encode;
    use arabic_text::ArabicTextBuilder;

    #[test]
    fn test_names_and_separators() {
        let mut builder = ArabicTextBuilder::new();
        builder.append_character(CharacterType::Ba, &[DiacriticType::Kasra]);
        builder.append_whitespace();
        builder.append_character(CharacterType::Seen, &[DiacriticType::Shadda, DiacriticType::Fatha]);
        let text = builder.finish();
        assert_eq!(
            SimpleEncoder.encode(&text),
            "Ba + Kasra | <space> | Seen + Fatha + Shadda"
        );
    }

    #[test]
    fn test_lone_khanjareeya() {
        let mut builder = ArabicTextBuilder::new();
        builder.append_character(CharacterType::Alif, &[DiacriticType::AlifKhanjareeya]);
        builder.append_character(
            CharacterType::Alif,
            &[DiacriticType::AlifKhanjareeya, DiacriticType::Maddah],
        );
        let text = builder.finish();
        assert_eq!(
            SimpleEncoder.encode(&text),
            "AlifKhanjareeya | Alif + Maddah + AlifKhanjareeya"
        );
    }

    #[test]
    fn test_debug_matches_character_encoding() {
        let mut builder = ArabicTextBuilder::new();
        builder.append_character(CharacterType::Ba, &[DiacriticType::Kasra]);
        builder.append_whitespace();
        builder.append_character(CharacterType::Alif, &[DiacriticType::AlifKhanjareeya]);
        builder.append_character(CharacterType::Alif, &[DiacriticType::HamzaAbove, DiacriticType::Fatha]);
        let text = builder.finish();
        for character in text.iter() {
            assert_eq!(format!("{character:?}"), character.to_simple_encoding());
        }
    }
}
