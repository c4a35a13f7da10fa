use crate::glyph::Glyph;
use crate::options::EncodingOptions;
use crate::rules::{RuleContext, RuleSet};
use crate::table::EncodingTable;
use arabic_text::{ArabicCharacter, ArabicText, DiacriticType};

/// Order in which diacritics left over after combination are written.
pub const DIACRITIC_ORDER: [DiacriticType; 10] = [
    DiacriticType::HamzaAbove,
    DiacriticType::Shadda,
    DiacriticType::Fathatan,
    DiacriticType::Dammatan,
    DiacriticType::Kasratan,
    DiacriticType::Fatha,
    DiacriticType::Damma,
    DiacriticType::Kasra,
    DiacriticType::Sukun,
    DiacriticType::Maddah,
];

/// Writes Arabic text in an external encoding.
pub trait ArabicEncoder {
    /// Appends one character to `out`.
    fn encode_character(&self, character: &ArabicCharacter<'_>, out: &mut String);

    /// Written between consecutive characters. Nothing by default.
    fn write_separator(&self, out: &mut String) {
        let _ = out;
    }

    fn encode_into(&self, text: &ArabicText, out: &mut String) {
        for (i, character) in text.iter().enumerate() {
            if i > 0 {
                self.write_separator(out);
            }
            self.encode_character(&character, out);
        }
    }

    fn encode(&self, text: &ArabicText) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        self.encode_into(text, &mut out);
        out
    }
}

/// Table driven encoder shared by the Unicode and Buckwalter schemes.
///
/// Each character is written as a single glyph, composed if a combination
/// rule applies, followed by its remaining diacritics in [`DIACRITIC_ORDER`].
/// Decoding with the same table reverses this exactly.
#[derive(Debug, Clone, Copy)]
pub struct TableEncoder<'t> {
    table: &'t EncodingTable,
    rules: &'t RuleSet,
    options: EncodingOptions,
}

impl TableEncoder<'static> {
    /// Creates an encoder applying the standard combination rules.
    pub fn new(table: &'static EncodingTable, options: EncodingOptions) -> Self {
        Self::with_rules(table, RuleSet::standard(), options)
    }
}

impl<'t> TableEncoder<'t> {
    pub fn with_rules(table: &'t EncodingTable, rules: &'t RuleSet, options: EncodingOptions) -> Self {
        Self {
            table,
            rules,
            options,
        }
    }

    pub fn table(&self) -> &'t EncodingTable {
        self.table
    }

    pub fn options(&self) -> EncodingOptions {
        self.options
    }

    fn push_glyph(&self, glyph: Glyph, out: &mut String) {
        match self.table.glyph_unit(glyph) {
            Some(unit) => out.push(unit),
            None => tracing::warn!(table = self.table.name(), ?glyph, "no unit for glyph"),
        }
    }
}

impl ArabicEncoder for TableEncoder<'_> {
    fn encode_character(&self, character: &ArabicCharacter<'_>, out: &mut String) {
        let Some(character_type) = character.character_type() else {
            out.push(' ');
            return;
        };

        let ctx = RuleContext {
            table: self.table,
            options: self.options,
        };
        let consumed = match self.rules.apply(character, &ctx) {
            Some(combination) => {
                self.push_glyph(combination.glyph, out);
                combination.consumed
            }
            None => {
                match self.table.character_unit(character_type) {
                    Some(unit) => out.push(unit),
                    None => tracing::warn!(
                        table = self.table.name(),
                        %character_type,
                        "no unit for character"
                    ),
                }
                None
            }
        };

        for diacritic in DIACRITIC_ORDER {
            if consumed == Some(diacritic) || !character.has_diacritic(diacritic) {
                continue;
            }
            if let Some(glyph) = Glyph::from_diacritic(diacritic) {
                self.push_glyph(glyph, out);
            }
        }
    }
}
