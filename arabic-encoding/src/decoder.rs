use crate::error::{EncodingError, Result};
use crate::options::DecodeMode;
use crate::table::EncodingTable;
use arabic_text::{ArabicText, ArabicTextBuilder, DiacriticType};

/// Reads Arabic text from an external encoding.
pub trait ArabicDecoder {
    /// Decodes `text`, appending characters to `builder`.
    fn decode_into(&self, text: &str, builder: &mut ArabicTextBuilder) -> Result<()>;

    fn decode(&self, text: &str) -> Result<ArabicText> {
        let mut builder = ArabicTextBuilder::with_capacity(text.len());
        self.decode_into(text, &mut builder)?;
        Ok(builder.finish())
    }
}

/// A unit the table could not place.
#[derive(Debug, Clone, Copy)]
enum Fault {
    Unknown(char),
    Orphan(DiacriticType),
}

impl Fault {
    fn into_error(self, position: usize) -> EncodingError {
        match self {
            Fault::Unknown(unit) => EncodingError::UnknownUnit { unit, position },
            Fault::Orphan(diacritic) => EncodingError::OrphanDiacritic {
                diacritic,
                position,
            },
        }
    }
}

/// Table driven decoder, the inverse of [`TableEncoder`](crate::TableEncoder).
///
/// Each unit is looked up in the table; its letter, if any, is appended and
/// then its diacritic is attached to the last character. Whitespace always
/// separates tokens.
#[derive(Debug, Clone, Copy)]
pub struct TableDecoder<'t> {
    table: &'t EncodingTable,
    mode: DecodeMode,
}

impl<'t> TableDecoder<'t> {
    pub fn new(table: &'t EncodingTable, mode: DecodeMode) -> Self {
        Self { table, mode }
    }

    pub fn table(&self) -> &'t EncodingTable {
        self.table
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Decodes `text` leniently, whatever the configured mode.
    pub fn decode_lossy(&self, text: &str) -> ArabicText {
        let mut builder = ArabicTextBuilder::with_capacity(text.len());
        for (position, unit) in text.chars().enumerate() {
            if let Err(fault) = self.push_unit(&mut builder, unit) {
                self.recover(&mut builder, fault, position);
            }
        }
        builder.finish()
    }

    fn push_unit(&self, builder: &mut ArabicTextBuilder, unit: char) -> std::result::Result<(), Fault> {
        let Some(entry) = self.table.lookup(unit) else {
            if unit.is_whitespace() {
                builder.append_whitespace();
                return Ok(());
            }
            return Err(Fault::Unknown(unit));
        };

        if let Some(character_type) = entry.character_type {
            builder.append_letter(character_type);
        }
        if let Some(diacritic) = entry.diacritic_type {
            let attached = builder
                .last_character()
                .is_some_and(|last| !last.is_whitespace());
            if !attached {
                return Err(Fault::Orphan(diacritic));
            }
            builder.append_diacritic(diacritic);
        }
        Ok(())
    }

    fn recover(&self, builder: &mut ArabicTextBuilder, fault: Fault, position: usize) {
        match fault {
            Fault::Unknown(unit) => {
                tracing::trace!(table = self.table.name(), ?unit, position, "unknown unit read as whitespace");
                builder.append_whitespace();
            }
            // Attaches to whatever slot came last, separators included.
            Fault::Orphan(diacritic) if !builder.is_empty() => {
                tracing::debug!(table = self.table.name(), %diacritic, position, "diacritic attached to separator");
                builder.append_diacritic(diacritic);
            }
            Fault::Orphan(diacritic) => {
                tracing::debug!(table = self.table.name(), %diacritic, position, "dropped leading diacritic");
            }
        }
    }
}

impl ArabicDecoder for TableDecoder<'_> {
    fn decode_into(&self, text: &str, builder: &mut ArabicTextBuilder) -> Result<()> {
        for (position, unit) in text.chars().enumerate() {
            if let Err(fault) = self.push_unit(builder, unit) {
                match self.mode {
                    DecodeMode::Strict => return Err(fault.into_error(position)),
                    DecodeMode::Lenient => self.recover(builder, fault, position),
                }
            }
        }
        Ok(())
    }
}
