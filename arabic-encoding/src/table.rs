use crate::glyph::Glyph;
use arabic_text::{CharacterType, DiacriticType};
use std::collections::HashMap;

/// What a single external unit decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub glyph: Glyph,
    pub character_type: Option<CharacterType>,
    pub diacritic_type: Option<DiacriticType>,
}

/// Bidirectional mapping between glyphs and the units of an external encoding.
///
/// Tables are filled once with [`register`](Self::register) and only read
/// afterwards.
#[derive(Debug, Clone)]
pub struct EncodingTable {
    name: &'static str,
    entries: HashMap<char, TableEntry>,
    glyph_units: [Option<char>; Glyph::COUNT],
    character_units: [Option<char>; CharacterType::COUNT],
}

impl EncodingTable {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: HashMap::with_capacity(Glyph::COUNT),
            glyph_units: [None; Glyph::COUNT],
            character_units: [None; CharacterType::COUNT],
        }
    }

    /// Builds a table from `(glyph, unit)` pairs.
    pub fn from_units(name: &'static str, units: &[(Glyph, char)]) -> Self {
        let mut table = Self::new(name);
        for &(glyph, unit) in units {
            table.register(glyph, unit);
        }
        tracing::debug!(table = name, units = table.len(), "built encoding table");
        table
    }

    /// Maps `glyph` to `unit` in both directions.
    ///
    /// A plain letter or symbol glyph also becomes the unit for its character
    /// type. Composed glyphs are reachable only through the combination rules.
    pub fn register(&mut self, glyph: Glyph, unit: char) {
        let (character_type, diacritic_type) = glyph.composition();
        self.entries.insert(
            unit,
            TableEntry {
                glyph,
                character_type,
                diacritic_type,
            },
        );
        if let (Some(ty), None) = (character_type, diacritic_type) {
            self.character_units[ty.ordinal() as usize] = Some(unit);
        }
        self.glyph_units[glyph as usize] = Some(unit);
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an external unit.
    #[inline]
    pub fn lookup(&self, unit: char) -> Option<&TableEntry> {
        self.entries.get(&unit)
    }

    /// The unit registered for `glyph`.
    #[inline]
    pub fn glyph_unit(&self, glyph: Glyph) -> Option<char> {
        self.glyph_units[glyph as usize]
    }

    /// The unit for a bare letter or symbol.
    #[inline]
    pub fn character_unit(&self, character_type: CharacterType) -> Option<char> {
        self.character_units[character_type.ordinal() as usize]
    }

    pub fn contains_glyph(&self, glyph: Glyph) -> bool {
        self.glyph_unit(glyph).is_some()
    }
}
