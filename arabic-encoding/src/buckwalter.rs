//! Buckwalter transliteration.
//!
//! One printable ASCII character per unit, extended with symbols for the
//! Quranic marks. There is no single character for Alif with Maddah, so it
//! is always written as `A^`.

use crate::decoder::TableDecoder;
use crate::encoder::TableEncoder;
use crate::glyph::Glyph;
use crate::options::{DecodeMode, EncodingOptions};
use crate::table::EncodingTable;
use std::sync::OnceLock;

const UNITS: [(Glyph, char); Glyph::COUNT - 1] = [
    (Glyph::Hamza, '\''),
    (Glyph::AlifWithHamzaAbove, '>'),
    (Glyph::WawWithHamzaAbove, '&'),
    (Glyph::AlifWithHamzaBelow, '<'),
    (Glyph::YaWithHamzaAbove, '}'),
    (Glyph::Alif, 'A'),
    (Glyph::Ba, 'b'),
    (Glyph::TaMarbuta, 'p'),
    (Glyph::Ta, 't'),
    (Glyph::Tha, 'v'),
    (Glyph::Jeem, 'j'),
    (Glyph::HHa, 'H'),
    (Glyph::Kha, 'x'),
    (Glyph::Dal, 'd'),
    (Glyph::Thal, '*'),
    (Glyph::Ra, 'r'),
    (Glyph::Zain, 'z'),
    (Glyph::Seen, 's'),
    (Glyph::Sheen, '$'),
    (Glyph::Sad, 'S'),
    (Glyph::DDad, 'D'),
    (Glyph::TTa, 'T'),
    (Glyph::DTha, 'Z'),
    (Glyph::Ain, 'E'),
    (Glyph::Ghain, 'g'),
    (Glyph::Tatweel, '_'),
    (Glyph::Fa, 'f'),
    (Glyph::Qaf, 'q'),
    (Glyph::Kaf, 'k'),
    (Glyph::Lam, 'l'),
    (Glyph::Meem, 'm'),
    (Glyph::Noon, 'n'),
    (Glyph::Ha, 'h'),
    (Glyph::Waw, 'w'),
    (Glyph::AlifMaksura, 'Y'),
    (Glyph::Ya, 'y'),
    (Glyph::Fathatan, 'F'),
    (Glyph::Dammatan, 'N'),
    (Glyph::Kasratan, 'K'),
    (Glyph::Fatha, 'a'),
    (Glyph::Damma, 'u'),
    (Glyph::Kasra, 'i'),
    (Glyph::Shadda, '~'),
    (Glyph::Sukun, 'o'),
    (Glyph::Maddah, '^'),
    (Glyph::HamzaAbove, '#'),
    (Glyph::AlifKhanjareeya, '`'),
    (Glyph::AlifWithHamzatWasl, '{'),
    (Glyph::SmallHighSeen, ':'),
    (Glyph::SmallHighRoundedZero, '@'),
    (Glyph::SmallHighUprightRectangularZero, '"'),
    (Glyph::SmallHighMeemIsolatedForm, '['),
    (Glyph::SmallLowSeen, ';'),
    (Glyph::SmallWaw, ','),
    (Glyph::SmallYa, '.'),
    (Glyph::SmallHighNoon, '!'),
    (Glyph::EmptyCentreLowStop, '-'),
    (Glyph::EmptyCentreHighStop, '+'),
    (Glyph::RoundedHighStopWithFilledCentre, '%'),
    (Glyph::SmallLowMeem, ']'),
];

/// The Buckwalter table, built on first use.
pub fn buckwalter_table() -> &'static EncodingTable {
    static TABLE: OnceLock<EncodingTable> = OnceLock::new();
    TABLE.get_or_init(|| EncodingTable::from_units("buckwalter", &UNITS))
}

pub fn buckwalter_encoder(options: EncodingOptions) -> TableEncoder<'static> {
    TableEncoder::new(buckwalter_table(), options)
}

pub fn buckwalter_decoder(mode: DecodeMode) -> TableDecoder<'static> {
    TableDecoder::new(buckwalter_table(), mode)
}
