//! Unicode code points for Quranic Arabic.

use crate::decoder::TableDecoder;
use crate::encoder::TableEncoder;
use crate::glyph::Glyph;
use crate::options::{DecodeMode, EncodingOptions};
use crate::table::EncodingTable;
use std::sync::OnceLock;

const UNITS: [(Glyph, char); Glyph::COUNT] = [
    (Glyph::Hamza, '\u{0621}'),
    (Glyph::AlifWithMaddah, '\u{0622}'),
    (Glyph::AlifWithHamzaAbove, '\u{0623}'),
    (Glyph::WawWithHamzaAbove, '\u{0624}'),
    (Glyph::AlifWithHamzaBelow, '\u{0625}'),
    (Glyph::YaWithHamzaAbove, '\u{0626}'),
    (Glyph::Alif, '\u{0627}'),
    (Glyph::Ba, '\u{0628}'),
    (Glyph::TaMarbuta, '\u{0629}'),
    (Glyph::Ta, '\u{062A}'),
    (Glyph::Tha, '\u{062B}'),
    (Glyph::Jeem, '\u{062C}'),
    (Glyph::HHa, '\u{062D}'),
    (Glyph::Kha, '\u{062E}'),
    (Glyph::Dal, '\u{062F}'),
    (Glyph::Thal, '\u{0630}'),
    (Glyph::Ra, '\u{0631}'),
    (Glyph::Zain, '\u{0632}'),
    (Glyph::Seen, '\u{0633}'),
    (Glyph::Sheen, '\u{0634}'),
    (Glyph::Sad, '\u{0635}'),
    (Glyph::DDad, '\u{0636}'),
    (Glyph::TTa, '\u{0637}'),
    (Glyph::DTha, '\u{0638}'),
    (Glyph::Ain, '\u{0639}'),
    (Glyph::Ghain, '\u{063A}'),
    (Glyph::Tatweel, '\u{0640}'),
    (Glyph::Fa, '\u{0641}'),
    (Glyph::Qaf, '\u{0642}'),
    (Glyph::Kaf, '\u{0643}'),
    (Glyph::Lam, '\u{0644}'),
    (Glyph::Meem, '\u{0645}'),
    (Glyph::Noon, '\u{0646}'),
    (Glyph::Ha, '\u{0647}'),
    (Glyph::Waw, '\u{0648}'),
    (Glyph::AlifMaksura, '\u{0649}'),
    (Glyph::Ya, '\u{064A}'),
    (Glyph::Fathatan, '\u{064B}'),
    (Glyph::Dammatan, '\u{064C}'),
    (Glyph::Kasratan, '\u{064D}'),
    (Glyph::Fatha, '\u{064E}'),
    (Glyph::Damma, '\u{064F}'),
    (Glyph::Kasra, '\u{0650}'),
    (Glyph::Shadda, '\u{0651}'),
    (Glyph::Sukun, '\u{0652}'),
    (Glyph::Maddah, '\u{0653}'),
    (Glyph::HamzaAbove, '\u{0654}'),
    (Glyph::AlifKhanjareeya, '\u{0670}'),
    (Glyph::AlifWithHamzatWasl, '\u{0671}'),
    (Glyph::SmallHighSeen, '\u{06DC}'),
    (Glyph::SmallHighRoundedZero, '\u{06DF}'),
    (Glyph::SmallHighUprightRectangularZero, '\u{06E0}'),
    (Glyph::SmallHighMeemIsolatedForm, '\u{06E2}'),
    (Glyph::SmallLowSeen, '\u{06E3}'),
    (Glyph::SmallWaw, '\u{06E5}'),
    (Glyph::SmallYa, '\u{06E6}'),
    (Glyph::SmallHighNoon, '\u{06E8}'),
    (Glyph::EmptyCentreLowStop, '\u{06EA}'),
    (Glyph::EmptyCentreHighStop, '\u{06EB}'),
    (Glyph::RoundedHighStopWithFilledCentre, '\u{06EC}'),
    (Glyph::SmallLowMeem, '\u{06ED}'),
];

/// The Unicode table, built on first use.
pub fn unicode_table() -> &'static EncodingTable {
    static TABLE: OnceLock<EncodingTable> = OnceLock::new();
    TABLE.get_or_init(|| EncodingTable::from_units("unicode", &UNITS))
}

pub fn unicode_encoder(options: EncodingOptions) -> TableEncoder<'static> {
    TableEncoder::new(unicode_table(), options)
}

pub fn unicode_decoder(mode: DecodeMode) -> TableDecoder<'static> {
    TableDecoder::new(unicode_table(), mode)
}
