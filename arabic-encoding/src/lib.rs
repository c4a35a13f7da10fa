//! Arabic Encoding
//!
//! Converts [`ArabicText`](arabic_text::ArabicText) to and from Unicode,
//! Buckwalter transliteration and a readable diagnostic form.
//!
//! Encoding is table driven. A set of priority ordered combination rules picks
//! a composed glyph for letters that carry certain hamza and alif marks; the
//! remaining diacritics follow in a fixed order. Decoding the output with the
//! same table gives back the original text.
//!
//! ```
//! use arabic_encoding::{Decode, Encode};
//! use arabic_text::ArabicText;
//!
//! let text = ArabicText::from_buckwalter("hudFY");
//! assert_eq!(text.to_unicode(), "\u{0647}\u{064F}\u{062F}\u{064B}\u{0649}");
//! ```

pub mod buckwalter;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod ext;
pub mod glyph;
pub mod options;
pub mod rules;
pub mod scheme;
pub mod simple;
pub mod table;
pub mod unicode;

pub use buckwalter::{buckwalter_decoder, buckwalter_encoder, buckwalter_table};
pub use decoder::{ArabicDecoder, TableDecoder};
pub use encoder::{ArabicEncoder, TableEncoder, DIACRITIC_ORDER};
pub use error::{EncodingError, Result};
pub use ext::{Decode, Encode};
pub use glyph::Glyph;
pub use options::{DecodeMode, EncodingOptions};
pub use rules::{CombinationRule, Combination, RuleContext, RuleSet};
pub use scheme::{decoder, encoder, EncodingScheme};
pub use simple::SimpleEncoder;
pub use table::{EncodingTable, TableEntry};
pub use unicode::{unicode_decoder, unicode_encoder, unicode_table};
