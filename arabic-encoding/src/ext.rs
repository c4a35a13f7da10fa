//! Conversion methods on the text types.

use crate::buckwalter::buckwalter_decoder;
use crate::encoder::ArabicEncoder;
use crate::error::Result;
use crate::options::{DecodeMode, EncodingOptions};
use crate::scheme::{decoder, encoder, EncodingScheme};
use crate::unicode::unicode_decoder;
use arabic_text::{ArabicCharacter, ArabicText};

/// Writes a value in any [`EncodingScheme`].
pub trait Encode {
    /// Encodes with a specific encoder.
    fn encode_with(&self, encoder: &dyn ArabicEncoder) -> String;

    fn to_encoding_with(&self, scheme: EncodingScheme, options: EncodingOptions) -> String {
        self.encode_with(&*encoder(scheme, options))
    }

    fn to_encoding(&self, scheme: EncodingScheme) -> String {
        self.to_encoding_with(scheme, EncodingOptions::default())
    }

    fn to_unicode(&self) -> String {
        self.to_encoding(EncodingScheme::Unicode)
    }

    fn to_buckwalter(&self) -> String {
        self.to_encoding(EncodingScheme::Buckwalter)
    }

    fn to_simple_encoding(&self) -> String {
        self.to_encoding(EncodingScheme::Simple)
    }
}

impl Encode for ArabicText {
    fn encode_with(&self, encoder: &dyn ArabicEncoder) -> String {
        encoder.encode(self)
    }
}

impl Encode for ArabicCharacter<'_> {
    fn encode_with(&self, encoder: &dyn ArabicEncoder) -> String {
        let mut out = String::new();
        encoder.encode_character(self, &mut out);
        out
    }
}

/// Reads a value from an external encoding.
pub trait Decode: Sized {
    /// Decodes Unicode, reading unknown code points as whitespace.
    fn from_unicode(text: &str) -> Self;

    /// Decodes Buckwalter, reading unknown characters as whitespace.
    fn from_buckwalter(text: &str) -> Self;

    fn from_encoding_with(text: &str, scheme: EncodingScheme, mode: DecodeMode) -> Result<Self>;

    fn from_encoding(text: &str, scheme: EncodingScheme) -> Result<Self> {
        Self::from_encoding_with(text, scheme, DecodeMode::default())
    }
}

impl Decode for ArabicText {
    fn from_unicode(text: &str) -> Self {
        unicode_decoder(DecodeMode::Lenient).decode_lossy(text)
    }

    fn from_buckwalter(text: &str) -> Self {
        buckwalter_decoder(DecodeMode::Lenient).decode_lossy(text)
    }

    fn from_encoding_with(text: &str, scheme: EncodingScheme, mode: DecodeMode) -> Result<Self> {
        decoder(scheme, mode)?.decode(text)
    }
}
