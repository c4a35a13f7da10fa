use crate::buckwalter::{buckwalter_decoder, buckwalter_encoder};
use crate::decoder::ArabicDecoder;
use crate::encoder::ArabicEncoder;
use crate::error::{EncodingError, Result};
use crate::options::{DecodeMode, EncodingOptions};
use crate::simple::SimpleEncoder;
use crate::unicode::{unicode_decoder, unicode_encoder};
use std::fmt;
use std::str::FromStr;

/// The external encodings Arabic text can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingScheme {
    /// Letter and diacritic names. Output only.
    Simple,
    Unicode,
    Buckwalter,
}

impl EncodingScheme {
    pub const ALL: [EncodingScheme; 3] = [
        EncodingScheme::Simple,
        EncodingScheme::Unicode,
        EncodingScheme::Buckwalter,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            EncodingScheme::Simple => "simple",
            EncodingScheme::Unicode => "unicode",
            EncodingScheme::Buckwalter => "buckwalter",
        }
    }

    /// Returns true if text in this scheme can be read back.
    pub const fn has_decoder(self) -> bool {
        !matches!(self, EncodingScheme::Simple)
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodingScheme {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| EncodingError::InvalidEncodingScheme {
                name: name.to_string(),
            })
    }
}

/// Creates an encoder for `scheme`.
pub fn encoder(scheme: EncodingScheme, options: EncodingOptions) -> Box<dyn ArabicEncoder + Send + Sync> {
    match scheme {
        EncodingScheme::Simple => Box::new(SimpleEncoder),
        EncodingScheme::Unicode => Box::new(unicode_encoder(options)),
        EncodingScheme::Buckwalter => Box::new(buckwalter_encoder(options)),
    }
}

/// Creates a decoder for `scheme`.
///
/// Fails with [`EncodingError::InvalidEncodingScheme`] for the simple
/// encoding, which cannot be read back.
pub fn decoder(scheme: EncodingScheme, mode: DecodeMode) -> Result<Box<dyn ArabicDecoder + Send + Sync>> {
    match scheme {
        EncodingScheme::Unicode => Ok(Box::new(unicode_decoder(mode))),
        EncodingScheme::Buckwalter => Ok(Box::new(buckwalter_decoder(mode))),
        EncodingScheme::Simple => {
            tracing::debug!(%scheme, "scheme has no decoder");
            Err(EncodingError::InvalidEncodingScheme {
                name: scheme.to_string(),
            })
        }
    }
}
