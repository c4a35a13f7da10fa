/// Options controlling how characters are combined during encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EncodingOptions {
    /// Write Alif carrying Maddah as one composed glyph, when the scheme has one.
    pub combine_alif_with_maddah: bool,
}

impl EncodingOptions {
    pub const fn new() -> Self {
        Self {
            combine_alif_with_maddah: false,
        }
    }

    pub const fn with_alif_maddah_combined(mut self, combine: bool) -> Self {
        self.combine_alif_with_maddah = combine;
        self
    }
}

/// How a decoder treats input it cannot map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecodeMode {
    /// Unknown units become whitespace. A diacritic following whitespace is
    /// attached to it; one with nothing before it is dropped.
    #[default]
    Lenient,
    /// Unknown units are errors, as is a diacritic that does not follow a
    /// letter or symbol.
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(!EncodingOptions::default().combine_alif_with_maddah);
        assert_eq!(EncodingOptions::new(), EncodingOptions::default());
        assert_eq!(DecodeMode::default(), DecodeMode::Lenient);
    }

    #[test]
    fn test_builder_style() {
        let options = EncodingOptions::new().with_alif_maddah_combined(true);
        assert!(options.combine_alif_with_maddah);
    }
}
