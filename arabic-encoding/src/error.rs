use arabic_text::DiacriticType;

/// Errors raised while converting between Arabic text and external encodings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The scheme is unknown, or does not support the requested direction.
    #[error("invalid encoding scheme '{name}'")]
    InvalidEncodingScheme { name: String },

    #[error("unknown unit {unit:?} at position {position}")]
    UnknownUnit { unit: char, position: usize },

    #[error("diacritic {diacritic} at position {position} has no letter to attach to")]
    OrphanDiacritic {
        diacritic: DiacriticType,
        position: usize,
    },
}

pub type Result<T> = std::result::Result<T, EncodingError>;
