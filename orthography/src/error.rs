use arabic_encoding::EncodingError;

/// Errors raised when addressing or building the document model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrthographyError {
    #[error("invalid chapter number {number}")]
    InvalidChapterNumber { number: usize },

    #[error("invalid verse number {verse} in chapter {chapter}")]
    InvalidVerseNumber { chapter: usize, verse: usize },

    #[error("invalid token number {token} in verse ({chapter}:{verse})")]
    InvalidTokenNumber {
        chapter: usize,
        verse: usize,
        token: usize,
    },

    #[error("cannot parse location {text:?}")]
    InvalidLocation { text: String },

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

pub type Result<T> = std::result::Result<T, OrthographyError>;
