/// Errors raised when reading Arabic text from its binary layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("buffer length {length} is not a multiple of the character width")]
    InvalidLength { length: usize },

    #[error("invalid character type byte {value:#04x} at character {index}")]
    InvalidCharacterType { index: usize, value: u8 },
}

pub type Result<T> = std::result::Result<T, TextError>;
