//! Arabic Text
//!
//! Compact fixed-width representation of Classical Arabic script: three bytes
//! per character, one for the letter or Quranic symbol and two for a diacritic
//! bit mask. Texts are immutable views over shared buffers and are assembled
//! with [`ArabicTextBuilder`].

pub mod builder;
pub mod byte_format;
pub mod character;
pub mod character_type;
pub mod diacritic_type;
pub mod error;
pub mod text;

pub use builder::ArabicTextBuilder;
pub use character::ArabicCharacter;
pub use character_type::CharacterType;
pub use diacritic_type::DiacriticType;
pub use error::{Result, TextError};
pub use text::{ArabicText, Characters};
