//! Orthography
//!
//! Addressing model over the Quranic text: a [`Document`] of numbered
//! [`Chapter`]s, each holding [`Verse`]s that split into whitespace delimited
//! [`Token`]s. Every element is addressed by a [`Location`].
//!
//! ```
//! use arabic_encoding::{Decode, Encode};
//! use arabic_text::ArabicText;
//! use orthography::Verse;
//!
//! let verse = Verse::new(1, 1, ArabicText::from_buckwalter("bisomi {ll~ahi")).unwrap();
//! let token = verse.token(2).unwrap();
//! assert_eq!(token.location().to_string(), "(1:1:2)");
//! assert_eq!(token.to_buckwalter(), "{ll~ahi");
//! ```

pub mod chapter;
pub mod document;
pub mod error;
pub mod location;
pub mod records;
pub mod token;
pub mod verse;

pub use chapter::Chapter;
pub use document::Document;
pub use error::{OrthographyError, Result};
pub use location::{Location, CHAPTER_COUNT};
pub use records::{ChapterRecord, VerseRecord};
pub use token::Token;
pub use verse::{Tokens, Verse};
