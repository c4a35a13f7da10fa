//! Fixed-width binary layout of Arabic characters.
//!
//! Each character occupies [`CHARACTER_WIDTH`] bytes:
//!
//! | byte | contents |
//! |------|----------|
//! | 0 | [`CharacterType`] ordinal, or [`WHITESPACE`] |
//! | 1 | Fatha, Damma, Kasra, Fathatan, Dammatan, Kasratan, Shadda, Sukun (bits 0-7) |
//! | 2 | Maddah, HamzaAbove, HamzaBelow, HamzatWasl, AlifKhanjareeya (bits 0-4) |
//!
//! The accessors take a buffer and the byte offset of a slot. They never
//! allocate and perform no validation beyond slice indexing.

use crate::{CharacterType, DiacriticType};

/// Number of bytes per character.
pub const CHARACTER_WIDTH: usize = 3;

/// Type byte reserved for a whitespace separator.
pub const WHITESPACE: u8 = 0xFF;

/// Sets a diacritic bit. Setting an already present diacritic is a no-op.
#[inline]
pub fn set_diacritic(buffer: &mut [u8], offset: usize, diacritic: DiacriticType) {
    buffer[offset + diacritic.byte_offset()] |= diacritic.mask();
}

/// Returns true if the diacritic bit is set.
#[inline]
pub fn has_diacritic(buffer: &[u8], offset: usize, diacritic: DiacriticType) -> bool {
    buffer[offset + diacritic.byte_offset()] & diacritic.mask() != 0
}

/// Returns true if `diacritic` is present and no other diacritic is.
#[inline]
pub fn is_single_diacritic(buffer: &[u8], offset: usize, diacritic: DiacriticType) -> bool {
    let own = diacritic.byte_offset();
    let other = CHARACTER_WIDTH - own;
    buffer[offset + own] == diacritic.mask() && buffer[offset + other] == 0
}

/// Counts the diacritic bits set across both mask bytes.
#[inline]
pub fn diacritic_count(buffer: &[u8], offset: usize) -> usize {
    (buffer[offset + 1].count_ones() + buffer[offset + 2].count_ones()) as usize
}

/// Returns true if the slot is a whitespace separator.
#[inline]
pub fn is_whitespace(buffer: &[u8], offset: usize) -> bool {
    buffer[offset] == WHITESPACE
}

/// Returns true unless the slot holds a Quranic symbol.
///
/// Whitespace counts as a letter so that stripping symbols keeps token
/// separators in place.
#[inline]
pub fn is_letter(buffer: &[u8], offset: usize) -> bool {
    let value = buffer[offset];
    value == WHITESPACE || value <= CharacterType::LAST_LETTER.ordinal()
}

/// Reads the character type, or `None` for whitespace.
///
/// # Panics
///
/// Panics if the type byte is neither a valid ordinal nor [`WHITESPACE`].
#[inline]
pub fn character_type(buffer: &[u8], offset: usize) -> Option<CharacterType> {
    let value = buffer[offset];
    if value == WHITESPACE {
        return None;
    }
    match CharacterType::from_ordinal(value) {
        Some(ty) => Some(ty),
        None => panic!("invalid character type byte {value:#04x} at offset {offset}"),
    }
}

/// Returns true if `value` may appear as the type byte of a slot.
#[inline]
pub fn is_valid_type_byte(value: u8) -> bool {
    value == WHITESPACE || (value as usize) < CharacterType::COUNT
}
