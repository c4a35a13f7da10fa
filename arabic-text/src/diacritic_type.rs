/// A diacritic that can be attached to an [`ArabicCharacter`].
///
/// The discriminant selects the bit in the diacritic mask: ordinals 0 to 7
/// live in byte 1 of a slot, ordinals 8 to 12 in byte 2.
///
/// [`ArabicCharacter`]: crate::ArabicCharacter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DiacriticType {
    Fatha = 0,
    Damma = 1,
    Kasra = 2,
    Fathatan = 3,
    Dammatan = 4,
    Kasratan = 5,
    Shadda = 6,
    Sukun = 7,
    Maddah = 8,
    HamzaAbove = 9,
    HamzaBelow = 10,
    HamzatWasl = 11,
    /// Superscript alif.
    AlifKhanjareeya = 12,
}

impl DiacriticType {
    /// Number of diacritic types.
    pub const COUNT: usize = 13;

    /// Every diacritic type, indexed by ordinal.
    pub const ALL: [DiacriticType; Self::COUNT] = [
        DiacriticType::Fatha,
        DiacriticType::Damma,
        DiacriticType::Kasra,
        DiacriticType::Fathatan,
        DiacriticType::Dammatan,
        DiacriticType::Kasratan,
        DiacriticType::Shadda,
        DiacriticType::Sukun,
        DiacriticType::Maddah,
        DiacriticType::HamzaAbove,
        DiacriticType::HamzaBelow,
        DiacriticType::HamzatWasl,
        DiacriticType::AlifKhanjareeya,
    ];

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Byte within a slot (1 or 2) that holds this diacritic's bit.
    #[inline]
    pub const fn byte_offset(self) -> usize {
        if self.ordinal() < 8 {
            1
        } else {
            2
        }
    }

    /// Bit mask within [`byte_offset`](Self::byte_offset).
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << (self.ordinal() % 8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            DiacriticType::Fatha => "Fatha",
            DiacriticType::Damma => "Damma",
            DiacriticType::Kasra => "Kasra",
            DiacriticType::Fathatan => "Fathatan",
            DiacriticType::Dammatan => "Dammatan",
            DiacriticType::Kasratan => "Kasratan",
            DiacriticType::Shadda => "Shadda",
            DiacriticType::Sukun => "Sukun",
            DiacriticType::Maddah => "Maddah",
            DiacriticType::HamzaAbove => "HamzaAbove",
            DiacriticType::HamzaBelow => "HamzaBelow",
            DiacriticType::HamzatWasl => "HamzatWasl",
            DiacriticType::AlifKhanjareeya => "AlifKhanjareeya",
        }
    }
}

impl std::fmt::Display for DiacriticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        assert_eq!(DiacriticType::Fatha.byte_offset(), 1);
        assert_eq!(DiacriticType::Fatha.mask(), 1);
        assert_eq!(DiacriticType::Shadda.mask(), 64);
        assert_eq!(DiacriticType::Sukun.mask(), 128);
        assert_eq!(DiacriticType::Maddah.byte_offset(), 2);
        assert_eq!(DiacriticType::Maddah.mask(), 1);
        assert_eq!(DiacriticType::AlifKhanjareeya.byte_offset(), 2);
        assert_eq!(DiacriticType::AlifKhanjareeya.mask(), 16);
    }

    #[test]
    fn test_bits_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for d in DiacriticType::ALL {
            assert!(seen.insert((d.byte_offset(), d.mask())), "{d} shares a bit");
        }
    }

    #[test]
    fn test_from_ordinal() {
        assert_eq!(DiacriticType::from_ordinal(9), Some(DiacriticType::HamzaAbove));
        assert_eq!(DiacriticType::from_ordinal(13), None);
    }
}
