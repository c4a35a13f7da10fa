/// The letter or Quranic symbol carried by an [`ArabicCharacter`].
///
/// The discriminant is the ordinal stored in byte 0 of the binary layout, so
/// the declaration order is part of the format. Letters come first and end at
/// [`CharacterType::Tatweel`]; every variant after it is a Quranic symbol.
///
/// [`ArabicCharacter`]: crate::ArabicCharacter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CharacterType {
    Alif = 0,
    Ba = 1,
    Ta = 2,
    Tha = 3,
    Jeem = 4,
    HHa = 5,
    Kha = 6,
    Dal = 7,
    Thal = 8,
    Ra = 9,
    Zain = 10,
    Seen = 11,
    Sheen = 12,
    Sad = 13,
    DDad = 14,
    TTa = 15,
    DTha = 16,
    Ain = 17,
    Ghain = 18,
    Fa = 19,
    Qaf = 20,
    Kaf = 21,
    Lam = 22,
    Meem = 23,
    Noon = 24,
    Ha = 25,
    Waw = 26,
    Ya = 27,
    Hamza = 28,
    AlifMaksura = 29,
    TaMarbuta = 30,
    /// Lengthens the previous letter. A hamza may sit on a tatweel.
    Tatweel = 31,
    SmallHighSeen = 32,
    SmallHighRoundedZero = 33,
    SmallHighUprightRectangularZero = 34,
    SmallHighMeemIsolatedForm = 35,
    SmallLowSeen = 36,
    SmallWaw = 37,
    SmallYa = 38,
    SmallHighNoon = 39,
    EmptyCentreLowStop = 40,
    EmptyCentreHighStop = 41,
    RoundedHighStopWithFilledCentre = 42,
    SmallLowMeem = 43,
}

impl CharacterType {
    /// Number of character types.
    pub const COUNT: usize = 44;

    /// Every character type, indexed by ordinal.
    pub const ALL: [CharacterType; Self::COUNT] = [
        CharacterType::Alif,
        CharacterType::Ba,
        CharacterType::Ta,
        CharacterType::Tha,
        CharacterType::Jeem,
        CharacterType::HHa,
        CharacterType::Kha,
        CharacterType::Dal,
        CharacterType::Thal,
        CharacterType::Ra,
        CharacterType::Zain,
        CharacterType::Seen,
        CharacterType::Sheen,
        CharacterType::Sad,
        CharacterType::DDad,
        CharacterType::TTa,
        CharacterType::DTha,
        CharacterType::Ain,
        CharacterType::Ghain,
        CharacterType::Fa,
        CharacterType::Qaf,
        CharacterType::Kaf,
        CharacterType::Lam,
        CharacterType::Meem,
        CharacterType::Noon,
        CharacterType::Ha,
        CharacterType::Waw,
        CharacterType::Ya,
        CharacterType::Hamza,
        CharacterType::AlifMaksura,
        CharacterType::TaMarbuta,
        CharacterType::Tatweel,
        CharacterType::SmallHighSeen,
        CharacterType::SmallHighRoundedZero,
        CharacterType::SmallHighUprightRectangularZero,
        CharacterType::SmallHighMeemIsolatedForm,
        CharacterType::SmallLowSeen,
        CharacterType::SmallWaw,
        CharacterType::SmallYa,
        CharacterType::SmallHighNoon,
        CharacterType::EmptyCentreLowStop,
        CharacterType::EmptyCentreHighStop,
        CharacterType::RoundedHighStopWithFilledCentre,
        CharacterType::SmallLowMeem,
    ];

    /// The last type that is a letter rather than a Quranic symbol.
    pub const LAST_LETTER: CharacterType = CharacterType::Tatweel;

    /// Returns the ordinal stored in the binary layout.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a character type by ordinal.
    #[inline]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Returns true for Arabic letters, false for Quranic symbols.
    #[inline]
    pub const fn is_letter(self) -> bool {
        self.ordinal() <= Self::LAST_LETTER.ordinal()
    }

    /// The name used by the diagnostic encoding, e.g. `"AlifMaksura"`.
    pub const fn name(self) -> &'static str {
        match self {
            CharacterType::Alif => "Alif",
            CharacterType::Ba => "Ba",
            CharacterType::Ta => "Ta",
            CharacterType::Tha => "Tha",
            CharacterType::Jeem => "Jeem",
            CharacterType::HHa => "HHa",
            CharacterType::Kha => "Kha",
            CharacterType::Dal => "Dal",
            CharacterType::Thal => "Thal",
            CharacterType::Ra => "Ra",
            CharacterType::Zain => "Zain",
            CharacterType::Seen => "Seen",
            CharacterType::Sheen => "Sheen",
            CharacterType::Sad => "Sad",
            CharacterType::DDad => "DDad",
            CharacterType::TTa => "TTa",
            CharacterType::DTha => "DTha",
            CharacterType::Ain => "Ain",
            CharacterType::Ghain => "Ghain",
            CharacterType::Fa => "Fa",
            CharacterType::Qaf => "Qaf",
            CharacterType::Kaf => "Kaf",
            CharacterType::Lam => "Lam",
            CharacterType::Meem => "Meem",
            CharacterType::Noon => "Noon",
            CharacterType::Ha => "Ha",
            CharacterType::Waw => "Waw",
            CharacterType::Ya => "Ya",
            CharacterType::Hamza => "Hamza",
            CharacterType::AlifMaksura => "AlifMaksura",
            CharacterType::TaMarbuta => "TaMarbuta",
            CharacterType::Tatweel => "Tatweel",
            CharacterType::SmallHighSeen => "SmallHighSeen",
            CharacterType::SmallHighRoundedZero => "SmallHighRoundedZero",
            CharacterType::SmallHighUprightRectangularZero => "SmallHighUprightRectangularZero",
            CharacterType::SmallHighMeemIsolatedForm => "SmallHighMeemIsolatedForm",
            CharacterType::SmallLowSeen => "SmallLowSeen",
            CharacterType::SmallWaw => "SmallWaw",
            CharacterType::SmallYa => "SmallYa",
            CharacterType::SmallHighNoon => "SmallHighNoon",
            CharacterType::EmptyCentreLowStop => "EmptyCentreLowStop",
            CharacterType::EmptyCentreHighStop => "EmptyCentreHighStop",
            CharacterType::RoundedHighStopWithFilledCentre => "RoundedHighStopWithFilledCentre",
            CharacterType::SmallLowMeem => "SmallLowMeem",
        }
    }
}

impl std::fmt::Display for CharacterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
