use arabic_text::{CharacterType, DiacriticType};

/// An output unit of an external encoding.
///
/// Most glyphs stand for a single letter, symbol or diacritic. A few are
/// composed: one external unit that stands for a letter carrying a diacritic,
/// such as Alif with Hamza above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Glyph {
    Hamza,
    AlifWithMaddah,
    AlifWithHamzaAbove,
    WawWithHamzaAbove,
    AlifWithHamzaBelow,
    YaWithHamzaAbove,
    Alif,
    Ba,
    TaMarbuta,
    Ta,
    Tha,
    Jeem,
    HHa,
    Kha,
    Dal,
    Thal,
    Ra,
    Zain,
    Seen,
    Sheen,
    Sad,
    DDad,
    TTa,
    DTha,
    Ain,
    Ghain,
    Tatweel,
    Fa,
    Qaf,
    Kaf,
    Lam,
    Meem,
    Noon,
    Ha,
    Waw,
    AlifMaksura,
    Ya,
    Fathatan,
    Dammatan,
    Kasratan,
    Fatha,
    Damma,
    Kasra,
    Shadda,
    Sukun,
    Maddah,
    HamzaAbove,
    AlifKhanjareeya,
    AlifWithHamzatWasl,
    SmallHighSeen,
    SmallHighRoundedZero,
    SmallHighUprightRectangularZero,
    SmallHighMeemIsolatedForm,
    SmallLowSeen,
    SmallWaw,
    SmallYa,
    SmallHighNoon,
    EmptyCentreLowStop,
    EmptyCentreHighStop,
    RoundedHighStopWithFilledCentre,
    SmallLowMeem,
}

impl Glyph {
    pub const COUNT: usize = 61;

    /// The letter and diacritic this glyph stands for.
    pub const fn composition(self) -> (Option<CharacterType>, Option<DiacriticType>) {
        use CharacterType as C;
        use DiacriticType as D;

        match self {
            Glyph::AlifWithMaddah => (Some(C::Alif), Some(D::Maddah)),
            Glyph::AlifWithHamzaAbove => (Some(C::Alif), Some(D::HamzaAbove)),
            Glyph::WawWithHamzaAbove => (Some(C::Waw), Some(D::HamzaAbove)),
            Glyph::AlifWithHamzaBelow => (Some(C::Alif), Some(D::HamzaBelow)),
            Glyph::YaWithHamzaAbove => (Some(C::Ya), Some(D::HamzaAbove)),
            Glyph::AlifKhanjareeya => (Some(C::Alif), Some(D::AlifKhanjareeya)),
            Glyph::AlifWithHamzatWasl => (Some(C::Alif), Some(D::HamzatWasl)),

            Glyph::Fathatan => (None, Some(D::Fathatan)),
            Glyph::Dammatan => (None, Some(D::Dammatan)),
            Glyph::Kasratan => (None, Some(D::Kasratan)),
            Glyph::Fatha => (None, Some(D::Fatha)),
            Glyph::Damma => (None, Some(D::Damma)),
            Glyph::Kasra => (None, Some(D::Kasra)),
            Glyph::Shadda => (None, Some(D::Shadda)),
            Glyph::Sukun => (None, Some(D::Sukun)),
            Glyph::Maddah => (None, Some(D::Maddah)),
            Glyph::HamzaAbove => (None, Some(D::HamzaAbove)),

            Glyph::Hamza => (Some(C::Hamza), None),
            Glyph::Alif => (Some(C::Alif), None),
            Glyph::Ba => (Some(C::Ba), None),
            Glyph::TaMarbuta => (Some(C::TaMarbuta), None),
            Glyph::Ta => (Some(C::Ta), None),
            Glyph::Tha => (Some(C::Tha), None),
            Glyph::Jeem => (Some(C::Jeem), None),
            Glyph::HHa => (Some(C::HHa), None),
            Glyph::Kha => (Some(C::Kha), None),
            Glyph::Dal => (Some(C::Dal), None),
            Glyph::Thal => (Some(C::Thal), None),
            Glyph::Ra => (Some(C::Ra), None),
            Glyph::Zain => (Some(C::Zain), None),
            Glyph::Seen => (Some(C::Seen), None),
            Glyph::Sheen => (Some(C::Sheen), None),
            Glyph::Sad => (Some(C::Sad), None),
            Glyph::DDad => (Some(C::DDad), None),
            Glyph::TTa => (Some(C::TTa), None),
            Glyph::DTha => (Some(C::DTha), None),
            Glyph::Ain => (Some(C::Ain), None),
            Glyph::Ghain => (Some(C::Ghain), None),
            Glyph::Tatweel => (Some(C::Tatweel), None),
            Glyph::Fa => (Some(C::Fa), None),
            Glyph::Qaf => (Some(C::Qaf), None),
            Glyph::Kaf => (Some(C::Kaf), None),
            Glyph::Lam => (Some(C::Lam), None),
            Glyph::Meem => (Some(C::Meem), None),
            Glyph::Noon => (Some(C::Noon), None),
            Glyph::Ha => (Some(C::Ha), None),
            Glyph::Waw => (Some(C::Waw), None),
            Glyph::AlifMaksura => (Some(C::AlifMaksura), None),
            Glyph::Ya => (Some(C::Ya), None),
            Glyph::SmallHighSeen => (Some(C::SmallHighSeen), None),
            Glyph::SmallHighRoundedZero => (Some(C::SmallHighRoundedZero), None),
            Glyph::SmallHighUprightRectangularZero => {
                (Some(C::SmallHighUprightRectangularZero), None)
            }
            Glyph::SmallHighMeemIsolatedForm => (Some(C::SmallHighMeemIsolatedForm), None),
            Glyph::SmallLowSeen => (Some(C::SmallLowSeen), None),
            Glyph::SmallWaw => (Some(C::SmallWaw), None),
            Glyph::SmallYa => (Some(C::SmallYa), None),
            Glyph::SmallHighNoon => (Some(C::SmallHighNoon), None),
            Glyph::EmptyCentreLowStop => (Some(C::EmptyCentreLowStop), None),
            Glyph::EmptyCentreHighStop => (Some(C::EmptyCentreHighStop), None),
            Glyph::RoundedHighStopWithFilledCentre => {
                (Some(C::RoundedHighStopWithFilledCentre), None)
            }
            Glyph::SmallLowMeem => (Some(C::SmallLowMeem), None),
        }
    }

    /// Returns true if this glyph stands for a letter together with a diacritic.
    pub const fn is_composed(self) -> bool {
        matches!(self.composition(), (Some(_), Some(_)))
    }

    /// The standalone glyph for a diacritic.
    ///
    /// Hamza below, Hamzat wasl and Alif khanjareeya only ever appear on an
    /// Alif and have no standalone glyph.
    pub const fn from_diacritic(diacritic: DiacriticType) -> Option<Glyph> {
        use DiacriticType as D;

        match diacritic {
            D::Fatha => Some(Glyph::Fatha),
            D::Damma => Some(Glyph::Damma),
            D::Kasra => Some(Glyph::Kasra),
            D::Fathatan => Some(Glyph::Fathatan),
            D::Dammatan => Some(Glyph::Dammatan),
            D::Kasratan => Some(Glyph::Kasratan),
            D::Shadda => Some(Glyph::Shadda),
            D::Sukun => Some(Glyph::Sukun),
            D::Maddah => Some(Glyph::Maddah),
            D::HamzaAbove => Some(Glyph::HamzaAbove),
            D::HamzaBelow | D::HamzatWasl | D::AlifKhanjareeya => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composed_glyphs() {
        assert!(Glyph::AlifWithMaddah.is_composed());
        assert!(Glyph::AlifKhanjareeya.is_composed());
        assert!(Glyph::YaWithHamzaAbove.is_composed());
        assert!(!Glyph::Alif.is_composed());
        assert!(!Glyph::Shadda.is_composed());
    }

    #[test]
    fn test_from_diacritic() {
        assert_eq!(Glyph::from_diacritic(DiacriticType::Sukun), Some(Glyph::Sukun));
        assert_eq!(Glyph::from_diacritic(DiacriticType::HamzaBelow), None);
        assert_eq!(Glyph::from_diacritic(DiacriticType::AlifKhanjareeya), None);
    }

    #[test]
    fn test_standalone_diacritic_composition() {
        for d in DiacriticType::ALL {
            if let Some(glyph) = Glyph::from_diacritic(d) {
                assert_eq!(glyph.composition(), (None, Some(d)));
            }
        }
    }
}
