use arabic_encoding::{Decode, Encode, EncodingOptions, EncodingScheme};
use arabic_text::{ArabicText, ArabicTextBuilder, CharacterType as C, DiacriticType as D};

fn build(characters: &[(C, &[D])]) -> ArabicText {
    let mut builder = ArabicTextBuilder::new();
    for (ty, diacritics) in characters {
        builder.append_character(*ty, diacritics);
    }
    builder.finish()
}

fn characters(text: &ArabicText) -> Vec<String> {
    text.iter().map(|c| c.to_simple_encoding()).collect()
}

#[test]
fn test_encode_alif_with_hamza_above() {
    let text = build(&[
        (C::Alif, &[D::Fatha, D::HamzaAbove]),
        (C::Noon, &[D::Sukun]),
        (C::Ain, &[D::Fatha]),
        (C::Meem, &[D::Sukun]),
        (C::Ta, &[D::Fatha]),
    ]);
    assert_eq!(
        text.to_unicode(),
        "\u{0623}\u{064e}\u{0646}\u{0652}\u{0639}\u{064e}\u{0645}\u{0652}\u{062a}\u{064e}"
    );
}

#[test]
fn test_encode_waw_with_hamza_above() {
    let text = build(&[
        (C::Ya, &[D::Damma]),
        (C::Waw, &[D::Sukun, D::HamzaAbove]),
        (C::Meem, &[D::Kasra]),
        (C::Noon, &[D::Damma]),
        (C::Waw, &[]),
        (C::Noon, &[D::Fatha]),
    ]);
    assert_eq!(
        text.to_unicode(),
        "\u{064a}\u{064f}\u{0624}\u{0652}\u{0645}\u{0650}\u{0646}\u{064f}\u{0648}\u{0646}\u{064e}"
    );
}

#[test]
fn test_encode_alif_with_hamza_below() {
    let text = build(&[
        (C::Alif, &[D::Kasra, D::HamzaBelow]),
        (C::Ya, &[D::Fatha, D::Shadda]),
        (C::Alif, &[]),
        (C::Kaf, &[D::Fatha]),
    ]);
    assert_eq!(
        text.to_unicode(),
        "\u{0625}\u{0650}\u{064a}\u{0651}\u{064e}\u{0627}\u{0643}\u{064e}"
    );
}

#[test]
fn test_encode_ya_with_hamza_above() {
    let text = build(&[
        (C::Alif, &[D::Damma, D::HamzaAbove]),
        (C::Waw, &[]),
        (C::SmallHighRoundedZero, &[]),
        (C::Lam, &[D::Fatha]),
        (C::Alif, &[D::Maddah, D::AlifKhanjareeya]),
        (C::Ya, &[D::Kasra, D::HamzaAbove]),
        (C::Kaf, &[D::Fatha]),
    ]);
    assert_eq!(
        text.to_unicode(),
        "\u{0623}\u{064f}\u{0648}\u{06df}\u{0644}\u{064e}\u{0670}\u{0653}\u{0626}\u{0650}\u{0643}\u{064e}"
    );
}

#[test]
fn test_encode_alif_khanjareeya() {
    let text = build(&[
        (C::Alif, &[D::HamzatWasl]),
        (C::Lam, &[]),
        (C::Ra, &[D::Fatha, D::Shadda]),
        (C::HHa, &[D::Sukun]),
        (C::Meem, &[D::Fatha]),
        (C::Alif, &[D::AlifKhanjareeya]),
        (C::Noon, &[D::Kasra]),
    ]);
    assert_eq!(
        text.to_unicode(),
        "\u{0671}\u{0644}\u{0631}\u{0651}\u{064e}\u{062d}\u{0652}\u{0645}\u{064e}\u{0670}\u{0646}\u{0650}"
    );
}

#[test]
fn test_encode_alif_with_hamzat_wasl() {
    let text = build(&[
        (C::Alif, &[D::HamzatWasl]),
        (C::Lam, &[]),
        (C::Lam, &[D::Fatha, D::Shadda]),
        (C::Ha, &[D::Kasra]),
    ]);
    assert_eq!(
        text.to_unicode(),
        "\u{0671}\u{0644}\u{0644}\u{0651}\u{064e}\u{0647}\u{0650}"
    );
}

#[test]
fn test_encode_hamza_above_on_tatweel() {
    let text = build(&[
        (C::Alif, &[D::Fatha, D::HamzaAbove]),
        (C::Noon, &[]),
        (C::SmallHighMeemIsolatedForm, &[]),
        (C::Ba, &[D::Kasra]),
        (C::Tatweel, &[D::Damma, D::HamzaAbove]),
        (C::Waw, &[]),
        (C::Noon, &[D::Kasra]),
        (C::AlifMaksura, &[]),
    ]);
    assert_eq!(
        text.to_unicode(),
        "\u{0623}\u{064e}\u{0646}\u{06e2}\u{0628}\u{0650}\u{0640}\u{0654}\u{064f}\u{0648}\u{0646}\u{0650}\u{0649}"
    );
}

#[test]
fn test_encode_tanween() {
    let text = build(&[(C::Ha, &[D::Damma]), (C::Dal, &[D::Fathatan]), (C::AlifMaksura, &[])]);
    assert_eq!(text.to_unicode(), "\u{0647}\u{064f}\u{062f}\u{064b}\u{0649}");

    let text = build(&[
        (C::Seen, &[D::Fatha]),
        (C::Waw, &[D::Fatha]),
        (C::Alif, &[D::Maddah]),
        (C::Hamza, &[D::Dammatan]),
    ]);
    assert_eq!(
        text.to_unicode(),
        "\u{0633}\u{064e}\u{0648}\u{064e}\u{0627}\u{0653}\u{0621}\u{064c}"
    );

    let text = build(&[
        (C::DTha, &[D::Damma]),
        (C::Lam, &[D::Damma]),
        (C::Meem, &[D::Fatha]),
        (C::Alif, &[D::AlifKhanjareeya]),
        (C::Ta, &[D::Kasratan]),
    ]);
    assert_eq!(
        text.to_unicode(),
        "\u{0638}\u{064f}\u{0644}\u{064f}\u{0645}\u{064e}\u{0670}\u{062a}\u{064d}"
    );
}

#[test]
fn test_combine_alif_with_maddah() {
    let text = build(&[
        (C::Seen, &[D::Fatha]),
        (C::Waw, &[D::Fatha]),
        (C::Alif, &[D::Maddah]),
        (C::Hamza, &[D::Dammatan]),
    ]);
    let options = EncodingOptions::new().with_alif_maddah_combined(true);
    let unicode = text.to_encoding_with(EncodingScheme::Unicode, options);
    assert_eq!(unicode, "\u{0633}\u{064e}\u{0648}\u{064e}\u{0622}\u{0621}\u{064c}");
    assert_eq!(ArabicText::from_unicode(&unicode), text);
}

#[test]
fn test_decode_composed_code_points() {
    let text = ArabicText::from_unicode(
        "\u{0623}\u{064F}\u{0648}\u{06DF}\u{0644}\u{064E}\u{0670}\u{0653}\u{0626}\u{0650}\u{0643}\u{064E}",
    );
    assert_eq!(
        characters(&text),
        vec![
            "Alif + Damma + HamzaAbove",
            "Waw",
            "SmallHighRoundedZero",
            "Lam + Fatha",
            "Alif + Maddah + AlifKhanjareeya",
            "Ya + Kasra + HamzaAbove",
            "Kaf + Fatha",
        ]
    );

    let text = ArabicText::from_unicode("\u{0625}\u{0650}\u{064A}\u{0651}\u{064E}\u{0627}\u{0643}\u{064E}");
    assert_eq!(
        characters(&text),
        vec!["Alif + Kasra + HamzaBelow", "Ya + Fatha + Shadda", "Alif", "Kaf + Fatha"]
    );
}

#[test]
fn test_decode_matches_buckwalter() {
    let pairs = [
        ("\u{0623}\u{064E}\u{0646}\u{0652}\u{0639}\u{064E}\u{0645}\u{0652}\u{062A}\u{064E}", ">anoEamota"),
        ("\u{064A}\u{064F}\u{0624}\u{0652}\u{0645}\u{0650}\u{0646}\u{064F}\u{0648}\u{0646}\u{064E}", "yu&ominuwna"),
        ("\u{0671}\u{0644}\u{0631}\u{0651}\u{064E}\u{062D}\u{0652}\u{0645}\u{064E}\u{0670}\u{0646}\u{0650}", "{lr~aHoma`ni"),
        ("\u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{0650}", "{ll~ahi"),
        ("\u{0623}\u{064E}\u{0646}\u{06E2}\u{0628}\u{0650}\u{0640}\u{0654}\u{064F}\u{0648}\u{0646}\u{0650}\u{0649}", ">an[bi_#uwniY"),
        ("\u{0647}\u{064F}\u{062F}\u{064B}\u{0649}", "hudFY"),
        ("\u{0633}\u{064E}\u{0648}\u{064E}\u{0627}\u{0653}\u{0621}\u{064C}", "sawaA^'N"),
        ("\u{0638}\u{064F}\u{0644}\u{064F}\u{0645}\u{064E}\u{0670}\u{062A}\u{064D}", "Zuluma`tK"),
    ];
    for (unicode, buckwalter) in pairs {
        let text = ArabicText::from_unicode(unicode);
        assert_eq!(text, ArabicText::from_buckwalter(buckwalter));
        assert_eq!(text.to_buckwalter(), buckwalter);
    }
}

#[test]
fn test_unknown_code_point_is_whitespace() {
    let text = ArabicText::from_unicode("\u{0628}x\u{0628}");
    assert_eq!(text.len(), 3);
    assert!(text.is_whitespace(1));
    assert_eq!(text.to_unicode(), "\u{0628} \u{0628}");
}
