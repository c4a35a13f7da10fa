use arabic_encoding::{Decode, DecodeMode, Encode, EncodingError};
use arabic_text::ArabicText;
use orthography::{
    Chapter, ChapterRecord, Document, Location, OrthographyError, VerseRecord,
};

const FATIHA: [&str; 7] = [
    "bisomi {ll~ahi {lr~aHoma`ni {lr~aHiymi",
    "{loHamodu lil~ahi rab~i {loEa`lamiyna",
    "{lr~aHoma`ni {lr~aHiymi",
    "ma`liki yawomi {ld~iyni",
    "<iy~aAka naEobudu wa<iy~aAka nasotaEiynu",
    "{hodinaA {lS~ira`Ta {lomusotaqiyma",
    "Sira`Ta {l~a*iyna >anoEamota Ealayohimo gayori {lomagoDuwbi Ealayohimo walaA {lD~aA^l~iyna",
];

const BISMILLAH: &str = "bisomi {ll~ahi {lr~aHoma`ni {lr~aHiymi";

fn unicode(buckwalter: &str) -> String {
    ArabicText::from_buckwalter(buckwalter).to_unicode()
}

fn record(number: usize, name: &str, bismillah: Option<&str>, verses: &[&str]) -> ChapterRecord {
    ChapterRecord {
        number,
        name: unicode(name),
        bismillah: bismillah.map(unicode),
        verses: verses
            .iter()
            .enumerate()
            .map(|(index, text)| VerseRecord::new(index + 1, unicode(text)))
            .collect(),
    }
}

fn records() -> Vec<ChapterRecord> {
    vec![
        record(1, "{lofaAtiHap", None, &FATIHA),
        record(2, "{lobaqarap", Some(BISMILLAH), &["Al^m^", "*a`lika {lokita`bu"]),
    ]
}

fn document() -> Document {
    Document::from_records(&records()).unwrap()
}

#[test]
fn test_chapter_counts() {
    let document = document();
    let fatiha = document.chapter(1).unwrap();
    assert_eq!(fatiha.verse_count(), 7);
    assert_eq!(fatiha.token_count(), 29);

    let per_verse: Vec<_> = fatiha.verses().map(|v| v.token_count()).collect();
    assert_eq!(per_verse, [4, 4, 2, 3, 4, 3, 9]);

    assert_eq!(document.chapter_count(), 2);
    assert_eq!(document.verse_count(), 9);
    assert_eq!(document.token_count(), 29 + 1 + 2);
}

#[test]
fn test_verse_text() {
    let document = document();
    for (index, expected) in FATIHA.iter().enumerate() {
        let verse = document.verse(1, index + 1).unwrap();
        assert_eq!(verse.to_buckwalter(), *expected);
    }
    assert_eq!(
        document.verse(1, 1).unwrap().to_string(),
        "(1:1) bisomi {ll~ahi {lr~aHoma`ni {lr~aHiymi"
    );
}

#[test]
fn test_first_verse_tokens() {
    let document = document();
    let verse = document.verse(1, 1).unwrap();
    let tokens: Vec<Vec<String>> = verse
        .tokens()
        .map(|token| token.text().iter().map(|c| c.to_simple_encoding()).collect())
        .collect();

    assert_eq!(
        tokens,
        vec![
            vec!["Ba + Kasra", "Seen + Sukun", "Meem + Kasra"],
            vec!["Alif + HamzatWasl", "Lam", "Lam + Fatha + Shadda", "Ha + Kasra"],
            vec![
                "Alif + HamzatWasl",
                "Lam",
                "Ra + Fatha + Shadda",
                "HHa + Sukun",
                "Meem + Fatha",
                "AlifKhanjareeya",
                "Noon + Kasra",
            ],
            vec![
                "Alif + HamzatWasl",
                "Lam",
                "Ra + Fatha + Shadda",
                "HHa + Kasra",
                "Ya",
                "Meem + Kasra",
            ],
        ]
    );
}

#[test]
fn test_token_lookup() {
    let document = document();
    let location: Location = "(1:7:9)".parse().unwrap();
    let token = document.token_at(&location).unwrap();
    assert_eq!(token.to_buckwalter(), "{lD~aA^l~iyna");
    assert_eq!(token.chapter_number(), 1);
    assert_eq!(token.verse_number(), 7);
    assert_eq!(token.token_number(), 9);
    assert_eq!(token.to_string(), unicode("{lD~aA^l~iyna"));
}

#[test]
fn test_enumerate_tokens() {
    let document = document();
    let mut count = 0;
    let mut previous: Option<Location> = None;
    for token in document.tokens() {
        let location = token.location();
        if let Some(previous) = previous {
            assert!(previous < location);
        }
        if location.token_number() == 1 && location.verse_number() == 1 {
            assert_eq!(previous.map_or(0, |l| l.chapter_number()) + 1, location.chapter_number());
        }
        previous = Some(location);
        count += 1;
    }
    assert_eq!(count, document.token_count());
}

#[test]
fn test_bismillah() {
    let document = document();
    assert!(document.chapter(1).unwrap().bismillah().is_none());
    let bismillah = document.chapter(2).unwrap().bismillah().unwrap();
    assert_eq!(bismillah.to_buckwalter(), BISMILLAH);
    assert_eq!(document.chapter(2).unwrap().name().to_buckwalter(), "{lobaqarap");
}

#[test]
fn test_invalid_addresses() {
    let document = document();
    assert_eq!(
        document.chapter(0),
        Err(OrthographyError::InvalidChapterNumber { number: 0 })
    );
    assert_eq!(
        document.chapter(115),
        Err(OrthographyError::InvalidChapterNumber { number: 115 })
    );
    assert_eq!(
        document.verse(1, 8),
        Err(OrthographyError::InvalidVerseNumber { chapter: 1, verse: 8 })
    );
    assert_eq!(
        document.token(1, 3, 3),
        Err(OrthographyError::InvalidTokenNumber {
            chapter: 1,
            verse: 3,
            token: 3
        })
    );
}

#[test]
fn test_strict_records_reject_unknown_units() {
    let mut records = records();
    records[1].verses[0].text.push('x');
    let position = records[1].verses[0].text.chars().count() - 1;

    assert!(Document::from_records(&records).is_ok());
    assert_eq!(
        Document::from_records_with(&records, DecodeMode::Strict),
        Err(OrthographyError::Encoding(EncodingError::UnknownUnit {
            unit: 'x',
            position
        }))
    );
}

#[test]
fn test_misnumbered_verse_record() {
    let mut record = record(1, "{lofaAtiHap", None, &FATIHA);
    record.verses[3].number = 5;
    assert_eq!(
        Chapter::from_record(&record),
        Err(OrthographyError::InvalidVerseNumber { chapter: 1, verse: 5 })
    );
}

#[test]
fn test_chapter_record_out_of_range() {
    let record = record(115, "{lofaAtiHap", None, &[]);
    assert_eq!(
        Chapter::from_record(&record),
        Err(OrthographyError::InvalidChapterNumber { number: 115 })
    );
}
