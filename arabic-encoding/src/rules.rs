use crate::glyph::Glyph;
use crate::options::EncodingOptions;
use crate::table::EncodingTable;
use arabic_text::{ArabicCharacter, CharacterType, DiacriticType};
use std::cmp::Reverse;
use std::sync::OnceLock;

/// What a combination rule can see while encoding a character.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'t> {
    pub table: &'t EncodingTable,
    pub options: EncodingOptions,
}

/// The result of a successful combination: the composed glyph to write, and
/// the diacritic it absorbed, if any.
///
/// A consumed diacritic is not written again after the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    pub glyph: Glyph,
    pub consumed: Option<DiacriticType>,
}

impl Combination {
    const fn consuming(glyph: Glyph, diacritic: DiacriticType) -> Self {
        Self {
            glyph,
            consumed: Some(diacritic),
        }
    }

    const fn keeping(glyph: Glyph) -> Self {
        Self {
            glyph,
            consumed: None,
        }
    }
}

/// A rule collapsing a letter and one of its diacritics into a composed glyph.
///
/// Rules are tried in priority order and the first match wins, so a rule only
/// needs to reject the characters that a higher priority rule should not have
/// let through.
pub trait CombinationRule: Send + Sync {
    /// Returns the combination for `character`, or `None` if this rule does
    /// not apply.
    fn try_combine(
        &self,
        character: &ArabicCharacter<'_>,
        ctx: &RuleContext<'_>,
    ) -> Option<Combination>;

    /// Higher priority rules are tried first. Default priority is 0.
    fn priority(&self) -> i32 {
        0
    }

    /// Quick check on the letter alone.
    ///
    /// - `Some(true)`  - this rule might apply
    /// - `Some(false)` - this rule definitely does not apply
    /// - `None`        - unknown, call [`try_combine`](Self::try_combine)
    #[inline]
    fn quick_check(&self, character_type: CharacterType) -> Option<bool> {
        let _ = character_type;
        None
    }

    fn name(&self) -> &'static str;
}

/// Alif + Maddah, only when enabled and the scheme has a glyph for it.
pub struct AlifWithMaddahRule;

impl CombinationRule for AlifWithMaddahRule {
    fn try_combine(
        &self,
        character: &ArabicCharacter<'_>,
        ctx: &RuleContext<'_>,
    ) -> Option<Combination> {
        let applies = ctx.options.combine_alif_with_maddah
            && ctx.table.contains_glyph(Glyph::AlifWithMaddah)
            && character.has_diacritic(DiacriticType::Maddah);
        applies.then(|| Combination::consuming(Glyph::AlifWithMaddah, DiacriticType::Maddah))
    }

    fn priority(&self) -> i32 {
        70
    }

    fn quick_check(&self, character_type: CharacterType) -> Option<bool> {
        Some(character_type == CharacterType::Alif)
    }

    fn name(&self) -> &'static str {
        "alif-with-maddah"
    }
}

/// Alif + Hamza above, unless the Alif is a khanjareeya.
pub struct AlifWithHamzaAboveRule;

impl CombinationRule for AlifWithHamzaAboveRule {
    fn try_combine(
        &self,
        character: &ArabicCharacter<'_>,
        _ctx: &RuleContext<'_>,
    ) -> Option<Combination> {
        let applies = character.has_diacritic(DiacriticType::HamzaAbove)
            && !character.has_diacritic(DiacriticType::AlifKhanjareeya);
        applies.then(|| {
            Combination::consuming(Glyph::AlifWithHamzaAbove, DiacriticType::HamzaAbove)
        })
    }

    fn priority(&self) -> i32 {
        60
    }

    fn quick_check(&self, character_type: CharacterType) -> Option<bool> {
        Some(character_type == CharacterType::Alif)
    }

    fn name(&self) -> &'static str {
        "alif-with-hamza-above"
    }
}

/// Waw or Ya carrying Hamza above.
pub struct HamzaSeatRule {
    letter: CharacterType,
    glyph: Glyph,
    priority: i32,
}

impl HamzaSeatRule {
    pub const fn waw() -> Self {
        Self {
            letter: CharacterType::Waw,
            glyph: Glyph::WawWithHamzaAbove,
            priority: 50,
        }
    }

    pub const fn ya() -> Self {
        Self {
            letter: CharacterType::Ya,
            glyph: Glyph::YaWithHamzaAbove,
            priority: 30,
        }
    }
}

impl CombinationRule for HamzaSeatRule {
    fn try_combine(
        &self,
        character: &ArabicCharacter<'_>,
        _ctx: &RuleContext<'_>,
    ) -> Option<Combination> {
        character
            .has_diacritic(DiacriticType::HamzaAbove)
            .then(|| Combination::consuming(self.glyph, DiacriticType::HamzaAbove))
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn quick_check(&self, character_type: CharacterType) -> Option<bool> {
        Some(character_type == self.letter)
    }

    fn name(&self) -> &'static str {
        match self.letter {
            CharacterType::Waw => "waw-with-hamza-above",
            _ => "ya-with-hamza-above",
        }
    }
}

/// Alif marks that only exist as part of a composed glyph: Hamza below,
/// Alif khanjareeya and Hamzat wasl. The mark is left set but has no
/// standalone glyph, so it is never written twice.
pub struct AlifMarkRule {
    mark: DiacriticType,
    glyph: Glyph,
    priority: i32,
}

impl AlifMarkRule {
    pub const fn hamza_below() -> Self {
        Self {
            mark: DiacriticType::HamzaBelow,
            glyph: Glyph::AlifWithHamzaBelow,
            priority: 40,
        }
    }

    pub const fn khanjareeya() -> Self {
        Self {
            mark: DiacriticType::AlifKhanjareeya,
            glyph: Glyph::AlifKhanjareeya,
            priority: 20,
        }
    }

    pub const fn hamzat_wasl() -> Self {
        Self {
            mark: DiacriticType::HamzatWasl,
            glyph: Glyph::AlifWithHamzatWasl,
            priority: 10,
        }
    }
}

impl CombinationRule for AlifMarkRule {
    fn try_combine(
        &self,
        character: &ArabicCharacter<'_>,
        _ctx: &RuleContext<'_>,
    ) -> Option<Combination> {
        character
            .has_diacritic(self.mark)
            .then(|| Combination::keeping(self.glyph))
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn quick_check(&self, character_type: CharacterType) -> Option<bool> {
        Some(character_type == CharacterType::Alif)
    }

    fn name(&self) -> &'static str {
        match self.mark {
            DiacriticType::HamzaBelow => "alif-with-hamza-below",
            DiacriticType::AlifKhanjareeya => "alif-khanjareeya",
            _ => "alif-with-hamzat-wasl",
        }
    }
}

/// Combination rules in priority order.
pub struct RuleSet {
    rules: Vec<Box<dyn CombinationRule>>,
}

impl RuleSet {
    /// Creates a rule set, sorting rules by priority (highest first).
    pub fn new(rules: Vec<Box<dyn CombinationRule>>) -> Self {
        let mut sorted_rules = rules;
        sorted_rules.sort_by_key(|rule| Reverse(rule.priority()));
        Self {
            rules: sorted_rules,
        }
    }

    /// The seven combinations shared by the Unicode and Buckwalter schemes.
    pub fn standard() -> &'static RuleSet {
        static STANDARD: OnceLock<RuleSet> = OnceLock::new();
        STANDARD.get_or_init(|| {
            RuleSet::new(vec![
                Box::new(AlifWithMaddahRule),
                Box::new(AlifWithHamzaAboveRule),
                Box::new(HamzaSeatRule::waw()),
                Box::new(AlifMarkRule::hamza_below()),
                Box::new(HamzaSeatRule::ya()),
                Box::new(AlifMarkRule::khanjareeya()),
                Box::new(AlifMarkRule::hamzat_wasl()),
            ])
        })
    }

    /// Finds the first rule that combines `character`.
    pub fn apply(
        &self,
        character: &ArabicCharacter<'_>,
        ctx: &RuleContext<'_>,
    ) -> Option<Combination> {
        let character_type = character.character_type()?;

        for rule in &self.rules {
            if let Some(false) = rule.quick_check(character_type) {
                continue;
            }
            if let Some(combination) = rule.try_combine(character, ctx) {
                tracing::trace!(rule = rule.name(), glyph = ?combination.glyph, "combined");
                return Some(combination);
            }
        }
        None
    }

    /// Rule names in the order they are tried.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
