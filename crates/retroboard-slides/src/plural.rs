//! Russian count pluralization for slide value texts.

/// The countable nouns appearing on slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NounCategory {
    Votes,
    Commits,
}

/// Three spellings of a counted word: for quantities ending in 1 (teens
/// excluded), in 2–4 (teens excluded), and everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRule {
    pub one: String,
    pub two: String,
    pub five: String,
}

impl PluralRule {
    pub fn new(one: &str, two: &str, five: &str) -> Self {
        Self {
            one: one.into(),
            two: two.into(),
            five: five.into(),
        }
    }
}

/// The injectable word-form table consumed by the slide builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub votes: PluralRule,
    pub commits: PluralRule,
}

impl Lexicon {
    /// The built-in Russian word forms.
    pub fn russian() -> Self {
        Self {
            votes: PluralRule::new("голос", "голоса", "голосов"),
            commits: PluralRule::new("коммит", "коммита", "коммитов"),
        }
    }

    pub fn rule(&self, category: NounCategory) -> &PluralRule {
        match category {
            NounCategory::Votes => &self.votes,
            NounCategory::Commits => &self.commits,
        }
    }

    pub fn pluralize(&self, amount: i64, category: NounCategory) -> String {
        pluralize(amount, self.rule(category), false)
    }

    /// Like [`Lexicon::pluralize`], with a forced leading "+" on strictly
    /// positive amounts.
    pub fn pluralize_signed(&self, amount: i64, category: NounCategory) -> String {
        pluralize(amount, self.rule(category), true)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::russian()
    }
}

/// Render `"<count> <word form>"`. The rendered count keeps the actual
/// (possibly negative) value; form selection uses the absolute value's
/// last two digits.
pub fn pluralize(amount: i64, rule: &PluralRule, force_sign: bool) -> String {
    let rendered = if force_sign && amount > 0 {
        format!("+{amount}")
    } else {
        amount.to_string()
    };

    let tail = amount.unsigned_abs() % 100;
    let form = match (tail % 10, tail) {
        (1, t) if t != 11 => &rule.one,
        (2..=4, t) if !(12..=14).contains(&t) => &rule.two,
        _ => &rule.five,
    };
    format!("{rendered} {form}")
}
