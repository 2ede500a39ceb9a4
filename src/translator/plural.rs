/// Plural form selection for numerus entries.
///
/// Each rule maps a count to the index of the `<numerusform>` to use. Forms
/// are ordered the way Qt Linguist orders them for the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// A single form (Japanese, Chinese, Korean, ...).
    Invariant,
    /// `1` vs. everything else (English, German, Dutch, ...).
    OneOther,
    /// `0` and `1` vs. everything else (French, Brazilian Portuguese).
    ZeroOneOther,
    /// `1`, `2..=4`, other (Czech, Slovak).
    Czech,
    /// `1`, few, many (Polish).
    Polish,
    /// Ends in 1, ends in 2..=4, other; teens excluded (Russian, Ukrainian, ...).
    Slavic,
}

impl PluralRule {
    /// Rule for a language code such as `cs`, `pt_BR` or `zh-TW`.
    pub fn for_language(language: &str) -> Self {
        let normalized = language.replace('-', "_").to_lowercase();
        let primary = normalized.split('_').next().unwrap_or_default();
        match primary {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" => PluralRule::Invariant,
            "fr" => PluralRule::ZeroOneOther,
            "pt" if normalized == "pt_br" => PluralRule::ZeroOneOther,
            "cs" | "sk" => PluralRule::Czech,
            "pl" => PluralRule::Polish,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::Slavic,
            _ => PluralRule::OneOther,
        }
    }

    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::Invariant => 1,
            PluralRule::OneOther | PluralRule::ZeroOneOther => 2,
            PluralRule::Czech | PluralRule::Polish | PluralRule::Slavic => 3,
        }
    }

    pub fn index(&self, n: u64) -> usize {
        let (mod10, mod100) = (n % 10, n % 100);
        let few = (2..=4).contains(&mod10) && !(12..=14).contains(&mod100);
        match self {
            PluralRule::Invariant => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::ZeroOneOther => usize::from(n > 1),
            PluralRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if few {
                    1
                } else {
                    2
                }
            }
            PluralRule::Slavic => {
                if mod10 == 1 && mod100 != 11 {
                    0
                } else if few {
                    1
                } else {
                    2
                }
            }
        }
    }
}
