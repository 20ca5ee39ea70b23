// Rule tables for the risk analyzer. Kept as data so the rule set can be
// audited and tested rule-by-rule.

use once_cell::sync::Lazy;
use regex::Regex;

/// A phrase matched case-insensitively as a substring, with the score it
/// contributes per match.
pub struct WeightedPhrase {
    pub phrase: &'static str,
    pub weight: u32,
}

/// Soft phrases ("work from home", "no experience required") are weak
/// signals on their own and carry a lower weight than explicitly scammy
/// phrases.
pub const TITLE_KEYWORDS: &[WeightedPhrase] = &[
    WeightedPhrase { phrase: "make money fast", weight: 15 },
    WeightedPhrase { phrase: "work from home", weight: 5 },
    WeightedPhrase { phrase: "no experience required", weight: 5 },
    WeightedPhrase { phrase: "earn $", weight: 15 },
    WeightedPhrase { phrase: "guaranteed income", weight: 15 },
    WeightedPhrase { phrase: "easy money", weight: 15 },
    WeightedPhrase { phrase: "get rich", weight: 15 },
    WeightedPhrase { phrase: "financial freedom", weight: 15 },
    WeightedPhrase { phrase: "unlimited earning potential", weight: 15 },
    WeightedPhrase { phrase: "urgent hire", weight: 15 },
    WeightedPhrase { phrase: "immediate start", weight: 15 },
    WeightedPhrase { phrase: "bitcoin", weight: 15 },
    WeightedPhrase { phrase: "crypto", weight: 15 },
    WeightedPhrase { phrase: "forex", weight: 15 },
];

pub const DESCRIPTION_RED_FLAGS: &[&str] = &[
    "upfront fee",
    "investment required",
    "training fee",
    "telegram",
    "whatsapp contact",
    "must purchase equipment",
    "inventory fee",
];

pub const DESCRIPTION_RED_FLAG_WEIGHT: u32 = 20;

/// Surface formatting anomalies that read as sloppy or manipulative text.
/// Each entry is (kind, pattern); the grammar score is the total match
/// count across all kinds.
pub static GRAMMAR_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        ("repeated exclamation marks", Regex::new(r"!{2,}").unwrap()),
        ("repeated question marks", Regex::new(r"\?{2,}").unwrap()),
        ("repeated dollar signs", Regex::new(r"\$\$+").unwrap()),
        ("digit stuck to a dollar sign", Regex::new(r"\d\$").unwrap()),
        ("long all-caps run", Regex::new(r"\b[A-Z]{7,}\b").unwrap()),
        (
            "missing space after punctuation",
            Regex::new(r"[A-Za-z][,.;!?][A-Za-z]").unwrap(),
        ),
    ]
});

pub const GRAMMAR_SCORE_THRESHOLD: usize = 3;
pub const POOR_GRAMMAR_WEIGHT: u32 = 15;

/// Descriptions shorter than this (after trimming) count as missing.
pub const MIN_DESCRIPTION_CHARS: usize = 150;
pub const MISSING_DESCRIPTION_WEIGHT: u32 = 10;

/// Explicit yearly figure, e.g. "$95,000 a year" or "$120000/year".
pub static YEARLY_SALARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$\s*(\d{1,3}(?:,\d{3})+|\d+)\s*(?:per|a|/)\s*(?:year|yr|annum)").unwrap()
});

/// Rate claims no legitimate listing makes.
pub static UNREALISTIC_SALARY_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\$\d{4,}.*per\s+day").unwrap(),
        Regex::new(r"(?i)\$\d{3,}.*per\s+hour").unwrap(),
        Regex::new(r"(?i)earn up to \$\d{5,}").unwrap(),
        Regex::new(r"(?i)make \$\d{4,}.*(?:a|per)\s+week").unwrap(),
    ]
});

pub const SALARY_FLAG_WEIGHT: u32 = 10;
pub const HIGH_YEARLY_SALARY: u64 = 120_000;

pub enum NameMatch {
    Contains,
    Equals,
    EndsWith,
}

pub struct CompanyPattern {
    pub pattern: &'static str,
    pub matches: NameMatch,
}

/// Generic or placeholder company names, compared against the lower-cased
/// trimmed field.
pub const GENERIC_COMPANY_NAMES: &[CompanyPattern] = &[
    CompanyPattern { pattern: "confidential", matches: NameMatch::Contains },
    CompanyPattern { pattern: "private company", matches: NameMatch::Contains },
    CompanyPattern { pattern: "undisclosed", matches: NameMatch::Contains },
    CompanyPattern { pattern: "online opportunity", matches: NameMatch::Contains },
    CompanyPattern { pattern: "work from home", matches: NameMatch::Equals },
    CompanyPattern { pattern: "marketing group", matches: NameMatch::EndsWith },
    CompanyPattern { pattern: "financial services", matches: NameMatch::EndsWith },
    CompanyPattern { pattern: "global enterprises", matches: NameMatch::EndsWith },
    CompanyPattern { pattern: "solutions inc", matches: NameMatch::EndsWith },
];

pub static PLACEHOLDER_COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(anyhome|your company|global net|united consumers)").unwrap()
});

pub const COMPANY_FLAG_WEIGHT: u32 = 15;
pub const MISSING_COMPANY_WEIGHT: u32 = 20;

pub const JUNIOR_TITLE_KEYWORDS: &[&str] = &[
    "assistant",
    "clerk",
    "customer service",
    "representative",
    "support",
    "data entry",
    "receptionist",
    "admin",
];

/// Any of these cancels the junior classification regardless of position.
pub const SENIORITY_OVERRIDES: &[&str] = &[
    "executive",
    "senior",
    "manager",
    "director",
    "lead",
    "vp",
    "president",
    "chief",
    "principal",
    "specialist",
];

/// Yearly salary at or above this is suspicious for a junior-sounding role.
pub const JUNIOR_HIGH_SALARY: u64 = 80_000;
pub const HIGH_SALARY_JUNIOR_WEIGHT: u32 = 25;

pub const HIGH_RISK_THRESHOLD: u32 = 50;
pub const MEDIUM_RISK_THRESHOLD: u32 = 25;
