use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    SuspiciousKeywordsTitle,
    SuspiciousKeywordsDesc,
    PoorGrammar,
    MissingDescription,
    SuspiciousSalary,
    SuspiciousCompany,
    MissingCompany,
    HighSalaryJuniorRole,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::SuspiciousKeywordsTitle => "suspicious_keywords_title",
            Flag::SuspiciousKeywordsDesc => "suspicious_keywords_desc",
            Flag::PoorGrammar => "poor_grammar",
            Flag::MissingDescription => "missing_description",
            Flag::SuspiciousSalary => "suspicious_salary",
            Flag::SuspiciousCompany => "suspicious_company",
            Flag::MissingCompany => "missing_company",
            Flag::HighSalaryJuniorRole => "high_salary_junior_role",
        }
    }
}

/// Result of analyzing one listing. Flags are category-level and
/// deduplicated in insertion order; reasons keep rule evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub score: u32,
    pub level: RiskLevel,
    pub flags: Vec<Flag>,
    pub reasons: Vec<String>,
}

impl Verdict {
    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }
}
