pub mod company;
pub mod description;
pub mod patterns;
pub mod salary;
pub mod title;

use crate::models::{Flag, ListingRecord, RiskLevel, Verdict};
use patterns::{
    HIGH_RISK_THRESHOLD, HIGH_SALARY_JUNIOR_WEIGHT, JUNIOR_HIGH_SALARY, JUNIOR_TITLE_KEYWORDS,
    MEDIUM_RISK_THRESHOLD, SENIORITY_OVERRIDES,
};

/// Accumulator shared by the sub-scans. Flags are deduplicated on insert;
/// reasons keep their insertion order.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub score: u32,
    pub flags: Vec<Flag>,
    pub reasons: Vec<String>,
}

impl ScanResult {
    pub fn bump(&mut self, weight: u32) {
        self.score += weight;
    }

    pub fn flag(&mut self, flag: Flag) {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
    }

    pub fn reason(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    /// Append the reason only if an identical message is not already
    /// present. Used where a rule guards against repeats.
    pub fn reason_once(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        if !self.reasons.contains(&reason) {
            self.reasons.push(reason);
        }
    }

    fn merge(&mut self, other: ScanResult) {
        self.score += other.score;
        for flag in other.flags {
            self.flag(flag);
        }
        self.reasons.extend(other.reasons);
    }
}

/// Score a listing against the scam heuristics. Total over its input:
/// empty fields contribute no signal and no input can make it fail.
pub fn analyze_listing(record: &ListingRecord) -> Verdict {
    let mut total = ScanResult::default();

    total.merge(title::analyze_title(&record.title));
    total.merge(description::analyze_description(&record.description));
    total.merge(salary::analyze_salary(&record.salary));
    total.merge(company::analyze_company(&record.company));
    total.merge(junior_salary_correlation(&record.title, &record.salary));

    Verdict {
        score: total.score,
        level: level_for_score(total.score),
        flags: total.flags,
        reasons: total.reasons,
    }
}

pub fn level_for_score(score: u32) -> RiskLevel {
    if score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Cross-field rule: a junior-sounding title paired with a high explicit
/// yearly salary is a classic lure.
fn junior_salary_correlation(title: &str, salary: &str) -> ScanResult {
    let mut out = ScanResult::default();

    let title_lower = title.to_lowercase();
    let junior = JUNIOR_TITLE_KEYWORDS.iter().any(|k| title_lower.contains(k))
        && !SENIORITY_OVERRIDES.iter().any(|k| title_lower.contains(k));
    if !junior {
        return out;
    }

    if let Some((amount, _)) = salary::parse_yearly_salary(salary) {
        if amount >= JUNIOR_HIGH_SALARY {
            out.bump(HIGH_SALARY_JUNIOR_WEIGHT);
            out.flag(Flag::HighSalaryJuniorRole);
            out.reason(format!(
                "Junior-level title \"{}\" offering ${} per year",
                title.trim(),
                amount
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, company: &str, description: &str, salary: &str) -> ListingRecord {
        ListingRecord {
            title: title.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            salary: salary.to_string(),
            location: String::new(),
        }
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let verdict = analyze_listing(&ListingRecord::default());
        assert_eq!(verdict.score, 0);
        assert_eq!(verdict.level, RiskLevel::Low);
        assert!(verdict.flags.is_empty());
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level_for_score(0), RiskLevel::Low);
        assert_eq!(level_for_score(24), RiskLevel::Low);
        assert_eq!(level_for_score(25), RiskLevel::Medium);
        assert_eq!(level_for_score(49), RiskLevel::Medium);
        assert_eq!(level_for_score(50), RiskLevel::High);
        assert_eq!(level_for_score(500), RiskLevel::High);
    }

    #[test]
    fn test_junior_title_with_high_salary() {
        let verdict = analyze_listing(&record(
            "Customer Service Representative",
            "Acme Corp",
            "",
            "$95,000 a year",
        ));
        assert!(verdict.has_flag(Flag::HighSalaryJuniorRole));
    }

    #[test]
    fn test_seniority_override_cancels_junior() {
        let verdict = analyze_listing(&record(
            "Senior Customer Service Manager",
            "Acme Corp",
            "",
            "$95,000 a year",
        ));
        assert!(!verdict.has_flag(Flag::HighSalaryJuniorRole));
    }

    #[test]
    fn test_junior_salary_below_threshold_ignored() {
        let verdict = analyze_listing(&record(
            "Data Entry Clerk",
            "Acme Corp",
            "",
            "$45,000 a year",
        ));
        assert!(!verdict.has_flag(Flag::HighSalaryJuniorRole));
    }

    #[test]
    fn test_flags_are_deduplicated() {
        let verdict = analyze_listing(&record(
            "Easy Money Crypto Forex Urgent Hire",
            "Acme Corp",
            "",
            "",
        ));
        let title_flags = verdict
            .flags
            .iter()
            .filter(|f| **f == Flag::SuspiciousKeywordsTitle)
            .count();
        assert_eq!(title_flags, 1);
        assert!(verdict.reasons.len() >= 4);
    }
}
