use super::patterns::{
    COMPANY_FLAG_WEIGHT, GENERIC_COMPANY_NAMES, MISSING_COMPANY_WEIGHT, NameMatch,
    PLACEHOLDER_COMPANY_RE,
};
use super::ScanResult;
use crate::models::Flag;

/// Scan the company name for generic/placeholder patterns. A blank field
/// is its own signal, separate from a suspicious one.
pub fn analyze_company(company: &str) -> ScanResult {
    let mut out = ScanResult::default();
    let trimmed = company.trim();

    if trimmed.is_empty() {
        out.bump(MISSING_COMPANY_WEIGHT);
        out.flag(Flag::MissingCompany);
        out.reason("Company name missing");
        return out;
    }

    let lower = trimmed.to_lowercase();
    let mut distinct = 0u32;

    for entry in GENERIC_COMPANY_NAMES {
        let hit = match entry.matches {
            NameMatch::Contains => lower.contains(entry.pattern),
            NameMatch::Equals => lower == entry.pattern,
            NameMatch::EndsWith => lower.ends_with(entry.pattern),
        };
        if hit {
            distinct += 1;
            out.reason(format!("Generic company name: \"{}\"", entry.pattern));
        }
    }

    if PLACEHOLDER_COMPANY_RE.is_match(trimmed) {
        distinct += 1;
        out.reason(format!("Placeholder company name: \"{}\"", trimmed));
    }

    if looks_like_initials(trimmed) {
        distinct += 1;
        out.reason(format!("Initials-only company name: \"{}\"", trimmed));
    }

    if distinct > 0 {
        out.bump(COMPANY_FLAG_WEIGHT * distinct);
        out.flag(Flag::SuspiciousCompany);
    }

    out
}

/// A very short all-caps name like "TT" or "A&B" gives nothing to verify.
fn looks_like_initials(name: &str) -> bool {
    !name.is_empty()
        && name.chars().count() <= 3
        && !name.contains(' ')
        && name.chars().any(|c| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_uppercase() || c == '.' || c == '&')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_company_no_signal() {
        let out = analyze_company("Mozilla Corporation");
        assert_eq!(out.score, 0);
        assert!(out.flags.is_empty());
    }

    #[test]
    fn test_blank_company() {
        let out = analyze_company("   ");
        assert_eq!(out.score, 20);
        assert_eq!(out.flags, vec![Flag::MissingCompany]);
    }

    #[test]
    fn test_generic_substring() {
        let out = analyze_company("Confidential employer");
        assert_eq!(out.score, 15);
        assert_eq!(out.flags, vec![Flag::SuspiciousCompany]);
    }

    #[test]
    fn test_suffix_match() {
        let out = analyze_company("Apex Marketing Group");
        assert_eq!(out.score, 15);
        assert!(out.reasons.iter().any(|r| r.contains("marketing group")));
    }

    #[test]
    fn test_suffix_must_be_at_end() {
        let out = analyze_company("Marketing Group Analytics Ltd");
        assert_eq!(out.score, 0);
    }

    #[test]
    fn test_work_from_home_only_as_full_name() {
        assert_eq!(analyze_company("Work From Home").score, 15);
        assert_eq!(analyze_company("Work From Home Staffing Ltd").score, 0);
    }

    #[test]
    fn test_placeholder_prefix() {
        let out = analyze_company("Your Company LLC");
        assert_eq!(out.score, 15);
        assert!(out.reasons.iter().any(|r| r.contains("Placeholder")));
    }

    #[test]
    fn test_initials_only() {
        assert_eq!(analyze_company("TT").score, 15);
        assert_eq!(analyze_company("A&B").score, 15);
        assert_eq!(analyze_company("IBM").score, 15);
        assert_eq!(analyze_company("abc").score, 0);
        assert_eq!(analyze_company("A B").score, 0);
    }

    #[test]
    fn test_multiple_patterns_stack() {
        let out = analyze_company("Undisclosed Financial Services");
        assert_eq!(out.score, 30);
        assert_eq!(out.flags, vec![Flag::SuspiciousCompany]);
        assert_eq!(out.reasons.len(), 2);
    }
}
