use super::patterns::TITLE_KEYWORDS;
use super::ScanResult;
use crate::models::Flag;

/// Scan the title against the weighted keyword table. Every match
/// contributes independently; a title can trip several phrases.
pub fn analyze_title(title: &str) -> ScanResult {
    let mut out = ScanResult::default();
    let title_lower = title.to_lowercase();

    for keyword in TITLE_KEYWORDS {
        if title_lower.contains(keyword.phrase) {
            out.bump(keyword.weight);
            out.flag(Flag::SuspiciousKeywordsTitle);
            out.reason(format!("Suspicious keyword in title: \"{}\"", keyword.phrase));
        }
    }

    out
}
