use super::patterns::{
    DESCRIPTION_RED_FLAGS, DESCRIPTION_RED_FLAG_WEIGHT, GRAMMAR_PATTERNS, GRAMMAR_SCORE_THRESHOLD,
    MIN_DESCRIPTION_CHARS, MISSING_DESCRIPTION_WEIGHT, POOR_GRAMMAR_WEIGHT,
};
use super::ScanResult;
use crate::models::Flag;

/// Scan the description body: formatting anomalies, red-flag phrases, and
/// a completeness check.
pub fn analyze_description(description: &str) -> ScanResult {
    let mut out = ScanResult::default();
    let lower = description.to_lowercase();

    let (total_matches, pattern_kinds) = grammar_score(description);
    if total_matches > GRAMMAR_SCORE_THRESHOLD {
        out.bump(POOR_GRAMMAR_WEIGHT);
        out.flag(Flag::PoorGrammar);
        out.reason(format!(
            "Poor formatting: {} kinds of anomalies detected",
            pattern_kinds
        ));
    }

    for phrase in DESCRIPTION_RED_FLAGS {
        if lower.contains(phrase) {
            out.bump(DESCRIPTION_RED_FLAG_WEIGHT);
            out.flag(Flag::SuspiciousKeywordsDesc);
            out.reason(format!("Suspicious phrase in description: \"{}\"", phrase));
        }
    }

    if description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        out.bump(MISSING_DESCRIPTION_WEIGHT);
        out.flag(Flag::MissingDescription);
        out.reason("Description very short or missing");
    }

    out
}

/// Total match count across all anomaly patterns, plus how many distinct
/// pattern kinds fired. Not grammar analysis, only surface checks.
fn grammar_score(text: &str) -> (usize, usize) {
    let mut total = 0;
    let mut kinds = 0;

    for (_, pattern) in GRAMMAR_PATTERNS.iter() {
        let matches = pattern.find_iter(text).count();
        if matches > 0 {
            total += matches;
            kinds += 1;
        }
    }

    let runs = char_runs(text, 4);
    if runs > 0 {
        total += runs;
        kinds += 1;
    }

    (total, kinds)
}

/// Count runs of the same non-whitespace character repeated at least
/// `min_len` times. The regex crate has no backreferences, so this check
/// is a plain scan.
fn char_runs(text: &str, min_len: usize) -> usize {
    let mut runs = 0;
    let mut current: Option<char> = None;
    let mut len = 0;

    for c in text.chars() {
        if Some(c) == current {
            len += 1;
            if len == min_len && !c.is_whitespace() {
                runs += 1;
            }
        } else {
            current = Some(c);
            len = 1;
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_TEXT: &str = "We are hiring a software engineer to join our platform team. \
        You will build and operate services, review designs, and mentor newer engineers. \
        The role is hybrid with two days on site each week.";

    #[test]
    fn test_clean_long_description_no_signal() {
        assert!(CLEAN_TEXT.chars().count() >= 150);
        let out = analyze_description(CLEAN_TEXT);
        assert_eq!(out.score, 0);
        assert!(out.flags.is_empty());
    }

    #[test]
    fn test_short_description_flagged() {
        let out = analyze_description("Great job, apply now.");
        assert_eq!(out.score, 10);
        assert_eq!(out.flags, vec![Flag::MissingDescription]);
    }

    #[test]
    fn test_empty_description_flagged() {
        let out = analyze_description("");
        assert!(out.flags.contains(&Flag::MissingDescription));
    }

    #[test]
    fn test_red_flag_phrase() {
        let text = format!("{} A small upfront fee covers your starter kit.", CLEAN_TEXT);
        let out = analyze_description(&text);
        assert!(out.flags.contains(&Flag::SuspiciousKeywordsDesc));
        assert_eq!(out.score, 20);
        assert!(out.reasons.iter().any(|r| r.contains("upfront fee")));
    }

    #[test]
    fn test_each_phrase_contributes() {
        let text = format!("{} Contact us on telegram. Investment required to start.", CLEAN_TEXT);
        let out = analyze_description(&text);
        assert_eq!(out.score, 40);
    }

    #[test]
    fn test_grammar_anomalies_trip_threshold() {
        let text = format!(
            "{} AMAZING!!! Earn 5000$ now!!! Why wait??? $$$",
            CLEAN_TEXT
        );
        let out = analyze_description(&text);
        assert!(out.flags.contains(&Flag::PoorGrammar));
    }

    #[test]
    fn test_few_anomalies_below_threshold() {
        let text = format!("{} Apply today!!", CLEAN_TEXT);
        let out = analyze_description(&text);
        assert!(!out.flags.contains(&Flag::PoorGrammar));
    }

    #[test]
    fn test_grammar_score_counts_kinds() {
        let (total, kinds) = grammar_score("WOW!!! this pays 500$ and then 900$ more!!!");
        assert!(total >= 4);
        assert!(kinds >= 2);
    }

    #[test]
    fn test_char_runs() {
        assert_eq!(char_runs("soooooon", 4), 1);
        assert_eq!(char_runs("normal text", 4), 0);
        assert_eq!(char_runs("aaaa bbbb", 4), 2);
        assert_eq!(char_runs("    indented", 4), 0);
    }
}
