use super::patterns::{
    HIGH_YEARLY_SALARY, SALARY_FLAG_WEIGHT, UNREALISTIC_SALARY_RES, YEARLY_SALARY_RE,
};
use super::ScanResult;
use crate::models::Flag;

/// Scan the salary field. Four sub-checks fire independently; the
/// contribution scales with how many distinct ones fired, and a message is
/// never appended twice.
pub fn analyze_salary(salary: &str) -> ScanResult {
    let mut out = ScanResult::default();
    let lower = salary.to_lowercase();
    let mut distinct = 0u32;

    if lower.contains("commission only") || lower.contains("commission-based") {
        distinct += 1;
        out.reason_once("Commission-only compensation");
    }

    if lower.contains("competitive") && !salary.chars().any(|c| c.is_ascii_digit()) {
        distinct += 1;
        out.reason_once("Vague salary with no figures");
    }

    if let Some((amount, figure)) = parse_yearly_salary(salary) {
        if amount >= HIGH_YEARLY_SALARY {
            distinct += 1;
            out.reason_once(format!("Unusually high yearly salary: ${}", figure));
        }
    }

    if UNREALISTIC_SALARY_RES.iter().any(|re| re.is_match(salary)) {
        distinct += 1;
        out.reason_once("Unrealistic salary claim");
    }

    if distinct > 0 {
        out.bump(SALARY_FLAG_WEIGHT * distinct);
        out.flag(Flag::SuspiciousSalary);
    }

    out
}

/// Parse an explicit yearly figure like "$95,000 a year". Returns the
/// amount and the figure as written.
pub fn parse_yearly_salary(text: &str) -> Option<(u64, String)> {
    let captures = YEARLY_SALARY_RE.captures(text)?;
    let figure = captures.get(1)?.as_str();
    let amount: u64 = figure.replace(',', "").parse().ok()?;
    Some((amount, figure.to_string()))
}
