use crate::models::{AnalysisRecord, ListingRecord, RiskLevel, Settings, UserReport, Verdict};
use colored::*;

pub fn print_verdict(record: &ListingRecord, verdict: &Verdict) {
    print_header(record);
    print_summary(verdict);
    print_reasons(verdict);
}

fn print_header(record: &ListingRecord) {
    println!("{}", "┌─────────────────────────────────────────────────────────────┐".bright_black());

    let title = if record.title.is_empty() { "Unknown listing" } else { record.title.as_str() };
    println!("│  Listing: {:<50}│", title.bold());

    let company = if record.company.is_empty() { "?" } else { record.company.as_str() };
    let location = if record.location.is_empty() { "?" } else { record.location.as_str() };
    println!("│  Company: {:<24} │ Location: {:<12}│", company, location);

    if !record.salary.is_empty() {
        println!("│  Salary: {:<51}│", record.salary);
    }

    println!("{}", "└─────────────────────────────────────────────────────────────┘".bright_black());
    println!();
}

fn print_summary(verdict: &Verdict) {
    let headline = match verdict.level {
        RiskLevel::High => format!("⚠ High risk job listing detected (Score: {})", verdict.score)
            .red()
            .bold(),
        RiskLevel::Medium => {
            format!("⚠ Medium risk job listing (Score: {})", verdict.score).yellow()
        }
        RiskLevel::Low => {
            format!("✔ No significant red flags detected (Score: {})", verdict.score).green()
        }
    };
    println!("  {}", headline);

    if !verdict.flags.is_empty() {
        let flags: Vec<&str> = verdict.flags.iter().map(|f| f.as_str()).collect();
        println!("  Flags: {}", flags.join(", ").bright_black());
    }

    println!();
}

fn print_reasons(verdict: &Verdict) {
    if verdict.reasons.is_empty() {
        return;
    }

    println!("{}", "── Reasons ──────────────────────────────────────────────────".bright_black());

    for reason in &verdict.reasons {
        for (i, line) in textwrap::wrap(reason, 58).iter().enumerate() {
            if i == 0 {
                println!("  • {}", line);
            } else {
                println!("    {}", line.bright_black());
            }
        }
    }

    println!();
}

pub fn print_reports(reports: &[UserReport]) {
    if reports.is_empty() {
        println!("No reports filed yet.");
        return;
    }

    println!("{}", "── Recent Reports ───────────────────────────────────────────".bright_black());

    for report in reports {
        println!("  {} {}", report.report_type.yellow(), report.job_title.bold());
        println!("    {} │ {}", report.company, report.url.bright_black());
        if !report.user_comment.is_empty() {
            for line in textwrap::wrap(&report.user_comment, 58) {
                println!("    {}", line.bright_black());
            }
        }
        println!();
    }
}

pub fn print_history(analyses: &[AnalysisRecord]) {
    if analyses.is_empty() {
        println!("No analyses recorded yet.");
        return;
    }

    println!("{}", "── Recent Analyses ──────────────────────────────────────────".bright_black());

    for record in analyses {
        let level = match record.verdict.level {
            RiskLevel::High => record.verdict.level.as_str().red().bold(),
            RiskLevel::Medium => record.verdict.level.as_str().yellow(),
            RiskLevel::Low => record.verdict.level.as_str().green(),
        };
        println!(
            "  {:6} {:>4}  {}",
            level,
            record.verdict.score,
            record.job_title.bold()
        );
        println!("    {} │ {}", record.company, record.url.bright_black());
        println!();
    }
}

pub fn print_settings(settings: &Settings) {
    println!("{}", "── Settings ─────────────────────────────────────────────────".bright_black());
    println!("  extension_enabled: {}", settings.extension_enabled);
    println!("  show_warnings:     {}", settings.show_warnings);
    println!("  analysis_mode:     {}", settings.analysis_mode);
    println!();
}
