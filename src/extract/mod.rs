use crate::models::ListingRecord;

/// Delay between a DOM mutation and re-analysis; the scheduling itself is
/// the embedding context's job.
pub const ANALYSIS_DEBOUNCE_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    LinkedIn,
    Indeed,
    Monster,
    BuiltIn,
    Glassdoor,
    ZipRecruiter,
}

impl Site {
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::LinkedIn => "linkedin",
            Site::Indeed => "indeed",
            Site::Monster => "monster",
            Site::BuiltIn => "builtin",
            Site::Glassdoor => "glassdoor",
            Site::ZipRecruiter => "ziprecruiter",
        }
    }
}

/// CSS selectors used to pull listing fields out of a job page. Several
/// alternatives per field; the first that resolves wins.
pub struct SelectorSet {
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub salary: &'static str,
    pub location: &'static str,
}

pub const LINKEDIN_SELECTORS: SelectorSet = SelectorSet {
    title: ".job-details-jobs-unified-top-card__job-title a, .job-details-jobs-unified-top-card__job-title h1, .jobs-unified-top-card__job-title a",
    company: ".job-details-jobs-unified-top-card__company-name a, .jobs-unified-top-card__company-name a",
    description: ".job-details-jobs-unified-top-card__job-description, .jobs-description__content, .jobs-box__html-content",
    salary: ".job-details-jobs-unified-top-card__job-insight-view-model-secondary, .jobs-unified-top-card__job-insight",
    location: ".job-details-jobs-unified-top-card__bullet, .jobs-unified-top-card__bullet",
};

pub const INDEED_SELECTORS: SelectorSet = SelectorSet {
    title: "[data-testid=\"jobsearch-JobInfoHeader-title\"], h1[data-testid=\"jobsearch-JobInfoHeader-title\"]",
    company: "[data-testid=\"inlineHeader-companyName\"] a, [data-testid=\"jobsearch-InlineCompanyRating\"] a, .jobsearch-CompanyReview--heading",
    description: "#jobDescriptionText, [data-testid=\"jobsearch-jobDescriptionText\"]",
    salary: "[data-testid=\"jobsearch-JobMetadataHeader-item\"], .jobsearch-JobMetadataHeader-item",
    location: "[data-testid=\"job-location\"], .jobsearch-JobInfoHeader-subtitle",
};

/// Detect which supported job site a URL belongs to.
pub fn detect_site(url: &str) -> Option<Site> {
    let url_lower = url.trim().to_lowercase();

    if url_lower.contains("linkedin.com") {
        Some(Site::LinkedIn)
    } else if url_lower.contains("indeed.com") {
        Some(Site::Indeed)
    } else if url_lower.contains("monster.com") {
        Some(Site::Monster)
    } else if url_lower.contains("builtin.com") {
        Some(Site::BuiltIn)
    } else if url_lower.contains("glassdoor.com") {
        Some(Site::Glassdoor)
    } else if url_lower.contains("ziprecruiter.com") {
        Some(Site::ZipRecruiter)
    } else {
        None
    }
}

/// Selector set for a site, if one ships. Sites beyond LinkedIn and Indeed
/// are detected but have no selectors yet.
pub fn selectors_for(site: Site) -> Option<&'static SelectorSet> {
    match site {
        Site::LinkedIn => Some(&LINKEDIN_SELECTORS),
        Site::Indeed => Some(&INDEED_SELECTORS),
        _ => None,
    }
}

/// Whether a URL points at an individual job listing rather than a search
/// or landing page.
pub fn is_job_page(url: &str) -> bool {
    let url_lower = url.trim().to_lowercase();
    match detect_site(&url_lower) {
        Some(Site::LinkedIn) => url_lower.contains("/jobs/"),
        Some(Site::Indeed) => url_lower.contains("/viewjob"),
        _ => false,
    }
}

/// Collapse whitespace runs and trim, the normalization applied to every
/// scraped field before it reaches the analyzer.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build a record from raw scraped field text.
pub fn record_from_raw(
    title: &str,
    company: &str,
    description: &str,
    salary: &str,
    location: &str,
) -> ListingRecord {
    ListingRecord {
        title: normalize_text(title),
        company: normalize_text(company),
        description: normalize_text(description),
        salary: normalize_text(salary),
        location: normalize_text(location),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  Data\n  Entry \t Clerk "), "Data Entry Clerk");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_record_from_raw_normalizes_fields() {
        let record = record_from_raw(" Clerk ", "Acme\nCorp", "", " $40,000  a year ", "Remote");
        assert_eq!(record.title, "Clerk");
        assert_eq!(record.company, "Acme Corp");
        assert_eq!(record.salary, "$40,000 a year");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_uppercase_url_detection() {
        assert_eq!(
            detect_site("HTTPS://WWW.LINKEDIN.COM/jobs/view/123"),
            Some(Site::LinkedIn)
        );
    }
}
