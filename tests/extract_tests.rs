use redflag::extract::{detect_site, is_job_page, normalize_text, selectors_for, Site};

#[test]
fn test_detect_linkedin() {
    let url = "https://www.linkedin.com/jobs/view/3754802931/";
    assert_eq!(detect_site(url), Some(Site::LinkedIn));
}

#[test]
fn test_detect_indeed() {
    let url = "https://www.indeed.com/viewjob?jk=abc123";
    assert_eq!(detect_site(url), Some(Site::Indeed));
}

#[test]
fn test_detect_other_supported_sites() {
    assert_eq!(detect_site("https://www.monster.com/job-openings/x"), Some(Site::Monster));
    assert_eq!(detect_site("https://builtin.com/job/backend-engineer"), Some(Site::BuiltIn));
    assert_eq!(detect_site("https://www.glassdoor.com/job-listing/x"), Some(Site::Glassdoor));
    assert_eq!(detect_site("https://www.ziprecruiter.com/c/x/job/y"), Some(Site::ZipRecruiter));
}

#[test]
fn test_unsupported_site() {
    assert_eq!(detect_site("https://example.com/careers/123"), None);
}

#[test]
fn test_job_page_checks() {
    assert!(is_job_page("https://www.linkedin.com/jobs/view/3754802931/"));
    assert!(!is_job_page("https://www.linkedin.com/feed/"));
    assert!(is_job_page("https://www.indeed.com/viewjob?jk=abc123"));
    assert!(!is_job_page("https://www.indeed.com/q-engineer-jobs.html"));
    // Detected but not yet supported for extraction
    assert!(!is_job_page("https://www.monster.com/job-openings/x"));
}

#[test]
fn test_selectors_only_for_supported_sites() {
    assert!(selectors_for(Site::LinkedIn).is_some());
    assert!(selectors_for(Site::Indeed).is_some());
    assert!(selectors_for(Site::Glassdoor).is_none());
}

#[test]
fn test_normalize_is_idempotent() {
    let once = normalize_text("  Customer   Service\n Representative ");
    let twice = normalize_text(&once);
    assert_eq!(once, "Customer Service Representative");
    assert_eq!(once, twice);
}
