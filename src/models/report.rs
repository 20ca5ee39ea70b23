use crate::models::Verdict;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One stored analysis, kept in the local history (newest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub url: String,
    pub job_title: String,
    pub company: String,
    pub verdict: Verdict,
    pub timestamp_ms: u64,
}

impl AnalysisRecord {
    pub fn new(
        url: impl Into<String>,
        job_title: impl Into<String>,
        company: impl Into<String>,
        verdict: Verdict,
    ) -> Self {
        Self {
            url: url.into(),
            job_title: job_title.into(),
            company: company.into(),
            verdict,
            timestamp_ms: now_millis(),
        }
    }
}

/// A user-filed report about a suspicious listing. `synced` stays false
/// until a backend sync exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReport {
    pub id: String,
    pub url: String,
    pub job_title: String,
    pub company: String,
    pub report_type: String,
    pub user_comment: String,
    pub timestamp_ms: u64,
    pub synced: bool,
}

impl UserReport {
    pub fn new(
        url: impl Into<String>,
        job_title: impl Into<String>,
        company: impl Into<String>,
        report_type: impl Into<String>,
        user_comment: impl Into<String>,
    ) -> Self {
        let (millis, nanos) = now_parts();
        Self {
            id: format!("report_{}_{:x}", millis, nanos),
            url: url.into(),
            job_title: job_title.into(),
            company: company.into(),
            report_type: report_type.into(),
            user_comment: user_comment.into(),
            timestamp_ms: millis,
            synced: false,
        }
    }
}

fn now_millis() -> u64 {
    now_parts().0
}

fn now_parts() -> (u64, u32) {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_millis() as u64, d.subsec_nanos()))
        .unwrap_or((0, 0))
}
