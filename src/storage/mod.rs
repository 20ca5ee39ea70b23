use crate::models::{AnalysisRecord, Settings, UserReport};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Analyses kept in the local history before old ones are dropped.
pub const MAX_STORED_ANALYSES: usize = 50;

/// How many reports a listing query returns.
pub const REPORT_LIST_LIMIT: usize = 10;

const SETTINGS_FILE: &str = "settings.json";
const ANALYSES_FILE: &str = "analyses.json";
const REPORTS_FILE: &str = "reports.json";

/// JSON-file store for settings, analysis history, and user reports.
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The per-user default location, `~/.config/redflag`.
    pub fn open_default() -> Result<Self> {
        let home = std::env::var("HOME").context("HOME not set")?;
        Ok(Self::new(PathBuf::from(home).join(".config").join("redflag")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stored settings, or defaults when nothing has been saved yet.
    pub fn settings(&self) -> Result<Settings> {
        Ok(self.read_json(SETTINGS_FILE)?.unwrap_or_default())
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write_json(SETTINGS_FILE, settings)
    }

    /// Prepend an analysis to the history, dropping anything past the cap.
    pub fn record_analysis(&self, record: AnalysisRecord) -> Result<()> {
        let mut analyses: Vec<AnalysisRecord> = self.read_json(ANALYSES_FILE)?.unwrap_or_default();
        analyses.insert(0, record);
        analyses.truncate(MAX_STORED_ANALYSES);
        self.write_json(ANALYSES_FILE, &analyses)
    }

    /// Full stored history, newest first.
    pub fn recent_analyses(&self) -> Result<Vec<AnalysisRecord>> {
        Ok(self.read_json(ANALYSES_FILE)?.unwrap_or_default())
    }

    pub fn save_report(&self, report: UserReport) -> Result<()> {
        let mut reports: Vec<UserReport> = self.read_json(REPORTS_FILE)?.unwrap_or_default();
        reports.insert(0, report);
        self.write_json(REPORTS_FILE, &reports)
    }

    /// Newest reports, at most [`REPORT_LIST_LIMIT`].
    pub fn recent_reports(&self) -> Result<Vec<UserReport>> {
        let mut reports: Vec<UserReport> = self.read_json(REPORTS_FILE)?.unwrap_or_default();
        reports.truncate(REPORT_LIST_LIMIT);
        Ok(reports)
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let value = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("creating {}", self.root.display()))?;
        let path = self.root.join(name);
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
