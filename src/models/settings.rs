use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Conservative,
    Balanced,
    Aggressive,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Conservative => "conservative",
            AnalysisMode::Balanced => "balanced",
            AnalysisMode::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(AnalysisMode::Conservative),
            "balanced" => Ok(AnalysisMode::Balanced),
            "aggressive" => Ok(AnalysisMode::Aggressive),
            other => Err(format!("unknown analysis mode: {}", other)),
        }
    }
}

/// User-facing settings. The analysis mode selects a preset profile; only
/// the conservative profile ships, and the engine's rule tables are not
/// user-configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub extension_enabled: bool,
    pub show_warnings: bool,
    pub analysis_mode: AnalysisMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extension_enabled: true,
            show_warnings: true,
            analysis_mode: AnalysisMode::Conservative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.extension_enabled);
        assert!(settings.show_warnings);
        assert_eq!(settings.analysis_mode, AnalysisMode::Conservative);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"extension_enabled": false}"#).unwrap();
        assert!(!settings.extension_enabled);
        assert!(settings.show_warnings);
        assert_eq!(settings.analysis_mode, AnalysisMode::Conservative);
    }

    #[test]
    fn test_mode_parses_case_insensitively() {
        assert_eq!(
            "Aggressive".parse::<AnalysisMode>().unwrap(),
            AnalysisMode::Aggressive
        );
        assert!("paranoid".parse::<AnalysisMode>().is_err());
    }
}
