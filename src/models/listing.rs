use serde::{Deserialize, Serialize};

/// Text fields extracted from one job posting. All fields are free text;
/// absence is an empty string, never a missing value, so every scan has a
/// uniform no-signal case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingRecord {
    pub title: String,
    pub company: String,
    pub description: String,
    pub salary: String,
    pub location: String,
}
