use serde::{Deserialize, Serialize};

/// Cloud or SaaS provider a connection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorType {
    #[serde(rename = "AWS")]
    Aws,
    Azure,
    #[serde(rename = "EntraID")]
    EntraId,
    #[serde(rename = "GCP")]
    Gcp,
    #[serde(other)]
    Unknown,
}

/// Pass/fail state of a finding as computed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConformanceStatus {
    Passed,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Ordered from least to most severe. Levels this client does not know
/// sort below `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl SeverityLevel {
    fn rank(self) -> u8 {
        match self {
            SeverityLevel::Unknown => 0,
            SeverityLevel::None => 1,
            SeverityLevel::Low => 2,
            SeverityLevel::Medium => 3,
            SeverityLevel::High => 4,
            SeverityLevel::Critical => 5,
        }
    }
}

impl PartialOrd for SeverityLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SeverityLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
    #[serde(other)]
    Unknown,
}

/// Offset pagination used by the query-string list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page_size: u32,
    pub page_number: u32,
}

impl Page {
    pub fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size,
            page_number,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(20, 1)
    }
}
