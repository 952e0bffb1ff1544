//! Claim verdict models shared by the claim analysis and scoring endpoints

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Weighting applied when a claim turns out to be misleading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
}

/// Outcome of checking one detected marketing claim against the label text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClaimVerdict {
    /// Claim label, e.g. "Sugar Free"
    #[serde(alias = "text")]
    pub claim: String,
    #[serde(default = "default_true")]
    pub found: bool,
    /// False when the label text contradicts the claim
    #[serde(default = "default_true")]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

fn default_true() -> bool {
    true
}

impl ClaimVerdict {
    pub fn verified(claim: &str) -> Self {
        Self {
            claim: claim.to_string(),
            found: true,
            verified: true,
            issue: None,
            severity: None,
        }
    }

    pub fn misleading(claim: &str, issue: &str, severity: Severity) -> Self {
        Self {
            claim: claim.to_string(),
            found: true,
            verified: false,
            issue: Some(issue.to_string()),
            severity: Some(severity),
        }
    }
}
