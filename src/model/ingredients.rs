use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    HighRisk,
    MediumRisk,
    LowRisk,
}

/// A catalog ingredient found in the label text or ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RiskFinding {
    pub ingredient: String,
    pub warning: String,
    pub tier: RiskTier,
}

/// Matched ingredients grouped by tier, each in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HarmfulIngredients {
    pub high_risk: Vec<RiskFinding>,
    pub medium_risk: Vec<RiskFinding>,
    pub low_risk: Vec<RiskFinding>,
}

impl HarmfulIngredients {
    pub fn tier(&self, tier: RiskTier) -> &[RiskFinding] {
        match tier {
            RiskTier::HighRisk => &self.high_risk,
            RiskTier::MediumRisk => &self.medium_risk,
            RiskTier::LowRisk => &self.low_risk,
        }
    }

    pub fn push(&mut self, finding: RiskFinding) {
        match finding.tier {
            RiskTier::HighRisk => self.high_risk.push(finding),
            RiskTier::MediumRisk => self.medium_risk.push(finding),
            RiskTier::LowRisk => self.low_risk.push(finding),
        }
    }

    pub fn total(&self) -> usize {
        self.high_risk.len() + self.medium_risk.len() + self.low_risk.len()
    }
}
