//! Built-in marketing claim rules

use regex::Regex;

use crate::model::{Nutrient, Severity};

/// How a detected claim is checked against the rest of the label.
///
/// Each variant evaluates to `true` when the claim is misleading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verification {
    /// Any of the terms appears anywhere in the text
    ContainsAny(&'static [&'static str]),
    /// None of the terms appears anywhere in the text
    LacksAll(&'static [&'static str]),
    /// The stated nutrient value is strictly above the limit
    NutrientAbove(Nutrient, f64),
    /// The stated nutrient value is strictly below the minimum
    NutrientBelow(Nutrient, f64),
    /// The term appears inside the ingredients section
    IngredientsMention(&'static str),
}

/// A recognised marketing claim
#[derive(Debug, Clone)]
pub struct ClaimRule {
    pub label: &'static str,
    pub pattern: Regex,
    pub verification: Verification,
    pub issue: &'static str,
    pub severity: Severity,
}

struct RuleDef {
    label: &'static str,
    pattern: &'static str,
    verification: Verification,
    issue: &'static str,
    severity: Severity,
}

const RULES: &[RuleDef] = &[
    RuleDef {
        label: "100% Natural",
        pattern: r"\b100\s*%\s*natural\b",
        verification: Verification::ContainsAny(&["artificial", "preservative", "flavor"]),
        issue: "Contains artificial ingredients, flavors or preservatives",
        severity: Severity::High,
    },
    RuleDef {
        label: "Sugar Free",
        pattern: r"\bsugar[\s-]?free\b",
        verification: Verification::ContainsAny(&[
            "sugar",
            "maltodextrin",
            "dextrose",
            "fructose",
            "sucrose",
        ]),
        issue: "Contains sugar or hidden sugars",
        severity: Severity::High,
    },
    RuleDef {
        label: "Low Fat",
        pattern: r"\blow[\s-]?fat\b",
        verification: Verification::NutrientAbove(Nutrient::Fat, 10.0),
        issue: "Fat content too high for a low-fat claim",
        severity: Severity::Medium,
    },
    RuleDef {
        label: "High Protein",
        pattern: r"\bhigh[\s-]?protein\b",
        verification: Verification::NutrientBelow(Nutrient::Protein, 10.0),
        issue: "Protein content too low for a high-protein claim",
        severity: Severity::Medium,
    },
    RuleDef {
        label: "No Preservatives",
        pattern: r"\bno[\s-]+preservatives?\b",
        verification: Verification::ContainsAny(&[
            "preservative",
            "e211",
            "e202",
            "sodium benzoate",
            "potassium sorbate",
        ]),
        issue: "Preservatives listed on the label",
        severity: Severity::High,
    },
    RuleDef {
        label: "Organic",
        pattern: r"\borganic\b",
        verification: Verification::LacksAll(&["certified organic", "usda organic", "india organic"]),
        issue: "No organic certification mentioned",
        severity: Severity::Medium,
    },
    RuleDef {
        label: "Healthy",
        pattern: r"\bhealthy\b",
        verification: Verification::ContainsAny(&["sugar", "sodium", "palm oil", "artificial"]),
        issue: "Contains sugar, sodium, palm oil or artificial ingredients",
        severity: Severity::Medium,
    },
    RuleDef {
        label: "Heart Healthy",
        pattern: r"\bheart[\s-]?healthy\b",
        verification: Verification::NutrientAbove(Nutrient::Sodium, 400.0),
        issue: "Sodium content too high for a heart-healthy claim",
        severity: Severity::High,
    },
    RuleDef {
        label: "No Added Sugar",
        pattern: r"\bno[\s-]+added[\s-]+sugars?\b",
        verification: Verification::IngredientsMention("sugar"),
        issue: "Sugar appears in the ingredient list",
        severity: Severity::High,
    },
    RuleDef {
        label: "Whole Grain",
        pattern: r"\bwhole[\s-]?grains?\b",
        verification: Verification::ContainsAny(&["refined", "maida"]),
        issue: "Contains refined flour",
        severity: Severity::Medium,
    },
];

/// Ordered, immutable set of claim rules. Order drives output order.
#[derive(Debug, Clone)]
pub struct ClaimCatalog {
    rules: Vec<ClaimRule>,
}

impl ClaimCatalog {
    pub fn builtin() -> Self {
        let rules = RULES
            .iter()
            .map(|def| ClaimRule {
                label: def.label,
                pattern: Regex::new(&format!("(?i){}", def.pattern))
                    .expect("claim pattern is a valid regex"),
                verification: def.verification,
                issue: def.issue,
                severity: def.severity,
            })
            .collect();

        Self { rules }
    }

    pub fn rules(&self) -> &[ClaimRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for ClaimCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
