//! Claim detection: which catalog claims does the text make?

use super::catalog::{ClaimCatalog, ClaimRule};

/// Detects claim language regardless of whether the claim holds up
pub struct PatternMatcher<'a> {
    catalog: &'a ClaimCatalog,
}

impl<'a> PatternMatcher<'a> {
    pub fn new(catalog: &'a ClaimCatalog) -> Self {
        Self { catalog }
    }

    /// Rules whose pattern occurs anywhere in `text`, in catalog order
    pub fn detect(&self, text: &str) -> Vec<&'a ClaimRule> {
        self.catalog
            .rules()
            .iter()
            .filter(|rule| rule.pattern.is_match(text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Vec<&'static str> {
        let catalog = ClaimCatalog::builtin();
        PatternMatcher::new(&catalog)
            .detect(text)
            .into_iter()
            .map(|r| r.label)
            .collect()
    }

    #[test]
    fn test_case_insensitive_detection() {
        assert_eq!(detect("100% NATURAL fruit bar"), vec!["100% Natural"]);
        assert_eq!(detect("100 % natural"), vec!["100% Natural"]);
    }

    #[test]
    fn test_space_or_hyphen_variants() {
        assert_eq!(detect("Sugar-Free gum"), vec!["Sugar Free"]);
        assert_eq!(detect("sugar free gum"), vec!["Sugar Free"]);
        assert_eq!(detect("LOW-FAT yogurt"), vec!["Low Fat"]);
        assert_eq!(detect("high protein bar"), vec!["High Protein"]);
    }

    #[test]
    fn test_word_boundaries() {
        assert!(detect("inorganically grown").is_empty());
        assert!(detect("unhealthy habits").is_empty());
        assert_eq!(detect("Organic oats"), vec!["Organic"]);
    }

    #[test]
    fn test_multiple_claims_in_catalog_order() {
        assert_eq!(
            detect("Whole grain, heart-healthy, ORGANIC and no added sugar"),
            vec!["Organic", "Healthy", "Heart Healthy", "No Added Sugar", "Whole Grain"]
        );
    }

    #[test]
    fn test_repeated_claim_reported_once() {
        assert_eq!(detect("organic! organic! organic!"), vec!["Organic"]);
    }

    #[test]
    fn test_no_claims() {
        assert!(detect("Salted crackers").is_empty());
        assert!(detect("").is_empty());
    }
}
