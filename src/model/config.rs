use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "LABEL_SAFETY_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_SERVICE_NAME: &str = "label-safety";
const MAX_WEIGHT: i32 = 100;

/// Penalty band for a nutrient that should be limited
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NutrientLimit {
    /// Values strictly above this are "high"
    pub high: f64,
    /// Values strictly above this are "very high"
    pub very_high: f64,
    pub high_penalty: i32,
    pub very_high_penalty: i32,
}

/// Bonus for a nutrient worth having more of
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NutrientBonus {
    pub above: f64,
    pub bonus: i32,
}

/// Nutrition threshold table used for the nutrition sub-score
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NutritionThresholds {
    pub sodium: NutrientLimit,
    pub sugar: NutrientLimit,
    pub fat: NutrientLimit,
    pub protein_bonus: NutrientBonus,
}

impl Default for NutritionThresholds {
    fn default() -> Self {
        Self {
            sodium: NutrientLimit {
                high: 600.0,
                very_high: 1200.0,
                high_penalty: 15,
                very_high_penalty: 25,
            },
            sugar: NutrientLimit {
                high: 15.0,
                very_high: 22.5,
                high_penalty: 15,
                very_high_penalty: 25,
            },
            fat: NutrientLimit {
                high: 17.5,
                very_high: 21.0,
                high_penalty: 10,
                very_high_penalty: 20,
            },
            protein_bonus: NutrientBonus {
                above: 15.0,
                bonus: 10,
            },
        }
    }
}

/// Per-finding deductions for each ingredient risk tier
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IngredientPenalties {
    pub high: i32,
    pub medium: i32,
    pub low: i32,
}

impl Default for IngredientPenalties {
    fn default() -> Self {
        Self {
            high: 15,
            medium: 8,
            low: 3,
        }
    }
}

/// Scoring weights, fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub nutrition: NutritionThresholds,
    pub ingredient_penalties: IngredientPenalties,
    /// Deduction per claim that was not verified
    pub claim_penalty: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            nutrition: NutritionThresholds::default(),
            ingredient_penalties: IngredientPenalties::default(),
            claim_penalty: 10,
        }
    }
}

impl ScoringConfig {
    /// Reject tables that would make the scoring pipeline incoherent
    pub fn validate(&self) -> Result<(), String> {
        let limits = [
            ("sodium", &self.nutrition.sodium),
            ("sugar", &self.nutrition.sugar),
            ("fat", &self.nutrition.fat),
        ];
        for (name, limit) in limits {
            if !limit.high.is_finite() || !limit.very_high.is_finite() {
                return Err(format!("{name}: thresholds must be finite numbers"));
            }
            if limit.high > limit.very_high {
                return Err(format!(
                    "{name}: high threshold {} exceeds very_high threshold {}",
                    limit.high, limit.very_high
                ));
            }
            check_weight(&format!("{name}.high_penalty"), limit.high_penalty)?;
            check_weight(&format!("{name}.very_high_penalty"), limit.very_high_penalty)?;
        }

        let bonus = &self.nutrition.protein_bonus;
        if !bonus.above.is_finite() {
            return Err("protein_bonus: threshold must be a finite number".to_string());
        }
        check_weight("protein_bonus.bonus", bonus.bonus)?;

        let penalties = &self.ingredient_penalties;
        check_weight("ingredient_penalties.high", penalties.high)?;
        check_weight("ingredient_penalties.medium", penalties.medium)?;
        check_weight("ingredient_penalties.low", penalties.low)?;
        check_weight("claim_penalty", self.claim_penalty)?;

        Ok(())
    }
}

/// Penalties and bonuses must lie in `0..=100`
fn check_weight(name: &str, value: i32) -> Result<(), String> {
    if (0..=MAX_WEIGHT).contains(&value) {
        Ok(())
    } else {
        Err(format!("{name}: {value} is outside 0..={MAX_WEIGHT}"))
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub service_name: String,
    pub scoring: ScoringConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            scoring: ScoringConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = Self::load_config_file(&config_path).unwrap_or_default();

        Self {
            service_name: file
                .service_name
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            scoring: file.scoring,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_config_file(path, &contents),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    fn parse_config_file(path: &Path, contents: &str) -> Option<ConfigFile> {
        let contents = contents.trim();
        if contents.is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Some(ConfigFile::default());
        }

        match serde_yaml::from_str(contents) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration from file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
