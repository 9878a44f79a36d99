//! Milestone catalog.
//!
//! Definitions are static reference data: the built-in set ships with the
//! crate, and a deployment may replace it with a YAML file. Every
//! definition is validated when a catalog is constructed, so services can
//! rely on `typical_week <= late_start_week <= red_flag_week`.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::domain::models::milestone::{MilestoneDefinition, MilestoneDefinitionError};

#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneCatalog {
    definitions: Vec<MilestoneDefinition>,
}

static BUILTIN_CATALOG: Lazy<MilestoneCatalog> = Lazy::new(|| MilestoneCatalog {
    definitions: builtin_definitions(),
});

impl MilestoneCatalog {
    /// The catalog shipped with the app
    pub fn builtin() -> &'static MilestoneCatalog {
        &BUILTIN_CATALOG
    }

    /// Build a catalog, validating every definition and rejecting duplicate ids
    pub fn from_definitions(
        definitions: Vec<MilestoneDefinition>,
    ) -> Result<Self, MilestoneDefinitionError> {
        let mut seen = HashSet::new();
        for definition in &definitions {
            definition.validate()?;
            if !seen.insert(definition.id.as_str()) {
                return Err(MilestoneDefinitionError::DuplicateId(definition.id.clone()));
            }
        }
        Ok(Self { definitions })
    }

    /// Load a catalog from a YAML list of definitions
    pub fn load_yaml(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read milestone catalog {}", path.display()))?;
        let definitions: Vec<MilestoneDefinition> = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse milestone catalog {}", path.display()))?;
        let catalog = Self::from_definitions(definitions)?;

        info!("Loaded {} milestone definitions from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&MilestoneDefinition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    pub fn definitions(&self) -> &[MilestoneDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

struct Thresholds {
    typical: u32,
    late: u32,
    red_flag: u32,
}

fn definition(
    id: &str,
    name: &str,
    description: &str,
    weeks: Thresholds,
    badges: (&str, &str),
    late_parent_copy: &str,
    red_flag_copy: &str,
) -> MilestoneDefinition {
    let (early_badge, normal_badge) = badges;
    MilestoneDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        typical_week: weeks.typical,
        late_start_week: weeks.late,
        red_flag_week: weeks.red_flag,
        early_badge_name: Some(early_badge.to_string()),
        early_badge_copy: Some(format!("{} arrived ahead of schedule!", name)),
        normal_badge_name: Some(normal_badge.to_string()),
        normal_badge_copy: Some(format!("{} right on time.", name)),
        late_parent_copy: late_parent_copy.to_string(),
        red_flag_title: None,
        red_flag_copy: red_flag_copy.to_string(),
    }
}

fn builtin_definitions() -> Vec<MilestoneDefinition> {
    vec![
        definition(
            "social_smile",
            "Social smile",
            "Smiles back when you smile or talk to them",
            Thresholds {
                typical: 6,
                late: 10,
                red_flag: 12,
            },
            ("Early Smiler", "Sunshine Smile"),
            "Some babies take a little longer to smile socially. Keep talking, singing and making faces together.",
            "Not smiling at people by 3 months is worth mentioning to your pediatrician.",
        ),
        definition(
            "head_control",
            "Holds head steady",
            "Holds head steady without support when held upright",
            Thresholds {
                typical: 16,
                late: 20,
                red_flag: 24,
            },
            ("Strong Neck Star", "Steady Head"),
            "Plenty of supervised tummy time helps build neck strength.",
            "Head lag beyond 6 months should be checked by a doctor.",
        ),
        definition(
            "rolls_over",
            "Rolls over",
            "Rolls from tummy to back",
            Thresholds {
                typical: 20,
                late: 26,
                red_flag: 30,
            },
            ("Rolling Pioneer", "Roll Master"),
            "Give your baby floor time with toys just out of reach to encourage rolling.",
            "If your baby is not rolling in either direction by 7 months, talk to your doctor.",
        ),
        definition(
            "sits_without_support",
            "Sits without support",
            "Sits steadily on the floor without using hands for support",
            Thresholds {
                typical: 26,
                late: 36,
                red_flag: 40,
            },
            ("Early Sitter", "Sitting Pretty"),
            "Practice supported sitting with cushions around your baby.",
            "Not sitting without support by 9 months is a reason to see your pediatrician.",
        ),
        definition(
            "babbles",
            "Babbles",
            "Makes repeated consonant sounds like \"ba-ba\" or \"da-da\"",
            Thresholds {
                typical: 26,
                late: 36,
                red_flag: 40,
            },
            ("Little Chatterbox", "Babble Buddy"),
            "Talk back to your baby's sounds and pause to let them answer.",
            "No babbling by 9 months should be discussed with your doctor, including a hearing check.",
        ),
        definition(
            "crawls",
            "Crawls",
            "Moves forward on hands and knees",
            Thresholds {
                typical: 39,
                late: 52,
                red_flag: 56,
            },
            ("Speedy Crawler", "On The Move"),
            "Some babies scoot or skip crawling entirely. Keep encouraging floor play.",
            "If your baby is not moving around on their own by 13 months, check with your doctor.",
        ),
        definition(
            "pulls_to_stand",
            "Pulls to stand",
            "Pulls up to standing using furniture",
            Thresholds {
                typical: 39,
                late: 52,
                red_flag: 60,
            },
            ("Early Climber", "Standing Tall"),
            "Sturdy furniture and low surfaces give your baby safe places to practice.",
            "Not bearing weight on legs by 14 months is worth raising with your pediatrician.",
        ),
        definition(
            "first_words",
            "First words",
            "Says at least one word with meaning, like \"mama\" or \"dada\"",
            Thresholds {
                typical: 52,
                late: 65,
                red_flag: 78,
            },
            ("Early Talker", "First Words"),
            "Name everyday objects and read together daily.",
            "No words by 18 months is a reason to talk to your doctor.",
        ),
        definition(
            "walks_independently",
            "Walks independently",
            "Takes several steps without holding on",
            Thresholds {
                typical: 56,
                late: 70,
                red_flag: 78,
            },
            ("Early Walker", "First Steps"),
            "Let your baby cruise along furniture and practice barefoot.",
            "Not walking by 18 months should be checked by your pediatrician.",
        ),
    ]
}
