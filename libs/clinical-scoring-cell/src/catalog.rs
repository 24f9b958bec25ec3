use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::ClinicalError;
use crate::models::LifestyleProgram;

/// Ordered, immutable list of lifestyle programs.
///
/// Order matters: the program recommender returns matches in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramCatalog {
    programs: Vec<LifestyleProgram>,
}

impl ProgramCatalog {
    /// Build a catalog, rejecting blank or duplicate ids and programs that
    /// target nothing.
    pub fn new(programs: Vec<LifestyleProgram>) -> Result<Self, ClinicalError> {
        let mut seen = HashSet::new();

        for program in &programs {
            if program.id.trim().is_empty() {
                return Err(ClinicalError::InvalidCatalog(format!(
                    "program {:?} has an empty id",
                    program.name
                )));
            }
            if !seen.insert(program.id.as_str()) {
                return Err(ClinicalError::InvalidCatalog(format!(
                    "duplicate program id {}",
                    program.id
                )));
            }
            if program.target_conditions.is_empty() {
                return Err(ClinicalError::InvalidCatalog(format!(
                    "program {} has no target conditions",
                    program.id
                )));
            }
        }

        Ok(Self { programs })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ClinicalError> {
        let programs: Vec<LifestyleProgram> = serde_json::from_str(json)?;
        Self::new(programs)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClinicalError> {
        let path = path.as_ref();
        debug!("Loading program catalog from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|source| ClinicalError::CatalogIo {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json_str(&contents)?;
        info!("Loaded {} lifestyle programs from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The dashboard's default seven programs.
    pub fn standard() -> Self {
        let program = |id: &str, name: &str, description: &str, targets: &[&str], duration: &str| {
            LifestyleProgram {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                target_conditions: targets.iter().map(|t| t.to_string()).collect(),
                duration: duration.to_string(),
            }
        };

        Self {
            programs: vec![
                program(
                    "PROG001",
                    "Cardiovascular Health Program",
                    "Comprehensive program focusing on heart health through diet, exercise, and stress management",
                    &["hypertension", "high-cholesterol", "cardiovascular-risk"],
                    "12 weeks",
                ),
                program(
                    "PROG002",
                    "Diabetes Management Program",
                    "Specialized program for managing blood sugar levels through nutrition and lifestyle modifications",
                    &["diabetes", "prediabetes", "metabolic-syndrome"],
                    "16 weeks",
                ),
                program(
                    "PROG003",
                    "Weight Management & Nutrition",
                    "Personalized nutrition and weight loss program with meal planning and dietary guidance",
                    &["obesity", "overweight", "metabolic-syndrome"],
                    "12 weeks",
                ),
                program(
                    "PROG004",
                    "Smoking Cessation Program",
                    "Evidence-based program to help quit smoking with behavioral support and coping strategies",
                    &["smoking", "cardiovascular-risk", "respiratory-issues"],
                    "8 weeks",
                ),
                program(
                    "PROG005",
                    "Fitness & Physical Activity",
                    "Structured exercise program designed to improve cardiovascular fitness and overall health",
                    &["sedentary-lifestyle", "cardiovascular-risk", "obesity"],
                    "10 weeks",
                ),
                program(
                    "PROG006",
                    "Alcohol Reduction Program",
                    "Support program for reducing alcohol consumption and developing healthier habits",
                    &["alcohol-dependency", "liver-health", "metabolic-issues"],
                    "12 weeks",
                ),
                program(
                    "PROG007",
                    "Preventive Wellness Program",
                    "Holistic wellness program for maintaining good health and preventing chronic diseases",
                    &["general-wellness", "prevention"],
                    "8 weeks",
                ),
            ],
        }
    }

    pub fn programs(&self) -> &[LifestyleProgram] {
        &self.programs
    }

    pub fn iter(&self) -> impl Iterator<Item = &LifestyleProgram> {
        self.programs.iter()
    }

    pub fn find(&self, id: &str) -> Option<&LifestyleProgram> {
        self.programs.iter().find(|program| program.id == id)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl Default for ProgramCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
