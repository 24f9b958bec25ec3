use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ClinicalError;
use crate::services::scoring::calculate_bmi;

// ==============================================================================
// PATIENT INPUT
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlcoholConsumption {
    None,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalActivity {
    Sedentary,
    Light,
    Moderate,
    Active,
}

/// Blood pressure in mmHg.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: u32,
    pub diastolic: u32,
}

impl BloodPressure {
    /// True when either reading is strictly above its limit.
    pub fn exceeds(&self, systolic: u32, diastolic: u32) -> bool {
        self.systolic > systolic || self.diastolic > diastolic
    }
}

/// Lipid panel in mg/dL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LipidPanel {
    pub hdl: f64,
    pub ldl: f64,
    pub total_cholesterol: f64,
    pub triglycerides: f64,
}

/// One patient's measurements at one point in time.
///
/// The JSON shape matches the dashboard's patient records, where the lipid
/// panel lives under the `vitals` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientVitals {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub blood_pressure: BloodPressure,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    /// Fasting glucose, mg/dL.
    pub glucose: f64,
    #[serde(rename = "vitals")]
    pub lipids: LipidPanel,
    pub smoking_status: bool,
    pub alcohol_consumption: AlcoholConsumption,
    pub physical_activity: PhysicalActivity,
}

impl PatientVitals {
    pub fn bmi(&self) -> f64 {
        calculate_bmi(self.weight, self.height)
    }

    /// Check the preconditions the scoring functions rely on.
    ///
    /// The engine itself never calls this; callers run it before handing
    /// records to [`crate::HealthAnalyzer`].
    pub fn validate(&self) -> Result<(), ClinicalError> {
        if self.id.trim().is_empty() {
            return Err(ClinicalError::InvalidVitals("id cannot be empty".to_string()));
        }

        if self.age == 0 {
            return Err(ClinicalError::InvalidVitals("age must be positive".to_string()));
        }

        if self.blood_pressure.systolic == 0 || self.blood_pressure.diastolic == 0 {
            return Err(ClinicalError::InvalidVitals(format!(
                "blood pressure must be positive, got {}/{}",
                self.blood_pressure.systolic, self.blood_pressure.diastolic
            )));
        }

        let measurements = [
            ("weight", self.weight),
            ("height", self.height),
            ("glucose", self.glucose),
            ("hdl", self.lipids.hdl),
            ("ldl", self.lipids.ldl),
            ("totalCholesterol", self.lipids.total_cholesterol),
            ("triglycerides", self.lipids.triglycerides),
        ];

        for (field, value) in measurements {
            if !value.is_finite() || value <= 0.0 {
                return Err(ClinicalError::InvalidVitals(format!(
                    "{} must be a positive number, got {}",
                    field, value
                )));
            }
        }

        Ok(())
    }
}

// ==============================================================================
// SCORES AND CLASSIFICATION
// ==============================================================================

/// Composite and per-domain scores, each in 0..=100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthScore {
    pub overall: u8,
    pub cardiovascular: u8,
    pub metabolic: u8,
    pub lifestyle: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Normal,
    PotentialRisk,
    HighRisk,
}

impl RiskLevel {
    pub fn from_overall(overall: u8) -> Self {
        match overall {
            75.. => RiskLevel::Normal,
            50..=74 => RiskLevel::PotentialRisk,
            _ => RiskLevel::HighRisk,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Normal => "Patient is in good health with minimal risk factors",
            RiskLevel::PotentialRisk => {
                "Patient shows some concerning indicators that require monitoring"
            }
            RiskLevel::HighRisk => "Patient has multiple risk factors requiring immediate attention",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Normal => write!(f, "normal"),
            RiskLevel::PotentialRisk => write!(f, "potential-risk"),
            RiskLevel::HighRisk => write!(f, "high-risk"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskCategory {
    pub level: RiskLevel,
    pub description: String,
}

// ==============================================================================
// RISKS AND RECOMMENDATIONS
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Probability {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FutureRisk {
    pub condition: String,
    pub probability: Probability,
    pub timeframe: String,
    pub description: String,
}

impl FutureRisk {
    pub(crate) fn new(
        condition: &str,
        probability: Probability,
        timeframe: &str,
        description: &str,
    ) -> Self {
        Self {
            condition: condition.to_string(),
            probability,
            timeframe: timeframe.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthRecommendation {
    pub category: String,
    pub priority: Priority,
    pub recommendation: String,
}

impl HealthRecommendation {
    pub(crate) fn new(category: &str, priority: Priority, recommendation: &str) -> Self {
        Self {
            category: category.to_string(),
            priority,
            recommendation: recommendation.to_string(),
        }
    }
}

// ==============================================================================
// LIFESTYLE PROGRAMS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleProgram {
    pub id: String,
    pub name: String,
    pub description: String,
    pub target_conditions: Vec<String>,
    pub duration: String,
}

impl LifestyleProgram {
    pub fn targets_any(&self, tags: &[ConditionTag]) -> bool {
        self.target_conditions
            .iter()
            .any(|condition| tags.iter().any(|tag| tag.as_str() == condition))
    }
}

/// Condition keywords derived from a patient's vitals and matched against
/// [`LifestyleProgram::target_conditions`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionTag {
    Hypertension,
    CardiovascularRisk,
    HighCholesterol,
    Diabetes,
    Prediabetes,
    MetabolicSyndrome,
    Obesity,
    Overweight,
    Smoking,
    RespiratoryIssues,
    AlcoholDependency,
    LiverHealth,
    MetabolicIssues,
    SedentaryLifestyle,
    GeneralWellness,
    Prevention,
}

impl ConditionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionTag::Hypertension => "hypertension",
            ConditionTag::CardiovascularRisk => "cardiovascular-risk",
            ConditionTag::HighCholesterol => "high-cholesterol",
            ConditionTag::Diabetes => "diabetes",
            ConditionTag::Prediabetes => "prediabetes",
            ConditionTag::MetabolicSyndrome => "metabolic-syndrome",
            ConditionTag::Obesity => "obesity",
            ConditionTag::Overweight => "overweight",
            ConditionTag::Smoking => "smoking",
            ConditionTag::RespiratoryIssues => "respiratory-issues",
            ConditionTag::AlcoholDependency => "alcohol-dependency",
            ConditionTag::LiverHealth => "liver-health",
            ConditionTag::MetabolicIssues => "metabolic-issues",
            ConditionTag::SedentaryLifestyle => "sedentary-lifestyle",
            ConditionTag::GeneralWellness => "general-wellness",
            ConditionTag::Prevention => "prevention",
        }
    }
}

impl fmt::Display for ConditionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==============================================================================
// ANALYSIS OUTPUT
// ==============================================================================

/// Which analyzer produced a [`PatientAnalysis`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisSource {
    RuleEngine,
    AiModel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientAnalysis {
    pub patient_id: String,
    pub patient_name: String,
    pub health_score: HealthScore,
    pub risk_category: RiskCategory,
    pub future_risks: Vec<FutureRisk>,
    pub recommendations: Vec<HealthRecommendation>,
    pub recommended_programs: Vec<LifestyleProgram>,
    pub analysis_date: DateTime<Utc>,
    pub source: AnalysisSource,
}
