//! Strict ingestion of the LLM analyzer's JSON reply.
//!
//! The model is prompted to answer with a fixed JSON shape. Nothing in that
//! reply is trusted until it has been decoded into the typed payload below
//! and checked against the same invariants the rule engine guarantees.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::ProgramCatalog;
use crate::error::ClinicalError;
use crate::models::{
    AnalysisSource, FutureRisk, HealthRecommendation, HealthScore, LifestyleProgram, PatientAnalysis,
    PatientVitals, Priority, Probability, RiskCategory, RiskLevel,
};
use crate::services::programs::MAX_RECOMMENDED_PROGRAMS;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AiAnalysisPayload {
    pub health_score: AiHealthScore,
    pub risk_category: AiRiskCategory,
    pub future_risks: Vec<AiFutureRisk>,
    pub recommendations: Vec<AiRecommendation>,
    pub recommended_program_ids: Vec<String>,
}

/// Kept as `i64` so out-of-range numbers reach validation with their value
/// instead of failing inside serde.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AiHealthScore {
    pub overall: i64,
    pub cardiovascular: i64,
    pub metabolic: i64,
    pub lifestyle: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AiRiskCategory {
    pub level: RiskLevel,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AiFutureRisk {
    pub condition: String,
    pub probability: Probability,
    pub timeframe: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AiRecommendation {
    pub category: String,
    pub priority: Priority,
    pub recommendation: String,
}

impl AiHealthScore {
    fn validate(&self) -> Result<HealthScore, ClinicalError> {
        Ok(HealthScore {
            overall: checked_score("overall", self.overall)?,
            cardiovascular: checked_score("cardiovascular", self.cardiovascular)?,
            metabolic: checked_score("metabolic", self.metabolic)?,
            lifestyle: checked_score("lifestyle", self.lifestyle)?,
        })
    }
}

fn checked_score(name: &str, value: i64) -> Result<u8, ClinicalError> {
    u8::try_from(value)
        .ok()
        .filter(|score| *score <= 100)
        .ok_or_else(|| {
            ClinicalError::AiContract(format!("{} score {} is outside 0..=100", name, value))
        })
}

fn require_text(field: &str, index: usize, value: &str) -> Result<(), ClinicalError> {
    if value.trim().is_empty() {
        return Err(ClinicalError::AiContract(format!(
            "{}[{}] is blank",
            field, index
        )));
    }
    Ok(())
}

/// Decode the raw reply. Shape errors come back as
/// [`ClinicalError::Serialization`].
pub fn parse_ai_analysis(raw: &str) -> Result<AiAnalysisPayload, ClinicalError> {
    Ok(serde_json::from_str(raw)?)
}

/// Decode, validate and convert an AI reply into a [`PatientAnalysis`].
pub fn ingest_ai_analysis(
    raw: &str,
    patient: &PatientVitals,
    catalog: &ProgramCatalog,
    analysis_date: DateTime<Utc>,
) -> Result<PatientAnalysis, ClinicalError> {
    let payload = parse_ai_analysis(raw)?;
    payload.into_analysis(patient, catalog, analysis_date)
}

impl AiAnalysisPayload {
    pub fn into_analysis(
        self,
        patient: &PatientVitals,
        catalog: &ProgramCatalog,
        analysis_date: DateTime<Utc>,
    ) -> Result<PatientAnalysis, ClinicalError> {
        let health_score = self.health_score.validate()?;

        let expected_level = RiskLevel::from_overall(health_score.overall);
        if self.risk_category.level != expected_level {
            return Err(ClinicalError::AiContract(format!(
                "risk level {} does not match overall score {} (expected {})",
                self.risk_category.level, health_score.overall, expected_level
            )));
        }
        if self.risk_category.description.trim().is_empty() {
            return Err(ClinicalError::AiContract(
                "risk category description is blank".to_string(),
            ));
        }

        if self.future_risks.is_empty() {
            return Err(ClinicalError::AiContract("futureRisks is empty".to_string()));
        }
        for (index, risk) in self.future_risks.iter().enumerate() {
            require_text("futureRisks.condition", index, &risk.condition)?;
            require_text("futureRisks.timeframe", index, &risk.timeframe)?;
            require_text("futureRisks.description", index, &risk.description)?;
        }

        if self.recommendations.is_empty() {
            return Err(ClinicalError::AiContract("recommendations is empty".to_string()));
        }
        for (index, rec) in self.recommendations.iter().enumerate() {
            require_text("recommendations.category", index, &rec.category)?;
            require_text("recommendations.recommendation", index, &rec.recommendation)?;
        }

        let recommended_programs = self.resolve_programs(catalog)?;

        debug!(
            "Accepted AI analysis for patient {}: overall={} level={}",
            patient.id, health_score.overall, expected_level
        );

        Ok(PatientAnalysis {
            patient_id: patient.id.clone(),
            patient_name: patient.name.clone(),
            health_score,
            risk_category: RiskCategory {
                level: self.risk_category.level,
                description: self.risk_category.description,
            },
            future_risks: self
                .future_risks
                .into_iter()
                .map(|risk| FutureRisk {
                    condition: risk.condition,
                    probability: risk.probability,
                    timeframe: risk.timeframe,
                    description: risk.description,
                })
                .collect(),
            recommendations: self
                .recommendations
                .into_iter()
                .map(|rec| HealthRecommendation {
                    category: rec.category,
                    priority: rec.priority,
                    recommendation: rec.recommendation,
                })
                .collect(),
            recommended_programs,
            analysis_date,
            source: AnalysisSource::AiModel,
        })
    }

    /// Map program ids to catalog entries, in the order the model gave them.
    fn resolve_programs(
        &self,
        catalog: &ProgramCatalog,
    ) -> Result<Vec<LifestyleProgram>, ClinicalError> {
        if self.recommended_program_ids.len() > MAX_RECOMMENDED_PROGRAMS {
            return Err(ClinicalError::AiContract(format!(
                "{} programs recommended, at most {} allowed",
                self.recommended_program_ids.len(),
                MAX_RECOMMENDED_PROGRAMS
            )));
        }

        let mut seen = HashSet::new();
        self.recommended_program_ids
            .iter()
            .map(|id| {
                if !seen.insert(id.as_str()) {
                    return Err(ClinicalError::AiContract(format!(
                        "program {} recommended twice",
                        id
                    )));
                }
                catalog.find(id).cloned().ok_or_else(|| {
                    ClinicalError::AiContract(format!("unknown program id {}", id))
                })
            })
            .collect()
    }
}
