use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use shared_config::AppConfig;

use crate::catalog::ProgramCatalog;
use crate::error::ClinicalError;
use crate::models::{AnalysisSource, PatientAnalysis, PatientVitals};
use crate::services::ai_contract::ingest_ai_analysis;
use crate::services::programs::recommend_programs;
use crate::services::recommendations::generate_recommendations;
use crate::services::risk::{assess_future_risks, determine_risk_category};
use crate::services::scoring::calculate_health_score;

/// Rule-based patient analyzer.
///
/// Holds nothing but the injected program catalog, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct HealthAnalyzer {
    catalog: Arc<ProgramCatalog>,
}

impl HealthAnalyzer {
    pub fn new(catalog: Arc<ProgramCatalog>) -> Self {
        Self { catalog }
    }

    /// Use the catalog named by `PROGRAM_CATALOG_PATH`, or the standard one.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClinicalError> {
        let catalog = match &config.program_catalog_path {
            Some(path) => ProgramCatalog::from_path(path)?,
            None => ProgramCatalog::standard(),
        };
        Ok(Self::new(Arc::new(catalog)))
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    pub fn analyze_patient(&self, patient: &PatientVitals) -> PatientAnalysis {
        self.analyze_patient_at(patient, Utc::now())
    }

    /// Same as [`analyze_patient`](Self::analyze_patient) with a caller-chosen
    /// timestamp.
    pub fn analyze_patient_at(&self, patient: &PatientVitals, analysis_date: DateTime<Utc>) -> PatientAnalysis {
        debug!("Analyzing patient: {}", patient.id);

        let health_score = calculate_health_score(patient);
        let risk_category = determine_risk_category(&health_score);
        let future_risks = assess_future_risks(patient);
        let recommendations = generate_recommendations(patient);
        let recommended_programs = recommend_programs(patient, &self.catalog);

        info!(
            "Patient {} scored {} ({}): {} risks, {} recommendations, {} programs",
            patient.id,
            health_score.overall,
            risk_category.level,
            future_risks.len(),
            recommendations.len(),
            recommended_programs.len()
        );

        PatientAnalysis {
            patient_id: patient.id.clone(),
            patient_name: patient.name.clone(),
            health_score,
            risk_category,
            future_risks,
            recommendations,
            recommended_programs,
            analysis_date,
            source: AnalysisSource::RuleEngine,
        }
    }

    /// Prefer the model's reply when it passes the contract, otherwise fall
    /// back to the rule engine.
    pub fn analyze_with_ai_fallback(
        &self,
        patient: &PatientVitals,
        ai_reply: Option<&str>,
    ) -> PatientAnalysis {
        let now = Utc::now();

        let Some(raw) = ai_reply else {
            debug!("No AI reply for patient {}, using rule engine", patient.id);
            return self.analyze_patient_at(patient, now);
        };

        match ingest_ai_analysis(raw, patient, &self.catalog, now) {
            Ok(analysis) => {
                info!("Using AI analysis for patient {}", patient.id);
                analysis
            }
            Err(e) => {
                warn!(
                    "Rejected AI analysis for patient {} ({} bytes): {}",
                    patient.id,
                    raw.len(),
                    e
                );
                self.analyze_patient_at(patient, now)
            }
        }
    }
}

impl Default for HealthAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(ProgramCatalog::standard()))
    }
}
