// Clinical Scoring Cell - deterministic patient health analysis
pub mod catalog;
pub mod error;
pub mod models;
pub mod services;
pub mod test_utils;

// Re-export commonly used types for convenience
pub use catalog::ProgramCatalog;
pub use error::ClinicalError;
pub use models::{
    AlcoholConsumption,
    AnalysisSource,
    BloodPressure,
    ConditionTag,
    FutureRisk,
    Gender,
    HealthRecommendation,
    HealthScore,
    LifestyleProgram,
    LipidPanel,
    PatientAnalysis,
    PatientVitals,
    PhysicalActivity,
    Priority,
    Probability,
    RiskCategory,
    RiskLevel,
};
pub use services::HealthAnalyzer;

// Public services API
pub mod api {
    pub use crate::services::ai_contract::{ingest_ai_analysis, parse_ai_analysis, AiAnalysisPayload};
    pub use crate::services::programs::{derive_condition_tags, recommend_programs, MAX_RECOMMENDED_PROGRAMS};
    pub use crate::services::recommendations::generate_recommendations;
    pub use crate::services::risk::{assess_future_risks, determine_risk_category};
    pub use crate::services::scoring::{
        calculate_bmi,
        calculate_health_score,
        cardiovascular_score,
        lifestyle_score,
        metabolic_score,
        overall_score,
    };
}
