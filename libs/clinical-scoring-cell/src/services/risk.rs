use tracing::debug;

use crate::models::{
    AlcoholConsumption, FutureRisk, HealthScore, PatientVitals, Probability, RiskCategory, RiskLevel,
};

pub fn determine_risk_category(health_score: &HealthScore) -> RiskCategory {
    let level = RiskLevel::from_overall(health_score.overall);
    RiskCategory {
        level,
        description: level.description().to_string(),
    }
}

/// Project the conditions this patient is heading towards.
///
/// Each rule contributes at most one entry, in rule order. The thresholds
/// repeat the score deductions on purpose: the dashboard shows both.
pub fn assess_future_risks(patient: &PatientVitals) -> Vec<FutureRisk> {
    let mut risks = Vec::new();
    let bmi = patient.bmi();
    let bp = &patient.blood_pressure;
    let lipids = &patient.lipids;

    if bp.exceeds(140, 90) {
        risks.push(FutureRisk::new(
            "Hypertensive Crisis",
            Probability::High,
            "1-2 years",
            "Elevated blood pressure increases risk of stroke and heart attack",
        ));
    } else if bp.exceeds(130, 85) {
        risks.push(FutureRisk::new(
            "Hypertension",
            Probability::Moderate,
            "2-3 years",
            "Blood pressure is in pre-hypertensive range",
        ));
    }

    if patient.glucose >= 126.0 {
        risks.push(FutureRisk::new(
            "Type 2 Diabetes",
            Probability::High,
            "Current",
            "Blood glucose levels indicate diabetes",
        ));
    } else if patient.glucose >= 100.0 {
        risks.push(FutureRisk::new(
            "Type 2 Diabetes",
            Probability::Moderate,
            "3-5 years",
            "Prediabetic glucose levels increase diabetes risk",
        ));
    }

    if lipids.ldl > 160.0 || lipids.total_cholesterol > 240.0 {
        risks.push(FutureRisk::new(
            "Cardiovascular Disease",
            Probability::High,
            "2-5 years",
            "High cholesterol increases risk of heart disease and stroke",
        ));
    } else if lipids.ldl > 130.0 || lipids.total_cholesterol > 200.0 {
        risks.push(FutureRisk::new(
            "Cardiovascular Disease",
            Probability::Moderate,
            "5-10 years",
            "Elevated cholesterol may lead to arterial plaque buildup",
        ));
    }

    if bmi >= 30.0 {
        risks.push(FutureRisk::new(
            "Obesity-related Complications",
            Probability::High,
            "1-3 years",
            "Obesity increases risk of diabetes, heart disease, and joint problems",
        ));
    }

    if patient.smoking_status {
        risks.push(FutureRisk::new(
            "Lung Disease and Cancer",
            Probability::High,
            "5-15 years",
            "Smoking significantly increases risk of respiratory diseases and cancer",
        ));
    }

    if patient.alcohol_consumption == AlcoholConsumption::Heavy {
        risks.push(FutureRisk::new(
            "Liver Disease",
            Probability::Moderate,
            "5-10 years",
            "Heavy alcohol consumption can lead to liver damage",
        ));
    }

    if risks.is_empty() {
        risks.push(FutureRisk::new(
            "General Age-related Decline",
            Probability::Low,
            "10+ years",
            "Normal age-related health changes expected",
        ));
    }

    debug!("Assessed {} future risks for patient {}", risks.len(), patient.id);

    risks
}
