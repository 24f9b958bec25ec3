use tracing::debug;

use crate::models::{AlcoholConsumption, HealthRecommendation, PatientVitals, PhysicalActivity, Priority};

pub fn generate_recommendations(patient: &PatientVitals) -> Vec<HealthRecommendation> {
    let mut recommendations = Vec::new();
    let bmi = patient.bmi();
    let lipids = &patient.lipids;

    if patient.blood_pressure.exceeds(140, 90) {
        recommendations.push(HealthRecommendation::new(
            "Cardiovascular",
            Priority::High,
            "Reduce sodium intake to less than 2,300mg per day and monitor blood pressure daily",
        ));
    }

    if lipids.ldl > 130.0 || lipids.total_cholesterol > 200.0 {
        recommendations.push(HealthRecommendation::new(
            "Nutrition",
            Priority::High,
            "Adopt a heart-healthy diet rich in fiber, omega-3 fatty acids, and limit saturated fats",
        ));
    }

    if patient.glucose >= 100.0 {
        let priority = if patient.glucose >= 126.0 {
            Priority::High
        } else {
            Priority::Medium
        };
        recommendations.push(HealthRecommendation::new(
            "Nutrition",
            priority,
            "Follow a low-glycemic diet, limit refined carbohydrates and sugars",
        ));
    }

    if bmi >= 25.0 {
        let priority = if bmi >= 30.0 { Priority::High } else { Priority::Medium };
        recommendations.push(HealthRecommendation::new(
            "Weight Management",
            priority,
            "Work towards achieving a healthy BMI through balanced diet and regular exercise",
        ));
    }

    if patient.smoking_status {
        recommendations.push(HealthRecommendation::new(
            "Smoking Cessation",
            Priority::High,
            "Enroll in a smoking cessation program immediately to reduce health risks",
        ));
    }

    if patient.alcohol_consumption == AlcoholConsumption::Heavy {
        recommendations.push(HealthRecommendation::new(
            "Alcohol Reduction",
            Priority::High,
            "Reduce alcohol consumption to moderate levels or seek support for alcohol dependency",
        ));
    }

    if matches!(
        patient.physical_activity,
        PhysicalActivity::Sedentary | PhysicalActivity::Light
    ) {
        recommendations.push(HealthRecommendation::new(
            "Physical Activity",
            Priority::Medium,
            "Aim for at least 150 minutes of moderate aerobic activity per week",
        ));
    }

    if lipids.hdl < 40.0 {
        recommendations.push(HealthRecommendation::new(
            "Cardiovascular",
            Priority::Medium,
            "Increase HDL cholesterol through regular exercise and healthy fats consumption",
        ));
    }

    if recommendations.is_empty() {
        recommendations.push(HealthRecommendation::new(
            "Preventive Care",
            Priority::Low,
            "Continue maintaining current healthy lifestyle and regular check-ups",
        ));
    }

    debug!(
        "Generated {} recommendations for patient {}",
        recommendations.len(),
        patient.id
    );

    recommendations
}
