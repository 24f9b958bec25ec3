use tracing::debug;

use crate::models::{AlcoholConsumption, HealthScore, PatientVitals, PhysicalActivity};

/// Body mass index from kilograms and centimetres.
///
/// `height_cm` must be positive; see [`PatientVitals::validate`].
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

pub fn calculate_health_score(patient: &PatientVitals) -> HealthScore {
    let cardiovascular = cardiovascular_score(patient);
    let metabolic = metabolic_score(patient);
    let lifestyle = lifestyle_score(patient);
    let overall = overall_score(cardiovascular, metabolic, lifestyle);

    debug!(
        "Scores for patient {}: overall={} cardiovascular={} metabolic={} lifestyle={}",
        patient.id, overall, cardiovascular, metabolic, lifestyle
    );

    HealthScore {
        overall,
        cardiovascular,
        metabolic,
        lifestyle,
    }
}

/// Mean of the three sub-scores, rounded half up.
///
/// Works in integers: `round(sum / 3) == (2 * sum + 3) / 6`. A third of an
/// integer never lands on .5, so the tie rule never actually applies.
pub fn overall_score(cardiovascular: u8, metabolic: u8, lifestyle: u8) -> u8 {
    let sum = cardiovascular as u32 + metabolic as u32 + lifestyle as u32;
    ((2 * sum + 3) / 6) as u8
}

pub fn cardiovascular_score(patient: &PatientVitals) -> u8 {
    let bp = &patient.blood_pressure;
    let lipids = &patient.lipids;
    let mut score: i32 = 100;

    if bp.exceeds(140, 90) {
        score -= 25;
    } else if bp.exceeds(130, 85) {
        score -= 15;
    } else if bp.exceeds(120, 80) {
        score -= 8;
    }

    if lipids.total_cholesterol > 240.0 {
        score -= 20;
    } else if lipids.total_cholesterol > 200.0 {
        score -= 10;
    }

    if lipids.ldl > 160.0 {
        score -= 15;
    } else if lipids.ldl > 130.0 {
        score -= 8;
    }

    // HDL is protective: low values are penalised.
    if lipids.hdl < 40.0 {
        score -= 12;
    } else if lipids.hdl < 50.0 {
        score -= 6;
    }

    if lipids.triglycerides > 200.0 {
        score -= 15;
    } else if lipids.triglycerides > 150.0 {
        score -= 8;
    }

    clamp_score(score)
}

pub fn metabolic_score(patient: &PatientVitals) -> u8 {
    let bmi = patient.bmi();
    let mut score: i32 = 100;

    if patient.glucose >= 126.0 {
        score -= 30;
    } else if patient.glucose >= 100.0 {
        score -= 15;
    }

    if bmi >= 30.0 {
        score -= 20;
    } else if bmi >= 25.0 {
        score -= 10;
    }

    if patient.age > 50 {
        score -= 5;
    } else if patient.age > 40 {
        score -= 3;
    }

    clamp_score(score)
}

pub fn lifestyle_score(patient: &PatientVitals) -> u8 {
    let mut score: i32 = 100;

    if patient.smoking_status {
        score -= 30;
    }

    score -= match patient.alcohol_consumption {
        AlcoholConsumption::Heavy => 20,
        AlcoholConsumption::Moderate => 10,
        AlcoholConsumption::None => 0,
    };

    score -= match patient.physical_activity {
        PhysicalActivity::Sedentary => 25,
        PhysicalActivity::Light => 12,
        PhysicalActivity::Moderate => 5,
        PhysicalActivity::Active => 0,
    };

    clamp_score(score)
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestPatient;

    #[test]
    fn test_bmi_calculation() {
        let bmi = calculate_bmi(100.0, 160.0);
        assert!((bmi - 39.0625).abs() < 1e-9);

        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.857).abs() < 1e-3);
    }

    #[test]
    fn test_healthy_patient_scores_full_marks() {
        let patient = TestPatient::healthy().build();
        let score = calculate_health_score(&patient);
        assert_eq!(
            score,
            HealthScore {
                overall: 100,
                cardiovascular: 100,
                metabolic: 100,
                lifestyle: 100,
            }
        );
    }

    #[test]
    fn test_cardiovascular_worst_case() {
        let patient = TestPatient::healthy()
            .with_blood_pressure(150, 95)
            .with_lipids(35.0, 170.0, 250.0, 220.0)
            .build();
        // 100 - 25 - 20 - 15 - 12 - 15
        assert_eq!(cardiovascular_score(&patient), 13);
    }

    #[test]
    fn test_blood_pressure_tiers_are_not_cumulative() {
        let tier = |systolic, diastolic| {
            cardiovascular_score(&TestPatient::healthy().with_blood_pressure(systolic, diastolic).build())
        };
        assert_eq!(tier(141, 70), 75);
        assert_eq!(tier(110, 91), 75);
        assert_eq!(tier(140, 90), 85);
        assert_eq!(tier(131, 70), 85);
        assert_eq!(tier(110, 86), 85);
        assert_eq!(tier(130, 85), 92);
        assert_eq!(tier(121, 70), 92);
        assert_eq!(tier(110, 81), 92);
        assert_eq!(tier(120, 80), 100);
    }

    #[test]
    fn test_lipid_boundaries() {
        let score = |hdl, ldl, total, trig| {
            cardiovascular_score(&TestPatient::healthy().with_lipids(hdl, ldl, total, trig).build())
        };
        // Thresholds are exclusive for the "greater than" factors.
        assert_eq!(score(60.0, 100.0, 240.0, 120.0), 90);
        assert_eq!(score(60.0, 100.0, 240.5, 120.0), 80);
        assert_eq!(score(60.0, 100.0, 200.0, 120.0), 100);
        assert_eq!(score(60.0, 160.0, 180.0, 120.0), 92);
        assert_eq!(score(60.0, 161.0, 180.0, 120.0), 85);
        assert_eq!(score(60.0, 130.0, 180.0, 120.0), 100);
        assert_eq!(score(60.0, 100.0, 180.0, 150.0), 100);
        assert_eq!(score(60.0, 100.0, 180.0, 200.0), 92);
        assert_eq!(score(60.0, 100.0, 180.0, 201.0), 85);
        // HDL is the other way round: strictly below the threshold.
        assert_eq!(score(50.0, 100.0, 180.0, 120.0), 100);
        assert_eq!(score(49.0, 100.0, 180.0, 120.0), 94);
        assert_eq!(score(40.0, 100.0, 180.0, 120.0), 94);
        assert_eq!(score(39.0, 100.0, 180.0, 120.0), 88);
    }

    #[test]
    fn test_metabolic_scenario() {
        let patient = TestPatient::healthy()
            .with_glucose(130.0)
            .with_body(100.0, 160.0)
            .with_age(55)
            .build();
        // 100 - 30 - 20 - 5
        assert_eq!(metabolic_score(&patient), 45);
    }

    #[test]
    fn test_metabolic_boundaries() {
        let glucose = |g| metabolic_score(&TestPatient::healthy().with_glucose(g).build());
        assert_eq!(glucose(99.9), 100);
        assert_eq!(glucose(100.0), 85);
        assert_eq!(glucose(125.9), 85);
        assert_eq!(glucose(126.0), 70);

        // At 160cm the BMI tiers start just above 64kg and 76.8kg.
        let body = |w| metabolic_score(&TestPatient::healthy().with_body(w, 160.0).build());
        assert_eq!(body(63.9), 100);
        assert_eq!(body(64.1), 90);
        assert_eq!(body(76.7), 90);
        assert_eq!(body(76.9), 80);

        let age = |a| metabolic_score(&TestPatient::healthy().with_age(a).build());
        assert_eq!(age(40), 100);
        assert_eq!(age(41), 97);
        assert_eq!(age(50), 97);
        assert_eq!(age(51), 95);
    }

    #[test]
    fn test_lifestyle_scenario() {
        let patient = TestPatient::healthy()
            .smoker()
            .with_alcohol(AlcoholConsumption::Heavy)
            .with_activity(PhysicalActivity::Sedentary)
            .build();
        assert_eq!(lifestyle_score(&patient), 25);
    }

    #[test]
    fn test_lifestyle_activity_levels() {
        let activity = |a| lifestyle_score(&TestPatient::healthy().with_activity(a).build());
        assert_eq!(activity(PhysicalActivity::Active), 100);
        assert_eq!(activity(PhysicalActivity::Moderate), 95);
        assert_eq!(activity(PhysicalActivity::Light), 88);
        assert_eq!(activity(PhysicalActivity::Sedentary), 75);

        let moderate_drinker = TestPatient::healthy()
            .with_alcohol(AlcoholConsumption::Moderate)
            .build();
        assert_eq!(lifestyle_score(&moderate_drinker), 90);
    }

    #[test]
    fn test_overall_rounding() {
        assert_eq!(overall_score(100, 100, 100), 100);
        assert_eq!(overall_score(0, 0, 0), 0);
        // 13 + 45 + 25 = 83 -> 27.67
        assert_eq!(overall_score(13, 45, 25), 28);
        // 100 + 100 + 99 = 299 -> 99.67
        assert_eq!(overall_score(100, 100, 99), 100);
        // 100 + 99 + 99 = 298 -> 99.33
        assert_eq!(overall_score(100, 99, 99), 99);
    }

    #[test]
    fn test_high_risk_patient_scores() {
        let score = calculate_health_score(&TestPatient::high_risk().build());
        assert_eq!(score.cardiovascular, 13);
        assert_eq!(score.metabolic, 45);
        assert_eq!(score.lifestyle, 25);
        assert_eq!(score.overall, 28);
    }

    mod properties {
        use super::*;
        use crate::models::{AlcoholConsumption, PhysicalActivity};
        use proptest::prelude::*;

        fn alcohol() -> impl Strategy<Value = AlcoholConsumption> {
            prop_oneof![
                Just(AlcoholConsumption::None),
                Just(AlcoholConsumption::Moderate),
                Just(AlcoholConsumption::Heavy),
            ]
        }

        fn activity() -> impl Strategy<Value = PhysicalActivity> {
            prop_oneof![
                Just(PhysicalActivity::Sedentary),
                Just(PhysicalActivity::Light),
                Just(PhysicalActivity::Moderate),
                Just(PhysicalActivity::Active),
            ]
        }

        proptest! {
            /// Sub-scores stay in range and overall is their rounded mean.
            #[test]
            fn scores_in_range_and_overall_is_rounded_mean(
                age in 1u32..110,
                systolic in 70u32..220,
                diastolic in 40u32..140,
                weight in 30.0..250.0f64,
                height in 120.0..220.0f64,
                glucose in 50.0..400.0f64,
                lipids in (10.0..120.0f64, 30.0..300.0f64, 100.0..400.0f64, 30.0..600.0f64),
                smoker in any::<bool>(),
                alcohol in alcohol(),
                activity in activity(),
            ) {
                let mut builder = TestPatient::healthy()
                    .with_age(age)
                    .with_blood_pressure(systolic, diastolic)
                    .with_body(weight, height)
                    .with_glucose(glucose)
                    .with_lipids(lipids.0, lipids.1, lipids.2, lipids.3)
                    .with_alcohol(alcohol)
                    .with_activity(activity);
                if smoker {
                    builder = builder.smoker();
                }
                let score = calculate_health_score(&builder.build());

                for component in [score.overall, score.cardiovascular, score.metabolic, score.lifestyle] {
                    prop_assert!(component <= 100);
                }

                let mean = (score.cardiovascular as f64 + score.metabolic as f64 + score.lifestyle as f64) / 3.0;
                prop_assert_eq!(score.overall as f64, (mean + 0.5).floor());
            }

            #[test]
            fn overall_matches_float_rounding(c in 0u8..=100, m in 0u8..=100, l in 0u8..=100) {
                let mean = (c as f64 + m as f64 + l as f64) / 3.0;
                prop_assert_eq!(overall_score(c, m, l) as f64, (mean + 0.5).floor());
            }
        }
    }
}
