use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::catalog::ProgramCatalog;
use crate::models::{AlcoholConsumption, ConditionTag, LifestyleProgram, PatientVitals, PhysicalActivity};

pub const MAX_RECOMMENDED_PROGRAMS: usize = 4;

/// Condition tags implied by the patient's vitals.
///
/// A patient that trips nothing gets `{general-wellness, prevention}`.
pub fn derive_condition_tags(patient: &PatientVitals) -> BTreeSet<ConditionTag> {
    let mut tags = BTreeSet::new();
    let bmi = patient.bmi();
    let lipids = &patient.lipids;

    if patient.blood_pressure.exceeds(130, 85) {
        tags.insert(ConditionTag::Hypertension);
        tags.insert(ConditionTag::CardiovascularRisk);
    }

    if lipids.total_cholesterol > 200.0 || lipids.ldl > 130.0 {
        tags.insert(ConditionTag::HighCholesterol);
        tags.insert(ConditionTag::CardiovascularRisk);
    }

    if patient.glucose >= 100.0 {
        tags.insert(if patient.glucose >= 126.0 {
            ConditionTag::Diabetes
        } else {
            ConditionTag::Prediabetes
        });
        tags.insert(ConditionTag::MetabolicSyndrome);
    }

    if bmi >= 25.0 {
        tags.insert(if bmi >= 30.0 {
            ConditionTag::Obesity
        } else {
            ConditionTag::Overweight
        });
        tags.insert(ConditionTag::MetabolicSyndrome);
    }

    if patient.smoking_status {
        tags.insert(ConditionTag::Smoking);
        tags.insert(ConditionTag::CardiovascularRisk);
        tags.insert(ConditionTag::RespiratoryIssues);
    }

    if patient.alcohol_consumption == AlcoholConsumption::Heavy {
        tags.insert(ConditionTag::AlcoholDependency);
        tags.insert(ConditionTag::LiverHealth);
        tags.insert(ConditionTag::MetabolicIssues);
    }

    if patient.physical_activity == PhysicalActivity::Sedentary {
        tags.insert(ConditionTag::SedentaryLifestyle);
        tags.insert(ConditionTag::CardiovascularRisk);
    }

    if tags.is_empty() {
        tags.insert(ConditionTag::GeneralWellness);
        tags.insert(ConditionTag::Prevention);
    }

    tags
}

/// Programs from `catalog` whose targets intersect the patient's tags.
///
/// Results keep catalog order, not relevance order, and stop at
/// [`MAX_RECOMMENDED_PROGRAMS`].
pub fn recommend_programs(patient: &PatientVitals, catalog: &ProgramCatalog) -> Vec<LifestyleProgram> {
    let tags: Vec<ConditionTag> = derive_condition_tags(patient).into_iter().collect();
    let mut seen_ids = HashSet::new();
    let mut programs = Vec::new();

    for program in catalog.iter() {
        if programs.len() == MAX_RECOMMENDED_PROGRAMS {
            break;
        }
        if program.targets_any(&tags) && seen_ids.insert(program.id.as_str()) {
            programs.push(program.clone());
        }
    }

    debug!(
        "Matched {} programs for patient {} from tags {:?}",
        programs.len(),
        patient.id,
        tags
    );

    programs
}
