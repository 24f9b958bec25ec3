use std::fs;

use anyhow::{anyhow, bail, Context, Result};
use tracing::debug;

use clinical_scoring_cell::{HealthAnalyzer, PatientAnalysis, PatientVitals};

const USAGE: &str = "usage: clinical-analyzer <patients.json> [patient-id]";

#[derive(Debug, PartialEq, Eq)]
pub struct BatchArgs {
    pub records_path: String,
    pub patient_id: Option<String>,
}

impl BatchArgs {
    pub fn parse(args: &[String]) -> Result<Self> {
        match args {
            [path] => Ok(Self {
                records_path: path.clone(),
                patient_id: None,
            }),
            [path, id] => Ok(Self {
                records_path: path.clone(),
                patient_id: Some(id.clone()),
            }),
            _ => bail!(USAGE),
        }
    }
}

pub fn load_patients(path: &str) -> Result<Vec<PatientVitals>> {
    debug!("Reading patient records from {}", path);

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read patient records from {}", path))?;

    let patients: Vec<PatientVitals> = serde_json::from_str(&contents)
        .with_context(|| format!("Patient records in {} are not in the expected format", path))?;

    Ok(patients)
}

pub fn select_patients(patients: Vec<PatientVitals>, patient_id: Option<&str>) -> Result<Vec<PatientVitals>> {
    let Some(id) = patient_id else {
        return Ok(patients);
    };

    let selected: Vec<PatientVitals> = patients.into_iter().filter(|p| p.id == id).collect();
    if selected.is_empty() {
        return Err(anyhow!("Patient not found: {}", id));
    }
    Ok(selected)
}

/// Validate every record first so a bad record never yields a partial batch.
pub fn analyze_all(analyzer: &HealthAnalyzer, patients: &[PatientVitals]) -> Result<Vec<PatientAnalysis>> {
    for patient in patients {
        patient
            .validate()
            .with_context(|| format!("Invalid record for patient {}", patient.id))?;
    }

    Ok(patients
        .iter()
        .map(|patient| analyzer.analyze_patient(patient))
        .collect())
}

pub fn render(analyses: &[PatientAnalysis], pretty: bool) -> Result<String> {
    let output = if pretty {
        serde_json::to_string_pretty(analyses)?
    } else {
        serde_json::to_string(analyses)?
    };
    Ok(output)
}
