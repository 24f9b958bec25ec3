use crate::models::{
    AlcoholConsumption, BloodPressure, Gender, LipidPanel, PatientVitals, PhysicalActivity,
};

/// Builder for patient records used across unit and integration tests.
///
/// `TestPatient::healthy()` starts from vitals that trip no rule at all, so a
/// test only has to set the fields it cares about.
pub struct TestPatient {
    vitals: PatientVitals,
}

impl Default for TestPatient {
    fn default() -> Self {
        Self::healthy()
    }
}

impl TestPatient {
    pub fn healthy() -> Self {
        Self {
            vitals: PatientVitals {
                id: "P-TEST".to_string(),
                name: "Test Patient".to_string(),
                age: 30,
                gender: Gender::Female,
                blood_pressure: BloodPressure { systolic: 115, diastolic: 75 },
                weight: 60.0,
                height: 165.0,
                glucose: 90.0,
                lipids: LipidPanel {
                    hdl: 60.0,
                    ldl: 100.0,
                    total_cholesterol: 180.0,
                    triglycerides: 120.0,
                },
                smoking_status: false,
                alcohol_consumption: AlcoholConsumption::None,
                physical_activity: PhysicalActivity::Active,
            },
        }
    }

    /// Every rule fires at its most severe tier.
    pub fn high_risk() -> Self {
        Self::healthy()
            .with_age(55)
            .with_blood_pressure(150, 95)
            .with_body(100.0, 160.0)
            .with_glucose(130.0)
            .with_lipids(35.0, 170.0, 250.0, 220.0)
            .smoker()
            .with_alcohol(AlcoholConsumption::Heavy)
            .with_activity(PhysicalActivity::Sedentary)
    }

    pub fn with_id(mut self, id: &str, name: &str) -> Self {
        self.vitals.id = id.to_string();
        self.vitals.name = name.to_string();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.vitals.age = age;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.vitals.gender = gender;
        self
    }

    pub fn with_blood_pressure(mut self, systolic: u32, diastolic: u32) -> Self {
        self.vitals.blood_pressure = BloodPressure { systolic, diastolic };
        self
    }

    pub fn with_body(mut self, weight_kg: f64, height_cm: f64) -> Self {
        self.vitals.weight = weight_kg;
        self.vitals.height = height_cm;
        self
    }

    pub fn with_glucose(mut self, glucose: f64) -> Self {
        self.vitals.glucose = glucose;
        self
    }

    pub fn with_lipids(mut self, hdl: f64, ldl: f64, total_cholesterol: f64, triglycerides: f64) -> Self {
        self.vitals.lipids = LipidPanel {
            hdl,
            ldl,
            total_cholesterol,
            triglycerides,
        };
        self
    }

    pub fn smoker(mut self) -> Self {
        self.vitals.smoking_status = true;
        self
    }

    pub fn with_alcohol(mut self, alcohol: AlcoholConsumption) -> Self {
        self.vitals.alcohol_consumption = alcohol;
        self
    }

    pub fn with_activity(mut self, activity: PhysicalActivity) -> Self {
        self.vitals.physical_activity = activity;
        self
    }

    pub fn build(self) -> PatientVitals {
        self.vitals
    }
}
