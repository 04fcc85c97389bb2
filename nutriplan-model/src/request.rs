use serde::{Deserialize, Serialize};

use crate::plan::DietPlan;

/// Body of a plan calculation request, as sent over the wire.
///
/// Gender, goal and activity level are kept raw here; they are mapped onto
/// their enums with total conversions once the request has been validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    pub weight: f64,
    pub height: f64,
    pub age: i64,
    pub gender: String,
    pub activity_level: i64,
    pub goal: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub diet_plan: DietPlan,
    pub pdf_file: String,
}
