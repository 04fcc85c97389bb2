use nutriplan_model::{ProfileRequest, UserProfile};

use crate::error::ApiError;

/// Check a request and turn it into a profile the planner can use.
///
/// Gender, goal and activity level are never rejected; unknown values take
/// their defaults.
pub fn into_profile(request: ProfileRequest) -> Result<UserProfile, ApiError> {
    if request.name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if !is_positive(request.weight) {
        return Err(invalid("weight must be a positive number of kilograms"));
    }
    if !is_positive(request.height) {
        return Err(invalid("height must be a positive number of centimeters"));
    }
    let age = u32::try_from(request.age)
        .ok()
        .filter(|age| *age > 0)
        .ok_or_else(|| invalid("age must be a positive number of years"))?;

    Ok(UserProfile {
        name: request.name,
        weight: request.weight,
        height: request.height,
        age,
        gender: request.gender.as_str().into(),
        activity_level: request.activity_level.into(),
        goal: request.goal.as_str().into(),
    })
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(message: &str) -> ApiError {
    ApiError::InvalidInput(message.to_owned())
}
