use nutriplan_model::ActivityLevel;

const DEFAULT_STEPS_GOAL: u32 = 8000;

/// Daily step goal for an activity level, or a raw 1 to 5 rating.
pub fn steps_goal_for(activity_level: impl Into<ActivityLevel>) -> u32 {
    match activity_level.into() {
        ActivityLevel::Sedentary => 5000,
        ActivityLevel::LightlyActive => 7000,
        ActivityLevel::ModeratelyActive => 10000,
        ActivityLevel::VeryActive => 12000,
        ActivityLevel::ExtraActive => 15000,
        ActivityLevel::Unspecified => DEFAULT_STEPS_GOAL,
    }
}
