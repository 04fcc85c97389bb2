use nutriplan_model::{ActivityLevel, Gender, Goal, NutritionTargets, UserProfile};

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;

const PROTEIN_SHARE: f64 = 0.30;
const FAT_SHARE: f64 = 0.25;
const CARBS_SHARE: f64 = 0.45;

const WATER_LITERS_PER_KG: f64 = 0.04;

/// Basal metabolic rate in kcal/day, Mifflin-St Jeor equation.
///
/// Height is in centimeters, weight in kilograms.
pub fn basal_metabolic_rate(weight: f64, height: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight + 6.25 * height - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Factor turning BMR into total daily energy expenditure.
pub fn activity_multiplier(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary | ActivityLevel::Unspecified => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}

pub fn goal_factor(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => 0.85,
        Goal::Maintain => 1.0,
        Goal::Gain => 1.15,
    }
}

/// Compute daily calorie, macronutrient and water targets.
///
/// Macros are derived from the unrounded calorie figure. All rounding is
/// half-to-even.
pub fn compute_targets(profile: &UserProfile) -> NutritionTargets {
    let bmr = basal_metabolic_rate(profile.weight, profile.height, profile.age, profile.gender);
    let calories = bmr * activity_multiplier(profile.activity_level) * goal_factor(profile.goal);

    NutritionTargets {
        calories: round(calories),
        protein: round(PROTEIN_SHARE * calories / KCAL_PER_GRAM_PROTEIN),
        fat: round(FAT_SHARE * calories / KCAL_PER_GRAM_FAT),
        carbs: round(CARBS_SHARE * calories / KCAL_PER_GRAM_CARBS),
        water_intake_liters: (profile.weight * WATER_LITERS_PER_KG * 10.0).round_ties_even() / 10.0,
    }
}

fn round(value: f64) -> i64 {
    value.round_ties_even() as i64
}
