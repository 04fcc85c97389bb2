//! Daily nutrition planning: energy and macronutrient targets, water intake,
//! step goal and a canned meal plan, all derived from a [`UserProfile`].
//!
//! Every function here is pure and total. Input validation belongs to the
//! caller.

pub mod meals;
pub mod steps;
pub mod targets;

use log::debug;
use nutriplan_model::{DietPlan, UserProfile};

pub use meals::select_meal_plan;
pub use steps::steps_goal_for;
pub use targets::compute_targets;

/// Compute targets, step goal and meal plan for a profile in one go.
pub fn build_diet_plan(profile: &UserProfile) -> DietPlan {
    let targets = compute_targets(profile);
    let steps_goal = steps_goal_for(profile.activity_level);
    debug!(
        "Planned {} kcal and {} steps for goal {}",
        targets.calories, steps_goal, profile.goal
    );

    DietPlan {
        targets,
        meals: select_meal_plan(profile.goal),
        steps_goal,
    }
}

#[cfg(test)]
mod tests {
    use nutriplan_model::{ActivityLevel, Gender, Goal, MealSlot, NutritionTargets};

    use super::*;

    #[test]
    fn build_diet_plan_combines_all_parts() {
        let profile = UserProfile {
            name: "Asha".to_owned(),
            weight: 70.0,
            height: 170.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::LightlyActive,
            goal: Goal::Lose,
        };

        let plan = build_diet_plan(&profile);

        assert_eq!(
            plan.targets,
            NutritionTargets {
                calories: 1890,
                protein: 142,
                fat: 53,
                carbs: 213,
                water_intake_liters: 2.8,
            }
        );
        assert_eq!(plan.steps_goal, 7000);
        assert_eq!(plan.meals, select_meal_plan(Goal::Lose));
        assert_eq!(
            plan.meals.items(MealSlot::Breakfast).map(|items| items.len()),
            Some(3)
        );
    }
}
