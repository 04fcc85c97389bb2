pub mod plan;
pub mod profile;
#[cfg(feature = "serde")]
pub mod request;

pub use plan::{DietPlan, Meal, MealPlan, MealSlot, NutritionTargets};
pub use profile::{ActivityLevel, Gender, Goal, UserProfile};
#[cfg(feature = "serde")]
pub use request::{CalculateResponse, ProfileRequest};
