use num_derive::FromPrimitive;
use strum::Display;

/// Biological sex used to pick the Mifflin-St Jeor constant.
///
/// Anything that is not "male" (in any casing) takes the female branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Female,
}

impl From<&str> for Gender {
    fn from(label: &str) -> Self {
        if label.eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

/// Self-reported activity level on a 1 to 5 scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, FromPrimitive)]
pub enum ActivityLevel {
    /// Any level outside of 1..=5.
    #[default]
    Unspecified = 0,
    Sedentary = 1,
    LightlyActive = 2,
    ModeratelyActive = 3,
    VeryActive = 4,
    ExtraActive = 5,
}

impl From<i64> for ActivityLevel {
    fn from(level: i64) -> Self {
        num::FromPrimitive::from_i64(level).unwrap_or_default()
    }
}

/// Weight goal. Unrecognized labels are treated as maintenance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl From<&str> for Goal {
    fn from(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub name: String,
    /// Kilograms.
    pub weight: f64,
    /// Centimeters.
    pub height: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}
