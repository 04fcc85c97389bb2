use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Daily nutrition targets derived from a user profile.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutritionTargets {
    /// kcal per day.
    pub calories: i64,
    /// Grams.
    pub protein: i64,
    /// Grams.
    pub fat: i64,
    /// Grams.
    pub carbs: i64,
    /// Liters, rounded to one decimal place.
    pub water_intake_liters: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
pub enum MealSlot {
    Breakfast,
    #[strum(serialize = "Mid-morning")]
    MidMorning,
    Lunch,
    Snack,
    Dinner,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meal {
    pub slot: MealSlot,
    pub items: Vec<String>,
}

/// Food items for every meal slot of a day, in slot order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MealPlan {
    meals: Vec<Meal>,
}

impl MealPlan {
    /// Build a plan from the item lists of each slot, given in [`MealSlot`] order.
    pub fn from_slots(items: [Vec<String>; 5]) -> Self {
        Self {
            meals: MealSlot::iter()
                .zip(items)
                .map(|(slot, items)| Meal { slot, items })
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        self.meals.iter()
    }

    pub fn items(&self, slot: MealSlot) -> Option<&[String]> {
        self.meals
            .iter()
            .find(|meal| meal.slot == slot)
            .map(|meal| meal.items.as_slice())
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Targets together with the meal plan and step goal, as returned to clients.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DietPlan {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub targets: NutritionTargets,
    pub meals: MealPlan,
    pub steps_goal: u32,
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::{fmt, str::FromStr};

    use serde::{
        de::{MapAccess, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::{MealPlan, MealSlot};

    impl Serialize for MealPlan {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_map(self.meals.iter().map(|meal| (meal.slot.as_ref(), &meal.items)))
        }
    }

    impl<'de> Deserialize<'de> for MealPlan {
        fn deserialize<D>(deserializer: D) -> Result<MealPlan, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct MealPlanVisitor;
            impl<'de> Visitor<'de> for MealPlanVisitor {
                type Value = MealPlan;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    write!(f, "a map from meal slot to food items")
                }

                fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
                where
                    A: MapAccess<'de>,
                {
                    let mut slots: [Option<Vec<String>>; 5] = Default::default();
                    while let Some((label, items)) = map.next_entry::<String, Vec<String>>()? {
                        let slot = MealSlot::from_str(&label).map_err(|_| {
                            serde::de::Error::custom(format!("Unknown meal slot \"{}\"", label))
                        })?;
                        let entry = &mut slots[slot as usize];
                        if entry.is_some() {
                            return Err(serde::de::Error::custom(format!(
                                "Duplicate meal slot \"{}\"",
                                label
                            )));
                        }
                        *entry = Some(items);
                    }

                    let mut items: [Vec<String>; 5] = Default::default();
                    for (slot, (target, source)) in items.iter_mut().zip(slots).enumerate() {
                        *target = source.ok_or_else(|| {
                            serde::de::Error::custom(format!("Missing meal slot #{}", slot))
                        })?;
                    }
                    Ok(MealPlan::from_slots(items))
                }
            }
            deserializer.deserialize_map(MealPlanVisitor)
        }
    }
}
