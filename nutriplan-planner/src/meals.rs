use nutriplan_model::{Goal, MealPlan};

type SlotItems = [&'static [&'static str]; 5];

const LOSE_PLAN: SlotItems = [
    &["Oats porridge (small portion)", "Banana", "Almonds (5 pcs)"],
    &["Green tea", "Apple"],
    &["Brown rice (1 cup)", "Dal", "Vegetable curry", "Curd"],
    &["Buttermilk", "Roasted chickpeas"],
    &["2 Roti", "Vegetable soup", "Salad"],
];

const MAINTAIN_PLAN: SlotItems = [
    &["Oats porridge", "Banana", "Almonds (7 pcs)"],
    &["Green tea", "Seasonal fruit"],
    &["Brown rice (1.5 cups)", "Dal", "Vegetable curry", "Curd"],
    &["Buttermilk", "Chickpeas (moderate)"],
    &["2 Roti", "Vegetable soup", "Salad"],
];

const GAIN_PLAN: SlotItems = [
    &["Oats + milk", "Banana", "Peanut butter toast"],
    &["Milkshake", "Nuts (10-12 pcs)"],
    &["Brown rice (2 cups)", "Paneer curry", "Dal", "Curd"],
    &["Smoothie", "Boiled eggs / Chickpeas"],
    &["3 Roti", "Vegetable curry", "Salad"],
];

/// Fixed meal plan for a goal, or a goal label such as `"lose"`.
pub fn select_meal_plan(goal: impl Into<Goal>) -> MealPlan {
    let slots = match goal.into() {
        Goal::Lose => LOSE_PLAN,
        Goal::Maintain => MAINTAIN_PLAN,
        Goal::Gain => GAIN_PLAN,
    };

    MealPlan::from_slots(slots.map(|items| items.iter().map(|item| item.to_string()).collect()))
}
