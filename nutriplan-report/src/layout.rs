use chrono::NaiveDate;
use itertools::Itertools;
use nutriplan_model::DietPlan;

pub const REPORT_TITLE: &str = "Health AI Report";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportLine {
    Title(String),
    Text(String),
    Gap,
}

/// Lines of a report, top to bottom, before any wrapping.
pub fn report_lines(name: &str, plan: &DietPlan, date: NaiveDate) -> Vec<ReportLine> {
    let targets = &plan.targets;
    let mut lines = vec![
        ReportLine::Title(REPORT_TITLE.to_owned()),
        ReportLine::Gap,
        ReportLine::Text(format!("Name: {}", name)),
        ReportLine::Text(format!("Date: {}", date.format("%Y-%m-%d"))),
        ReportLine::Text(format!("Calories: {} kcal", targets.calories)),
        ReportLine::Text(format!("Protein: {} g", targets.protein)),
        ReportLine::Text(format!("Fat: {} g", targets.fat)),
        ReportLine::Text(format!("Carbs: {} g", targets.carbs)),
        ReportLine::Text(format!("Water: {:.1} L", targets.water_intake_liters)),
        ReportLine::Text(format!("Steps Goal: {} steps", plan.steps_goal)),
        ReportLine::Gap,
        ReportLine::Text("Diet Plan:".to_owned()),
    ];
    lines.extend(
        plan.meals
            .iter()
            .map(|meal| ReportLine::Text(format!("{}: {}", meal.slot, meal.items.iter().join(", ")))),
    );
    lines
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Words longer than `width` are kept whole on their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use nutriplan_model::{ActivityLevel, Gender, Goal, UserProfile};

    use super::*;

    #[test]
    fn report_lines_for_plan() {
        let plan = nutriplan_planner::build_diet_plan(&UserProfile {
            name: "Asha".to_owned(),
            weight: 70.0,
            height: 170.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::LightlyActive,
            goal: Goal::Lose,
        });
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let lines = report_lines("Asha", &plan, date);

        let expected_head = [
            ReportLine::Title("Health AI Report".to_owned()),
            ReportLine::Gap,
            ReportLine::Text("Name: Asha".to_owned()),
            ReportLine::Text("Date: 2024-03-01".to_owned()),
            ReportLine::Text("Calories: 1890 kcal".to_owned()),
            ReportLine::Text("Protein: 142 g".to_owned()),
            ReportLine::Text("Fat: 53 g".to_owned()),
            ReportLine::Text("Carbs: 213 g".to_owned()),
            ReportLine::Text("Water: 2.8 L".to_owned()),
            ReportLine::Text("Steps Goal: 7000 steps".to_owned()),
            ReportLine::Gap,
            ReportLine::Text("Diet Plan:".to_owned()),
        ];
        assert_eq!(lines[..expected_head.len()], expected_head);
        assert_eq!(lines.len(), expected_head.len() + 5);
        assert_eq!(
            lines[expected_head.len() + 1],
            ReportLine::Text("Mid-morning: Green tea, Apple".to_owned())
        );
    }

    #[test]
    fn water_keeps_one_decimal() {
        let mut plan = nutriplan_planner::build_diet_plan(&UserProfile {
            name: "Mei".to_owned(),
            weight: 75.0,
            height: 160.0,
            age: 52,
            gender: Gender::Female,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
        });
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let test_data = [(3.0, "Water: 3.0 L"), (2.8, "Water: 2.8 L"), (0.0, "Water: 0.0 L")];

        for (i, (liters, expected)) in test_data.into_iter().enumerate() {
            plan.targets.water_intake_liters = liters;
            let lines = report_lines("Mei", &plan, date);
            assert!(
                lines.contains(&ReportLine::Text(expected.to_owned())),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn wrap_text() {
        let test_data = [
            ("", 10, vec![""]),
            ("short", 10, vec!["short"]),
            ("one two three", 7, vec!["one two", "three"]),
            ("one two three", 13, vec!["one two three"]),
            ("a verylongword b", 4, vec!["a", "verylongword", "b"]),
            ("  spaced   out  ", 20, vec!["spaced out"]),
        ];

        for (i, (text, width, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(wrap(text, width), expected, "Test case #{}", i);
        }
    }
}
