mod client;

use std::{
    fs,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use log::info;
use nutriplan_model::{CalculateResponse, ProfileRequest};

pub use client::*;

/// Request a plan, log a summary of it and save its report into `out_dir`.
///
/// Returns the plan along with the path the report was written to.
pub async fn fetch_plan(
    client: &dyn Client,
    profile: &ProfileRequest,
    out_dir: &Path,
) -> std::result::Result<(CalculateResponse, PathBuf), Box<dyn std::error::Error>> {
    let response = client.calculate(profile).await?;
    let targets = &response.diet_plan.targets;
    info!(
        "{} kcal, protein {} g, fat {} g, carbs {} g, water {} L, {} steps",
        targets.calories,
        targets.protein,
        targets.fat,
        targets.carbs,
        targets.water_intake_liters,
        response.diet_plan.steps_goal
    );
    for meal in response.diet_plan.meals.iter() {
        info!("{}: {}", meal.slot, meal.items.iter().join(", "));
    }

    let report = client.download_report(&response.pdf_file).await?;
    let path = out_dir.join(&response.pdf_file);
    fs::write(&path, report)?;
    info!("Saved report to {}", path.display());

    Ok((response, path))
}
