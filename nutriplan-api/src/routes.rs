use std::sync::Arc;

use actix_files::{Files, NamedFile};
use actix_web::{get, post, web};
use log::{debug, info};
use nutriplan_model::{CalculateResponse, ProfileRequest};
use nutriplan_report::ReportRenderer;

use crate::{config::Config, error::ApiError, validation};

/// Register every route of the service, together with the shared state they use.
pub fn configure(
    config: Config,
    renderer: Arc<dyn ReportRenderer>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _| ApiError::InvalidInput(err.to_string()).into());

        let reports = Files::new("/pdfs", &config.reports_dir);
        let assets = Files::new("/assets", config.frontend_dir.join("assets"));

        cfg.app_data(json_config)
            .app_data(web::Data::from(renderer))
            .app_data(web::Data::new(config))
            .service(calculate)
            .service(reports)
            .service(assets)
            .service(index);
    }
}

#[post("/calculate")]
async fn calculate(
    request: web::Json<ProfileRequest>,
    renderer: web::Data<dyn ReportRenderer>,
) -> Result<web::Json<CalculateResponse>, ApiError> {
    let profile = validation::into_profile(request.into_inner())?;
    let diet_plan = nutriplan_planner::build_diet_plan(&profile);
    debug!("Computed {:?} for {}", diet_plan.targets, profile.name);

    let renderer = renderer.into_inner();
    let report_plan = diet_plan.clone();
    let pdf_file = web::block(move || renderer.render(&profile.name, &report_plan)).await??;
    info!("Served plan with report {}", pdf_file);

    Ok(web::Json(CalculateResponse {
        diet_plan,
        pdf_file,
    }))
}

#[get("/")]
async fn index(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(config.frontend_dir.join("index.html")).await?)
}
