use std::{error::Error, fs, sync::Arc};

use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use log::info;
use nutriplan_api::{config::Config, routes};
use nutriplan_report::{PdfReportRenderer, ReportRenderer};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    log4rs::init_file(&config.log_config, Default::default())?;

    info!("Storing reports in {}", config.reports_dir.display());
    fs::create_dir_all(&config.reports_dir)?;
    let renderer: Arc<dyn ReportRenderer> = Arc::new(PdfReportRenderer::new(&config.reports_dir));

    info!("Listening on {}:{}", config.host, config.port);
    let address = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(routes::configure(config.clone(), renderer.clone()))
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
