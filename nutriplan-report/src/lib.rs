pub mod layout;
pub mod pdf;

use nutriplan_model::DietPlan;

pub use pdf::PdfReportRenderer;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to store report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render report: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Renders a diet plan into a stored document.
#[mockall::automock]
pub trait ReportRenderer: Send + Sync {
    /// Render and store the report for `name`, returning the file name it was
    /// stored under.
    fn render(&self, name: &str, plan: &DietPlan) -> Result<String, ReportError>;
}
