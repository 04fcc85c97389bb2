use std::{fs, path::PathBuf};

use chrono::Local;
use log::{debug, info};
use nutriplan_model::DietPlan;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use uuid::Uuid;

use crate::{
    layout::{self, ReportLine, REPORT_TITLE},
    ReportError, ReportRenderer,
};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 10.0;
const TITLE_SIZE: f32 = 16.0;
const TEXT_SIZE: f32 = 12.0;
/// Characters of 12pt Helvetica that fit between the margins.
const WRAP_WIDTH: usize = 85;
const LAYER_NAME: &str = "Report";
/// Longest name prefix kept in a report file name.
const MAX_STEM_CHARS: usize = 64;

/// Writes A4 PDF reports into a directory.
#[derive(Clone, Debug)]
pub struct PdfReportRenderer {
    reports_dir: PathBuf,
}

impl PdfReportRenderer {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    pub fn render_pdf(&self, lines: &[ReportLine]) -> Result<Vec<u8>, ReportError> {
        let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
        let title_font = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let text_font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        let mut current_layer = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT.0 - MARGIN;

        for line in lines {
            let (text, font, size) = match line {
                ReportLine::Title(text) => (text, &title_font, TITLE_SIZE),
                ReportLine::Text(text) => (text, &text_font, TEXT_SIZE),
                ReportLine::Gap => {
                    y -= LINE_HEIGHT;
                    continue;
                }
            };

            for row in layout::wrap(text, WRAP_WIDTH) {
                if y < MARGIN {
                    let (page, layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
                    current_layer = doc.get_page(page).get_layer(layer);
                    y = PAGE_HEIGHT.0 - MARGIN;
                }
                current_layer.use_text(row, size, Mm(MARGIN), Mm(y), font);
                y -= LINE_HEIGHT;
            }
        }

        Ok(doc.save_to_bytes()?)
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, name: &str, plan: &DietPlan) -> Result<String, ReportError> {
        let lines = layout::report_lines(name, plan, Local::now().date_naive());
        let bytes = self.render_pdf(&lines)?;

        fs::create_dir_all(&self.reports_dir)?;
        let file_name = report_file_name(name);
        let path = self.reports_dir.join(&file_name);
        debug!("Writing report to {}", path.display());
        fs::write(&path, &bytes)?;

        info!("Stored report {} ({} bytes)", file_name, bytes.len());
        Ok(file_name)
    }
}

/// Unique file name for a user's report, safe to use as a single path segment.
pub fn report_file_name(name: &str) -> String {
    let mut stem: String = name
        .chars()
        .take(MAX_STEM_CHARS)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.chars().all(|c| c == '_') {
        stem = "report".to_owned();
    }

    format!("{}_{}_report.pdf", stem, Uuid::new_v4().simple())
}
