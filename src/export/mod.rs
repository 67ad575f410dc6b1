pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use news_rating_common::RatingReport;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", title));
        let excel_path = output.join(format!("{}.xlsx", title));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// 리포트를 지정 형식으로 저장하고 작성한 파일 경로를 돌려준다
pub fn export_reports(
    reports: &[RatingReport],
    format: ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    let written = match format {
        ExportFormat::Json => {
            let output_path = output_path_for_format(output, title, "json");
            json::write_json(reports, &output_path)?;
            vec![output_path]
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output, title, "xlsx");
            excel::generate_excel(reports, &output_path)?;
            vec![output_path]
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output, title);
            json::write_json(reports, &json_path)?;
            excel::generate_excel(reports, &excel_path)?;
            vec![json_path, excel_path]
        }
    };

    for path in &written {
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(written)
}
