//! Excel 파일 저장 (CLI용)
//!
//! 공통 라이브러리의 excel_core 로 버퍼를 만들어 파일로 저장한다.

use crate::error::{RatingError, Result};
use news_rating_common::export::excel_core::generate_report_buffer;
use news_rating_common::RatingReport;
use std::path::Path;

pub fn generate_excel(reports: &[RatingReport], output_path: &Path) -> Result<()> {
    let buffer = generate_report_buffer(reports)
        .map_err(|e| RatingError::ExcelGeneration(e.to_string()))?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, buffer)
        .map_err(|e| RatingError::ExcelGeneration(format!("파일 저장 오류: {}", e)))?;

    Ok(())
}
