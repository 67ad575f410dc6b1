//! 시청률 표 Excel 생성 (공통 라이브러리)
//!
//! 리포트 1건당 시트 1장: 헤더 행 + 프로그램별 1행.
//! 찾지 못한 값은 빈 셀로 둔다.

use crate::aggregate::RatingReport;
use crate::error::{Error, Result};
use rust_xlsxwriter::*;
use std::collections::HashSet;

/// 헤더 라벨
pub const HEADER_LABELS: [&str; 3] = ["프로그램", "수도권 유료가구", "수도권 20-49"];

const NAME_COL_WIDTH: f64 = 18.0;
const VALUE_COL_WIDTH: f64 = 16.0;

/// Excel을 버퍼에 생성
pub fn generate_report_buffer(reports: &[RatingReport]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let name_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xCCCCCC));

    let value_format = Format::new()
        .set_num_format("0.00")
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xCCCCCC));

    if reports.is_empty() {
        let worksheet = workbook.add_worksheet();
        write_header(worksheet, &header_format)?;
    }

    let mut used_names = HashSet::new();
    for report in reports {
        let sheet_name = unique_sheet_name(&report.date, &mut used_names);
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name)
            .map_err(|e| Error::Report(format!("시트 이름 설정 오류: {}", e)))?;

        write_header(worksheet, &header_format)?;

        for (index, record) in report.ratings.values().enumerate() {
            let row = index as u32 + 1;
            worksheet
                .write_string_with_format(row, 0, &record.name, &name_format)
                .map_err(|e| Error::Report(format!("프로그램명 쓰기 오류: {}", e)))?;

            for (col, value) in [(1u16, record.paid), (2u16, record.rating_2049)] {
                let written = match value {
                    Some(v) => worksheet.write_number_with_format(row, col, v, &value_format),
                    None => worksheet.write_blank(row, col, &value_format),
                };
                written.map_err(|e| Error::Report(format!("시청률 쓰기 오류: {}", e)))?;
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Report(format!("Excel 저장 오류: {}", e)))
}

fn write_header(worksheet: &mut Worksheet, format: &Format) -> Result<()> {
    for (col, label) in HEADER_LABELS.iter().enumerate() {
        let width = if col == 0 { NAME_COL_WIDTH } else { VALUE_COL_WIDTH };
        worksheet
            .set_column_width(col as u16, width)
            .map_err(|e| Error::Report(format!("열 너비 설정 오류: {}", e)))?;
        worksheet
            .write_string_with_format(0, col as u16, *label, format)
            .map_err(|e| Error::Report(format!("헤더 쓰기 오류: {}", e)))?;
    }
    Ok(())
}

fn unique_sheet_name(date: &str, used: &mut HashSet<String>) -> String {
    let mut name = date.to_string();
    let mut suffix = 2;
    while !used.insert(name.clone()) {
        name = format!("{}-{}", date, suffix);
        suffix += 1;
    }
    name
}
