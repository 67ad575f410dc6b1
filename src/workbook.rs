//! 워크북 읽기
//!
//! calamine 으로 시트를 읽어 `Grid` 로 변환한다.
//! 사용 범위가 A1 에서 시작하지 않는 시트도 원래 좌표를 유지한다.

use crate::error::{RatingError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::{Duration, NaiveDate, NaiveTime};
use news_rating_common::{Cell, Grid};
use std::path::Path;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// 시트 이름 또는 0부터의 번호
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl SheetSelector {
    /// 숫자만이면 번호, 그 외는 이름
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.parse::<usize>() {
            Ok(index) => SheetSelector::Index(index),
            Err(_) => SheetSelector::Name(value.to_string()),
        }
    }
}

impl std::fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetSelector::Index(i) => write!(f, "#{}", i),
            SheetSelector::Name(n) => write!(f, "{}", n),
        }
    }
}

/// 워크북에서 시트 하나를 그리드로 읽는다
pub fn load_grid(path: &Path, sheet: &SheetSelector) -> Result<Grid> {
    let grids = load_grids(path, std::slice::from_ref(sheet))?;
    grids
        .into_iter()
        .next()
        .ok_or_else(|| RatingError::SheetNotFound(sheet.to_string()))
}

/// 워크북을 한 번 열어 여러 시트를 읽는다
pub fn load_grids(path: &Path, sheets: &[SheetSelector]) -> Result<Vec<Grid>> {
    if !path.exists() {
        return Err(RatingError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| RatingError::Workbook(format!("{}: {}", path.display(), e)))?;
    let sheet_names = workbook.sheet_names();

    let mut grids = Vec::with_capacity(sheets.len());
    for selector in sheets {
        let name = match selector {
            SheetSelector::Index(i) => sheet_names.get(*i).cloned(),
            SheetSelector::Name(n) => sheet_names.iter().find(|s| s.trim() == n).cloned(),
        }
        .ok_or_else(|| {
            RatingError::SheetNotFound(format!("{} (시트 목록: {})", selector, sheet_names.join(", ")))
        })?;

        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| RatingError::Workbook(format!("{}: {}", name, e)))?;

        let grid = range_to_grid(&range);
        tracing::debug!(sheet = %name, rows = grid.height(), cols = grid.width(), "sheet loaded");
        grids.push(grid);
    }

    Ok(grids)
}

/// calamine 범위를 절대 좌표 그리드로 변환
pub fn range_to_grid(range: &Range<Data>) -> Grid {
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for source_row in range.rows() {
        let mut row = vec![Cell::Empty; col_offset];
        row.extend(source_row.iter().map(data_to_cell));
        rows.push(row);
    }

    Grid::new(rows)
}

/// 셀 값 변환 (에러 셀은 빈 셀)
pub fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(if *b { "True".into() } else { "False".into() }),
        Data::DateTime(dt) => excel_serial_to_cell(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

/// Excel 시리얼 값: 1 미만은 시각, 그 외는 날짜(시각)
fn excel_serial_to_cell(serial: f64) -> Cell {
    if !serial.is_finite() || serial < 0.0 {
        return Cell::Number(serial);
    }

    let day_seconds = (serial.fract() * SECONDS_PER_DAY).round() as u32 % 86_400;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(day_seconds, 0);

    if serial < 1.0 {
        return time.map(Cell::Time).unwrap_or(Cell::Number(serial));
    }

    let date = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|epoch| epoch.checked_add_signed(Duration::try_days(serial.trunc() as i64)?));
    match (date, time) {
        (Some(date), Some(time)) => Cell::Text(date.and_time(time).format("%Y-%m-%d %H:%M:%S").to_string()),
        _ => Cell::Number(serial),
    }
}
