//! 헤더 기준 영역 탐색 (보조 경로)
//!
//! "프로그램" 헤더 블록이 가로로 반복되는 고정 레이아웃 시트에서
//! 뉴스A 행과 시각, 시청률, 20-49 열 위치를 찾는다.
//!
//! 블록 위치는 시트마다 달라지지만 블록 안의 열 배치는 고정이라고 가정한다:
//! 프로그램 열 +1 = 시각, +2 = 시청률.

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::time::normalize_cell_time;
use serde::{Deserialize, Serialize};

/// 헤더 레이아웃 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredLayout {
    /// 헤더 셀 문자열 (어느 하나와 일치하면 헤더)
    pub header_labels: Vec<String>,
    /// 찾을 프로그램 셀 문자열
    pub program_names: Vec<String>,
    /// 0행에서 20-49 열을 표시하는 문자열
    pub demographic_marker: String,
    /// 프로그램 열부터 20-49 표시를 찾을 열 수
    pub demographic_window: usize,
}

impl Default for StructuredLayout {
    fn default() -> Self {
        Self {
            header_labels: vec!["프로그램".into(), "Program".into()],
            program_names: vec!["뉴스A".into(), "특집뉴스A".into()],
            demographic_marker: "수도권 2049".into(),
            demographic_window: 10,
        }
    }
}

impl StructuredLayout {
    /// JSON 문자열에서 읽기 (생략된 필드는 기본값)
    pub fn from_json(json: &str) -> Result<Self> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<()> {
        if self.header_labels.is_empty() {
            return Err(Error::Config("header_labels must not be empty".into()));
        }
        if self.program_names.is_empty() {
            return Err(Error::Config("program_names must not be empty".into()));
        }
        Ok(())
    }

    fn is_header(&self, text: &str) -> bool {
        self.header_labels.iter().any(|l| l == text)
    }

    fn is_program(&self, text: &str) -> bool {
        self.program_names.iter().any(|n| n == text)
    }
}

/// 탐색된 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredLocation {
    pub header_row: usize,
    pub program_row: usize,
    pub program_col: usize,
    pub time_col: usize,
    pub rating_col: usize,
    /// 0행에 20-49 표시가 없으면 None
    pub demographic_col: Option<usize>,
}

/// 위치에서 읽어낸 값
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredValues {
    pub program: String,
    /// "HH:MM:SS" 정규화된 시각 (해석 불가면 원문)
    pub time: String,
    pub rating: Option<f64>,
    pub rating_2049: Option<f64>,
}

/// 기본 레이아웃으로 뉴스A 영역 탐색
pub fn locate_structured(grid: &Grid) -> Result<StructuredLocation> {
    locate_structured_with(grid, &StructuredLayout::default())
}

/// 지정 레이아웃으로 영역 탐색
///
/// # Errors
/// - 0열에 헤더 셀이 없으면 `Error::HeaderRowNotFound`
/// - 어느 헤더 열 아래에도 프로그램 셀이 없으면 `Error::ProgramRowNotFound`
pub fn locate_structured_with(grid: &Grid, layout: &StructuredLayout) -> Result<StructuredLocation> {
    tracing::debug!(rows = grid.height(), cols = grid.width(), "inspecting grid structure");

    let header_row = (0..grid.height())
        .find(|&row| layout.is_header(&grid.text(row, 0)))
        .ok_or_else(|| Error::HeaderRowNotFound {
            label: layout.header_labels.join("/"),
        })?;

    let header_cols: Vec<usize> = (0..grid.width())
        .filter(|&col| layout.is_header(&grid.text(header_row, col)))
        .collect();
    tracing::debug!(header_row, ?header_cols, "header blocks found");

    for &program_col in &header_cols {
        let found = (header_row + 1..grid.height())
            .find(|&row| layout.is_program(&grid.text(row, program_col)));

        if let Some(program_row) = found {
            let demographic_col = find_demographic_col(grid, program_col, layout);
            if demographic_col.is_none() {
                tracing::warn!(
                    marker = %layout.demographic_marker,
                    program_col,
                    "demographic column not found in window"
                );
            }

            let location = StructuredLocation {
                header_row,
                program_row,
                program_col,
                time_col: program_col + 1,
                rating_col: program_col + 2,
                demographic_col,
            };
            tracing::info!(?location, "structured region located");
            return Ok(location);
        }
    }

    Err(Error::ProgramRowNotFound {
        names: layout.program_names.clone(),
    })
}

fn find_demographic_col(grid: &Grid, program_col: usize, layout: &StructuredLayout) -> Option<usize> {
    let end = (program_col + layout.demographic_window).min(grid.width());
    (program_col..end).find(|&col| grid.text(0, col).contains(&layout.demographic_marker))
}

/// 위치의 셀 값을 읽는다
pub fn read_structured_values(grid: &Grid, location: &StructuredLocation) -> StructuredValues {
    let cell_f64 = |col: usize| {
        grid.get(location.program_row, col)
            .and_then(|cell| cell.as_f64())
    };

    StructuredValues {
        program: grid.text(location.program_row, location.program_col),
        time: grid
            .get(location.program_row, location.time_col)
            .map(normalize_cell_time)
            .unwrap_or_default(),
        rating: cell_f64(location.rating_col),
        rating_2049: location.demographic_col.and_then(cell_f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use chrono::NaiveTime;

    fn blank(rows: usize, cols: usize) -> Vec<Vec<Cell>> {
        vec![vec![Cell::Empty; cols]; rows]
    }

    #[test]
    fn test_basic_location() {
        let mut rows = blank(8, 4);
        rows[0][0] = "프로그램".into();
        rows[5][0] = "뉴스A".into();
        let grid = Grid::new(rows);

        let loc = locate_structured(&grid).unwrap();
        assert_eq!(loc.header_row, 0);
        assert_eq!(loc.program_row, 5);
        assert_eq!(loc.program_col, 0);
        assert_eq!(loc.time_col, 1);
        assert_eq!(loc.rating_col, 2);
        assert_eq!(loc.demographic_col, None);
    }

    #[test]
    fn test_english_header_by_default() {
        let mut rows = blank(4, 4);
        rows[1][0] = "Program".into();
        rows[3][0] = "특집뉴스A".into();
        let grid = Grid::new(rows);

        let loc = locate_structured(&grid).unwrap();
        assert_eq!(loc.header_row, 1);
        assert_eq!(loc.program_row, 3);
    }

    #[test]
    fn test_no_header_row() {
        let mut rows = blank(3, 3);
        // 0열이 아니면 헤더로 보지 않음
        rows[0][1] = "프로그램".into();
        let grid = Grid::new(rows);
        assert!(matches!(
            locate_structured(&grid),
            Err(Error::HeaderRowNotFound { .. })
        ));
    }

    #[test]
    fn test_header_without_program_row() {
        let mut rows = blank(4, 3);
        rows[1][0] = "프로그램".into();
        rows[2][0] = "JTBC뉴스룸".into();
        let grid = Grid::new(rows);
        assert!(matches!(
            locate_structured(&grid),
            Err(Error::ProgramRowNotFound { .. })
        ));
    }

    #[test]
    fn test_second_header_block() {
        let mut rows = blank(6, 12);
        rows[0][6] = "수도권 2049 (%)".into();
        rows[1][0] = "프로그램".into();
        rows[1][4] = " 프로그램 ".into();
        rows[2][0] = "드라마".into();
        rows[3][4] = "특집뉴스A".into();
        let grid = Grid::new(rows);

        let loc = locate_structured(&grid).unwrap();
        assert_eq!(loc.header_row, 1);
        assert_eq!(loc.program_row, 3);
        assert_eq!(loc.program_col, 4);
        assert_eq!(loc.time_col, 5);
        assert_eq!(loc.rating_col, 6);
        assert_eq!(loc.demographic_col, Some(6));
    }

    #[test]
    fn test_demographic_window_is_bounded() {
        let mut rows = blank(3, 14);
        rows[0][0] = "프로그램".into();
        rows[0][12] = "수도권 2049".into();
        rows[2][0] = "뉴스A".into();
        let grid = Grid::new(rows);
        assert_eq!(locate_structured(&grid).unwrap().demographic_col, None);

        let wide = StructuredLayout {
            demographic_window: 13,
            ..Default::default()
        };
        assert_eq!(locate_structured_with(&grid, &wide).unwrap().demographic_col, Some(12));
    }

    #[test]
    fn test_read_values() {
        let mut rows = blank(3, 5);
        rows[0][0] = "프로그램".into();
        rows[0][3] = "수도권 2049".into();
        rows[2][0] = "뉴스A".into();
        rows[2][1] = Cell::Time(NaiveTime::from_hms_opt(19, 50, 0).unwrap());
        rows[2][2] = Cell::Number(4.35);
        rows[2][3] = "1.2".into();
        let grid = Grid::new(rows);

        let loc = locate_structured(&grid).unwrap();
        let values = read_structured_values(&grid, &loc);
        assert_eq!(values.program, "뉴스A");
        assert_eq!(values.time, "19:50:00");
        assert_eq!(values.rating, Some(4.35));
        assert_eq!(values.rating_2049, Some(1.2));
    }

    #[test]
    fn test_layout_from_json() {
        let layout = StructuredLayout::from_json(r#"{"header_labels": ["Program"]}"#).unwrap();
        assert_eq!(layout.header_labels, vec!["Program"]);
        assert_eq!(layout.demographic_window, 10);

        assert!(matches!(
            StructuredLayout::from_json(r#"{"program_names": []}"#),
            Err(Error::Config(_))
        ));
    }
}
