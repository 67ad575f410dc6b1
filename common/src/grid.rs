//! 그리드 (시트 스냅샷) 모델
//!
//! 리포트 툴에서 내보낸 표 형식 데이터를 스키마 없이 그대로 보관한다.
//! 모든 탐색은 `Cell::text()` 로 강제 변환된 문자열 위에서 이루어진다.

use chrono::NaiveTime;

/// 셀 값
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    /// 시각 서식 셀 (방송 시작 시각 등)
    Time(NaiveTime),
}

impl Cell {
    /// 탐색용 문자열 (앞뒤 공백 제거, 빈 셀은 "")
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            // 정수값도 "4.0" 처럼 소수점을 남긴다
            Cell::Number(n) => format!("{:?}", n),
            Cell::Time(t) => t.format("%H:%M:%S").to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 숫자로 읽기 (숫자 셀 또는 숫자 문자열)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s)
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// 2차원 셀 테이블 (행 길이는 제각각일 수 있음)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        Self { rows, width }
    }

    /// 문자열 행 목록으로부터 생성 (빈 문자열은 빈 셀)
    pub fn from_text_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<Cell>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// 행 수
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// 가장 긴 행의 열 수
    pub fn width(&self) -> usize {
        self.width
    }

    /// 범위 밖 좌표는 None
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// 좌표의 탐색용 문자열 (범위 밖이면 "")
    pub fn text(&self, row: usize, col: usize) -> String {
        self.get(row, col).map(Cell::text).unwrap_or_default()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_trims() {
        assert_eq!(Cell::Text("  뉴스A 3.1 ".into()).text(), "뉴스A 3.1");
        assert_eq!(Cell::Empty.text(), "");
        assert_eq!(Cell::Number(12.5).text(), "12.5");
    }

    #[test]
    fn test_whole_number_text_keeps_decimal_point() {
        assert_eq!(Cell::Number(4.0).text(), "4.0");
        assert_eq!(Cell::Number(-2.0).text(), "-2.0");
    }

    #[test]
    fn test_cell_time_text() {
        let t = NaiveTime::from_hms_opt(19, 5, 0).unwrap();
        assert_eq!(Cell::Time(t).text(), "19:05:00");
    }

    #[test]
    fn test_ragged_rows() {
        let grid = Grid::from_text_rows(vec![vec!["a"], vec!["b", "c", "d"]]);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.text(0, 2), "");
        assert_eq!(grid.text(1, 2), "d");
        assert_eq!(grid.text(9, 9), "");
        assert!(grid.get(0, 1).is_none());
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Cell::Text(" 7.4 ".into()).as_f64(), Some(7.4));
        assert_eq!(Cell::Text("-".into()).as_f64(), None);
        assert_eq!(Cell::Number(3.0).as_f64(), Some(3.0));
        assert_eq!(Cell::Empty.as_f64(), None);
    }
}
