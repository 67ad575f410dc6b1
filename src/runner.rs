//! 서브커맨드 실행
//!
//! 워크북 읽기 → 코어 탐색 → 결과 조립까지를 묶는다.
//! 화면 출력은 main.rs 가 담당하고 여기서는 값만 돌려준다.

use crate::error::{RatingError, Result};
use crate::scanner::{self, WorkbookInfo};
use crate::workbook::{load_grid, load_grids, SheetSelector};
use indicatif::{ProgressBar, ProgressStyle};
use news_rating_common::events::Tee;
use news_rating_common::{
    aggregate_ratings_with, locate_structured_with, read_structured_values, RatingReport,
    SearchEvent, StructuredLayout, StructuredLocation, StructuredValues, TracingObserver,
};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// ratings 실행 결과
#[derive(Debug, Clone)]
pub struct RatingsOutcome {
    pub report: RatingReport,
    /// 탐색 로그
    pub events: Vec<SearchEvent>,
}

/// structure 실행 결과
#[derive(Debug, Clone, Serialize)]
pub struct StructureOutcome {
    pub location: StructuredLocation,
    pub values: StructuredValues,
}

/// batch 실행 결과
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<RatingReport>,
    /// (파일명, 오류 메시지)
    pub failures: Vec<(String, String)>,
}

/// 방송일 결정: 지정값 우선, 없으면 파일명에서 추정
pub fn resolve_date(workbook: &Path, date: Option<&str>) -> Result<String> {
    if let Some(date) = date {
        return Ok(date.trim().to_string());
    }

    let file_name = workbook
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    scanner::infer_date(&file_name).ok_or(RatingError::DateNotInferred(file_name))
}

/// 워크북 하나의 시청률 집계
pub fn run_ratings(
    workbook: &Path,
    date: Option<&str>,
    paid_sheet: &SheetSelector,
    demo_sheet: &SheetSelector,
) -> Result<RatingsOutcome> {
    let date = resolve_date(workbook, date)?;
    let grids = load_grids(workbook, &[paid_sheet.clone(), demo_sheet.clone()])?;
    let (grid_paid, grid_2049) = match grids.as_slice() {
        [paid, demo] => (paid, demo),
        _ => return Err(RatingError::SheetNotFound(format!("{} / {}", paid_sheet, demo_sheet))),
    };

    let mut events: Vec<SearchEvent> = Vec::new();
    let mut tracer = TracingObserver;
    let report = aggregate_ratings_with(grid_paid, grid_2049, &date, &mut Tee(&mut events, &mut tracer))?;

    Ok(RatingsOutcome { report, events })
}

/// 헤더 기준 영역 탐색
pub fn run_structure(
    workbook: &Path,
    sheet: &SheetSelector,
    layout: &StructuredLayout,
) -> Result<StructureOutcome> {
    let grid = load_grid(workbook, sheet)?;
    let location = locate_structured_with(&grid, layout)?;
    let values = read_structured_values(&grid, &location);
    Ok(StructureOutcome { location, values })
}

/// 폴더 안의 워크북을 병렬로 집계
///
/// 실패한 워크북은 건너뛰고 `failures` 에 남긴다.
pub fn run_batch(
    folder: &Path,
    paid_sheet: &SheetSelector,
    demo_sheet: &SheetSelector,
    show_progress: bool,
) -> Result<BatchOutcome> {
    let workbooks = scanner::scan_folder(folder)?;
    if workbooks.is_empty() {
        return Err(RatingError::NoWorkbooksFound(folder.display().to_string()));
    }

    let progress = if show_progress {
        let pb = ProgressBar::new(workbooks.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<(String, Result<RatingReport>)> = workbooks
        .par_iter()
        .map(|info| {
            let result = process_workbook(info, paid_sheet, demo_sheet);
            progress.inc(1);
            (info.file_name.clone(), result)
        })
        .collect();
    progress.finish_and_clear();

    let mut outcome = BatchOutcome::default();
    for (file_name, result) in results {
        match result {
            Ok(report) => outcome.reports.push(report),
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "workbook skipped");
                outcome.failures.push((file_name, e.to_string()));
            }
        }
    }

    Ok(outcome)
}

fn process_workbook(
    info: &WorkbookInfo,
    paid_sheet: &SheetSelector,
    demo_sheet: &SheetSelector,
) -> Result<RatingReport> {
    let date = info
        .date
        .as_deref()
        .ok_or_else(|| RatingError::DateNotInferred(info.file_name.clone()))?;
    let outcome = run_ratings(&info.path, Some(date), paid_sheet, demo_sheet)?;
    Ok(outcome.report)
}

/// 프로그램별 결과 표
pub fn format_ratings_table(report: &RatingReport) -> String {
    let mut lines = vec![
        format!("방송일: {} ({})", report.date, report.day_type),
        "| 프로그램명 | 수도권 유료가구 | 수도권 20-49 |".to_string(),
        "|------------|--------------|------------|".to_string(),
    ];
    for record in report.ratings.values() {
        lines.push(format!(
            "| {} | {} | {} |",
            record.name,
            format_rating(record.paid),
            format_rating(record.rating_2049)
        ));
    }
    lines.join("\n")
}

fn format_rating(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => "찾지 못함".to_string(),
    }
}

/// 탐색 로그 표 (사람용)
pub fn format_trace(events: &[SearchEvent]) -> String {
    events
        .iter()
        .map(|event| match event {
            SearchEvent::SearchStarted { grid, variants } => {
                format!("[{}] 검색: {}", grid, variants.join(", "))
            }
            SearchEvent::Candidate { variant, row, col, cell } => {
                format!("  '{}' 발견: 행={}, 열={} / {}", variant, row + 1, col + 1, cell)
            }
            SearchEvent::Rejected { variant, .. } => format!("  '{}' 시청률 추출 실패", variant),
            SearchEvent::Matched { rating, row, col, .. } => {
                format!("  → {}% (행 {}, 열 {})", rating, row + 1, col + 1)
            }
            SearchEvent::NotFound { grid } => format!("  → [{}] 찾지 못함", grid),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use news_rating_common::{aggregate_ratings, Grid};

    #[test]
    fn test_resolve_date_explicit() {
        let date = resolve_date(Path::new("rating.xlsx"), Some(" 250314 ")).unwrap();
        assert_eq!(date, "250314");
    }

    #[test]
    fn test_resolve_date_from_name() {
        let date = resolve_date(Path::new("/data/시청률_250315.xlsx"), None).unwrap();
        assert_eq!(date, "250315");
    }

    #[test]
    fn test_resolve_date_missing() {
        let result = resolve_date(Path::new("rating.xlsx"), None);
        assert!(matches!(result, Err(RatingError::DateNotInferred(_))));
    }

    #[test]
    fn test_format_ratings_table() {
        let grid = Grid::from_text_rows(vec![vec!["", "뉴스A 3.5"]]);
        let report = aggregate_ratings(&grid, &Grid::default(), "250314").unwrap();
        let table = format_ratings_table(&report);
        assert!(table.contains("방송일: 250314 (평일)"));
        assert!(table.contains("| 뉴스A | 3.5% | 찾지 못함 |"));
        assert_eq!(table.lines().count(), 3 + 4);
    }

    #[test]
    fn test_format_trace() {
        let events = vec![
            SearchEvent::SearchStarted { grid: "paid".into(), variants: vec!["뉴스A".into()] },
            SearchEvent::Matched { variant: "뉴스A".into(), rating: 2.0, row: 0, col: 1 },
        ];
        let text = format_trace(&events);
        assert!(text.contains("[paid] 검색: 뉴스A"));
        assert!(text.contains("→ 2% (행 1, 열 2)"));
    }
}
