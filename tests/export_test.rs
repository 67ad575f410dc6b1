//! JSON/Excel 출력 통합 테스트

use news_rating::cli::ExportFormat;
use news_rating::export::{self, excel, json};
use news_rating_common::{aggregate_ratings, Grid, ProgramKey, RatingReport};
use tempfile::tempdir;

fn create_test_report(date: &str) -> RatingReport {
    let paid = Grid::from_text_rows(vec![
        vec!["1", "뉴스A 4.1% (최종)"],
        vec!["2", "JTBC뉴스룸 3.2"],
    ]);
    let demo = Grid::from_text_rows(vec![vec!["", "", "뉴스A 1.1"]]);
    aggregate_ratings(&paid, &demo, date).expect("집계 실패")
}

#[test]
fn test_json_single_report_is_object() {
    let report = create_test_report("250314");
    let text = json::to_json(&[report]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert!(value.is_object());
    assert_eq!(value["date"], "250314");
    assert_eq!(value["day_type"], "weekday");
    assert_eq!(value["ratings"]["news_a"]["paid"], 4.1);
    assert_eq!(value["ratings"]["news_a"]["rating_2049"], 1.1);
    assert!(value["ratings"]["mbn"]["paid"].is_null());
}

#[test]
fn test_json_roundtrip_through_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("out").join("report.json");

    let reports = vec![create_test_report("250314"), create_test_report("250315")];
    json::write_json(&reports, &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let loaded: Vec<RatingReport> = serde_json::from_str(&content).unwrap();
    assert_eq!(loaded, reports);
    assert_eq!(loaded[1].get(ProgramKey::Mbn).unwrap().name, "MBN뉴스센터");
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("test_output.xlsx");

    let reports = vec![create_test_report("250314")];
    let result = excel::generate_excel(&reports, &output_path);

    assert!(result.is_ok(), "Excel 생성 실패: {:?}", result.err());
    assert!(output_path.exists(), "Excel 파일이 생성되지 않음");

    let metadata = std::fs::metadata(&output_path).expect("파일 메타데이터 취득 실패");
    assert!(metadata.len() > 0, "Excel 파일이 비어 있음");
}

#[test]
fn test_excel_generation_empty_reports() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.xlsx");

    let result = excel::generate_excel(&[], &output_path);

    // 빈 결과도 정상 처리
    assert!(result.is_ok(), "빈 Excel 생성 실패: {:?}", result.err());
}

#[test]
fn test_export_both_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let reports = vec![create_test_report("250314")];

    let written = export::export_reports(&reports, ExportFormat::Both, dir.path(), "시청률_250314").unwrap();

    assert_eq!(written.len(), 2);
    assert!(dir.path().join("시청률_250314.json").exists());
    assert!(dir.path().join("시청률_250314.xlsx").exists());
}

#[test]
fn test_export_json_to_explicit_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("result.json");
    let reports = vec![create_test_report("250314")];

    let written = export::export_reports(&reports, ExportFormat::Json, &target, "ignored").unwrap();
    assert_eq!(written, vec![target.clone()]);
    assert!(target.exists());
}
