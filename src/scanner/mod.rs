//! 워크북 폴더 스캔
//!
//! 일괄 처리 대상 워크북을 모으고, 파일명에서 방송일(YYMMDD)을 추정한다.

use crate::error::{RatingError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct WorkbookInfo {
    pub path: PathBuf,
    pub file_name: String,
    /// 파일명에서 추정한 방송일
    pub date: Option<String>,
}

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

pub fn scan_folder(folder: &Path) -> Result<Vec<WorkbookInfo>> {
    if !folder.exists() {
        return Err(RatingError::FolderNotFound(folder.display().to_string()));
    }

    let mut workbooks = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 바로 아래만 (재귀하지 않음)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        // 엑셀이 열어 둔 잠금 파일
        if file_name.starts_with("~$") {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy().to_lowercase();
            if is_workbook_extension(&ext_str) {
                let date = infer_date(&file_name);

                workbooks.push(WorkbookInfo {
                    path: path.to_path_buf(),
                    file_name,
                    date,
                });
            }
        }
    }

    // 파일명으로 정렬
    workbooks.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(workbooks)
}

fn is_workbook_extension(ext: &str) -> bool {
    WORKBOOK_EXTENSIONS.contains(&ext)
}

/// 파일명 안의 첫 6자리 숫자열 (앞뒤가 숫자가 아닌 것)을 방송일로 본다
pub fn infer_date(file_name: &str) -> Option<String> {
    lazy_static::lazy_static! {
        static ref DATE_RE: Regex = Regex::new(r"(?:^|[^0-9])([0-9]{6})(?:[^0-9]|$)").unwrap();
    }

    DATE_RE
        .captures(file_name)
        .map(|cap| cap[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    #[test]
    fn test_is_workbook_extension() {
        assert!(is_workbook_extension("xlsx"));
        assert!(is_workbook_extension("xls"));
        assert!(is_workbook_extension("ods"));
        assert!(!is_workbook_extension("csv"));
        assert!(!is_workbook_extension("json"));
    }

    #[test]
    fn test_infer_date() {
        assert_eq!(infer_date("시청률_250314.xlsx"), Some("250314".into()));
        assert_eq!(infer_date("250315 종편뉴스.xlsx"), Some("250315".into()));
        // 8자리 날짜는 6자리로 보지 않음
        assert_eq!(infer_date("20250314.xlsx"), None);
        assert_eq!(infer_date("rating.xlsx"), None);
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(RatingError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_with_workbooks() {
        let temp_dir = std::env::temp_dir().join("news-rating-test-scan");
        fs::create_dir_all(&temp_dir).unwrap();

        File::create(temp_dir.join("b_250315.xlsx")).unwrap();
        File::create(temp_dir.join("a_250314.XLSX")).unwrap();
        File::create(temp_dir.join("~$a_250314.xlsx")).unwrap();
        File::create(temp_dir.join("memo.txt")).unwrap();

        let result = scan_folder(&temp_dir).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].file_name, "a_250314.XLSX");
        assert_eq!(result[0].date.as_deref(), Some("250314"));
        assert_eq!(result[1].file_name, "b_250315.xlsx");

        fs::remove_dir_all(&temp_dir).ok();
    }
}
