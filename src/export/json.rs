//! JSON 출력
//!
//! 리포트가 1건이면 객체, 여러 건이면 배열로 저장한다.

use crate::error::Result;
use news_rating_common::RatingReport;
use std::path::Path;

pub fn to_json(reports: &[RatingReport]) -> Result<String> {
    let json = match reports {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(json)
}

pub fn write_json(reports: &[RatingReport], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, to_json(reports)?)?;
    Ok(())
}
