use crate::cli::ExportFormat;
use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 수도권 유료가구 시트 (이름 또는 0부터의 번호)
    pub paid_sheet: String,
    /// 수도권 20-49 시트
    pub demo_sheet: String,
    /// 헤더 기준 탐색 시트
    pub structured_sheet: String,
    pub output_format: ExportFormat,
    /// RUST_LOG 미설정 시 로그 필터
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paid_sheet: "0".into(),
            demo_sheet: "1".into(),
            structured_sheet: "0".into(),
            output_format: ExportFormat::Json,
            log_filter: "info".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RatingError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("news-rating").join("config.json"))
    }

    /// "KEY=VALUE" 형식으로 한 항목 변경
    pub fn set(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| RatingError::Config(format!("KEY=VALUE 형식이 아닙니다: {}", assignment)))?;
        let value = value.trim().to_string();

        match key.trim() {
            "paid_sheet" => self.paid_sheet = value,
            "demo_sheet" => self.demo_sheet = value,
            "structured_sheet" => self.structured_sheet = value,
            "output_format" => {
                self.output_format = value.parse().map_err(RatingError::Config)?;
            }
            "log_filter" => self.log_filter = value,
            other => return Err(RatingError::Config(format!("알 수 없는 설정 항목: {}", other))),
        }
        Ok(())
    }
}
