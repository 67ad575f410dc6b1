//! 에러 타입 정의

use thiserror::Error;

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid broadcast date (expected YYMMDD): {0}")]
    InvalidDate(String),

    #[error("Header row not found: no '{label}' cell in column 0")]
    HeaderRowNotFound { label: String },

    #[error("Program row not found: none of {names:?} under any header column")]
    ProgramRowNotFound { names: Vec<String> },

    #[error("Report generation error: {0}")]
    Report(String),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;
