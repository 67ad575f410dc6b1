use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("폴더를 찾을 수 없습니다: {0}")]
    FolderNotFound(String),

    #[error("워크북 읽기 오류: {0}")]
    Workbook(String),

    #[error("시트를 찾을 수 없습니다: {0}")]
    SheetNotFound(String),

    #[error("파일명에서 방송일(YYMMDD)을 찾을 수 없습니다: {0}. `--date` 로 지정하세요")]
    DateNotInferred(String),

    #[error("워크북이 없습니다: {0}")]
    NoWorkbooksFound(String),

    #[error("Excel 생성 오류: {0}")]
    ExcelGeneration(String),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] news_rating_common::Error),
}

pub type Result<T> = std::result::Result<T, RatingError>;
