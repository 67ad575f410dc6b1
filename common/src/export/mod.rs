//! 리포트 출력 코어 (CLI에서 파일로 저장)

#[cfg(feature = "excel")]
pub mod excel_core;
