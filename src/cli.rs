use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "news-rating")]
#[command(about = "종편 뉴스 시청률 추출/정리 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력 (debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 워크북에서 네 프로그램의 시청률을 추출
    Ratings {
        /// 시청률 워크북 (xlsx/xls/ods)
        #[arg(required = true)]
        workbook: PathBuf,

        /// 방송일 YYMMDD (생략 시 파일명에서 추정)
        #[arg(short, long)]
        date: Option<String>,

        /// 수도권 유료가구 시트 (이름 또는 번호)
        #[arg(long)]
        paid_sheet: Option<String>,

        /// 수도권 20-49 시트 (이름 또는 번호)
        #[arg(long)]
        demo_sheet: Option<String>,

        /// 출력 파일/디렉터리 (생략 시 표준 출력)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 출력 형식 (json/excel/both)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// 탐색 로그 표 출력
        #[arg(long)]
        trace: bool,
    },

    /// 헤더 기준으로 뉴스A 영역을 탐색
    Structure {
        /// 시청률 워크북
        #[arg(required = true)]
        workbook: PathBuf,

        /// 대상 시트 (이름 또는 번호)
        #[arg(short, long)]
        sheet: Option<String>,

        /// 레이아웃 설정 JSON 파일
        #[arg(long)]
        layout: Option<PathBuf>,
    },

    /// 폴더 안의 워크북을 일괄 처리
    Batch {
        /// 워크북 폴더
        #[arg(required = true)]
        folder: PathBuf,

        /// 출력 디렉터리 (생략 시 입력 폴더)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 출력 형식 (json/excel/both)
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },

    /// 시각 변환
    Time {
        #[command(subcommand)]
        action: TimeAction,
    },

    /// 설정 표시/변경
    Config {
        /// KEY=VALUE 로 설정 변경
        #[arg(long)]
        set: Vec<String>,

        /// 설정 표시
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum TimeAction {
    /// "9:5" → "09:05:00"
    Normalize { values: Vec<String> },
    /// "HH:MM:SS" → 초
    Seconds { values: Vec<String> },
    /// 초 → "HH:MM:SS"
    Format { values: Vec<u64> },
    /// 두 시각 사이의 길이 (자정 넘김 허용)
    Duration { start: String, end: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
