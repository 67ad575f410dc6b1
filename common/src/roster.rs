//! 프로그램명 해석
//!
//! 프로그램 키와 평일/주말 구분으로부터 탐색할 이름 후보를 만든다.
//! 요일별 기본 이름은 `NAME_TABLE` 한 곳에서만 관리한다.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 특집 방송 접두어
pub const SPECIAL_PREFIX: &str = "특집";

/// 추적 대상 뉴스 프로그램 (선언 순서 = 집계 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramKey {
    NewsA,
    Jtbc,
    Mbn,
    TvChosun,
}

impl ProgramKey {
    pub const ALL: [ProgramKey; 4] = [
        ProgramKey::NewsA,
        ProgramKey::Jtbc,
        ProgramKey::Mbn,
        ProgramKey::TvChosun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramKey::NewsA => "news_a",
            ProgramKey::Jtbc => "jtbc",
            ProgramKey::Mbn => "mbn",
            ProgramKey::TvChosun => "tv_chosun",
        }
    }
}

impl fmt::Display for ProgramKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 평일/주말 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    /// 토/일요일은 주말
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Weekday => write!(f, "평일"),
            DayType::Weekend => write!(f, "주말"),
        }
    }
}

/// 프로그램별 기본 이름
struct NameEntry {
    key: ProgramKey,
    weekday: &'static str,
    weekend: &'static str,
}

const NAME_TABLE: [NameEntry; 4] = [
    NameEntry { key: ProgramKey::NewsA, weekday: "뉴스A", weekend: "뉴스A" },
    NameEntry { key: ProgramKey::Jtbc, weekday: "JTBC뉴스룸", weekend: "JTBC뉴스룸" },
    NameEntry { key: ProgramKey::Mbn, weekday: "MBN뉴스7", weekend: "MBN뉴스센터" },
    NameEntry { key: ProgramKey::TvChosun, weekday: "TV조선뉴스9", weekend: "TV조선뉴스7" },
];

/// 키와 요일 구분에 해당하는 기본 이름
pub fn base_name(key: ProgramKey, day_type: DayType) -> &'static str {
    // NAME_TABLE 은 ProgramKey::ALL 과 같은 순서
    let entry = &NAME_TABLE[key as usize];
    debug_assert_eq!(entry.key, key);
    match day_type {
        DayType::Weekday => entry.weekday,
        DayType::Weekend => entry.weekend,
    }
}

/// 탐색 후보 이름 목록: [일반, 특집] 순서
pub fn resolve_variants(key: ProgramKey, day_type: DayType) -> Vec<String> {
    let base = base_name(key, day_type);
    vec![base.to_string(), format!("{}{}", SPECIAL_PREFIX, base)]
}

/// "YYMMDD" 형식의 방송일 해석
pub fn parse_broadcast_date(date: &str) -> Result<NaiveDate> {
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidDate(date.to_string()));
    }
    NaiveDate::parse_from_str(date, "%y%m%d").map_err(|_| Error::InvalidDate(date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_keys() {
        for (entry, key) in NAME_TABLE.iter().zip(ProgramKey::ALL) {
            assert_eq!(entry.key, key);
        }
    }

    #[test]
    fn test_weekday_variants() {
        assert_eq!(
            resolve_variants(ProgramKey::Mbn, DayType::Weekday),
            vec!["MBN뉴스7", "특집MBN뉴스7"]
        );
        assert_eq!(
            resolve_variants(ProgramKey::TvChosun, DayType::Weekday),
            vec!["TV조선뉴스9", "특집TV조선뉴스9"]
        );
    }

    #[test]
    fn test_weekend_variants() {
        assert_eq!(
            resolve_variants(ProgramKey::Mbn, DayType::Weekend),
            vec!["MBN뉴스센터", "특집MBN뉴스센터"]
        );
        assert_eq!(
            resolve_variants(ProgramKey::TvChosun, DayType::Weekend),
            vec!["TV조선뉴스7", "특집TV조선뉴스7"]
        );
    }

    #[test]
    fn test_fixed_names_ignore_day_type() {
        for key in [ProgramKey::NewsA, ProgramKey::Jtbc] {
            assert_eq!(
                resolve_variants(key, DayType::Weekday),
                resolve_variants(key, DayType::Weekend)
            );
        }
        assert_eq!(
            resolve_variants(ProgramKey::NewsA, DayType::Weekday),
            vec!["뉴스A", "특집뉴스A"]
        );
    }

    #[test]
    fn test_parse_broadcast_date() {
        // 2025-03-14 는 금요일
        let date = parse_broadcast_date("250314").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(DayType::from_date(date), DayType::Weekday);

        let saturday = parse_broadcast_date("250315").unwrap();
        assert_eq!(DayType::from_date(saturday), DayType::Weekend);
        let sunday = parse_broadcast_date("250316").unwrap();
        assert_eq!(DayType::from_date(sunday), DayType::Weekend);
    }

    #[test]
    fn test_parse_broadcast_date_invalid() {
        assert!(matches!(parse_broadcast_date("2503"), Err(Error::InvalidDate(_))));
        assert!(matches!(parse_broadcast_date("251332"), Err(Error::InvalidDate(_))));
        assert!(matches!(parse_broadcast_date("25-3-1"), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_key_serialization() {
        assert_eq!(serde_json::to_string(&ProgramKey::TvChosun).unwrap(), "\"tv_chosun\"");
        assert_eq!(ProgramKey::NewsA.to_string(), "news_a");
    }
}
