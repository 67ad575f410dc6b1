//! 시각 정규화
//!
//! 사람이 입력한 시각 표기와 정규형 "HH:MM:SS" 사이를 변환한다.
//! 잘못된 입력으로 일괄 리포트가 중단되지 않도록 모든 함수는 패닉하지 않고
//! 원본 문자열 또는 `None` 을 돌려준다.

use crate::grid::Cell;
use chrono::{NaiveTime, Timelike};

const SECONDS_PER_DAY: u64 = 24 * 3600;

/// 시각 문자열을 "HH:MM:SS" 로 정규화
///
/// - "9:5" → "09:05:00"
/// - "9:5:3" → "09:05:03"
/// - 구성 요소가 2개 미만이면 입력을 그대로 반환
pub fn normalize_time(value: &str) -> String {
    let parts: Vec<&str> = value.split(':').collect();
    match parts.as_slice() {
        [h, m, s, ..] => format!("{}:{}:{}", zero_pad(h), zero_pad(m), zero_pad(s)),
        [h, m] => format!("{}:{}:00", zero_pad(h), zero_pad(m)),
        _ => value.to_string(),
    }
}

/// 시각 서식 값을 "HH:MM:SS" 로 변환
pub fn format_time_of_day(time: &NaiveTime) -> String {
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

/// 셀 값을 시각 문자열로 정규화 (구조형 시각이든 문자열이든)
pub fn normalize_cell_time(cell: &Cell) -> String {
    match cell {
        Cell::Time(t) => format_time_of_day(t),
        Cell::Text(s) => normalize_time(s.trim()),
        other => other.text(),
    }
}

/// "HH:MM[:SS]" 를 총 초로 변환 (해석 불가면 None)
///
/// 초 부분은 "05.5" 같은 소수 표기를 허용하며 소수점 이하는 버린다.
pub fn time_to_seconds(text: &str) -> Option<u64> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() < 2 {
        return None;
    }

    let hours = parse_component(parts[0])?;
    let minutes = parse_component(parts[1])?;
    let seconds = match parts.get(2) {
        Some(raw) => {
            let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
            let truncated = value.trunc();
            // u64::MAX as f64 는 2^64 로 올림되므로 같은 값도 거부
            if truncated < 0.0 || truncated >= u64::MAX as f64 {
                return None;
            }
            truncated as u64
        }
        None => 0,
    };

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// 총 초를 "HH:MM:SS" 로 변환 (시간은 24를 넘어도 됨)
pub fn seconds_to_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// 두 시각 사이의 경과 초
///
/// 종료가 시작보다 이르면 자정을 넘긴 방송으로 보고 하루를 더한다.
/// 하루를 더해도 종료가 시작보다 이르면 None.
pub fn duration_between(start: &str, end: &str) -> Option<u64> {
    let start = time_to_seconds(start)?;
    let end = time_to_seconds(end)?;
    if end >= start {
        Some(end - start)
    } else {
        end.checked_add(SECONDS_PER_DAY)?.checked_sub(start)
    }
}

fn parse_component(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

fn zero_pad(part: &str) -> String {
    let len = part.chars().count();
    if len >= 2 {
        part.to_string()
    } else {
        format!("{}{}", "0".repeat(2 - len), part)
    }
}
