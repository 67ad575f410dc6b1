//! 종편 뉴스 시청률 집계
//!
//! 네 프로그램 각각에 대해 수도권 유료가구 그리드와 수도권 20-49 그리드를
//! 독립적으로 탐색하고, 결과를 프로그램 키 순서대로 모은다.

use crate::error::Result;
use crate::events::{SearchEvent, SearchObserver};
use crate::grid::Grid;
use crate::locator::{locate_with, MatchResult};
use crate::roster::{parse_broadcast_date, resolve_variants, DayType, ProgramKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 유료가구 그리드 라벨
pub const PAID_GRID: &str = "paid";
/// 20-49 그리드 라벨
pub const DEMO_GRID: &str = "2049";

/// 프로그램 하나의 시청률
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// 일반 (비특집)프로그램명
    pub name: String,
    /// 수도권 유료가구
    pub paid: Option<f64>,
    /// 수도권 20-49
    pub rating_2049: Option<f64>,
}

/// 하루치 집계 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingReport {
    /// 방송일 (YYMMDD)
    pub date: String,
    pub day_type: DayType,
    /// ProgramKey 선언 순서로 정렬됨
    pub ratings: BTreeMap<ProgramKey, RatingRecord>,
}

impl RatingReport {
    pub fn get(&self, key: ProgramKey) -> Option<&RatingRecord> {
        self.ratings.get(&key)
    }

    /// 두 그리드 모두에서 찾지 못한 프로그램
    pub fn missing(&self) -> Vec<ProgramKey> {
        self.ratings
            .iter()
            .filter(|(_, r)| r.paid.is_none() && r.rating_2049.is_none())
            .map(|(k, _)| *k)
            .collect()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 두 그리드에서 네 프로그램의 시청률을 집계
///
/// # Errors
/// 방송일이 "YYMMDD" 로 해석되지 않으면 `Error::InvalidDate`.
/// 프로그램을 찾지 못한 것은 에러가 아니라 `None` 필드로 표현된다.
pub fn aggregate_ratings(grid_paid: &Grid, grid_2049: &Grid, date: &str) -> Result<RatingReport> {
    aggregate_ratings_with(grid_paid, grid_2049, date, &mut ())
}

/// 탐색 이벤트를 관찰자에게 알리며 집계
pub fn aggregate_ratings_with(
    grid_paid: &Grid,
    grid_2049: &Grid,
    date: &str,
    observer: &mut dyn SearchObserver,
) -> Result<RatingReport> {
    let day_type = DayType::from_date(parse_broadcast_date(date)?);
    tracing::info!(date, %day_type, "aggregating program ratings");

    let mut ratings = BTreeMap::new();

    for key in ProgramKey::ALL {
        let variants = resolve_variants(key, day_type);

        let paid = search_grid(grid_paid, PAID_GRID, &variants, observer);
        let rating_2049 = search_grid(grid_2049, DEMO_GRID, &variants, observer);

        tracing::info!(
            program = %key,
            name = %variants[0],
            paid = ?paid.rating(),
            rating_2049 = ?rating_2049.rating(),
            "program rating resolved"
        );

        ratings.insert(
            key,
            RatingRecord {
                name: variants[0].clone(),
                paid: paid.rating(),
                rating_2049: rating_2049.rating(),
            },
        );
    }

    Ok(RatingReport {
        date: date.to_string(),
        day_type,
        ratings,
    })
}

fn search_grid(
    grid: &Grid,
    label: &str,
    variants: &[String],
    observer: &mut dyn SearchObserver,
) -> MatchResult {
    observer.on_event(SearchEvent::SearchStarted {
        grid: label.to_string(),
        variants: variants.to_vec(),
    });

    let result = locate_with(grid, variants, observer);
    if !result.is_found() {
        observer.on_event(SearchEvent::NotFound { grid: label.to_string() });
    }
    result
}
