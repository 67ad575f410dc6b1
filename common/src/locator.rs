//! 프로그램 시청률 탐색
//!
//! 스냅샷마다 위치가 달라지는 프로그램 행을 그리드 전체에서 찾아,
//! 자유 텍스트 셀에 섞여 있는 시청률 숫자를 읽는다.
//!
//! ## 탐색 순서
//! 1. 이름 후보 (일반 → 특집)
//! 2. 후보 열 (B~E열, 인덱스 1~4)
//! 3. 행 (위 → 아래)
//!
//! 처음으로 시청률을 읽어낸 셀에서 탐색을 끝낸다.

use crate::events::{SearchEvent, SearchObserver};
use crate::grid::Grid;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::ops::RangeInclusive;

/// 프로그램명이 들어가는 열 범위
pub const CANDIDATE_COLUMNS: RangeInclusive<usize> = 1..=4;

/// 탐색 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchResult {
    Found { rating: f64, row: usize, col: usize },
    NotFound,
}

impl MatchResult {
    pub fn rating(&self) -> Option<f64> {
        match self {
            MatchResult::Found { rating, .. } => Some(*rating),
            MatchResult::NotFound => None,
        }
    }

    /// (행, 열)
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            MatchResult::Found { row, col, .. } => Some((*row, *col)),
            MatchResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let position = self.position();
        let mut state = serializer.serialize_struct("MatchResult", 3)?;
        state.serialize_field("rating", &self.rating())?;
        state.serialize_field("row", &position.map(|(row, _)| row))?;
        state.serialize_field("col", &position.map(|(_, col)| col))?;
        state.end()
    }
}

/// 후보 셀 판정: 비어 있지 않고, 이름을 포함하고, 숫자가 하나 이상 있음
pub fn is_candidate(cell_text: &str, variant: &str) -> bool {
    !cell_text.is_empty() && cell_text.contains(variant) && cell_text.chars().any(char::is_numeric)
}

/// 셀 문자열에서 이름 뒤의 시청률을 읽는다
///
/// "뉴스A 12.3% (최종)" → `Some(12.3)`
///
/// 이름 다음부터 다음 이름 출현 직전까지를 잘라, 첫 '(' 앞까지만 남기고,
/// 끝의 '%' 하나를 떼어 숫자로 해석한다.
pub fn extract_rating(cell_text: &str, variant: &str) -> Option<f64> {
    if !is_candidate(cell_text, variant) {
        return None;
    }

    let after = cell_text.split(variant).nth(1)?.trim();
    let before_paren = after.split('(').next().unwrap_or_default().trim();
    let number = before_paren
        .strip_suffix('%')
        .unwrap_or(before_paren)
        .trim();

    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 이름 후보 목록으로 그리드를 탐색
pub fn locate<S: AsRef<str>>(grid: &Grid, variants: &[S]) -> MatchResult {
    locate_with(grid, variants, &mut ())
}

/// 탐색 과정을 관찰자에게 알리며 그리드를 탐색
pub fn locate_with<S: AsRef<str>>(
    grid: &Grid,
    variants: &[S],
    observer: &mut dyn SearchObserver,
) -> MatchResult {
    for variant in variants.iter().map(AsRef::as_ref) {
        for col in CANDIDATE_COLUMNS {
            for row in 0..grid.height() {
                let cell = grid.text(row, col);
                if !is_candidate(&cell, variant) {
                    continue;
                }

                observer.on_event(SearchEvent::Candidate {
                    variant: variant.to_string(),
                    row,
                    col,
                    cell: cell.clone(),
                });

                match extract_rating(&cell, variant) {
                    Some(rating) => {
                        observer.on_event(SearchEvent::Matched {
                            variant: variant.to_string(),
                            rating,
                            row,
                            col,
                        });
                        return MatchResult::Found { rating, row, col };
                    }
                    None => observer.on_event(SearchEvent::Rejected {
                        variant: variant.to_string(),
                        row,
                        col,
                        cell,
                    }),
                }
            }
        }
    }

    MatchResult::NotFound
}
