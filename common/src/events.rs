//! 탐색 이벤트 (진단용 사이드 채널)
//!
//! 로케이터와 집계기는 UI에 직접 출력하지 않고 `SearchEvent` 를 관찰자에게 넘긴다.
//! 호출 측은 `Vec<SearchEvent>` 로 모으거나 `TracingObserver` 로 로그에 흘린다.

use serde::Serialize;

/// 탐색 과정에서 발생하는 이벤트
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SearchEvent {
    /// 그리드 하나에 대한 탐색 시작
    SearchStarted { grid: String, variants: Vec<String> },
    /// 이름과 숫자를 포함한 후보 셀 발견
    Candidate {
        variant: String,
        row: usize,
        col: usize,
        cell: String,
    },
    /// 후보 셀에서 시청률을 읽지 못함 (탐색 계속)
    Rejected {
        variant: String,
        row: usize,
        col: usize,
        cell: String,
    },
    /// 시청률 확정
    Matched {
        variant: String,
        rating: f64,
        row: usize,
        col: usize,
    },
    /// 모든 후보를 소진
    NotFound { grid: String },
}

/// 이벤트 수신자
pub trait SearchObserver {
    fn on_event(&mut self, event: SearchEvent);
}

/// 이벤트 수집
impl SearchObserver for Vec<SearchEvent> {
    fn on_event(&mut self, event: SearchEvent) {
        self.push(event);
    }
}

/// 이벤트 폐기
impl SearchObserver for () {
    fn on_event(&mut self, _event: SearchEvent) {}
}

/// tracing 으로 전달
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::SearchStarted { grid, variants } => {
                tracing::debug!(%grid, ?variants, "program search started");
            }
            SearchEvent::Candidate { variant, row, col, cell } => {
                tracing::debug!(%variant, row, col, %cell, "candidate cell");
            }
            SearchEvent::Rejected { variant, row, col, cell } => {
                tracing::debug!(%variant, row, col, %cell, "rating parse failed, continuing");
            }
            SearchEvent::Matched { variant, rating, row, col } => {
                tracing::debug!(%variant, rating, row, col, "rating matched");
            }
            SearchEvent::NotFound { grid } => {
                tracing::debug!(%grid, "no rating found");
            }
        }
    }
}

/// 여러 관찰자에 동시에 전달
pub struct Tee<'a, A: SearchObserver + ?Sized, B: SearchObserver + ?Sized>(pub &'a mut A, pub &'a mut B);

impl<A: SearchObserver + ?Sized, B: SearchObserver + ?Sized> SearchObserver for Tee<'_, A, B> {
    fn on_event(&mut self, event: SearchEvent) {
        self.0.on_event(event.clone());
        self.1.on_event(event);
    }
}
