//! News Rating Common Library
//!
//! 시청률 스냅샷 그리드에서 뉴스 프로그램 시청률을 찾는 코어.
//! 파일 입출력 없이 CLI와 다른 표시 계층에서 함께 쓴다.

pub mod grid;
pub mod time;
pub mod roster;
pub mod locator;
pub mod aggregate;
pub mod structured;
pub mod events;
pub mod error;
pub mod export;

pub use grid::{Cell, Grid};
pub use time::{duration_between, normalize_cell_time, normalize_time, seconds_to_time, time_to_seconds};
pub use roster::{parse_broadcast_date, resolve_variants, DayType, ProgramKey};
pub use locator::{extract_rating, locate, locate_with, MatchResult};
pub use aggregate::{aggregate_ratings, aggregate_ratings_with, RatingRecord, RatingReport};
pub use structured::{
    locate_structured, locate_structured_with, read_structured_values, StructuredLayout,
    StructuredLocation, StructuredValues,
};
pub use events::{SearchEvent, SearchObserver, TracingObserver};
pub use error::{Error, Result};
