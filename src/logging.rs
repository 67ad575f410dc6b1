//! 로그 설정
//!
//! stderr 로 tracing 이벤트를 출력한다. `RUST_LOG` 가 있으면 그것을 우선한다.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 전역 subscriber 설치
///
/// `verbose` 이면 설정 필터 대신 debug 수준을 쓴다.
pub fn init(config_filter: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { config_filter };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    // 이미 설치되어 있으면 무시
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
