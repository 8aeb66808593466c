//! FFLogs v1 관련 모듈
//!
//! - `client`: 요청 디스패처 (URL 생성, GET, JSON 파싱)
//! - `endpoints`: 카테고리별 엔드포인트 (zones, classes, rankings, parses, reports, report)
//! - `params`: 쿼리 파라미터와 퍼센트 인코딩
//! - `types`: 응답 타입
//! - `loose`: 타입이 맞지 않는 값을 보존하는 필드 래퍼

pub mod client;
pub mod endpoints;
pub mod loose;
pub mod params;
pub mod types;

// 편의를 위한 re-export
pub use client::FFLogsClient;
pub use endpoints::{Classes, Parses, Rankings, ReportApi, Reports, Zones};
pub use loose::{Field, List, Loose, LooseField, LooseList, NumberField};
pub use params::{encode_component, encode_segment, Params};
pub use types::*;
