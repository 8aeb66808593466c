//! FFLogs v1 호출 에러 타입

use serde_json::Value;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 네트워크/연결/타임아웃 등 전송 실패
    #[error("FFLogs request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 업스트림이 2xx가 아닌 상태로 응답
    #[error("FFLogs API error: {status} - {body}")]
    Upstream { status: u16, body: UpstreamBody },

    /// 2xx 응답이지만 JSON이 아니거나 문서화된 형태가 아님
    #[error("could not decode FFLogs response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// 업스트림 에러일 때 HTTP 상태 코드
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// 에러 응답 본문. JSON으로 파싱되면 그대로, 아니면 원문 텍스트.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    Json(Value),
    Raw(String),
}

impl UpstreamBody {
    pub(crate) fn parse(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => UpstreamBody::Json(value),
            Err(_) => UpstreamBody::Raw(text),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            UpstreamBody::Json(v) => Some(v),
            UpstreamBody::Raw(_) => None,
        }
    }
}

impl fmt::Display for UpstreamBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamBody::Json(v) => write!(f, "{}", v),
            UpstreamBody::Raw(s) => f.write_str(s),
        }
    }
}
