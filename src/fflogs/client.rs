//! FFLogs API v1 (REST) 클라이언트
//!
//! 정적 API 키를 쿼리 파라미터로 붙여 GET 요청을 보내고, 응답 JSON을 그대로 돌려줍니다.
//! 재시도/캐시/레이트 리밋은 하지 않습니다. 필요하면 호출하는 쪽에서 처리합니다.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::params::Params;
use crate::config::FFLogs as FFLogsConfig;
use crate::error::{Error, Result, UpstreamBody};

/// FFLogs API 클라이언트
pub struct FFLogsClient {
    config: FFLogsConfig,
    http: reqwest::Client,
}

impl FFLogsClient {
    /// 새 FFLogs 클라이언트 생성
    pub fn new(config: FFLogsConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// 이미 구성된 reqwest 클라이언트를 재사용 (커넥션 풀 공유)
    pub fn with_http_client(config: FFLogsConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// 요청 URL 생성
    ///
    /// `<base_url><path>?api_key=<key>&k=v...` 형태. `path`의 세그먼트는 호출 전에 인코딩되어 있어야 합니다.
    pub fn request_url(&self, path: &str, params: &Params) -> String {
        format!(
            "{}{}?api_key={}{}",
            self.config.base_url,
            path,
            self.config.api_key,
            params.to_query_suffix()
        )
    }

    /// GET 요청을 보내고 응답 JSON을 반환
    pub async fn call(&self, path: &str, params: &Params) -> Result<Value> {
        let url = self.request_url(path, params);
        tracing::debug!(path, params = params.len(), "FFLogs request");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = UpstreamBody::parse(response.text().await?);
            tracing::warn!(path, status = status.as_u16(), "FFLogs API error: {}", body);
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `call` 후 응답을 타입으로 변환
    pub(crate) async fn call_as<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        let value = self.call(path, params).await?;
        Ok(serde_json::from_value(value)?)
    }
}
