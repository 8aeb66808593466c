//! 쿼리 파라미터
//!
//! 호출자가 넘긴 필터(metric, difficulty, start, end ...)를 순서대로 보관했다가
//! 그대로 업스트림에 전달합니다. 검증은 하지 않습니다.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Display;

/// RFC 3986 unreserved 문자(`A-Z a-z 0-9 - . _ ~`)를 제외하고 모두 인코딩
pub(crate) const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// 경로 세그먼트/쿼리 키/쿼리 값 하나를 퍼센트 인코딩
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// 경로 세그먼트 하나를 인코딩
///
/// `.`/`..`처럼 점으로만 된 세그먼트는 URL 파서가 `%2E`까지 dot-segment로 해석해 경로를 바꿔버립니다.
/// 그런 세그먼트는 `%` 자체를 한 번 더 인코딩해(`%252E`) 원래 엔드포인트로 보내고, 판단은 업스트림에 맡깁니다.
pub fn encode_segment(input: &str) -> String {
    if !input.is_empty() && input.bytes().all(|b| b == b'.') {
        "%252E".repeat(input.len())
    } else {
        encode_component(input)
    }
}

/// 순서가 유지되는 문자열 키 → 문자열 값 매핑
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// 빌더 형태로 파라미터 추가
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// 파라미터 설정. 같은 키가 이미 있으면 그 자리의 값을 교체합니다.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `&k=v` 형태로 이어 붙인 쿼리 문자열 (키/값 모두 인코딩)
    pub(crate) fn to_query_suffix(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("&{}={}", encode_component(k), encode_component(v)))
            .collect()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: Display> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
