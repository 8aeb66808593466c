//! 느슨한 필드 값
//!
//! FFLogs v1 응답은 같은 필드에 문서와 다른 타입이 오는 경우가 있습니다.
//! 타입이 맞지 않는 값도 버리거나 변환하지 않고 원본 JSON 그대로 보관합니다.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// 응답 레코드의 필드 하나. 키가 없거나 `null`이면 None.
pub type Field<T> = Option<Loose<T>>;

/// 중첩 목록 필드. 원소 하나가 깨져도 나머지 원소는 타입대로 남습니다.
pub type List<T> = Field<Vec<Loose<T>>>;

/// 기대한 타입이면 `Typed`, 아니면 원본 JSON 값 그대로 `Raw`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose<T> {
    Typed(T),
    Raw(Value),
}

impl<T> Loose<T> {
    /// 기대한 타입의 값 (타입 불일치면 None)
    pub fn typed(&self) -> Option<&T> {
        match self {
            Loose::Typed(v) => Some(v),
            Loose::Raw(_) => None,
        }
    }

    /// 타입 불일치로 보관된 원본 값
    pub fn raw(&self) -> Option<&Value> {
        match self {
            Loose::Typed(_) => None,
            Loose::Raw(v) => Some(v),
        }
    }

    pub fn into_typed(self) -> Option<T> {
        match self {
            Loose::Typed(v) => Some(v),
            Loose::Raw(_) => None,
        }
    }
}

impl<T> From<T> for Loose<T> {
    fn from(value: T) -> Self {
        Loose::Typed(value)
    }
}

/// `Option<Loose<T>>` 필드를 바로 읽기 위한 확장
pub trait LooseField<T> {
    /// 필드가 있고 타입도 맞을 때만 값을 돌려줍니다.
    fn typed(&self) -> Option<&T>;
}

impl<T> LooseField<T> for Field<T> {
    fn typed(&self) -> Option<&T> {
        self.as_ref().and_then(Loose::typed)
    }
}

/// 숫자 필드는 원본 [`Number`] 그대로 보관하고, 읽을 때만 f64로 변환
pub trait NumberField {
    fn as_f64(&self) -> Option<f64>;
}

impl NumberField for Field<Number> {
    fn as_f64(&self) -> Option<f64> {
        self.typed().and_then(Number::as_f64)
    }
}

pub trait LooseList<T> {
    /// 타입이 맞는 원소만 순서대로. 목록이 없거나 목록이 아니면 빈 Vec.
    fn typed_items(&self) -> Vec<&T>;
}

impl<T> LooseList<T> for List<T> {
    fn typed_items(&self) -> Vec<&T> {
        self.typed()
            .map(|items| items.iter().filter_map(Loose::typed).collect())
            .unwrap_or_default()
    }
}
