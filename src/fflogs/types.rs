//! FFLogs v1 응답 타입
//!
//! 모든 필드는 선택적입니다. 응답에 키가 없으면 None이고, 기본값을 만들어 넣지 않습니다.
//! 타입이 문서와 다르면 [`Loose::Raw`]로 원본이 보관됩니다.
//! 숫자는 [`Number`] 그대로 보관하므로 정수가 실수로 바뀌지 않습니다. f64가 필요하면 `NumberField::as_f64`.
//! 중첩 목록은 원소 단위로 매핑되어, 깨진 원소 하나가 목록 전체를 `Raw`로 만들지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::loose::{Field, List, LooseField};
use super::params::Params;

#[cfg(doc)]
use super::loose::Loose;

/// 밀리초 epoch 필드를 UTC 시각으로 변환
fn millis_to_utc(field: &Field<i64>) -> Option<DateTime<Utc>> {
    field.typed().and_then(|ms| DateTime::from_timestamp_millis(*ms))
}

// ---------------------------------------------------------------------------
// zones / classes
// ---------------------------------------------------------------------------

/// 레이드/던전 인스턴스 (Zone)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: Field<i64>,
    /// 영문 Zone 이름
    pub name: Field<String>,
    /// 설정되어 있으면 이 Zone의 랭킹/통계는 더 이상 바뀌지 않음
    pub frozen: Field<bool>,
    pub encounters: List<Encounter>,
    /// 랭킹과 통계는 Bracket별로 집계됨
    pub brackets: List<Bracket>,
}

/// Zone 안의 보스 전투
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub id: Field<i64>,
    pub name: Field<String>,
}

/// Zone 안의 랭킹 구분 (패치 범위 등)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub id: Field<i64>,
    pub name: Field<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: Field<i64>,
    pub name: Field<String>,
    pub specs: List<Spec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub id: Field<i64>,
    pub name: Field<String>,
}

// ---------------------------------------------------------------------------
// rankings
// ---------------------------------------------------------------------------

/// Encounter 랭킹 목록과 전체 개수
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterRankings {
    /// 필터 조건에 맞는 전체 랭킹 수
    pub total: Field<i64>,
    pub rankings: List<EncounterRanking>,
}

/// 캐릭터 또는 길드/팀 하나의 랭킹
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterRanking {
    pub name: Field<String>,
    /// 개인 랭킹이면 DPS/HPS
    pub total: Field<Number>,
    pub class: Field<i64>,
    pub spec: Field<i64>,
    pub guild: Field<String>,
    pub server: Field<String>,
    /// 서버 리전 약칭 (NA, EU, JP ...)
    pub region: Field<String>,
    /// 전투 시간 (ms)
    pub duration: Field<i64>,
    /// 전투 시작 시각 (ms epoch)
    pub start_time: Field<i64>,
    pub damage_taken: Field<i64>,
    pub deaths: Field<i64>,
    pub item_level: Field<Number>,
    pub patch: Field<Number>,
    #[serde(rename = "reportID")]
    pub report_id: Field<String>,
    #[serde(rename = "fightID")]
    pub fight_id: Field<i64>,
    /// 챌린지 모드 랭킹에서만 존재
    pub team: List<TeamMember>,
    /// 유동 인원 레이드에서만 설정됨
    pub size: Field<i64>,
}

impl EncounterRanking {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(&self.start_time)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: Field<String>,
    pub class: Field<i64>,
    pub spec: Field<i64>,
}

/// 캐릭터의 특정 전투 랭킹 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRanking {
    pub rank: Field<i64>,
    pub out_of: Field<i64>,
    pub total: Field<Number>,
    pub class: Field<i64>,
    pub spec: Field<i64>,
    pub guild: Field<String>,
    pub duration: Field<i64>,
    pub start_time: Field<i64>,
    pub item_level: Field<Number>,
    pub patch: Field<Number>,
    #[serde(rename = "reportID")]
    pub report_id: Field<String>,
    #[serde(rename = "fightID")]
    pub fight_id: Field<i64>,
    pub difficulty: Field<i64>,
    pub size: Field<i64>,
    pub estimate: Field<bool>,
    pub encounter: Field<i64>,
}

impl CharacterRanking {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(&self.start_time)
    }
}

// ---------------------------------------------------------------------------
// parses
// ---------------------------------------------------------------------------

/// 캐릭터의 Encounter별 Parse (모든 spec 포함)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parse {
    pub difficulty: Field<i64>,
    pub size: Field<i64>,
    /// 처치 횟수
    pub kill: Field<i64>,
    /// Encounter 이름
    pub name: Field<String>,
    pub specs: List<ParseSpec>,
}

/// spec 하나에 대한 Parse 집계
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseSpec {
    pub class: Field<String>,
    pub spec: Field<String>,
    pub combined: Field<bool>,
    pub data: List<ParseData>,
    pub best_persecondamount: Field<Number>,
    pub best_duration: Field<i64>,
    pub best_historical_percent: Field<Number>,
    pub best_allstar_points: Field<Number>,
    pub best_combined_allstar_points: Field<Number>,
    pub possible_allstar_points: Field<Number>,
    pub historical_total: Field<i64>,
    pub historical_median: Field<Number>,
    pub historical_avg: Field<Number>,
}

/// 전투 하나의 개별 Parse 기록
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseData {
    pub character_id: Field<i64>,
    pub character_name: Field<String>,
    pub persecondamount: Field<Number>,
    pub ilvl: Field<Number>,
    pub duration: Field<i64>,
    pub start_time: Field<i64>,
    pub report_code: Field<String>,
    pub report_fight: Field<i64>,
    pub ranking_id: Field<i64>,
    pub guild: Field<String>,
    pub total: Field<i64>,
    pub rank: Field<i64>,
    pub percent: Field<Number>,
    pub exploit: Field<i64>,
    pub banned: Field<bool>,
    pub historical_count: Field<i64>,
    pub historical_percent: Field<Number>,
}

// ---------------------------------------------------------------------------
// reports / report
// ---------------------------------------------------------------------------

/// 업로드된 로그(Report) 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// 리포트 코드
    pub id: Field<String>,
    pub title: Field<String>,
    pub owner: Field<String>,
    pub zone: Field<i64>,
    pub start: Field<i64>,
    pub end: Field<i64>,
}

impl Report {
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(&self.start)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(&self.end)
    }
}

/// `report/fights` 응답
///
/// 참가자 목록(friendlies, enemies ...)은 형태가 자주 바뀌어 원본 JSON으로 둡니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFights {
    pub lang: Field<String>,
    pub fights: List<Fight>,
    pub friendlies: Field<Vec<Value>>,
    pub enemies: Field<Vec<Value>>,
    pub friendly_pets: Field<Vec<Value>>,
    pub enemy_pets: Field<Vec<Value>>,
    pub phases: Field<Vec<Value>>,
    pub title: Field<String>,
    pub owner: Field<String>,
    pub start: Field<i64>,
    pub end: Field<i64>,
    pub zone: Field<i64>,
}

impl ReportFights {
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(&self.start)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(&self.end)
    }
}

/// 보스 풀 하나. 시각은 리포트 시작 기준 상대값(ms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fight {
    pub id: Field<i64>,
    pub start_time: Field<i64>,
    pub end_time: Field<i64>,
    pub boss: Field<i64>,
    pub size: Field<i64>,
    pub difficulty: Field<i64>,
    pub kill: Field<bool>,
    pub partial: Field<i64>,
    #[serde(rename = "standardComposition")]
    pub standard_composition: Field<bool>,
    #[serde(rename = "bossPercentage")]
    pub boss_percentage: Field<i64>,
    #[serde(rename = "fightPercentage")]
    pub fight_percentage: Field<i64>,
    #[serde(rename = "lastPhaseForPercentageDisplay")]
    pub last_phase_for_percentage_display: Field<i64>,
    pub name: Field<String>,
    #[serde(rename = "zoneID")]
    pub zone_id: Field<i64>,
    #[serde(rename = "zoneName")]
    pub zone_name: Field<String>,
}

/// `report/events` 응답. 한 번에 최대 300개.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEvents {
    pub events: Field<Vec<Value>>,
    /// 다음 페이지 시작 시각. 마지막 페이지면 없음.
    pub next_page_timestamp: Field<i64>,
}

impl ReportEvents {
    /// 다음 페이지 요청 파라미터 (`start`를 nextPageTimestamp로 교체)
    pub fn next_page_params(&self, params: &Params) -> Option<Params> {
        let next = self.next_page_timestamp.typed()?;
        let mut params = params.clone();
        params.insert("start", next);
        Some(params)
    }
}
