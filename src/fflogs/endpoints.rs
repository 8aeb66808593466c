//! API 카테고리별 엔드포인트
//!
//! - `zones`, `classes`: 게임 데이터 목록
//! - `rankings`: Encounter/캐릭터 랭킹
//! - `parses`: 캐릭터 Parse
//! - `reports`: 길드/유저 리포트 목록
//! - `report`: 리포트 하나의 fights/events/tables
//!
//! 추가 필터(metric, difficulty, partition, start, end ...)는 [`Params`]로 그대로 전달됩니다.
//! 목록은 https://www.fflogs.com/v1/docs/ 참고.

use serde_json::Value;

use super::client::FFLogsClient;
use super::params::{encode_segment, Params};
use super::types::{
    CharacterRanking, Class, EncounterRankings, Parse, Report, ReportEvents, ReportFights, Zone,
};
use crate::error::Result;

/// 캐릭터 경로 (`{name}/{server}/{region}`), 각 세그먼트 인코딩
fn character_path(name: &str, server: &str, region: &str) -> String {
    format!(
        "{}/{}/{}",
        encode_segment(name),
        encode_segment(server),
        encode_segment(region)
    )
}

impl FFLogsClient {
    pub fn zones(&self) -> Zones<'_> {
        Zones(self)
    }

    pub fn classes(&self) -> Classes<'_> {
        Classes(self)
    }

    pub fn rankings(&self) -> Rankings<'_> {
        Rankings(self)
    }

    pub fn parses(&self) -> Parses<'_> {
        Parses(self)
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports(self)
    }

    pub fn report(&self) -> ReportApi<'_> {
        ReportApi(self)
    }
}

/// `/zones`
pub struct Zones<'a>(&'a FFLogsClient);

impl Zones<'_> {
    /// 모든 Zone 목록. 각 Zone은 인스턴스 하나와 그 Encounter들.
    pub async fn list(&self) -> Result<Vec<Zone>> {
        self.list_with(&Params::new()).await
    }

    pub async fn list_with(&self, params: &Params) -> Result<Vec<Zone>> {
        self.0.call_as("zones", params).await
    }
}

/// `/classes`
pub struct Classes<'a>(&'a FFLogsClient);

impl Classes<'_> {
    pub async fn list(&self) -> Result<Vec<Class>> {
        self.list_with(&Params::new()).await
    }

    pub async fn list_with(&self, params: &Params) -> Result<Vec<Class>> {
        self.0.call_as("classes", params).await
    }
}

/// `/rankings`
pub struct Rankings<'a>(&'a FFLogsClient);

impl Rankings<'_> {
    /// Encounter 랭킹 (전체 개수 + 캐릭터 또는 길드/팀별 랭킹)
    ///
    /// # Arguments
    /// * `encounter_id` - `/zones`에서 얻은 Encounter ID
    pub async fn encounter(&self, encounter_id: u32, params: &Params) -> Result<EncounterRankings> {
        self.0
            .call_as(&format!("rankings/encounter/{}", encounter_id), params)
            .await
    }

    /// 캐릭터의 전투별 랭킹
    ///
    /// # Arguments
    /// * `name` - 캐릭터 이름
    /// * `server` - 서버 이름 (예: "Mana", "Tonberry")
    /// * `region` - 리전 약칭 (예: "JP", "NA", "EU")
    pub async fn character(
        &self,
        name: &str,
        server: &str,
        region: &str,
        params: &Params,
    ) -> Result<Vec<CharacterRanking>> {
        let path = format!("rankings/character/{}", character_path(name, server, region));
        self.0.call_as(&path, params).await
    }
}

/// `/parses`
pub struct Parses<'a>(&'a FFLogsClient);

impl Parses<'_> {
    /// Zone 내 캐릭터의 모든 Parse (랭킹 외 기록 포함, 모든 spec)
    pub async fn character(
        &self,
        name: &str,
        server: &str,
        region: &str,
        params: &Params,
    ) -> Result<Vec<Parse>> {
        let path = format!("parses/character/{}", character_path(name, server, region));
        self.0.call_as(&path, params).await
    }
}

/// `/reports`
pub struct Reports<'a>(&'a FFLogsClient);

impl Reports<'_> {
    /// 길드 캘린더 리포트 목록
    pub async fn guild(
        &self,
        guild: &str,
        server: &str,
        region: &str,
        params: &Params,
    ) -> Result<Vec<Report>> {
        let path = format!("reports/guild/{}", character_path(guild, server, region));
        self.0.call_as(&path, params).await
    }

    /// 유저 개인 로그 리포트 목록
    pub async fn user(&self, username: &str, params: &Params) -> Result<Vec<Report>> {
        let path = format!("reports/user/{}", encode_segment(username));
        self.0.call_as(&path, params).await
    }
}

/// `/report`
pub struct ReportApi<'a>(&'a FFLogsClient);

impl ReportApi<'_> {
    /// 리포트의 전투(보스 풀)와 참가자 목록
    pub async fn fights(&self, code: &str, params: &Params) -> Result<ReportFights> {
        let path = format!("report/fights/{}", encode_segment(code));
        self.0.call_as(&path, params).await
    }

    /// 이벤트 목록 (최대 300개)
    ///
    /// 더 있으면 `nextPageTimestamp`가 포함됩니다. [`ReportEvents::next_page_params`]로 다음 요청을 만들 수 있습니다.
    pub async fn events(&self, code: &str, params: &Params) -> Result<ReportEvents> {
        let path = format!("report/events/{}", encode_segment(code));
        self.0.call_as(&path, params).await
    }

    /// Tables 패널 데이터. 사이트에 맞춰 자주 바뀌므로 원본 JSON 그대로 반환합니다.
    pub async fn tables(&self, view: &str, code: &str, params: &Params) -> Result<Value> {
        let path = format!(
            "report/tables/{}/{}",
            encode_segment(view),
            encode_segment(code)
        );
        self.0.call(&path, params).await
    }
}
