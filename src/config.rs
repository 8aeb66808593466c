//! 설정 파일 (config.toml)
//!
//! ```toml
//! [fflogs]
//! api_key = "0123456789abcdef"
//! # 또는 키 파일 (설정 파일 기준 상대 경로, 첫 줄만 사용)
//! # api_key_file = "public.key"
//! # base_url = "https://www.fflogs.com:443/v1/"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// FFLogs v1 API 기본 주소
pub const DEFAULT_BASE_URL: &str = "https://www.fflogs.com:443/v1/";

#[derive(Debug, Clone)]
pub struct Config {
    pub fflogs: FFLogs,
}

/// 클라이언트가 사용하는 FFLogs 설정 (키는 이미 해석된 상태)
#[derive(Clone)]
pub struct FFLogs {
    pub api_key: String,
    pub base_url: String,
}

impl FFLogs {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into().trim().to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// 기본 주소 대신 다른 서버를 사용 (테스트/프록시용)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for FFLogs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FFLogs")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

// Debug 출력에 키가 찍히지 않도록 Raw 쪽은 Debug를 두지 않음
#[derive(Deserialize)]
struct RawConfig {
    fflogs: RawFFLogs,
}

#[derive(Deserialize)]
struct RawFFLogs {
    api_key: Option<String>,
    api_key_file: Option<PathBuf>,
    #[serde(default = "default_base_url")]
    base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// 설정 파일 로드. 프로세스 시작 시 한 번만 호출합니다.
pub async fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let path = path.as_ref();
    let toml = read_to_string(path)
        .await
        .context("could not read config file")?;
    let raw: RawConfig = toml::from_str(&toml).context("could not parse config file")?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let api_key = resolve_api_key(&raw.fflogs, base_dir).await?;

    Ok(Config {
        fflogs: FFLogs {
            api_key,
            base_url: raw.fflogs.base_url,
        },
    })
}

// api_key가 api_key_file보다 우선
async fn resolve_api_key(raw: &RawFFLogs, base_dir: &Path) -> anyhow::Result<String> {
    if let Some(key) = &raw.api_key {
        return non_empty(key);
    }

    let Some(file) = &raw.api_key_file else {
        anyhow::bail!("config has neither fflogs.api_key nor fflogs.api_key_file");
    };

    let file = if file.is_absolute() {
        file.clone()
    } else {
        base_dir.join(file)
    };
    let contents = read_to_string(&file)
        .await
        .with_context(|| format!("could not read api key file {}", file.display()))?;

    non_empty(contents.lines().next().unwrap_or_default())
}

fn non_empty(key: &str) -> anyhow::Result<String> {
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("fflogs api key is empty");
    }
    Ok(key.to_string())
}

async fn read_to_string(path: &Path) -> anyhow::Result<String> {
    let mut f = File::open(path).await.context("could not open file")?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .await
        .context("could not read file")?;
    Ok(contents)
}
