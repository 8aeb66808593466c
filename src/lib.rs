//! FFLogs v1 API 클라이언트
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use fflogs_v1::{FFLogsClient, LooseField, Params};
//!
//! let config = fflogs_v1::config::load("./config.toml").await?;
//! let client = FFLogsClient::new(config.fflogs);
//!
//! let rankings = client
//!     .rankings()
//!     .encounter(32, &Params::new().with("metric", "dps"))
//!     .await?;
//! println!("total: {:?}", rankings.total.typed());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fflogs;


pub use error::{Error, Result, UpstreamBody};
pub use fflogs::*;
