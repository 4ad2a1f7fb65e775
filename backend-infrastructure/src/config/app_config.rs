use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;

use backend_domain::{DbConfig, RuntimeConfig};

use crate::config::validation::{validate_account_name, validate_upstream_url};

pub const CONFIG_ENV: &str = "SKILLSCAPE_CONFIG";

/// One week.
const MAX_REFRESH_INTERVAL_MINUTES: u64 = 7 * 24 * 60;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub hiscores_url: String,
    pub collection_log_url: String,
    pub wise_old_man_url: String,
    pub temple_url: String,
    pub user_agent: String,
    pub upstream_timeout_seconds: u64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub checklist_path: String,
    pub snapshot_store: String,
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
    pub refresh_account: Option<String>,
    pub refresh_output_path: String,
    pub refresh_interval_minutes: u64,
    pub refresh_fallback_obtained: i64,
    pub log_format: String,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3234".to_string(),
            hiscores_url: "https://secure.runescape.com/m=hiscore_oldschool/index_lite.ws"
                .to_string(),
            collection_log_url: "https://api.collectionlog.net".to_string(),
            wise_old_man_url: "https://api.wiseoldman.net/v2".to_string(),
            temple_url: "https://templeosrs.com".to_string(),
            user_agent: format!("skillscape-backend/{}", env!("CARGO_PKG_VERSION")),
            upstream_timeout_seconds: 10,
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 30,
            checklist_path: "./checklist.json".to_string(),
            snapshot_store: "clickhouse".to_string(),
            clickhouse_url: "http://127.0.0.1:8123".to_string(),
            clickhouse_database: "skillscape".to_string(),
            clickhouse_user: None,
            clickhouse_password: None,
            refresh_account: None,
            refresh_output_path: "./public/stats.json".to_string(),
            refresh_interval_minutes: 0,
            refresh_fallback_obtained: 0,
            log_format: "text".to_string(),
            log_dir: None,
        }
    }
}

/// Location of the config file, from `SKILLSCAPE_CONFIG` or `./config.toml`.
pub fn config_path() -> PathBuf {
    PathBuf::from(env::var(CONFIG_ENV).unwrap_or_else(|_| "./config.toml".to_string()))
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = config_path();
        let base_dir = path.parent();
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path).await?;
            Self::parse(&content)?
        } else {
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config file: {}", err))
    }

    pub fn normalize(&mut self) {
        self.clickhouse_user = non_blank(self.clickhouse_user.take());
        self.clickhouse_password = non_blank(self.clickhouse_password.take());
        self.refresh_account = non_blank(self.refresh_account.take());
        self.log_dir = non_blank(self.log_dir.take());
        self.snapshot_store = self.snapshot_store.trim().to_lowercase();
        self.log_format = self.log_format.trim().to_lowercase();
        for url in [
            &mut self.hiscores_url,
            &mut self.collection_log_url,
            &mut self.wise_old_man_url,
            &mut self.temple_url,
        ] {
            *url = url.trim().trim_end_matches('/').to_string();
        }
        if self.user_agent.trim().is_empty() {
            self.user_agent = AppConfig::default().user_agent;
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.checklist_path = resolve_path(base, &self.checklist_path);
        self.refresh_output_path = resolve_path(base, &self.refresh_output_path);
        if let Some(dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_upstream_url("hiscores_url", &self.hiscores_url)?;
        validate_upstream_url("collection_log_url", &self.collection_log_url)?;
        validate_upstream_url("wise_old_man_url", &self.wise_old_man_url)?;
        validate_upstream_url("temple_url", &self.temple_url)?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.upstream_timeout_seconds == 0 || self.request_timeout_seconds == 0 {
            return Err(anyhow!("timeouts must be greater than 0"));
        }
        match self.snapshot_store.as_str() {
            "clickhouse" => validate_upstream_url("clickhouse_url", &self.clickhouse_url)?,
            "memory" => {}
            other => return Err(anyhow!("unknown snapshot_store '{}'", other)),
        }
        if !matches!(self.log_format.as_str(), "text" | "json") {
            return Err(anyhow!("unknown log_format '{}'", self.log_format));
        }
        if let Some(account) = &self.refresh_account {
            validate_account_name(account)?;
        }
        if self.refresh_interval_minutes > MAX_REFRESH_INTERVAL_MINUTES {
            return Err(anyhow!(
                "refresh_interval_minutes must be at most {}",
                MAX_REFRESH_INTERVAL_MINUTES
            ));
        }
        if self.refresh_fallback_obtained < 0 {
            return Err(anyhow!("refresh_fallback_obtained must not be negative"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            hiscores_url: self.hiscores_url.clone(),
            collection_log_url: self.collection_log_url.clone(),
            wise_old_man_url: self.wise_old_man_url.clone(),
            temple_url: self.temple_url.clone(),
            user_agent: self.user_agent.clone(),
            upstream_timeout_seconds: self.upstream_timeout_seconds,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            checklist_path: self.checklist_path.clone(),
            refresh_account: self.refresh_account.clone(),
            refresh_output_path: self.refresh_output_path.clone(),
            refresh_interval_minutes: self.refresh_interval_minutes,
            refresh_fallback_obtained: self.refresh_fallback_obtained,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            snapshot_store: self.snapshot_store.clone(),
            clickhouse_url: self.clickhouse_url.clone(),
            clickhouse_database: self.clickhouse_database.clone(),
            clickhouse_user: self.clickhouse_user.clone(),
            clickhouse_password: self.clickhouse_password.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("SKILLSCAPE_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_HISCORES_URL") {
            self.hiscores_url = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_COLLECTION_LOG_URL") {
            self.collection_log_url = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_WISE_OLD_MAN_URL") {
            self.wise_old_man_url = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_TEMPLE_URL") {
            self.temple_url = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_USER_AGENT") {
            self.user_agent = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_UPSTREAM_TIMEOUT_SECONDS") {
            self.upstream_timeout_seconds = value.parse().unwrap_or(self.upstream_timeout_seconds);
        }
        if let Ok(value) = env::var("SKILLSCAPE_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("SKILLSCAPE_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Ok(value) = env::var("SKILLSCAPE_CHECKLIST_PATH") {
            self.checklist_path = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_SNAPSHOT_STORE") {
            self.snapshot_store = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_CLICKHOUSE_URL") {
            self.clickhouse_url = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_CLICKHOUSE_DATABASE") {
            self.clickhouse_database = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_CLICKHOUSE_USER") {
            self.clickhouse_user = Some(value);
        }
        if let Ok(value) = env::var("SKILLSCAPE_CLICKHOUSE_PASSWORD") {
            self.clickhouse_password = Some(value);
        }
        if let Ok(value) = env::var("SKILLSCAPE_REFRESH_ACCOUNT") {
            self.refresh_account = Some(value);
        }
        if let Ok(value) = env::var("SKILLSCAPE_REFRESH_OUTPUT_PATH") {
            self.refresh_output_path = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_REFRESH_INTERVAL_MINUTES") {
            self.refresh_interval_minutes = value.parse().unwrap_or(self.refresh_interval_minutes);
        }
        if let Ok(value) = env::var("SKILLSCAPE_REFRESH_FALLBACK_OBTAINED") {
            self.refresh_fallback_obtained =
                value.parse().unwrap_or(self.refresh_fallback_obtained);
        }
        if let Ok(value) = env::var("SKILLSCAPE_LOG_FORMAT") {
            self.log_format = value;
        }
        if let Ok(value) = env::var("SKILLSCAPE_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
