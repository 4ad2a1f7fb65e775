// Runtime configuration shared across layers

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
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
    pub refresh_account: Option<String>,
    pub refresh_output_path: String,
    pub refresh_interval_minutes: u64,
    pub refresh_fallback_obtained: i64,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub snapshot_store: String,
    pub clickhouse_url: String,
    pub clickhouse_database: String,
    pub clickhouse_user: Option<String>,
    pub clickhouse_password: Option<String>,
}
