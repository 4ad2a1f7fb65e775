use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Local};
use reqwest::Client;
use serde_json::Value;
use tokio::fs;
use tracing::{error, info, warn};

use backend_application::AppState;
use backend_domain::{
    current_millis, milestones, CollectionLogSummary, RuntimeConfig, SkillLevel,
    StatsDocument, DEFAULT_COLLECTION_LOG_TOTAL,
};

use crate::utils::{build_http_client, join_url};

/// Refreshes the stats document every `refresh_interval_minutes`. Returns at
/// once when the interval is zero or no account is configured.
pub async fn schedule_refresh(state: AppState) {
    let config = state.config;
    let Some(account) = config.refresh_account.clone() else {
        return;
    };
    if config.refresh_interval_minutes == 0 {
        return;
    }
    let interval = refresh_interval(config.refresh_interval_minutes);
    info!(account = %account, minutes = config.refresh_interval_minutes, "stats refresh scheduled");
    loop {
        if let Err(err) = run_refresh(&config, &account).await {
            error!("stats refresh failed: {}", err);
        }
        tokio::time::sleep(interval).await;
    }
}

fn refresh_interval(minutes: u64) -> Duration {
    Duration::from_secs(minutes.saturating_mul(60))
}

pub async fn run_refresh(config: &RuntimeConfig, account: &str) -> Result<StatsDocument> {
    let client = build_http_client(config)?;
    let skills = fetch_skills(&client, config, account).await?;

    let obtained = match fetch_obtained(&client, config, account).await {
        Ok(found) => found,
        Err(err) => {
            warn!(account = %account, "collection log count unavailable: {}", err);
            None
        }
    };
    let last_known = read_last_known_obtained(&config.refresh_output_path).await;
    let obtained = resolve_obtained(obtained, last_known, config.refresh_fallback_obtained);

    let document = build_stats_document(account, skills, obtained, Local::now());
    write_stats_document(&config.refresh_output_path, &document).await?;
    info!(
        account = %account,
        obtained = document.collection_log.obtained,
        total = document.collection_log.total,
        path = %config.refresh_output_path,
        "stats document written"
    );
    Ok(document)
}

async fn fetch_skills(
    client: &Client,
    config: &RuntimeConfig,
    account: &str,
) -> Result<BTreeMap<String, SkillLevel>> {
    let url = join_url(&config.wise_old_man_url, &format!("players/{}", account));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        bail!("wise old man responded {}", status);
    }
    let body: Value = response.json().await?;
    parse_skills(&body)
}

async fn fetch_obtained(
    client: &Client,
    config: &RuntimeConfig,
    account: &str,
) -> Result<Option<i64>> {
    let url = join_url(&config.temple_url, "api/player_info.php");
    let cache_buster = current_millis().to_string();
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .query(&[
            ("player", account),
            ("data", "combined"),
            ("cloginfo", "1"),
            ("t", cache_buster.as_str()),
        ])
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        bail!("temple responded {}", status);
    }
    let body = response.text().await?;
    Ok(parse_temple_obtained(&body))
}

/// Skill levels from a player document's `latestSnapshot.data.skills`.
pub fn parse_skills(body: &Value) -> Result<BTreeMap<String, SkillLevel>> {
    let skills = body
        .pointer("/latestSnapshot/data/skills")
        .and_then(Value::as_object)
        .ok_or_else(|| anyhow!("player document has no latest snapshot skills"))?;
    Ok(skills
        .iter()
        .filter_map(|(name, entry)| {
            let entry = entry.as_object()?;
            let level = entry.get("level").and_then(Value::as_i64).unwrap_or(1);
            let xp = entry
                .get("experience")
                .and_then(Value::as_i64)
                .unwrap_or_default();
            Some((name.clone(), SkillLevel { level, xp: xp.max(0) }))
        })
        .collect())
}

/// Temple sometimes answers with an HTML error page, so the body must look like
/// a JSON object before it is parsed. Zero counts as absent.
pub fn parse_temple_obtained(body: &str) -> Option<i64> {
    let trimmed = body.trim();
    if !trimmed.starts_with('{') {
        return None;
    }
    let value: Value = serde_json::from_str(trimmed).ok()?;
    value
        .pointer("/data/items_obtained")
        .and_then(|found| match found {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse::<i64>().ok(),
            _ => None,
        })
        .filter(|count| *count > 0)
}

pub fn resolve_obtained(fetched: Option<i64>, last_known: Option<i64>, fallback: i64) -> i64 {
    fetched.or(last_known).unwrap_or(fallback)
}

async fn read_last_known_obtained(path: &str) -> Option<i64> {
    let content = fs::read_to_string(path).await.ok()?;
    let document: StatsDocument = serde_json::from_str(&content).ok()?;
    Some(document.collection_log.obtained).filter(|count| *count > 0)
}

pub fn build_stats_document(
    account: &str,
    skills: BTreeMap<String, SkillLevel>,
    obtained: i64,
    now: DateTime<Local>,
) -> StatsDocument {
    StatsDocument {
        last_updated: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        account_name: account.to_string(),
        milestones: milestones(&skills),
        skills,
        collection_log: CollectionLogSummary::from_counts(obtained, DEFAULT_COLLECTION_LOG_TOTAL),
    }
}

async fn write_stats_document(path: &str, document: &StatsDocument) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    let content = serde_json::to_string_pretty(document)?;
    fs::write(path, content).await?;
    Ok(())
}
