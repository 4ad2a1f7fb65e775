use anyhow::{anyhow, Result};
use reqwest::Url;

pub fn validate_upstream_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value.trim()).map_err(|err| anyhow!("invalid {}: {}", name, err))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!("{} must use http or https", name));
    }
    if url.host_str().is_none() {
        return Err(anyhow!("{} must include a host", name));
    }
    Ok(())
}

pub fn validate_account_name(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("account name is empty"));
    }
    if trimmed.chars().count() > 12 {
        return Err(anyhow!("account name '{}' is longer than 12 characters", trimmed));
    }
    if !trimmed
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '_' | '-'))
    {
        return Err(anyhow!("account name '{}' contains invalid characters", trimmed));
    }
    Ok(())
}
