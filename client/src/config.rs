use anyhow::anyhow;
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

use crate::utils::time::today_in_timezone;

pub const DEFAULT_API_BASE_URL: &str = "https://csi-portal-app.azurewebsites.net";
pub const DEFAULT_PREFS_PATH: &str = "user_prefs.json";
pub const DEFAULT_NOTIFICATIONS_PAGE_SIZE: u32 = 20;
pub const DEFAULT_LIST_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub time_zone: Tz,
    pub prefs_path: PathBuf,
    pub notifications_page_size: u32,
    pub list_page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            time_zone: chrono_tz::UTC,
            prefs_path: PathBuf::from(DEFAULT_PREFS_PATH),
            notifications_page_size: DEFAULT_NOTIFICATIONS_PAGE_SIZE,
            list_page_size: DEFAULT_LIST_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("PORTAL_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = normalize_base_url(&api_base_url)?;

        let time_zone_name = env::var("PORTAL_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid PORTAL_TIMEZONE value: {}", time_zone_name))?;

        let prefs_path = env::var("PORTAL_PREFS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PREFS_PATH));

        let notifications_page_size = env::var("PORTAL_PAGE_SIZE_NOTIFICATIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_NOTIFICATIONS_PAGE_SIZE);

        let list_page_size = env::var("PORTAL_PAGE_SIZE_LISTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_LIST_PAGE_SIZE);

        Ok(ClientConfig {
            api_base_url,
            time_zone,
            prefs_path,
            notifications_page_size,
            list_page_size,
        })
    }

    /// Today's date in the configured time zone.
    pub fn today(&self) -> NaiveDate {
        today_in_timezone(&self.time_zone)
    }
}

pub fn normalize_base_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim();
    url::Url::parse(trimmed)
        .map_err(|e| anyhow!("Invalid PORTAL_API_BASE_URL value {}: {}", trimmed, e))?;
    Ok(trimmed.trim_end_matches('/').to_string())
}
