// src/trends/sources/weibo.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use super::{search_link, MAX_RECORDS};
use crate::trends::types::{HotValue, TrendingRecord};

const SEARCH_URL: &str = "https://s.weibo.com/weibo?q=";

#[derive(Debug, Deserialize)]
struct HotList {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    data: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    title: String,
    hot: Option<HotValue>,
    url: Option<String>,
}

/// The relay API wraps the list in its own `code`; anything but 200 fails
/// the source. Entries ship a deep link most of the time; records fall back
/// to a search URL when it is absent.
pub fn extract(body: &[u8], fetched_at: &str) -> Result<Vec<TrendingRecord>> {
    let hot: HotList = serde_json::from_slice(body).context("parsing weibo hot list json")?;
    if hot.code != 200 {
        return Err(anyhow!("weibo upstream code {}", hot.code));
    }

    let mut out = Vec::new();
    for entry in hot.data.into_iter().take(MAX_RECORDS) {
        let link = entry
            .url
            .unwrap_or_else(|| search_link(SEARCH_URL, &entry.title));
        out.push(TrendingRecord {
            word: entry.title,
            hot_value: Some(entry.hot.unwrap_or_else(|| HotValue::Text(String::new()))),
            time: fetched_at.to_string(),
            link,
        });
    }
    Ok(out)
}
