// src/trends/sources/douyin.rs
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use super::{search_link, MAX_RECORDS};
use crate::trends::types::{HotValue, TrendingRecord};

const SEARCH_URL: &str = "https://www.douyin.com/search/";

#[derive(Debug, Deserialize)]
struct Billboard {
    active_time: Option<String>,
    #[serde(default)]
    word_list: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    word: String,
    #[serde(default)]
    hot_value: i64,
}

/// The billboard carries one `active_time` ("%Y-%m-%d %H:%M:%S") for the
/// whole list; every record stamps it formatted down to "HH:MM". An absent
/// stamp stays empty; a malformed one rejects the payload.
pub fn extract(body: &[u8]) -> Result<Vec<TrendingRecord>> {
    let billboard: Billboard =
        serde_json::from_slice(body).context("parsing douyin billboard json")?;

    let time = match billboard.active_time.as_deref() {
        Some(ts) => NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S")
            .context("parsing douyin active_time")?
            .format("%H:%M")
            .to_string(),
        None => String::new(),
    };

    let mut out = Vec::new();
    for entry in billboard.word_list.into_iter().take(MAX_RECORDS) {
        let link = search_link(SEARCH_URL, &entry.word);
        out.push(TrendingRecord {
            word: entry.word,
            hot_value: Some(HotValue::from(entry.hot_value)),
            time: time.clone(),
            link,
        });
    }
    Ok(out)
}
