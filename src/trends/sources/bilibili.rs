// src/trends/sources/bilibili.rs
use anyhow::{Context, Result};
use serde::Deserialize;

use super::{search_link, MAX_RECORDS};
use crate::trends::types::TrendingRecord;

const SEARCH_URL: &str = "https://search.bilibili.com/all?keyword=";

#[derive(Debug, Default, Deserialize)]
struct Square {
    #[serde(default)]
    data: SquareData,
}

#[derive(Debug, Default, Deserialize)]
struct SquareData {
    #[serde(default)]
    trending: Trending,
}

#[derive(Debug, Default, Deserialize)]
struct Trending {
    #[serde(default)]
    list: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    show_name: String,
}

/// The search square exposes no ranking score; records carry a null
/// hot_value. A missing `data.trending.list` path is an empty list, not a
/// rejection.
pub fn extract(body: &[u8], fetched_at: &str) -> Result<Vec<TrendingRecord>> {
    let square: Square =
        serde_json::from_slice(body).context("parsing bilibili search square json")?;

    let mut out = Vec::new();
    for entry in square.data.trending.list.into_iter().take(MAX_RECORDS) {
        let link = search_link(SEARCH_URL, &entry.show_name);
        out.push(TrendingRecord {
            word: entry.show_name,
            hot_value: None,
            time: fetched_at.to_string(),
            link,
        });
    }
    Ok(out)
}
