// src/trends/sources/baidu.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use super::{search_link, MAX_RECORDS};
use crate::trends::types::{HotValue, TrendingRecord};

const SEARCH_URL: &str = "https://www.baidu.com/s?wd=";

#[derive(Debug, Default, Deserialize)]
struct Board {
    #[serde(default)]
    data: BoardData,
}

#[derive(Debug, Default, Deserialize)]
struct BoardData {
    #[serde(default)]
    cards: Vec<Card>,
}

#[derive(Debug, Deserialize)]
struct Card {
    #[serde(default)]
    content: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    query: String,
    #[serde(rename = "hotScore")]
    hot_score: Option<HotValue>,
}

/// The realtime board nests its entries inside the first card; a board with
/// no cards is a source failure, not an empty list.
pub fn extract(body: &[u8], fetched_at: &str) -> Result<Vec<TrendingRecord>> {
    let board: Board = serde_json::from_slice(body).context("parsing baidu board json")?;
    let first = board
        .data
        .cards
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("baidu board has no cards"))?;

    let mut out = Vec::new();
    for entry in first.content.into_iter().take(MAX_RECORDS) {
        let link = search_link(SEARCH_URL, &entry.query);
        out.push(TrendingRecord {
            word: entry.query,
            hot_value: Some(entry.hot_score.unwrap_or_else(|| HotValue::from(0))),
            time: fetched_at.to_string(),
            link,
        });
    }
    Ok(out)
}
