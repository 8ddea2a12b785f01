// src/trends/sources/csdn.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use super::MAX_RECORDS;
use crate::trends::types::{HotValue, TrendingRecord};

#[derive(Debug, Deserialize)]
struct HotRank {
    #[serde(default)]
    code: i64,
    data: Option<Vec<Entry>>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(rename = "articleTitle", default)]
    article_title: String,
    #[serde(rename = "hotRankScore")]
    hot_rank_score: Option<HotValue>,
    #[serde(rename = "articleDetailUrl", default)]
    article_detail_url: String,
}

/// The blog hot rank wraps its list in a `code`/`data` envelope of its own;
/// the source fails unless `code` is 200 and `data` is present.
pub fn extract(body: &[u8], fetched_at: &str) -> Result<Vec<TrendingRecord>> {
    let rank: HotRank = serde_json::from_slice(body).context("parsing csdn hot rank json")?;
    if rank.code != 200 {
        return Err(anyhow!("csdn upstream code {}", rank.code));
    }
    let entries = rank.data.ok_or_else(|| anyhow!("csdn hot rank has no data"))?;

    let mut out = Vec::new();
    for entry in entries.into_iter().take(MAX_RECORDS) {
        out.push(TrendingRecord {
            word: entry.article_title,
            hot_value: Some(entry.hot_rank_score.unwrap_or_else(|| HotValue::from(0))),
            time: fetched_at.to_string(),
            link: entry.article_detail_url,
        });
    }
    Ok(out)
}
