// src/trends/sources/toutiao.rs
use anyhow::{Context, Result};
use serde::Deserialize;

use super::MAX_RECORDS;
use crate::trends::types::TrendingRecord;

#[derive(Debug, Deserialize)]
struct HotBoard {
    #[serde(default)]
    data: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Url", default)]
    url: String,
}

/// The hot board ships ready-made deep links: `Url` is used verbatim and
/// there is no ranking score.
pub fn extract(body: &[u8], fetched_at: &str) -> Result<Vec<TrendingRecord>> {
    let board: HotBoard = serde_json::from_slice(body).context("parsing toutiao hot board json")?;

    let mut out = Vec::new();
    for entry in board.data.into_iter().take(MAX_RECORDS) {
        out.push(TrendingRecord {
            word: entry.title,
            hot_value: None,
            time: fetched_at.to_string(),
            link: entry.url,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_links_are_kept_verbatim() {
        let body = r#"{"data":[{"Title":"今日要闻","Url":"https://www.toutiao.com/trending/1/"}]}"#.as_bytes();
        let out = extract(body, "18:45").unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word, "今日要闻");
        assert_eq!(out[0].link, "https://www.toutiao.com/trending/1/");
        assert_eq!(out[0].hot_value, None);
        assert_eq!(out[0].time, "18:45");
    }

    #[test]
    fn missing_fields_degrade_to_empty_strings() {
        let out = extract(br#"{"data":[{}]}"#, "18:45").unwrap();
        assert_eq!(out[0].word, "");
        assert_eq!(out[0].link, "");
    }

    #[test]
    fn absent_data_is_just_empty_and_non_json_is_an_error() {
        assert!(extract(b"{}", "18:45").unwrap().is_empty());
        assert!(extract(b"<html>busy</html>", "18:45").is_err());
    }
}
