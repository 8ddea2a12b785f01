// src/trends/types.rs
use serde::{Deserialize, Serialize};

/// One normalized trending entry from a single platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingRecord {
    pub word: String,
    /// `None` serializes as an explicit `null` for platforms without a score.
    pub hot_value: Option<HotValue>,
    /// "HH:MM" local time: the payload's own stamp where one exists,
    /// otherwise the time of fetch.
    pub time: String,
    pub link: String,
}

/// Upstream ranking scores disagree on type: douyin ships integers,
/// baidu/csdn ship numeric strings, weibo ships either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotValue {
    Score(serde_json::Number),
    Text(String),
}

impl From<i64> for HotValue {
    fn from(n: i64) -> Self {
        HotValue::Score(n.into())
    }
}

/// The fixed set of aggregated platforms. One typed extractor per variant,
/// selected statically in `sources::extract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceId {
    Douyin,
    Bilibili,
    Weibo,
    Baidu,
    Toutiao,
    Csdn,
}

impl SourceId {
    pub const ALL: [SourceId; 6] = [
        SourceId::Douyin,
        SourceId::Bilibili,
        SourceId::Weibo,
        SourceId::Baidu,
        SourceId::Toutiao,
        SourceId::Csdn,
    ];

    /// Wire key under `data` in the aggregate envelope.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceId::Douyin => "douyin",
            SourceId::Bilibili => "bilibili",
            SourceId::Weibo => "weibo",
            SourceId::Baidu => "baidu",
            SourceId::Toutiao => "toutiao",
            SourceId::Csdn => "csdn",
        }
    }
}

/// Per-source record lists, one field per platform so serialization always
/// carries all 6 keys. A failed source is an empty array, never a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendBoard {
    pub douyin: Vec<TrendingRecord>,
    pub bilibili: Vec<TrendingRecord>,
    pub weibo: Vec<TrendingRecord>,
    pub baidu: Vec<TrendingRecord>,
    pub toutiao: Vec<TrendingRecord>,
    pub csdn: Vec<TrendingRecord>,
}

impl TrendBoard {
    pub fn set(&mut self, id: SourceId, records: Vec<TrendingRecord>) {
        match id {
            SourceId::Douyin => self.douyin = records,
            SourceId::Bilibili => self.bilibili = records,
            SourceId::Weibo => self.weibo = records,
            SourceId::Baidu => self.baidu = records,
            SourceId::Toutiao => self.toutiao = records,
            SourceId::Csdn => self.csdn = records,
        }
    }
}

/// Top-level response. `code` stays 0 once all sources have been attempted;
/// callers detect a total outage only by every array being empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEnvelope {
    pub code: i32,
    pub message: String,
    pub data: TrendBoard,
}

impl AggregateEnvelope {
    pub fn success(data: TrendBoard) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hot_value_keeps_upstream_types_verbatim() {
        let n: HotValue = serde_json::from_str("4990000").unwrap();
        assert_eq!(n, HotValue::from(4_990_000));
        let s: HotValue = serde_json::from_str("\"4990000\"").unwrap();
        assert_eq!(s, HotValue::Text("4990000".into()));
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"4990000\"");
    }

    #[test]
    fn board_serializes_all_six_keys_when_empty() {
        let v = serde_json::to_value(TrendBoard::default()).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        for id in SourceId::ALL {
            assert!(obj[id.as_str()].as_array().unwrap().is_empty());
        }
    }

    #[test]
    fn absent_hot_value_is_an_explicit_null() {
        let record = TrendingRecord {
            word: "A".into(),
            hot_value: None,
            time: "10:00".into(),
            link: "https://example.com".into(),
        };
        let v = serde_json::to_value(&record).unwrap();
        assert!(v.get("hot_value").unwrap().is_null());
    }
}
