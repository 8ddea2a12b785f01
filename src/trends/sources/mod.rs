// src/trends/sources/mod.rs
pub mod baidu;
pub mod bilibili;
pub mod csdn;
pub mod douyin;
pub mod toutiao;
pub mod weibo;

use anyhow::Result;

use crate::trends::types::{SourceId, TrendingRecord};

/// Records kept per source: the upstream's own order, truncated, no resort.
pub const MAX_RECORDS: usize = 10;

const SAFARI_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.3 Safari/605.1.15";
const CHROME_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Fixed upstream endpoint for one platform. URLs and headers are contract
/// critical: changing them changes what is fetched, not how it is processed.
pub struct SourceSpec {
    pub id: SourceId,
    pub url: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
    /// weibo and csdn reject the fetch on a non-2xx status; the other four
    /// attempt extraction regardless.
    pub require_ok: bool,
}

pub const SOURCES: [SourceSpec; 6] = [
    SourceSpec {
        id: SourceId::Douyin,
        url: "https://www.iesdouyin.com/web/api/v2/hotsearch/billboard/word/",
        headers: &[
            ("User-Agent", SAFARI_UA),
            ("Referer", "https://www.douyin.com/"),
        ],
        require_ok: false,
    },
    SourceSpec {
        id: SourceId::Bilibili,
        url: "https://api.bilibili.com/x/web-interface/search/square?limit=10&platform=web",
        headers: &[("User-Agent", SAFARI_UA)],
        require_ok: false,
    },
    SourceSpec {
        id: SourceId::Weibo,
        url: "https://v2.xxapi.cn/api/weibohot",
        headers: &[],
        require_ok: true,
    },
    SourceSpec {
        id: SourceId::Baidu,
        url: "https://top.baidu.com/api/board?platform=wise&tab=realtime",
        headers: &[],
        require_ok: false,
    },
    SourceSpec {
        id: SourceId::Toutiao,
        url: "https://www.toutiao.com/hot-event/hot-board/?origin=toutiao_pc",
        headers: &[],
        require_ok: false,
    },
    SourceSpec {
        id: SourceId::Csdn,
        url: "https://blog.csdn.net/phoenix/web/blog/hotRank?&pageSize=100",
        headers: &[("User-Agent", CHROME_UA)],
        require_ok: true,
    },
];

/// Normalize one platform's raw payload. `fetched_at` is the preformatted
/// "HH:MM" local fetch time, passed in so extraction stays a pure function
/// of its inputs. An `Err` here means the payload was rejected; the caller
/// collapses it to an empty list at the source boundary.
pub fn extract(id: SourceId, body: &[u8], fetched_at: &str) -> Result<Vec<TrendingRecord>> {
    match id {
        SourceId::Douyin => douyin::extract(body),
        SourceId::Bilibili => bilibili::extract(body, fetched_at),
        SourceId::Weibo => weibo::extract(body, fetched_at),
        SourceId::Baidu => baidu::extract(body, fetched_at),
        SourceId::Toutiao => toutiao::extract(body, fetched_at),
        SourceId::Csdn => csdn::extract(body, fetched_at),
    }
}

/// Splice a word into a platform search URL, percent-encoded.
pub(crate) fn search_link(base: &str, word: &str) -> String {
    format!("{base}{}", urlencoding::encode(word))
}
