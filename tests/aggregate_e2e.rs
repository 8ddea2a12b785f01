// tests/aggregate_e2e.rs
//
// End-to-end over the real fetch path: captured upstream payloads are served
// from a local Axum listener on an ephemeral port, the aggregator's endpoint
// table is pointed at it, and GET / is driven through the router. One source
// is left on a dead port to exercise the partial-failure policy.

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use tower::ServiceExt as _;

use hotboard::trends::fetch::FetchExecutor;
use hotboard::{create_router, AppState, SourceEndpoint, SourceId, TrendAggregator};

const BODY_LIMIT: usize = 1024 * 1024;

const DOUYIN_BODY: &str = r#"{"active_time":"2024-01-01 12:34:56","word_list":[{"word":"热搜词","hot_value":100},{"word":"B","hot_value":90}]}"#;
const BILIBILI_BODY: &str = r#"{"data":{"trending":{"list":[{"show_name":"番剧更新"}]}}}"#;
const BAIDU_BODY: &str =
    r#"{"data":{"cards":[{"content":[{"query":"热点","hotScore":"4990000"}]}]}}"#;
const TOUTIAO_BODY: &str =
    r#"{"data":[{"Title":"今日要闻","Url":"https://www.toutiao.com/trending/1/"}]}"#;
const CSDN_BODY: &str = r#"{"code":200,"data":[{"articleTitle":"Rust 异步","hotRankScore":"97","articleDetailUrl":"https://blog.csdn.net/a/1"}]}"#;

/// Serve the captured payloads on an ephemeral port; returns the base URL.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/douyin", get(|| async { DOUYIN_BODY }))
        .route("/bilibili", get(|| async { BILIBILI_BODY }))
        .route("/baidu", get(|| async { BAIDU_BODY }))
        .route("/toutiao", get(|| async { TOUTIAO_BODY }))
        .route("/csdn", get(|| async { CSDN_BODY }))
        .route(
            "/flaky-csdn",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, CSDN_BODY) }),
        )
        .route(
            "/flaky-toutiao",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, TOUTIAO_BODY) }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture upstream");
    let addr = listener.local_addr().expect("fixture upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fixture upstream");
    });
    format!("http://{addr}")
}

/// All sources against the fixture upstream, except weibo on a dead port.
fn endpoints_against(base: &str) -> Vec<SourceEndpoint> {
    SourceId::ALL
        .iter()
        .map(|&id| {
            let url = match id {
                SourceId::Weibo => "http://127.0.0.1:1/".to_string(),
                other => format!("{base}/{}", other.as_str()),
            };
            SourceEndpoint {
                id,
                url,
                headers: &[],
                require_ok: false,
            }
        })
        .collect()
}

#[tokio::test]
async fn five_populated_sources_and_one_dead_share_a_success_envelope() {
    let base = spawn_upstream().await;
    let aggregator =
        TrendAggregator::with_endpoints(FetchExecutor::new(), endpoints_against(&base));
    let app = create_router(AppState {
        aggregator: Arc::new(aggregator),
    });

    let req = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("build GET /");
    let resp = app.oneshot(req).await.expect("oneshot /");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    let text = String::from_utf8(bytes.clone()).expect("utf8 body");

    // CJK words stay literal UTF-8 in the serialized envelope.
    assert!(text.contains("热搜词"));
    assert!(!text.contains("\\u70ed"));

    let v: serde_json::Value = serde_json::from_slice(&bytes).expect("parse envelope");
    assert_eq!(v["code"], 0);
    assert_eq!(v["message"], "success");

    let data = &v["data"];
    assert_eq!(data["weibo"].as_array().map(Vec::len), Some(0));
    assert_eq!(data["douyin"].as_array().map(Vec::len), Some(2));
    assert_eq!(data["douyin"][0]["word"], "热搜词");
    assert_eq!(data["douyin"][0]["hot_value"], 100);
    assert_eq!(data["douyin"][0]["time"], "12:34");
    assert_eq!(
        data["douyin"][0]["link"],
        "https://www.douyin.com/search/%E7%83%AD%E6%90%9C%E8%AF%8D"
    );
    assert_eq!(data["bilibili"][0]["hot_value"], serde_json::Value::Null);
    assert_eq!(data["baidu"][0]["hot_value"], "4990000");
    assert_eq!(data["toutiao"][0]["link"], "https://www.toutiao.com/trending/1/");
    assert_eq!(data["csdn"][0]["hot_value"], "97");
}

#[tokio::test]
async fn non_success_status_only_fails_sources_that_require_it() {
    let base = spawn_upstream().await;
    let endpoints = vec![
        SourceEndpoint {
            id: SourceId::Csdn,
            url: format!("{base}/flaky-csdn"),
            headers: &[],
            require_ok: true,
        },
        SourceEndpoint {
            id: SourceId::Toutiao,
            url: format!("{base}/flaky-toutiao"),
            headers: &[],
            require_ok: false,
        },
    ];
    let aggregator = TrendAggregator::with_endpoints(FetchExecutor::new(), endpoints);

    let board = aggregator.fetch_board().await;
    assert!(
        board.csdn.is_empty(),
        "csdn requires a 2xx and must come back empty"
    );
    assert_eq!(
        board.toutiao.len(),
        1,
        "toutiao parses whatever body it gets regardless of status"
    );
    assert!(board.weibo.is_empty(), "unconfigured sources stay empty");
}
