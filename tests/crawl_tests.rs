//! Integration tests for the crawler
//!
//! These tests use wiremock to serve fake directory listings and exercise
//! the full crawl cycle end-to-end, including playlist output.

use url::Url;
use vidgather::crawler::{build_http_client, Classifier, Crawler};
use vidgather::output::write_playlists;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn listing(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

async fn run_crawl(root: &str) -> vidgather::crawler::CollectedMapping {
    let crawler = Crawler::new(
        build_http_client(false).expect("Failed to build client"),
        Url::parse(root).expect("Failed to parse root"),
        Classifier::new(),
    );
    crawler.run().await
}

#[tokio::test]
async fn test_full_crawl_groups_by_folder() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/show/"))
        .respond_with(listing(
            r#"<a href="../">Parent</a>
               <a href="ep1.mp4">ep1.mp4</a>
               <a href="season1/">season1/</a>
               <a href="notes.txt">notes.txt</a>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/show/season1/"))
        .respond_with(listing(
            r#"<a href="../">Parent</a>
               <a href="ep1.mkv">ep1.mkv</a>
               <a href="ep2.mkv">ep2.mkv</a>"#,
        ))
        .mount(&server)
        .await;

    let root = format!("{}/show/", base);
    let collected = run_crawl(&root).await;

    assert_eq!(collected.len(), 2);
    assert_eq!(
        collected.get("root").expect("missing root key"),
        &vec![format!("{}/show/ep1.mp4", base)]
    );
    assert_eq!(
        collected.get("season1").expect("missing season1 key"),
        &vec![
            format!("{}/show/season1/ep1.mkv", base),
            format!("{}/show/season1/ep2.mkv", base),
        ]
    );

    // Prefix invariant: every collected URL sits under the crawl root
    for urls in collected.values() {
        for url in urls {
            assert!(url.starts_with(&root));
        }
    }
}

#[tokio::test]
async fn test_cyclic_listings_terminate_and_fetch_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    // /show/ and /show/loop/ link to each other; /show/ also links to
    // itself. Each page must still be fetched exactly once.
    Mock::given(method("GET"))
        .and(path("/show/"))
        .respond_with(listing(&format!(
            r#"<a href="{base}/show/">self</a>
               <a href="loop/">loop/</a>
               <a href="ep1.mp4">ep1.mp4</a>"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/show/loop/"))
        .respond_with(listing(&format!(
            r#"<a href="{base}/show/">back</a>
               <a href="clip.webm">clip.webm</a>"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let collected = run_crawl(&format!("{}/show/", base)).await;

    assert_eq!(
        collected.get("root").expect("missing root key"),
        &vec![format!("{}/show/ep1.mp4", base)]
    );
    assert_eq!(
        collected.get("loop").expect("missing loop key"),
        &vec![format!("{}/show/loop/clip.webm", base)]
    );

    // Mock expectations (one GET per page) verify on server drop
}

#[tokio::test]
async fn test_failed_branch_does_not_abort_crawl() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/show/"))
        .respond_with(listing(
            r#"<a href="broken/">broken/</a>
               <a href="good/">good/</a>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/show/broken/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/show/good/"))
        .respond_with(listing(r#"<a href="ep1.mp4">ep1.mp4</a>"#))
        .mount(&server)
        .await;

    let collected = run_crawl(&format!("{}/show/", base)).await;

    // The broken branch contributes nothing but the good one survives
    assert_eq!(collected.len(), 1);
    assert_eq!(
        collected.get("good").expect("missing good key"),
        &vec![format!("{}/show/good/ep1.mp4", base)]
    );
}

#[tokio::test]
async fn test_links_outside_root_are_never_followed() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/show/"))
        .respond_with(listing(&format!(
            r#"<a href="{base}/elsewhere/">elsewhere/</a>
               <a href="{base}/elsewhere/escape.mp4">escape.mp4</a>
               <a href="ep1.mp4">ep1.mp4</a>"#,
        )))
        .mount(&server)
        .await;

    // Must never be requested
    Mock::given(method("GET"))
        .and(path("/elsewhere/"))
        .respond_with(listing(r#"<a href="other.mp4">other.mp4</a>"#))
        .expect(0)
        .mount(&server)
        .await;

    let collected = run_crawl(&format!("{}/show/", base)).await;

    assert_eq!(collected.len(), 1);
    assert_eq!(
        collected.get("root").expect("missing root key"),
        &vec![format!("{}/show/ep1.mp4", base)]
    );
}

#[tokio::test]
async fn test_extensionless_subfolder_traversed() {
    let server = MockServer::start().await;
    let base = server.uri();

    // nginx-style listing that omits the trailing slash on folder links
    Mock::given(method("GET"))
        .and(path("/show/"))
        .respond_with(listing(&format!(
            r#"<a href="{base}/show/extras">extras</a>"#,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/show/extras/"))
        .respond_with(listing(r#"<a href="bonus.avi">bonus.avi</a>"#))
        .mount(&server)
        .await;

    let collected = run_crawl(&format!("{}/show/", base)).await;

    assert_eq!(
        collected.get("extras").expect("missing extras key"),
        &vec![format!("{}/show/extras/bonus.avi", base)]
    );
}

#[tokio::test]
async fn test_crawl_then_write_playlists() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/show/"))
        .respond_with(listing(
            r#"<a href="ep1.mp4">ep1.mp4</a>
               <a href="season1/">season1/</a>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/show/season1/"))
        .respond_with(listing(r#"<a href="ep2.mp4">ep2.mp4</a>"#))
        .mount(&server)
        .await;

    let collected = run_crawl(&format!("{}/show/", base)).await;

    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let report = write_playlists(&collected, tmp.path());
    assert_eq!(report.written, 2);
    assert_eq!(report.failed, 0);

    let root_playlist =
        std::fs::read_to_string(tmp.path().join("root/root.m3u")).expect("missing root playlist");
    assert_eq!(root_playlist, format!("{}/show/ep1.mp4\n", base));

    let season_playlist = std::fs::read_to_string(tmp.path().join("season1/season1.m3u"))
        .expect("missing season playlist");
    assert_eq!(season_playlist, format!("{}/show/season1/ep2.mp4\n", base));
}

#[tokio::test]
async fn test_empty_tree_yields_empty_mapping() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/show/"))
        .respond_with(listing(r#"<a href="readme.txt">readme.txt</a>"#))
        .mount(&server)
        .await;

    let collected = run_crawl(&format!("{}/show/", base)).await;
    assert!(collected.is_empty());

    // Writing an empty mapping is a quiet success
    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let report = write_playlists(&collected, tmp.path());
    assert_eq!(report.written, 0);
    assert_eq!(report.failed, 0);
}
