use std::time::Duration;

use picker_engine::{
    CatalogSource, FailureKind, FetchSettings, Fetcher, FileFetcher, ReqwestFetcher, SourceFetcher,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CSV: &str = "name,photo_1,x,desc,hood,src,a,b,c,category\nCafe,c.jpg,,Nice,Old Town,Blog,,,,Cafe\n";

fn http_source(server: &MockServer, route: &str) -> CatalogSource {
    CatalogSource::parse(&format!("{}{route}", server.uri())).expect("valid url")
}

#[tokio::test]
async fn fetcher_returns_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/restaurants.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CSV, "text/csv; charset=utf-8"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let source = http_source(&server, "/restaurants.csv");

    let output = fetcher.fetch(&source).await.expect("fetch ok");
    assert_eq!(output.text, CSV);
    assert_eq!(output.metadata.byte_len, CSV.len() as u64);
    assert_eq!(output.metadata.encoding_label, "UTF-8");
    assert!(output
        .metadata
        .content_type
        .unwrap()
        .starts_with("text/csv"));
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch(&http_source(&server, "/missing"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher
        .fetch(&http_source(&server, "/slow"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/csv")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher
        .fetch(&http_source(&server, "/large"))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn file_fetcher_reads_local_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("restaurants.csv");
    std::fs::write(&file, CSV).unwrap();

    let fetcher = FileFetcher::new(FetchSettings::default());
    let output = fetcher
        .fetch(&CatalogSource::File(file.clone()))
        .await
        .expect("read ok");
    assert_eq!(output.text, CSV);
    assert_eq!(output.metadata.source, file.display().to_string());
    assert_eq!(output.metadata.content_type, None);
}

#[tokio::test]
async fn file_fetcher_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = FileFetcher::new(FetchSettings::default());
    let err = fetcher
        .fetch(&CatalogSource::File(dir.path().join("absent.csv")))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Io);
}

#[tokio::test]
async fn file_fetcher_rejects_oversized_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("big.csv");
    std::fs::write(&file, "0123456789AB").unwrap();

    let fetcher = FileFetcher::new(FetchSettings {
        max_bytes: 4,
        ..FetchSettings::default()
    });
    let err = fetcher.fetch(&CatalogSource::File(file)).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 4,
            actual: Some(12)
        }
    );
}

#[tokio::test]
async fn source_fetcher_dispatches_by_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("remote"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("r.csv");
    std::fs::write(&file, "local").unwrap();

    let fetcher = SourceFetcher::new(FetchSettings::default());
    let remote = fetcher.fetch(&http_source(&server, "/r.csv")).await.unwrap();
    let local = fetcher.fetch(&CatalogSource::File(file)).await.unwrap();
    assert_eq!(remote.text, "remote");
    assert_eq!(local.text, "local");
}

#[test]
fn source_parsing() {
    assert!(matches!(
        CatalogSource::parse("https://example.com/r.csv"),
        Ok(CatalogSource::Http(_))
    ));
    assert_eq!(
        CatalogSource::parse(" data/restaurants.csv "),
        Ok(CatalogSource::File("data/restaurants.csv".into()))
    );
    assert_eq!(
        CatalogSource::parse("  ").unwrap_err().kind,
        FailureKind::InvalidSource
    );
    assert_eq!(
        CatalogSource::parse("http://").unwrap_err().kind,
        FailureKind::InvalidSource
    );
}
