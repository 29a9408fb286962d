use safer_prices::config::Config;
use safer_prices::error::FetchError;
use safer_prices::{PageClient, PageSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(max_retries: u32) -> PageClient {
    client_with_timeout(max_retries, 5)
}

fn client_with_timeout(max_retries: u32, request_timeout_secs: u64) -> PageClient {
    let config = Config {
        max_retries,
        retry_base_delay_ms: 0,
        request_timeout_secs,
        ..Config::default()
    };
    PageClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/carte/foret/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("var page = {};"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/carte/foret/", server.uri());
    let body = assert_ok!(client(3).fetch(&url).await);
    assert_eq!(body, "var page = {};");
}

#[tokio::test]
async fn test_server_error_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/carte/foret/"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carte/foret/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/carte/foret/", server.uri());
    let body = assert_ok!(client(3).fetch(&url).await);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/carte/terre/Nowhere/", server.uri());
    let err = assert_err!(client(3).fetch(&url).await);
    assert!(matches!(err, FetchError::HttpStatus { status: 404, .. }));
    assert_eq!(err.url(), Some(url.as_str()));
}

#[tokio::test]
async fn test_retries_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let url = format!("{}/carte/foret/", server.uri());
    let err = assert_err!(client(3).fetch(&url).await);
    match err {
        FetchError::RetriesExhausted { attempts, reason, .. } => {
            assert_eq!(attempts, 3);
            assert!(reason.contains("503"), "{}", reason);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_is_retried_until_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .expect(2)
        .mount(&server)
        .await;

    let url = format!("{}/carte/foret/", server.uri());
    let err = assert_err!(client_with_timeout(2, 1).fetch(&url).await);
    assert!(
        matches!(err, FetchError::RetriesExhausted { attempts: 2, .. }),
        "{:?}",
        err
    );
}

#[tokio::test]
async fn test_dropped_connection_is_retried() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepts = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&accepts);
    tokio::spawn(async move {
        // 接受连接后立即断开，不返回任何响应
        while let Ok((stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(stream);
        }
    });

    let url = format!("http://{}/carte/foret/", addr);
    let err = assert_err!(client(4).fetch(&url).await);

    assert!(
        matches!(err, FetchError::RetriesExhausted { attempts: 4, .. }),
        "{:?}",
        err
    );
    assert_eq!(accepts.load(Ordering::SeqCst), 4);
}
