//! Wire-level tests for `HttpTransport` against a local mock server.

#![cfg(not(target_arch = "wasm32"))]

use draftpad_core::{
    DroppedFile, HttpTransport, Snapshot, SnapshotTransport, UploadError, UploadTransport,
};
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn upload_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/images/?raw=true", server.uri())).unwrap()
}

fn cat() -> DroppedFile {
    DroppedFile::new("cat.png", b"PNGDATA".to_vec()).with_mime_type("image/png")
}

/// Upload endpoint answering a request shaped like the admin page's.
async fn mount_upload(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/images/"))
        .and(query_param("raw", "true"))
        .and(header("X-CSRFToken", "tok"))
        .and(body_string_contains(r#"name="file"; filename="cat.png""#))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_upload_ok_returns_response_url() {
    let server = MockServer::start().await;
    mount_upload(&server, ResponseTemplate::new(200)).await;

    let transport = HttpTransport::new(upload_url(&server));
    let uploaded = transport.upload(&cat(), "tok").await.unwrap();

    assert_eq!(uploaded.url, upload_url(&server).as_str());
}

#[tokio::test]
async fn test_upload_result_url_follows_redirect() {
    let server = MockServer::start().await;
    mount_upload(
        &server,
        ResponseTemplate::new(302).insert_header("Location", "/media/cat.png"),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/media/cat.png"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(upload_url(&server));
    let uploaded = transport.upload(&cat(), "tok").await.unwrap();

    assert_eq!(uploaded.url, format!("{}/media/cat.png", server.uri()));
}

#[tokio::test]
async fn test_upload_server_error_carries_body() {
    let server = MockServer::start().await;
    mount_upload(&server, ResponseTemplate::new(500).set_body_string("too large")).await;

    let transport = HttpTransport::new(upload_url(&server));
    let err = transport.upload(&cat(), "tok").await.unwrap_err();

    assert!(matches!(&err, UploadError::Http { status: 500, body } if body == "too large"));
    assert_eq!(err.user_message(), "too large");
}

#[tokio::test]
async fn test_upload_other_success_codes_fail() {
    let server = MockServer::start().await;
    mount_upload(&server, ResponseTemplate::new(201).set_body_string("created")).await;

    let transport = HttpTransport::new(upload_url(&server));
    let err = transport.upload(&cat(), "tok").await.unwrap_err();

    assert!(matches!(&err, UploadError::Http { status: 201, body } if body == "created"));
}

#[tokio::test]
async fn test_upload_sends_file_with_unparseable_mime() {
    let server = MockServer::start().await;
    mount_upload(&server, ResponseTemplate::new(200)).await;

    let file = DroppedFile::new("cat.png", b"PNGDATA".to_vec()).with_mime_type("not a mime");
    let transport = HttpTransport::new(upload_url(&server));
    transport.upload(&file, "tok").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("PNGDATA"));
    assert!(!body.contains("not a mime"));
}

#[tokio::test]
async fn test_upload_uses_configured_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains(r#"name="image"; filename="cat.png""#))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(upload_url(&server)).with_file_field("image");
    transport.upload(&cat(), "tok").await.unwrap();
}

#[tokio::test]
async fn test_snapshot_posts_title_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/post-backups/create/"))
        .and(header("X-CSRFToken", "tok"))
        .and(body_string_contains(r#"name="title""#))
        .and(body_string_contains("Untitled"))
        .and(body_string_contains("draft text"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot_url = Url::parse(&format!("{}/post-backups/create/", server.uri())).unwrap();
    let transport = HttpTransport::new(upload_url(&server)).with_snapshot_url(snapshot_url);
    let snapshot = Snapshot::new("", "draft text", "Untitled");

    transport.save_snapshot(&snapshot, "tok").await.unwrap();
}
