//! HttpBackend against a mock gallery server.

use std::sync::Arc;

use gallery_core::{
    AutoConfirm, DeleteResponse, FilePayload, GalleryBackend, GalleryController, GalleryError,
    HttpBackend, ResourceId, ResourceKind, UploadForm,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_with_files() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 2, "title": "My Video", "description": "",
                "type": "link", "content": "https://youtu.be/abc123",
                "filename": "", "date": "04/01/2025"
            },
            {
                "id": 1, "title": "Cat.png", "description": "tabby",
                "type": "img", "content": "/static/uploads/1_cat.png",
                "filename": "cat.png", "date": "03/01/2025"
            }
        ])))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_list_parses_backend_rows() {
    let server = server_with_files().await;
    let backend = HttpBackend::new(&server.uri()).unwrap();

    let resources = backend.list().await.unwrap();

    assert_eq!(resources.len(), 2);
    assert_eq!(resources[0].kind, ResourceKind::Link);
    assert_eq!(resources[1].kind, ResourceKind::Image);
    assert_eq!(resources[1].description, "tabby");
}

#[tokio::test]
async fn test_controller_reverses_server_order() {
    let server = server_with_files().await;
    let backend = Arc::new(HttpBackend::new(&server.uri()).unwrap());
    let gallery = GalleryController::new(backend, Arc::new(AutoConfirm));

    gallery.load_all().await.unwrap();

    let ids: Vec<_> = gallery.snapshot().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![ResourceId(1), ResourceId(2)]);
    assert_eq!(
        gallery.resolve_url("/static/uploads/1_cat.png"),
        format!("{}/static/uploads/1_cat.png", server.uri())
    );
}

#[tokio::test]
async fn test_list_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/files"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let backend = HttpBackend::new(&server.uri()).unwrap();

    match backend.list().await {
        Err(GalleryError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_link_sends_multipart_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header_exists("content-type"))
        .and(body_string_contains("name=\"type\"\r\n\r\nlink"))
        .and(body_string_contains("name=\"url\"\r\n\r\nhttps://youtu.be/abc123"))
        .and(body_string_contains("name=\"title\"\r\n\r\nMy Video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    let backend = HttpBackend::new(&server.uri()).unwrap();

    backend
        .upload(&UploadForm::link("My Video", "https://youtu.be/abc123"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_file_sends_file_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"type\"\r\n\r\nfile"))
        .and(body_string_contains("filename=\"notes.txt\""))
        .and(body_string_contains("hello gallery"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let backend = HttpBackend::new(&server.uri()).unwrap();

    let form = UploadForm::file(
        "Notes",
        FilePayload {
            file_name: "notes.txt".into(),
            bytes: b"hello gallery".to_vec(),
        },
    );
    backend.upload(&form).await.unwrap();
}

#[tokio::test]
async fn test_upload_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "No file part" })))
        .mount(&server)
        .await;
    let backend = HttpBackend::new(&server.uri()).unwrap();

    let result = backend.upload(&UploadForm::link("x", "https://a.b")).await;
    assert!(matches!(result, Err(GalleryError::Status { status: 400, .. })));
}

#[tokio::test]
async fn test_delete_reads_json_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/delete/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/delete/6"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Archivo no encontrado" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/delete/7"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;
    let backend = HttpBackend::new(&server.uri()).unwrap();

    assert_eq!(backend.delete(ResourceId(5)).await.unwrap(), DeleteResponse::ok());
    assert_eq!(
        backend.delete(ResourceId(6)).await.unwrap(),
        DeleteResponse::failed("Archivo no encontrado")
    );
    assert!(matches!(
        backend.delete(ResourceId(7)).await,
        Err(GalleryError::Status { status: 502, .. })
    ));
}

#[tokio::test]
async fn test_update_sends_json_description() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/update/3"))
        .and(body_json(json!({ "description": "new words" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    let backend = HttpBackend::new(&server.uri()).unwrap();

    backend
        .update_description(ResourceId(3), "new words")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on the discard port
    let backend = HttpBackend::new("http://127.0.0.1:9").unwrap();

    let err = backend.list().await.unwrap_err();
    assert!(err.is_transport());
}
