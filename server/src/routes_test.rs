use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn base_routes_serve_healthz() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn base_routes_do_not_serve_api() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/api/messages").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

fn options(site_root: &std::path::Path) -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("groupchat")
        .site_root(site_root.to_string_lossy().into_owned())
        .site_pkg_dir("pkg")
        .build()
}

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("pkg")).unwrap();
    std::fs::write(dir.path().join("pkg").join("groupchat.css"), "body { margin: 0; }").unwrap();
    dir
}

fn full_app(site: &tempfile::TempDir) -> Router {
    let config = ServerConfig { port: 3000, api_base_url: "https://chat.example.com".into() };
    app(&config, options(site.path()))
}

async fn get_path(router: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn pkg_assets_are_served_from_site_root() {
    let site = site();
    let (status, _, body) = get_path(full_app(&site), "/pkg/groupchat.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { margin: 0; }");
}

#[tokio::test]
async fn missing_pkg_asset_is_404() {
    let site = site();
    let (status, _, _) = get_path(full_app(&site), "/pkg/missing.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_renders_not_found_view() {
    let site = site();
    let (_, _, body) = get_path(full_app(&site), "/no/such/page").await;
    assert!(body.contains("Страница не найдена."), "body: {body}");
}

#[tokio::test]
async fn shell_embeds_backend_base_url() {
    let site = site();
    let (_, _, body) = get_path(full_app(&site), "/login").await;
    assert!(body.contains(r#"name="chat-api-base""#), "body: {body}");
    assert!(body.contains("https://chat.example.com"), "body: {body}");
}

#[tokio::test]
async fn root_redirects_to_chat() {
    let site = site();
    let (status, headers, _) = get_path(full_app(&site), "/").await;
    assert!(status.is_redirection(), "status: {status}");
    assert_eq!(headers.get("location").and_then(|v| v.to_str().ok()), Some("/chat"));
}

#[tokio::test]
async fn healthz_survives_full_app() {
    let site = site();
    let (status, _, _) = get_path(full_app(&site), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}
