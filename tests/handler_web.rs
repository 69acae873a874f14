mod common;

use axum::Router;
use axum_test::TestServer;
use storefront::web::routes::public_routes;

fn make_server() -> TestServer {
    let app = Router::new()
        .nest("/templates", public_routes())
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_gallery_lists_templates() {
    let server = make_server();

    let response = server.get("/templates").await;

    response.assert_status_ok();
    let html = response.text();
    for id in ["modern-minimal", "catalog-compact", "hover-showcase", "boutique-elegant"] {
        assert!(html.contains(&format!("/templates/{id}/preview")), "missing {id}");
    }
}

#[tokio::test]
async fn test_gallery_filters_by_tier() {
    let server = make_server();

    let response = server
        .get("/templates")
        .add_query_param("tier", "UNLIMITED")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("/templates/boutique-elegant/preview"));
    assert!(!html.contains("/templates/modern-minimal/preview"));
}

#[tokio::test]
async fn test_preview_renders_sample_store() {
    let server = make_server();

    let response = server.get("/templates/boutique-elegant/preview").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Toko Batik Sari"));
    assert_eq!(html.matches("data-product-id=").count(), 3);
}

#[tokio::test]
async fn test_preview_unknown_template() {
    let server = make_server();

    server
        .get("/templates/nope/preview")
        .await
        .assert_status_not_found();
}
