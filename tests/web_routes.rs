//! In-process tests for the HTTP routes.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use milk_log::export::{EXPORT_HEADERS, XLSX_MIME_TYPE};
use milk_log::web::{router, today_iso};

#[path = "helpers.rs"]
mod helpers;

use helpers::{open_test_store, read_sheet_rows};

const BODY_LIMIT: usize = 16 * 1024 * 1024;

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/add")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

async fn body_text(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), BODY_LIMIT).await.expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn test_navigation_routes_load() {
    let (_dir, store) = open_test_store().await;
    let app = router(store);

    for uri in ["/", "/new", "/records"] {
        let (status, page) = body_text(app.clone(), get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri} should load");
        assert!(page.contains("Milk Log"), "{uri} should render the layout");
    }
}

#[tokio::test]
async fn test_new_form_prefills_today() {
    let (_dir, store) = open_test_store().await;
    let (_, page) = body_text(router(store), get("/new")).await;
    assert!(page.contains(&format!(r#"value="{}""#, today_iso())));
}

#[tokio::test]
async fn test_add_redirects_and_lists_record() {
    let (_dir, store) = open_test_store().await;
    let app = router(store.clone());

    let resp = app
        .clone()
        .oneshot(post_form("cow_number=C12&litres=18.5&record_date=2024-03-01"))
        .await
        .expect("response");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/records")
    );

    let (status, page) = body_text(app, get("/records")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("<td>C12</td>"));
    assert!(page.contains("<td>18.5</td>"));
    assert_eq!(store.list().await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_add_without_date_uses_today() {
    let (_dir, store) = open_test_store().await;
    let resp = router(store.clone())
        .oneshot(post_form("cow_number=C07&litres=9"))
        .await
        .expect("response");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let records = store.list().await.expect("list");
    assert_eq!(records[0].record_date, today_iso());

    let (_, page) = body_text(router(store), get("/records")).await;
    assert!(page.contains("<td>9.0</td>"));
}

#[tokio::test]
async fn test_add_with_bad_litres_is_rejected() {
    let (_dir, store) = open_test_store().await;
    let app = router(store.clone());

    for body in [
        "cow_number=C12&litres=abc&record_date=2024-03-01",
        "cow_number=C12&litres=-1&record_date=2024-03-01",
    ] {
        let (status, page) = body_text(app.clone(), post_form(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(page.contains("Constraint violation"));
    }
    assert!(store.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_add_with_missing_fields_is_rejected() {
    let (_dir, store) = open_test_store().await;
    let app = router(store.clone());

    for body in ["cow_number=C12", "litres=9&record_date=2024-03-01"] {
        let (status, page) = body_text(app.clone(), post_form(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(page.contains("Constraint violation"));
    }
    assert!(store.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_user_text_is_escaped_on_records_page() {
    let (_dir, store) = open_test_store().await;
    store
        .insert("<b>C1</b>", "1", "2024-03-01")
        .await
        .expect("insert");

    let (_, page) = body_text(router(store), get("/records")).await;
    assert!(page.contains("&lt;b&gt;C1&lt;/b&gt;"));
}

#[tokio::test]
async fn test_export_download() {
    let (_dir, store) = open_test_store().await;
    store.insert("C12", "18.5", "2024-03-01").await.expect("insert");
    store.insert("C07", "9.0", "2024-03-01").await.expect("insert");

    let resp = router(store)
        .oneshot(get("/export.xlsx"))
        .await
        .expect("response");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some(XLSX_MIME_TYPE)
    );
    assert_eq!(
        resp.headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"milk-records.xlsx\"")
    );

    let bytes = to_bytes(resp.into_body(), BODY_LIMIT).await.expect("body");
    let rows = read_sheet_rows(bytes.to_vec());
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].len(), EXPORT_HEADERS.len());
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let (_dir, store) = open_test_store().await;
    std::fs::remove_file(store.db_path()).expect("remove db file");

    let (status, page) = body_text(router(store), get("/records")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!page.contains("sqlite"), "internal details should not leak");
}
