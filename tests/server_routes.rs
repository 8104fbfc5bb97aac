use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use glass_generator::server::router;
use glass_generator::GlassWidget;

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let res = app.clone().oneshot(req).await.expect("router is infallible");
    let status = res.status();
    let body = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, body.to_vec())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn page_renders_current_state() {
    let mut widget = GlassWidget::new();
    widget.set_blur(9);
    let app = router(widget);

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Glassmorphism Generator"));
    assert!(html.contains("backdrop-filter: blur(9px);"));
}

#[tokio::test]
async fn params_patch_returns_snapshot() {
    let app = router(GlassWidget::new());

    let patch = json!({
        "blur": 10,
        "opacity": 50,
        "color": "#000000",
        "border_radius": 20,
        "shadow_intensity": 4,
        "show_outline": true
    });
    let (status, body) = send(&app, post_json("/params", patch)).await;
    assert_eq!(status, StatusCode::OK);

    let snap: Value = serde_json::from_slice(&body).unwrap();
    let style = &snap["derived"]["inline_style"];
    assert_eq!(style["backdropFilter"], "blur(10px)");
    assert_eq!(style["backgroundColor"], "rgba(0, 0, 0, 0.5)");
    assert_eq!(style["borderRadius"], "20px");
    assert_eq!(style["boxShadow"], "0 4px 8px rgba(0, 0, 0, 0.2)");
    assert_eq!(snap["params"]["color_hex"], "#000000");
    assert_eq!(snap["params"]["color"], json!({ "r": 0, "g": 0, "b": 0 }));

    // The change sticks for later reads.
    let (_, body) = send(&app, get("/state")).await;
    let state: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(state["params"]["blur"], 10);
    assert_eq!(state["revision"], 1);
}

#[tokio::test]
async fn out_of_range_shadow_keeps_state_consistent() {
    let app = router(GlassWidget::new());

    let (status, body) = send(&app, post_json("/params", json!({ "shadow_intensity": u32::MAX }))).await;
    assert_eq!(status, StatusCode::OK);
    let snap: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        snap["derived"]["inline_style"]["boxShadow"],
        "0 4294967295px 8589934590px rgba(0, 0, 0, 0.2)"
    );

    let (_, body) = send(&app, get("/state")).await;
    let state: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(state["params"]["shadow_intensity"], u32::MAX);
    assert_eq!(state["revision"], 1);
    assert_eq!(state["derived"], snap["derived"]);

    // Later patches still go through.
    let (status, body) = send(&app, post_json("/params", json!({ "shadow_intensity": 3 }))).await;
    assert_eq!(status, StatusCode::OK);
    let snap: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(snap["derived"]["inline_style"]["boxShadow"], "0 3px 6px rgba(0, 0, 0, 0.2)");
    assert_eq!(snap["revision"], 2);
}

#[tokio::test]
async fn bad_color_is_rejected_without_changes() {
    let app = router(GlassWidget::new());

    let (status, body) = send(&app, post_json("/params", json!({ "blur": 2, "color": "#zzzzzz" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: Value = serde_json::from_slice(&body).unwrap();
    assert!(err["error"].as_str().unwrap().contains("#zzzzzz"));

    let (_, body) = send(&app, get("/state")).await;
    let state: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(state["params"]["blur"], 4);
    assert_eq!(state["params"]["color_hex"], "#ffffff");
}

#[tokio::test]
async fn copy_returns_text_and_acknowledges() {
    let app = router(GlassWidget::new());

    let (status, body) = send(&app, post_json("/copy", json!({ "target": "tailwind" }))).await;
    assert_eq!(status, StatusCode::OK);
    let res: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(res["text"], "bg-opacity-25 rounded-lg p-6 shadow-lg");
    assert_eq!(res["revert_after_ms"], 2000);
    assert_eq!(res["state"]["copied"], "tailwind");

    let (_, body) = send(&app, post_json("/copy", json!({ "target": "css" }))).await;
    let res: Value = serde_json::from_slice(&body).unwrap();
    assert!(res["text"].as_str().unwrap().contains("padding: 1.5rem;"));
    assert_eq!(res["state"]["copied"], "css");

    let (_, body) = send(&app, get("/state")).await;
    let state: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(state["copied"], "css");
}

#[tokio::test]
async fn copy_rejects_unknown_target() {
    let app = router(GlassWidget::new());
    let (status, _) = send(&app, post_json("/copy", json!({ "target": "scss" }))).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn export_css_is_a_download() {
    let app = router(GlassWidget::new());
    let res = app.clone().oneshot(get("/export/css")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"glass.css\""
    );
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let css = String::from_utf8(body.to_vec()).unwrap();
    assert!(css.starts_with(".glass {\n"));
}
