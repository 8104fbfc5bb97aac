//! Dev server hosting the generator page.
//!
//! One [`GlassWidget`] lives behind a mutex; each request is one UI event.
//! The browser owns the real clipboard, so copies land in a
//! [`MemoryClipboard`] and the text is handed back in the response.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::clipboard::{CopyTarget, MemoryClipboard};
use crate::export;
use crate::widget::{GlassWidget, ParamPatch, Snapshot};

mod controls;
mod css;
mod inline_js;
mod page;
pub(crate) mod util;

struct DevState {
    widget: GlassWidget,
    clipboard: MemoryClipboard,
    mounted: Instant,
}

impl DevState {
    fn now(&self) -> Duration {
        self.mounted.elapsed()
    }
}

type SharedState = Arc<Mutex<DevState>>;

/// Build the router around `widget`.
pub fn router(widget: GlassWidget) -> Router {
    let state = Arc::new(Mutex::new(DevState {
        widget,
        clipboard: MemoryClipboard::new(),
        mounted: Instant::now(),
    }));

    Router::new()
        .route("/", get(serve_page))
        .route("/state", get(serve_state))
        .route("/params", post(serve_params))
        .route("/copy", post(serve_copy))
        .route("/export/css", get(serve_export_css))
        .with_state(state)
}

/// Serve the generator page for `widget` on `addr` until the process exits.
pub async fn run_server(widget: GlassWidget, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(widget);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    log::info!("glass generator");
    log::info!("  page:    http://{local}/");
    log::info!("  state:   http://{local}/state");
    log::info!("  export:  http://{local}/export/css");

    axum::serve(listener, app).await
}

// The widget stays usable even if a handler panicked mid-update.
fn lock(state: &SharedState) -> MutexGuard<'_, DevState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── Route handlers ────────────────────────────────────────────────────

async fn serve_page(State(state): State<SharedState>) -> Html<String> {
    let mut dev = lock(&state);
    let now = dev.now();
    dev.widget.notifier_mut().expire(now);
    Html(page::build_page(&dev.widget, now))
}

async fn serve_state(State(state): State<SharedState>) -> Json<Snapshot> {
    let dev = lock(&state);
    Json(dev.widget.snapshot(dev.now()))
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

async fn serve_params(
    State(state): State<SharedState>,
    Json(patch): Json<ParamPatch>,
) -> Result<Json<Snapshot>, (StatusCode, Json<ErrorBody>)> {
    let mut dev = lock(&state);
    match dev.widget.apply(&patch) {
        Ok(()) => Ok(Json(dev.widget.snapshot(dev.now()))),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )),
    }
}

#[derive(Deserialize)]
struct CopyRequest {
    target: CopyTarget,
}

#[derive(Serialize)]
struct CopyResponse {
    /// Text for the browser to place on its clipboard.
    text: String,
    revert_after_ms: u64,
    state: Snapshot,
}

async fn serve_copy(
    State(state): State<SharedState>,
    Json(req): Json<CopyRequest>,
) -> Json<CopyResponse> {
    let mut dev = lock(&state);
    let now = dev.now();
    let DevState {
        widget, clipboard, ..
    } = &mut *dev;
    widget.copy(clipboard, req.target, now);
    let text = clipboard.take().unwrap_or_default();
    log::debug!("copied {} ({} bytes)", req.target, text.len());

    Json(CopyResponse {
        text,
        revert_after_ms: widget
            .copy_remaining(now)
            .map_or(0, |left| left.as_millis() as u64),
        state: widget.snapshot(now),
    })
}

async fn serve_export_css(
    State(state): State<SharedState>,
) -> ([(header::HeaderName, &'static str); 2], String) {
    let dev = lock(&state);
    let body = export::css_rule(dev.widget.derived(), export::DEFAULT_SELECTOR);
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"glass.css\""),
        ],
        body,
    )
}
