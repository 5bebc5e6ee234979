rust_i18n::i18n!("locales", fallback = "en");

pub mod captcha;
pub mod extractors;
pub mod handlers;
pub mod names;
pub mod rejections;
pub mod settings;
pub mod statics;
pub mod store;
pub mod utils;
pub mod views;

use axum::{middleware, Router};

use crate::{settings::Settings, store::RunStore};

#[derive(Clone)]
pub struct AppState {
    pub runs: RunStore,
    pub settings: Settings,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(settings: Settings, secure_cookies: bool) -> Self {
        Self {
            runs: RunStore::new(settings.run_ttl),
            settings,
            secure_cookies,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::captcha::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            tracing::warn!("rejected {} {} without HX-Request", req.method(), req.uri());
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
