#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
};
use chromacheck::{
    captcha::ScoringRule,
    names, router,
    settings::{Settings, TemplatePreset},
    AppState,
};
use tower::ServiceExt;

pub fn app_with_delay(delay: Duration) -> axum::Router {
    let settings = Settings::new(TemplatePreset::Standard, ScoringRule::default(), delay);
    router(AppState::new(settings, false))
}

pub fn app() -> axum::Router {
    app_with_delay(Duration::ZERO)
}

pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<&str>,
) -> Response<Body> {
    let mut req = Request::builder()
        .method(method)
        .uri(uri)
        .header("HX-Request", "true");
    if let Some(token) = cookie {
        req = req.header(
            header::COOKIE,
            format!("{}={}", names::RUN_COOKIE_NAME, token),
        );
    }
    let body = match body {
        Some(form) => {
            req = req.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(req.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond")
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

/// Token from the run cookie set on `resp`.
pub fn run_token(resp: &Response<Body>) -> String {
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("run cookie should be set")
        .to_str()
        .expect("cookie should be ascii");
    let prefix = format!("{}=", names::RUN_COOKIE_NAME);
    cookie
        .strip_prefix(&prefix)
        .and_then(|rest| rest.split(';').next())
        .expect("cookie should carry the run token")
        .to_string()
}

/// The two swatch colors of a rendered question, top first.
pub fn swatch_colors(body: &str) -> (String, String) {
    let mut colors = body
        .match_indices("background: ")
        .map(|(i, m)| body[i + m.len()..i + m.len() + 7].to_string());
    let first = colors.next().expect("top swatch");
    let second = colors.next().expect("bottom swatch");
    (first, second)
}

/// What a sighted visitor would answer for the rendered question.
pub fn right_choice(body: &str) -> &'static str {
    let (a, b) = swatch_colors(body);
    if a == b {
        "same"
    } else {
        "different"
    }
}
