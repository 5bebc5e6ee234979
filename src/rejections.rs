use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::views;

#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    Input(&'static str),
    /// No run behind the request's cookie, or no cookie at all.
    NoActiveRun,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
            }
            AppError::Input(msg) => {
                tracing::warn!("input error: {msg}");
                (StatusCode::BAD_REQUEST, "INPUT_ERROR")
            }
            AppError::NoActiveRun => (StatusCode::BAD_REQUEST, "NO_ACTIVE_RUN"),
        };

        (code, error_page(message)).into_response()
    }
}

/// Maps any displayable failure onto an [`AppError`], logging the source.
pub trait ResultExt<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{msg}: {e}");
            AppError::Input(msg)
        })
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
        },
        crate::names::DEFAULT_LOCALE,
    )
}
