use axum::{
    extract::{Form, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;
use maud::Markup;
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    captcha::{Choice, QuizRun},
    extractors::{IsHtmx, Locale, RunGuard},
    names,
    rejections::{AppError, ResultExt},
    settings::Settings,
    utils, views,
    views::captcha as captcha_views,
    AppState,
};

#[derive(Deserialize)]
struct AnswerBody {
    choice: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::START_URL, post(start))
        .route(names::CAPTCHA_URL, get(current))
        .route(names::ANSWER_URL, post(answer))
        .route(names::RESTART_URL, post(restart))
        .route(names::RESULTS_URL, get(results))
}

fn run_cookie(state: &AppState, token: &str) -> Result<HeaderMap, AppError> {
    let cookie = utils::cookie(names::RUN_COOKIE_NAME, token, state.secure_cookies);
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        cookie
            .parse::<HeaderValue>()
            .reject("could not build run cookie")?,
    );
    Ok(headers)
}

/// The current question, or the results once every question is answered.
fn run_view(run: &QuizRun, settings: &Settings, locale: &str) -> Markup {
    match run.current() {
        Some(item) => captcha_views::question(
            captcha_views::QuestionData {
                question_idx: run.index(),
                questions_count: run.len(),
                colors: item.colors,
            },
            locale,
        ),
        None => captcha_views::results(
            captcha_views::ResultsData {
                results: run.results(),
                verdict: settings.classifier.classify(run.results()),
            },
            locale,
        ),
    }
}

fn title(run: &QuizRun, locale: &str) -> String {
    if run.is_finished() {
        t!("result.finished", locale = locale).to_string()
    } else {
        t!("captcha.title", locale = locale).to_string()
    }
}

fn start_run(state: &AppState) -> Result<(String, QuizRun), AppError> {
    let token = state.runs.start(state.settings.template.kinds());
    let run = state
        .runs
        .snapshot(&token)
        .ok_or(AppError::Internal("run vanished right after start"))?;
    tracing::info!("started run {token} with {} questions", run.len());
    Ok((token, run))
}

async fn start(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Response, AppError> {
    let (token, run) = start_run(&state)?;
    let headers = run_cookie(&state, &token)?;
    let page = views::render(
        is_htmx,
        &title(&run, &locale),
        run_view(&run, &state.settings, &locale),
        &locale,
    );

    Ok((headers, page).into_response())
}

/// Re-renders whatever the visitor's run is waiting on. A visitor without a
/// live run gets a new one.
async fn current(
    State(state): State<AppState>,
    jar: CookieJar,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Response, AppError> {
    let existing = jar
        .get(names::RUN_COOKIE_NAME)
        .and_then(|c| state.runs.snapshot(c.value()));

    let (headers, run) = match existing {
        Some(run) => (HeaderMap::new(), run),
        None => {
            let (token, run) = start_run(&state)?;
            (run_cookie(&state, &token)?, run)
        }
    };

    let page = views::render(
        is_htmx,
        &title(&run, &locale),
        run_view(&run, &state.settings, &locale),
        &locale,
    );

    Ok((headers, page).into_response())
}

async fn answer(
    State(state): State<AppState>,
    RunGuard(token): RunGuard,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    Form(body): Form<AnswerBody>,
) -> Result<Markup, AppError> {
    let choice: Choice = body.choice.parse().reject_input("invalid choice")?;

    let (result, run) = state
        .runs
        .with_run(&token, |run| (run.answer(choice), run.clone()))
        .ok_or(AppError::NoActiveRun)?;

    let Some(result) = result else {
        tracing::warn!("run {token} is already finished, ignoring answer");
        return Ok(views::render(
            is_htmx,
            &title(&run, &locale),
            run_view(&run, &state.settings, &locale),
            &locale,
        ));
    };

    tracing::debug!(
        "run {token} question {}: {} answered {choice}, correct={}",
        run.index(),
        result.kind,
        result.correct
    );

    if let Some(verdict) = run.verdict(&state.settings.classifier) {
        let tally = state.settings.classifier.tally(run.results());
        tracing::info!(
            "run {token} finished: {verdict:?} (score={}, human_signal={})",
            tally.score,
            tally.human_signal
        );
    }

    if state.settings.answer_delay.is_zero() {
        return Ok(views::render(
            is_htmx,
            &title(&run, &locale),
            run_view(&run, &state.settings, &locale),
            &locale,
        ));
    }

    Ok(views::render(
        is_htmx,
        &t!("captcha.title", locale = &locale),
        captcha_views::feedback(
            captcha_views::FeedbackData {
                question_idx: run.index() - 1,
                questions_count: run.len(),
                result,
                delay: state.settings.answer_delay,
            },
            &locale,
        ),
        &locale,
    ))
}

async fn restart(
    State(state): State<AppState>,
    RunGuard(token): RunGuard,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Markup, AppError> {
    let run = state
        .runs
        .restart(&token, state.settings.template.kinds())
        .ok_or(AppError::NoActiveRun)?;
    tracing::info!("restarted run {token}");

    Ok(views::render(
        is_htmx,
        &title(&run, &locale),
        run_view(&run, &state.settings, &locale),
        &locale,
    ))
}

async fn results(
    State(state): State<AppState>,
    RunGuard(token): RunGuard,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Markup, AppError> {
    let run = state.runs.snapshot(&token).ok_or(AppError::NoActiveRun)?;

    let Some(verdict) = run.verdict(&state.settings.classifier) else {
        return Err(AppError::Input("run is not finished yet"));
    };

    Ok(views::render(
        is_htmx,
        &t!("result.finished", locale = &locale),
        captcha_views::results(
            captcha_views::ResultsData {
                results: run.results(),
                verdict,
            },
            &locale,
        ),
        &locale,
    ))
}
