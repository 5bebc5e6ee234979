use std::time::Duration;

use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    captcha::{AnswerResult, Choice, ColorPair, Verdict},
    names,
};

pub struct QuestionData {
    pub question_idx: usize,
    pub questions_count: usize,
    pub colors: ColorPair,
}

pub struct FeedbackData {
    pub question_idx: usize,
    pub questions_count: usize,
    pub result: AnswerResult,
    pub delay: Duration,
}

pub struct ResultsData<'a> {
    pub results: &'a [AnswerResult],
    pub verdict: Verdict,
}

fn progress(question_idx: usize, questions_count: usize, locale: &str) -> Markup {
    html! {
        h2 {
            (t!("captcha.title", locale = locale))
            " " (question_idx + 1) "/" (questions_count)
        }
    }
}

fn swatches(colors: &ColorPair) -> Markup {
    html! {
        div."captcha-card" {
            div."cube-scene" {
                div.cube.top style=(format!("background: {}", colors.color1)) {
                    span style="color: #000" { "A" }
                }
                div.cube.bottom style=(format!("background: {}", colors.color2)) {
                    span style="color: #fff" { "B" }
                }
            }
        }
    }
}

fn choice_label(choice: Choice, locale: &str) -> String {
    match choice {
        Choice::Same => t!("captcha.same", locale = locale).to_string(),
        Choice::Different => t!("captcha.different", locale = locale).to_string(),
    }
}

pub fn question(data: QuestionData, locale: &str) -> Markup {
    html! {
        (progress(data.question_idx, data.questions_count, locale))
        (swatches(&data.colors))
        form."choices" hx-post=(names::ANSWER_URL)
             hx-target="main"
             hx-swap="innerHTML" {
            @for choice in [Choice::Same, Choice::Different] {
                button type="submit" name="choice" value=(choice.as_str()) {
                    (choice_label(choice, locale))
                }
            }
        }
    }
}

/// The question just answered, the verdict on that answer, and a trigger
/// that fetches the next question once `delay` has passed.
pub fn feedback(data: FeedbackData, locale: &str) -> Markup {
    let colors = ColorPair {
        color1: data.result.color1,
        color2: data.result.color2,
    };
    let trigger = format!("load delay:{}ms", data.delay.as_millis());

    html! {
        (progress(data.question_idx, data.questions_count, locale))
        (swatches(&colors))
        div."choices" {
            @for choice in [Choice::Same, Choice::Different] {
                button type="button" disabled {
                    (choice_label(choice, locale))
                }
            }
        }
        div."feedback" {
            @if data.result.correct {
                "\u{2705} " (t!("captcha.correct", locale = locale))
            } @else {
                "\u{274C} " (t!("captcha.wrong", locale = locale))
            }
        }
        div hx-get=(names::CAPTCHA_URL)
            hx-trigger=(trigger)
            hx-target="main"
            hx-swap="innerHTML" {}
    }
}

fn verdict(verdict: Verdict, locale: &str) -> Markup {
    let (who, outcome) = match verdict {
        Verdict::Bot => (
            t!("result.bot", locale = locale),
            t!("result.failed", locale = locale),
        ),
        Verdict::HumanPass => (
            t!("result.human", locale = locale),
            t!("result.passed", locale = locale),
        ),
        Verdict::HumanFail => (
            t!("result.human", locale = locale),
            t!("result.human_failed", locale = locale),
        ),
    };

    html! {
        div."verdict" {
            div { (who) }
            div { (outcome) }
        }
    }
}

pub fn results(data: ResultsData<'_>, locale: &str) -> Markup {
    let correct = data.results.iter().filter(|r| r.correct).count();
    let total = data.results.len();

    html! {
        h3 { (t!("result.finished", locale = locale)) }
        p {
            (t!("result.score", correct = correct, total = total, locale = locale))
        }
        ul."answers" {
            @for (i, result) in data.results.iter().enumerate() {
                li {
                    "Q" (i + 1) ": "
                    @if result.correct {
                        "\u{2705} " (t!("result.correct", locale = locale))
                    } @else {
                        "\u{274C} " (t!("result.wrong", locale = locale))
                    }
                    " - A=" (result.color1.to_string()) ", B=" (result.color2.to_string())
                }
            }
        }
        (verdict(data.verdict, locale))
        button."restart" hx-post=(names::RESTART_URL)
                         hx-target="main"
                         hx-swap="innerHTML" {
            (t!("result.restart", locale = locale))
        }
    }
}
