use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::utils;

const HTMX_URL: &str = "https://unpkg.com/htmx.org@2.0.4/dist/htmx.min.js";

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src=(HTMX_URL) {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header(locale: &str) -> Markup {
    html! {
        header {
            nav {
                a href="/" {
                    strong { (t!("app.name", locale = locale)) }
                }
                span."version" { (utils::VERSION) }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";

                (css())
                (js())
                (icon())

                title { (title) " - " (t!("app.name", locale = locale)) }
            }

            body."container" {
                (header(locale))
                (main(body))
            }
        }
    }
}

/// Fragment for htmx swaps; htmx picks the `title` up into the document.
pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) }
        (body)
    }
}

pub fn render(is_htmx: bool, title: &str, body: Markup, locale: &str) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, locale)
    }
}
