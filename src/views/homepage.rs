use maud::{html, Markup};
use rust_i18n::t;

use crate::names;

pub fn intro(questions_count: usize, locale: &str) -> Markup {
    html! {
        h1 { (t!("app.name", locale = locale)) }
        p { (t!("home.intro", locale = locale)) }
        p { (t!("home.count", count = questions_count, locale = locale)) }
        button hx-post=(names::START_URL)
               hx-target="main"
               hx-swap="innerHTML" {
            (t!("home.start", locale = locale))
        }
    }
}
