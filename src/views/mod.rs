pub mod captcha;
pub mod homepage;
pub mod layout;

pub use layout::{page, render, titled};
