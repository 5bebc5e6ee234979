pub mod captcha;
pub mod homepage;
