pub const START_URL: &str = "/start";
pub const CAPTCHA_URL: &str = "/captcha";
pub const ANSWER_URL: &str = "/answer";
pub const RESTART_URL: &str = "/restart";
pub const RESULTS_URL: &str = "/results";

pub const RUN_COOKIE_NAME: &str = "captcha_run";

// Run defaults
pub const RUN_TTL_SECS: u64 = 3600;
pub const DEFAULT_ANSWER_DELAY_MS: u64 = 1000;
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:1414";

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";
