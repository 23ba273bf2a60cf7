//! Build-time settings and the site owner's public details.

/// Base URL of the JSON API, taken from `PORTFOLIO_API_URL` at compile time.
pub const API_URL: &str = match option_env!("PORTFOLIO_API_URL") {
    Some(url) => url,
    None => "/api",
};

pub const OWNER_NAME: &str = "Faheez Ayofe";
pub const OWNER_ROLE: &str = "Frontend Developer";
pub const CONTACT_EMAIL: &str = "ayofefaheez@gmail.com";
pub const CONTACT_PHONE: &str = "+2347043675310";
pub const GITHUB_URL: &str = "https://github.com/AyofeHoC";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/faheez-ayofe-13049725b/";

/// Joins `path` onto `base` with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `API_URL` joined with `path`.
pub fn api_url(path: &str) -> String {
    join_url(API_URL, path)
}
