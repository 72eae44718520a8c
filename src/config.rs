//! Frontend Configuration
//!
//! Build-time defaults (`CHEQUE_DESK_API_URL`, `CHEQUE_DESK_LOG`), with the
//! API URL overridable by a `<meta name="cheque-desk-api">` tag.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const API_META: &str = r#"meta[name="cheque-desk-api"]"#;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl Config {
    /// Configuration for the running page
    pub fn load() -> Self {
        Self::resolve(option_env!("CHEQUE_DESK_API_URL"), option_env!("CHEQUE_DESK_LOG"))
            .with_api_override(meta_api_url())
    }

    pub fn resolve(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let log_level = log_level
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            log_level,
        }
    }

    /// Replace the API URL unless the override is blank
    pub fn with_api_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}

fn meta_api_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.query_selector(API_META).ok()??.get_attribute("content")
}
