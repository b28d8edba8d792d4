use shared::constants::API_BASE_URL;
use web_sys::window;

const API_MODE_KEY: &str = "api_mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// Talk to the backend over HTTP.
    Http,
    /// Serve every call from the in-memory ledger, no server needed.
    Local,
}

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        let location = window.location();
        if let (Ok(protocol), Ok(host)) = (location.protocol(), location.host()) {
            // Served by the backend itself: same origin
            if protocol.starts_with("http") && !host.is_empty() && !is_dev_server(&host) {
                return format!("{}//{}", protocol, host);
            }
        }
    }

    API_BASE_URL.to_string()
}

// trunk serves on 8080 during development while the API runs separately
fn is_dev_server(host: &str) -> bool {
    host.ends_with(":8080")
}

/// `?local` in the URL wins; otherwise the `api_mode` localStorage key
/// (`"local"` or `"http"`) decides. Defaults to HTTP.
pub fn api_mode() -> ApiMode {
    let Some(window) = window() else {
        return ApiMode::Http;
    };

    let query_says_local = window
        .location()
        .search()
        .map(|search| {
            search
                .trim_start_matches('?')
                .split('&')
                .any(|pair| pair == "local" || pair.starts_with("local="))
        })
        .unwrap_or(false);
    if query_says_local {
        return ApiMode::Local;
    }

    match window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(API_MODE_KEY).ok().flatten())
        .as_deref()
    {
        Some("local") => ApiMode::Local,
        _ => ApiMode::Http,
    }
}
