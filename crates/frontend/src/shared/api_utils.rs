//! API utilities for talking to the host and the classifier
//!
//! Provides helper functions for constructing host URLs and probing services.

use gloo_net::http::Request;

/// Get the base URL of the host serving `/api/*`
///
/// Constructs the base URL from the current window location,
/// using port 3000 for the host.
///
/// # Returns
/// - Base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full host URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/config");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `true` when `url` answers with a 2xx status
pub async fn ping(url: &str) -> bool {
    match Request::get(url).send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}
