use contracts::shared::logger::CreateLogRequest;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Log an error to the console and forward it to the host's log sink.
/// Delivery is best-effort.
pub fn report_error(category: &str, message: &str) {
    log::error!("[{}] {}", category, message);

    let request = CreateLogRequest::client(category, message);
    leptos::task::spawn_local(async move {
        let sent = match Request::post(&api_url("/api/logs")).json(&request) {
            Ok(req) => req.send().await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = sent {
            log::debug!("Log sink unavailable: {}", e);
        }
    });
}
