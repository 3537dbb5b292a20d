use contracts::shared::config::ClientConfig;
use gloo_net::http::Request;
use leptos::prelude::*;

use crate::shared::api_utils::api_url;

#[derive(Clone, Copy)]
pub struct ClientConfigContext(pub RwSignal<ClientConfig>);

/// Load the classifier endpoint from the host
pub async fn fetch_client_config() -> Result<ClientConfig, String> {
    let response = Request::get(&api_url("/api/config"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Config request failed: {}", response.status()));
    }

    response
        .json::<ClientConfig>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Provide the config signal and start loading it
pub fn provide_client_config() {
    let config = RwSignal::new(ClientConfig::default());
    provide_context(ClientConfigContext(config));

    leptos::task::spawn_local(async move {
        match fetch_client_config().await {
            Ok(loaded) => {
                log::info!("Classifier endpoint: {}", loaded.classifier_base_url);
                let _ = config.try_set(loaded);
            }
            Err(e) => log::warn!(
                "Host config unavailable, using {}: {}",
                ClientConfig::default().classifier_base_url,
                e
            ),
        }
    });
}

pub fn use_client_config() -> RwSignal<ClientConfig> {
    use_context::<ClientConfigContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| RwSignal::new(ClientConfig::default()))
}
