use crate::shared::api_utils::ping;
use crate::shared::config::use_client_config;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Classifier: Online",
            ServerStatus::Offline => "Classifier: Offline",
            ServerStatus::Checking => "Classifier: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

/// Page footer. The classifier status is only probed when `show_status` is set.
#[component]
pub fn Footer(#[prop(optional)] show_status: bool) -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <span class="footer__tagline">"Powered by AI • Inspired by the Universe"</span>
            {show_status.then(|| view! { <ClassifierStatus /> })}
        </footer>
    }
}

#[component]
fn ClassifierStatus() -> impl IntoView {
    let config = use_client_config();
    let status = RwSignal::new(ServerStatus::Checking);

    let check_classifier = move |url: String| {
        status.set(ServerStatus::Checking);

        spawn_local(async move {
            let online = ping(&url).await;
            let _ = status.try_set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    };

    // Re-check whenever the endpoint changes
    Effect::new(move |_| {
        check_classifier(config.with(|c| c.health_url()));
    });

    view! {
        <button
            class=move || format!("footer__status {}", status.get().css_class())
            title="Check again"
            on:click=move |_| check_classifier(config.get_untracked().health_url())
        >
            {move || status.get().display_text()}
        </button>
    }
}
