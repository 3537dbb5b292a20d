use crate::routes::routes::AppRoutes;
use crate::shared::config::provide_client_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Classifier endpoint for the whole tree; defaults until the host answers
    provide_client_config();

    view! {
        <AppRoutes />
    }
}
