use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <A href="/">
                <h1 class="header__title">"F.i.C."</h1>
            </A>
            <nav class="header__actions">
                <A href="/classify">"Classify"</A>
            </nav>
        </header>
    }
}
