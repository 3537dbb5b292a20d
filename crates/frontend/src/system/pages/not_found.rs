use crate::layout::header::Header;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <Header />
            <main class="not-found">
                <h2>"Lost in space"</h2>
                <p>"This page does not exist."</p>
                <A href="/">"Back to the start"</A>
            </main>
        </div>
    }
}
