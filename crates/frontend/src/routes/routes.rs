use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use crate::usecases::u101_classify_image::ClassifyPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/classify") view=ClassifyPage />
            </Routes>
        </Router>
    }
}
