use crate::shared::icons::icon_sized;
use contracts::shared::starfield::{starfield, DEFAULT_ELEMENTS, DEFAULT_TWINKLES};
use leptos::prelude::*;

/// Page seed for the decorative background
pub fn page_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[component]
pub fn SpaceBackground(seed: u64) -> impl IntoView {
    let field = starfield(seed, DEFAULT_ELEMENTS, DEFAULT_TWINKLES);

    let elements = field
        .elements
        .into_iter()
        .map(|e| {
            let style = format!(
                "left: {:.2}%; top: {:.2}%; opacity: {:.2}; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                e.x,
                e.y,
                e.opacity,
                e.delay,
                e.duration * 2.0
            );
            view! {
                <div class="space-element" style=style>
                    {icon_sized(e.icon.name(), e.size)}
                </div>
            }
        })
        .collect_view();

    let twinkles = field
        .twinkles
        .into_iter()
        .map(|t| {
            let style = format!(
                "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                t.x, t.y, t.delay, t.duration
            );
            view! { <div class="twinkle" style=style></div> }
        })
        .collect_view();

    view! {
        <div class="space-background" aria-hidden="true">
            {elements}
            {twinkles}
        </div>
    }
}
