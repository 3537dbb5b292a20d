//! Landing page

use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::shared::icons::icon;
use crate::shared::starfield::{page_seed, SpaceBackground};
use leptos::prelude::*;
use leptos_router::components::A;

struct Step {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        icon: "badge",
        title: "Upload",
        text: "Simply drag and drop or select your fashion item image to begin the classification process.",
    },
    Step {
        icon: "sparkles",
        title: "Analyze",
        text: "Our AI model analyzes your image using computer vision.",
    },
    Step {
        icon: "star",
        title: "Discover",
        text: "Receive the item category together with a confidence score.",
    },
];

/// (title, text, highlighted)
const FEATURES: [(&str, &str, bool); 4] = [
    (
        "Accurate Classification",
        "A model trained on thousands of fashion items for precise categorization.",
        true,
    ),
    (
        "Multiple Categories",
        "Tops, trousers, dresses, coats, shoes, bags and more.",
        false,
    ),
    (
        "Confidence Scores",
        "Every answer comes with a confidence metric so you can judge its reliability.",
        false,
    ),
    (
        "Real-time Processing",
        "Results in seconds, not minutes.",
        true,
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let seed = page_seed();

    let steps = STEPS
        .iter()
        .map(|step| {
            view! {
                <div class="step">
                    <div class="step__icon">{icon(step.icon)}</div>
                    <h3 class="step__title">{step.title}</h3>
                    <p class="step__text">{step.text}</p>
                </div>
            }
        })
        .collect_view();

    let features = FEATURES
        .iter()
        .map(|(title, text, highlighted)| {
            let class = if *highlighted {
                "feature feature--highlighted"
            } else {
                "feature"
            };
            view! {
                <div class=class>
                    <h4 class="feature__title">{*title}</h4>
                    <p class="feature__text">{*text}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page page--home">
            <SpaceBackground seed=seed />

            <div class="page__content">
                <Header />

                <main class="hero">
                    <h2 class="hero__title">"Fashion Item Classifier"</h2>
                    <p class="hero__tagline">
                        "Discover the cosmos of fashion with our AI-powered classifier. "
                        "Upload your fashion items and let our intelligent system "
                        "identify and categorize them with stellar precision."
                    </p>
                </main>

                <section class="how-it-works">
                    <h2 class="how-it-works__title">"How It Works"</h2>
                    <div class="how-it-works__steps">{steps}</div>

                    <div class="how-it-works__cta">
                        <A href="/classify">
                            <span class="cta-button">"Start Classifying"</span>
                        </A>
                    </div>

                    <h3 class="features__title">"Features"</h3>
                    <div class="features">{features}</div>
                </section>

                <Footer />
            </div>
        </div>
    }
}
