//! Classify Image - View Component

use super::drop_zone::DropZone;
use super::preview_card::PreviewCard;
use super::result_card::ResultCard;
use super::view_model::ClassifyVm;
use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_classify_image::{ClassifyImage, SessionPhase};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ClassifyPage() -> impl IntoView {
    let vm = ClassifyVm::new();

    view! {
        <div id="u101_classify_image--usecase" class="page page--classify">
            <Header />

            <main class=move || format!("classify {}", vm.phase_class())>
                <section class="classify__intro">
                    <h2>{ClassifyImage::display_name()}</h2>
                    <p>{ClassifyImage::description()}</p>
                </section>

                // Error notice
                {move || {
                    vm.error_message()
                        .map(|message| {
                            view! {
                                <div class="notice notice--error" role="alert">
                                    {icon("alert")}
                                    <span class="notice__text">{message}</span>
                                    <button
                                        class="notice__close"
                                        aria-label="Dismiss"
                                        on:click=move |_| vm.dismiss()
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        })
                }}

                <DropZone vm=vm />
                <PreviewCard vm=vm />

                // Nothing is rendered until a result exists
                {move || {
                    match vm.phase() {
                        SessionPhase::ResultReady | SessionPhase::Submitting => {
                            vm.result().map(|result| view! { <ResultCard result=result /> })
                        }
                        SessionPhase::Idle | SessionPhase::ImageStaged => None,
                    }
                }}
            </main>

            <Footer show_status=true />
        </div>
    }
}
