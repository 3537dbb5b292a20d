use super::view_model::ClassifyVm;
use crate::shared::config::use_client_config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PreviewCard(vm: ClassifyVm) -> impl IntoView {
    let config = use_client_config();

    view! {
        {move || {
            vm.staged()
                .map(|image| {
                    view! {
                        <section class="preview-card">
                            <img
                                class="preview-card__image"
                                src=image.preview_url.clone()
                                alt=image.file_name.clone()
                            />
                            <div class="preview-card__meta">
                                <span class="preview-card__name">{image.file_name.clone()}</span>
                                <span class="preview-card__size">{image.human_size()}</span>
                                <Badge appearance=BadgeAppearance::Outline>{image.mime.clone()}</Badge>
                            </div>
                            <Flex gap=FlexGap::Large align=FlexAlign::Center>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| vm.remove()
                                >
                                    {icon("x")}
                                    "Remove"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || !vm.can_submit())
                                    on_click=move |_| vm.submit(config.get_untracked())
                                >
                                    {move || if vm.is_submitting() { "Classifying..." } else { "Classify" }}
                                </Button>
                                <Show when=move || vm.is_submitting()>
                                    <Spinner />
                                </Show>
                            </Flex>
                        </section>
                    }
                })
        }}
    }
}
