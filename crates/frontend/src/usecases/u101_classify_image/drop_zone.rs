use super::view_model::ClassifyVm;
use crate::shared::icons::icon;
use leptos::ev::{DragEvent, Event, MouseEvent};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Drag-and-drop target that doubles as a file-picker button
#[component]
pub fn DropZone(vm: ClassifyVm) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        vm.dragging.set(false);

        // Only the first file counts
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => vm.stage_file(file),
            None => log::debug!("Drop without files ignored"),
        }
    };

    let on_change = move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            vm.stage_file(file);
        }
        // Clear input so the same file can be picked again
        input.set_value("");
    };

    let open_picker = move |_: MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                if vm.dragging.get() { "drop-zone drop-zone--active" } else { "drop-zone" }
            }
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                vm.dragging.set(true);
            }
            on:dragleave=move |_: DragEvent| vm.dragging.set(false)
            on:drop=on_drop
            on:click=open_picker
        >
            <div class="drop-zone__icon">{icon("upload")}</div>
            <p class="drop-zone__title">
                {move || {
                    if vm.has_image() {
                        "Drop another image to replace this one"
                    } else {
                        "Drag & drop an image here"
                    }
                }}
            </p>
            <p class="drop-zone__hint">"or click to browse (PNG, JPG, WEBP...)"</p>
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                style="display: none;"
                on:click=|ev: MouseEvent| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
