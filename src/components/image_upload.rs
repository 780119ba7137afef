//! Upload surface: drag-and-drop region, file picker, and staged preview.
//!
//! DESIGN
//! ======
//! Validation is a MIME prefix check; anything that is not `image/*` is
//! silently ignored whether it arrives by drop or picker. The component only
//! mirrors the staged image for rendering — ownership (and preview-URL
//! release) stays with the page.

#[cfg(test)]
#[path = "image_upload_test.rs"]
mod image_upload_test;

use leptos::prelude::*;
use wasm_bindgen::JsCast as _;

use crate::state::analysis::SelectedImage;

/// Drag-and-drop / file-picker surface for staging a leaf photo.
///
/// `on_select` fires with a validated image file; non-image files never
/// reach it. All interaction is disabled while `loading` is set.
#[component]
pub fn ImageUpload(
    #[prop(into)] selected: Signal<Option<SelectedImage>>,
    #[prop(into)] loading: Signal<bool>,
    on_select: Callback<web_sys::File>,
    #[prop(optional)] on_remove: Option<Callback<()>>,
) -> impl IntoView {
    // Cosmetic hover flag for the dropzone border; no functional effect.
    let drag_over = RwSignal::new(false);

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(true);
    };
    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        if loading.get_untracked() {
            return;
        }
        let Some(files) = ev.data_transfer().and_then(|transfer| transfer.files()) else {
            return;
        };
        if let Some(file) = first_image_file(&files) {
            on_select.run(file);
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        if loading.get_untracked() {
            return;
        }
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(files) = input.files() {
            if let Some(file) = first_image_file(&files) {
                on_select.run(file);
            }
        }
        // Reset so picking the same file again still fires a change event.
        input.set_value("");
    };

    let on_remove_click = move |_| {
        if let Some(on_remove) = on_remove {
            on_remove.run(());
        }
    };

    let preview_url = move || {
        selected
            .get()
            .map(|image| image.preview_url)
            .unwrap_or_default()
    };
    let preview_alt = move || {
        selected
            .get()
            .map(|image| image.file_name)
            .unwrap_or_default()
    };

    view! {
        <div class="upload-card card">
            <Show
                when=move || selected.get().is_some()
                fallback=move || {
                    view! {
                        <div
                            class="upload-dropzone"
                            class:upload-dropzone--active=move || drag_over.get()
                            on:dragover=on_drag_over
                            on:dragleave=on_drag_leave
                            on:drop=on_drop
                        >
                            <h3 class="upload-dropzone__title">"Upload Potato Leaf Image"</h3>
                            <p class="upload-dropzone__hint">
                                "Drag and drop your potato leaf image here, or click to browse. \
                                 Our AI will analyze it for disease detection."
                            </p>
                            <label class="upload-picker">
                                <span class="button button--hero">"Choose Image"</span>
                                <input
                                    class="upload-picker__input"
                                    type="file"
                                    accept="image/*"
                                    on:change=on_file_change
                                    disabled=move || loading.get()
                                />
                            </label>
                            <p class="upload-dropzone__formats">"Supports JPG, PNG, WebP formats"</p>
                        </div>
                    }
                }
            >
                <div class="upload-preview">
                    <div class="upload-preview__frame">
                        <img
                            class="upload-preview__image"
                            src=preview_url
                            alt=preview_alt
                        />
                        <button
                            class="upload-preview__remove"
                            on:click=on_remove_click
                            disabled=move || loading.get()
                            title="Remove image"
                            aria-label="Remove image"
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="upload-preview__actions">
                        <button class="button button--status" disabled=true>
                            {move || if loading.get() { "Analyzing..." } else { "Analyze Disease" }}
                        </button>
                        <label class="upload-picker">
                            <span class="button button--outline">"Upload Different Image"</span>
                            <input
                                class="upload-picker__input"
                                type="file"
                                accept="image/*"
                                on:change=on_file_change
                                disabled=move || loading.get()
                            />
                        </label>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// First dropped/picked file, if it declares an image MIME type. Empty
/// selections and non-image files yield `None` so no callback fires.
fn first_image_file(files: &web_sys::FileList) -> Option<web_sys::File> {
    let file = files.get(0)?;
    is_image_mime(&file.type_()).then_some(file)
}

fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}
