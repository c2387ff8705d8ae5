use leptos::ev::DragEvent;
use leptos::prelude::*;

use captura::image::ACCEPT_MIME;
use captura::notify::{Notice, NoticeLevel};

use super::files;
use crate::ui_model::SourceKind;

#[component]
pub(super) fn Topbar() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header-left">
                <h1 class="brand">
                    <img class="brand-icon" src="captura-logo.svg" alt="" aria-hidden="true" />
                    "Captura"
                </h1>
            </div>
        </header>
    }
}

/// The drop target: accepts a dragged file or opens the file picker on
/// click. The MIME filter narrows the picker, the extension check happens
/// in the session layer.
#[component]
pub(super) fn DropZone(on_file: Callback<web_sys::File>) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    view! {
        <div
            class="dropzone"
            role="button"
            tabindex="0"
            on:click=move |_| {
                if let Some(input) = input_ref.get_untracked() {
                    input.click();
                }
            }
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                if let Some(file) = files::first_dropped_file(&ev) {
                    on_file.run(file);
                }
            }
        >
            <p class="dropzone-hint">{SourceKind::Drop.hint()}</p>
            <input
                type="file"
                class="dropzone-input"
                accept=ACCEPT_MIME
                node_ref=input_ref
                on:click=move |ev| ev.stop_propagation()
                on:change=move |ev| {
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    if let Some(file) = files::first_selected_file(&input) {
                        on_file.run(file);
                    }
                    // Allow picking the same file again later.
                    input.set_value("");
                }
            />
        </div>
    }
}

#[component]
pub(super) fn CameraPanel(
    camera_open: ReadSignal<bool>,
    video_ref: NodeRef<leptos::html::Video>,
    on_toggle: Callback<()>,
    on_capture: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || camera_open.get()>
            <div class="camera-panel">
                <video class="camera-live" node_ref=video_ref></video>
                <button class="btn" on:click=move |_| on_capture.run(())>
                    "Tomar Foto"
                </button>
            </div>
        </Show>
        <div class="camera-toggle">
            <button class="btn" on:click=move |_| on_toggle.run(())>
                {move || if camera_open.get() { "Cerrar Cámara" } else { "Abrir Cámara" }}
            </button>
        </div>
    }
}

/// Pure projection of the current image, or nothing.
#[component]
pub(super) fn PreviewCard(preview: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <section class="preview-area">
            {move || {
                preview
                    .get()
                    .map(|src| {
                        view! {
                            <figure class="preview-card">
                                <img class="preview-image" src=src alt="Vista previa" />
                            </figure>
                        }
                    })
            }}
        </section>
    }
}

#[component]
pub(super) fn NoticeToast(
    notice: ReadSignal<Option<Notice>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite" aria-relevant="additions removals">
            {move || {
                notice
                    .get()
                    .map(|n| {
                        let class = match n.level {
                            NoticeLevel::Info => "toast info",
                            NoticeLevel::Success => "toast success",
                            NoticeLevel::Error => "toast error",
                        };
                        view! {
                            <div class=class>
                                <div class="toast-message">{n.message}</div>
                                <button
                                    class="toast-close"
                                    title="Cerrar"
                                    on:click=move |_| on_dismiss.run(())
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
