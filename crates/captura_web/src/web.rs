use captura::image::{ImageFormat, MSG_CAPTURE_ACCEPTED, MSG_DROP_ACCEPTED, MSG_DROP_REJECTED};
use captura::notify::{Notice, NoticeLevel, Notifier, AUTO_HIDE_MS};
use captura::session::Session;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::ui_model::SourceKind;

mod camera;
mod files;
mod shell;

use shell::{CameraPanel, DropZone, NoticeToast, PreviewCard, Topbar};

/// Mount the app. Called from the Trunk entrypoint.
pub fn start() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let session = StoredValue::new(Session::new());
    let notifier = StoredValue::new(Notifier::new());
    // The open camera stream is a browser handle; keep it thread-local.
    let camera_stream = StoredValue::new_local(None::<web_sys::MediaStream>);

    let (preview, set_preview) = signal(None::<String>);
    let (camera_open, set_camera_open) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);

    let video_ref = NodeRef::<leptos::html::Video>::new();

    let refresh_from_session = move || {
        set_preview.set(session.with_value(|s| s.image().map(|img| img.data_url.clone())));
        set_camera_open.set(session.with_value(|s| s.camera_open()));
    };

    let release_stream = move || {
        camera_stream.update_value(|slot| {
            if let Some(stream) = slot.take() {
                camera::stop_stream(&stream);
            }
        });
    };

    let schedule_auto_hide = move |serial: u64| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = Closure::wrap(Box::new(move || {
            let mut hidden = false;
            notifier.update_value(|n| hidden = n.expire(serial));
            if hidden {
                set_notice.set(None);
            }
        }) as Box<dyn FnMut()>);
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                AUTO_HIDE_MS,
            )
            .is_ok()
        {
            cb.forget();
        }
    };

    let show_notice = move |message: String, level: NoticeLevel| {
        let mut serial = 0u64;
        notifier.update_value(|n| serial = n.show(message.as_str(), level));
        set_notice.set(notifier.with_value(|n| n.current().cloned()));
        schedule_auto_hide(serial);
    };

    let accept_file = move |file: web_sys::File| {
        if ImageFormat::from_filename(&file.name()).is_err() {
            show_notice(MSG_DROP_REJECTED.to_string(), NoticeLevel::Error);
            return;
        }

        let mut ticket = None;
        session.update_value(|s| ticket = Some(s.begin_decode()));
        let Some(ticket) = ticket else {
            return;
        };
        // begin_decode closed the camera panel; drop the live stream with it.
        release_stream();
        refresh_from_session();

        spawn_local(async move {
            match files::read_file_data_url(file).await {
                Ok(data_url) => {
                    let mut installed = false;
                    session.update_value(|s| installed = s.complete_decode(ticket, data_url.clone()));
                    if installed {
                        refresh_from_session();
                        show_notice(MSG_DROP_ACCEPTED.to_string(), NoticeLevel::Success);
                    }
                }
                Err(err) => {
                    show_notice(
                        format!("No se pudo leer la imagen ({err})"),
                        NoticeLevel::Error,
                    );
                }
            }
        });
    };

    let toggle_camera = move || {
        let mut opening = false;
        session.update_value(|s| opening = s.toggle_camera());
        refresh_from_session();

        if !opening {
            release_stream();
            return;
        }

        spawn_local(async move {
            match camera::open_stream().await {
                Ok(stream) => {
                    // The user may have closed the panel while permission was pending.
                    if !session.with_value(|s| s.camera_open()) {
                        camera::stop_stream(&stream);
                        return;
                    }
                    let attached = video_ref
                        .get_untracked()
                        .ok_or_else(|| "camera: video element not mounted".to_string())
                        .and_then(|video| camera::attach_stream(&video, &stream));
                    match attached {
                        Ok(()) => camera_stream.set_value(Some(stream)),
                        Err(err) => {
                            camera::stop_stream(&stream);
                            session.update_value(|s| {
                                if s.camera_open() {
                                    s.toggle_camera();
                                }
                            });
                            refresh_from_session();
                            show_notice(
                                format!("No se pudo iniciar la cámara ({err})"),
                                NoticeLevel::Error,
                            );
                        }
                    }
                }
                Err(err) => {
                    session.update_value(|s| {
                        if s.camera_open() {
                            s.toggle_camera();
                        }
                    });
                    refresh_from_session();
                    show_notice(
                        format!("No se pudo acceder a la cámara ({err})"),
                        NoticeLevel::Error,
                    );
                }
            }
        });
    };

    let take_photo = move || {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        match camera::capture_jpeg_frame(&video) {
            Ok(data_url) => {
                session.update_value(|s| s.accept_capture(data_url.clone()));
                release_stream();
                refresh_from_session();
                show_notice(MSG_CAPTURE_ACCEPTED.to_string(), NoticeLevel::Success);
            }
            Err(err) => {
                show_notice(
                    format!("No se pudo tomar la foto ({err})"),
                    NoticeLevel::Error,
                );
            }
        }
    };

    let dismiss_notice = move || {
        notifier.update_value(|n| n.dismiss());
        set_notice.set(None);
    };

    on_cleanup(move || release_stream());

    view! {
        <Topbar />
        <main class="app-main">
            <section class="acquire-panel">
                <div class="surface">
                    <h2 class="surface-title">
                        {SourceKind::Drop.icon()} " " {SourceKind::Drop.display_name()}
                    </h2>
                    <DropZone on_file=Callback::new(move |file: web_sys::File| accept_file(file)) />
                </div>
                <div class="surface">
                    <h2 class="surface-title">
                        {SourceKind::Camera.icon()} " " {SourceKind::Camera.display_name()}
                    </h2>
                    <p class="surface-hint">{SourceKind::Camera.hint()}</p>
                    <CameraPanel
                        camera_open=camera_open
                        video_ref=video_ref
                        on_toggle=Callback::new(move |_| toggle_camera())
                        on_capture=Callback::new(move |_| take_photo())
                    />
                </div>
            </section>
            <PreviewCard preview=preview />
        </main>
        <NoticeToast notice=notice on_dismiss=Callback::new(move |_| dismiss_notice()) />
    }
}
