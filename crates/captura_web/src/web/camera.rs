use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Request a live video stream from the default camera.
pub(super) async fn open_stream() -> Result<web_sys::MediaStream, String> {
    let window = web_sys::window().ok_or("no window".to_string())?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| "camera: mediaDevices unavailable".to_string())?;

    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|_| "camera: getUserMedia threw".to_string())?;
    let stream = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| "camera: access denied".to_string())?;

    stream
        .dyn_into::<web_sys::MediaStream>()
        .map_err(|_| "camera: expected a MediaStream".to_string())
}

pub(super) fn attach_stream(
    video: &web_sys::HtmlVideoElement,
    stream: &web_sys::MediaStream,
) -> Result<(), String> {
    video.set_src_object(Some(stream));
    let _playback = video
        .play()
        .map_err(|_| "camera: video.play() threw".to_string())?;
    Ok(())
}

/// Release the camera: stop every track so the device indicator turns off.
pub(super) fn stop_stream(stream: &web_sys::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Grab the current video frame as a JPEG data URL.
///
/// Draws onto an offscreen canvas sized to the stream's intrinsic
/// dimensions. Fails if the stream has not produced a frame yet.
pub(super) fn capture_jpeg_frame(video: &web_sys::HtmlVideoElement) -> Result<String, String> {
    let width = video.video_width();
    let height = video.video_height();
    if width == 0 || height == 0 {
        return Err("camera: no frame available yet".to_string());
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document".to_string())?;
    let canvas = document
        .create_element("canvas")
        .map_err(|_| "canvas: create_element failed".to_string())?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "canvas: cast failed".to_string())?;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")
        .map_err(|_| "canvas: get_context threw".to_string())?
        .ok_or("canvas: missing 2d context".to_string())?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| "canvas: context is not 2d".to_string())?;

    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(|_| "canvas: drawImage failed".to_string())?;

    canvas
        .to_data_url_with_type("image/jpeg")
        .map_err(|_| "canvas: toDataURL failed".to_string())
}
