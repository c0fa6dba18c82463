use report_core::item::EncodedImage;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

/// An open camera stream. Dropping the session stops every track, so
/// the device is released on all exit paths, including early aborts.
pub struct CameraSession {
    stream: MediaStream,
}

impl CameraSession {
    /// Requests the rear-facing camera first, then any camera. Err means
    /// total denial or an environment without media devices.
    pub async fn open() -> Result<Self, String> {
        let stream = match request_stream(&rear_camera_constraints()?).await {
            Ok(stream) => stream,
            Err(_) => request_stream(&any_camera_constraints()).await?,
        };
        Ok(Self { stream })
    }

    pub fn attach(&self, video: &HtmlVideoElement) {
        video.set_src_object(Some(&self.stream));
    }

    /// Draws the current video frame onto the canvas and returns it as a
    /// PNG data URL.
    pub fn snapshot(
        &self,
        video: &HtmlVideoElement,
        canvas: &HtmlCanvasElement,
    ) -> Result<EncodedImage, String> {
        canvas.set_width(video.video_width());
        canvas.set_height(video.video_height());

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("2d context unavailable: {e:?}"))?
            .ok_or_else(|| "2d context unavailable".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context unavailable".to_string())?;

        ctx.draw_image_with_html_video_element(video, 0.0, 0.0)
            .map_err(|e| format!("frame draw failed: {e:?}"))?;

        canvas
            .to_data_url_with_type("image/png")
            .map(EncodedImage::new)
            .map_err(|e| format!("frame encode failed: {e:?}"))
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        for track in self.stream.get_tracks().iter() {
            track.unchecked_into::<MediaStreamTrack>().stop();
        }
    }
}

async fn request_stream(constraints: &MediaStreamConstraints) -> Result<MediaStream, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| format!("media devices unavailable: {e:?}"))?;
    let promise = devices
        .get_user_media_with_constraints(constraints)
        .map_err(|e| format!("camera request rejected: {e:?}"))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| format!("camera access denied: {e:?}"))?;
    Ok(stream.unchecked_into::<MediaStream>())
}

fn rear_camera_constraints() -> Result<MediaStreamConstraints, String> {
    let video = serde_wasm_bindgen::to_value(&serde_json::json!({
        "facingMode": { "ideal": "environment" }
    }))
    .map_err(|e| e.to_string())?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video);
    Ok(constraints)
}

fn any_camera_constraints() -> MediaStreamConstraints {
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::from_bool(true));
    constraints
}
